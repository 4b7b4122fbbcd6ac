use std::sync::LazyLock;

/// The path GraphQL routes are registered at unless configured otherwise
pub const DEFAULT_PATH: &str = "graphql";

/// The media type of every GraphQL response body
pub const RESPONSE_CONTENT_TYPE: &str = "application/json";

/// The largest request body collected by the default body strategy (defaults to 16 KiB)
pub static HTTP_MAX_BODY_SIZE: LazyLock<usize> =
	lazy_env_parse!("GRAPHQL_KIT_HTTP_MAX_BODY_SIZE", usize, 16 << 10);
