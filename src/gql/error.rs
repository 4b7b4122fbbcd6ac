use async_graphql::{ErrorExtensionValues, ErrorExtensions, ServerError};
use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised by this crate that are reported inside a GraphQL response.
///
/// Each variant carries a stable `code`, exposed to clients as
/// `extensions.code` on the error entry.
#[derive(Debug, Error)]
pub enum GqlError {
	#[error("No query found in the request")]
	NoQueryFound,
	#[error("The variables must be a JSON object: {0}")]
	InvalidVariables(String),
	#[error("Related record not found: {0}")]
	NotFound(String),
	#[error("Database error: {0}")]
	Database(#[from] DbErr),
	#[error("The request is not authenticated")]
	Unauthenticated,
	#[error("Missing execution data: {0}")]
	MissingContext(&'static str),
}

impl GqlError {
	pub fn code(&self) -> &'static str {
		match self {
			GqlError::NoQueryFound => "NO_QUERY_FOUND",
			GqlError::InvalidVariables(_) => "INVALID_VARIABLES",
			GqlError::NotFound(_) => "NOT_FOUND",
			GqlError::Database(_) => "DATABASE_ERROR",
			GqlError::Unauthenticated => "UNAUTHENTICATED",
			GqlError::MissingContext(_) => "INTERNAL_ERROR",
		}
	}

	/// Converts a request-level failure into a response error entry.
	///
	/// Request errors happen before any document is parsed, so the entry
	/// carries no location or path.
	pub fn into_server_error(self) -> ServerError {
		let mut extensions = ErrorExtensionValues::default();
		extensions.set("code", self.code());
		let mut err = ServerError::new(self.to_string(), None);
		err.extensions = Some(extensions);
		err
	}
}

impl ErrorExtensions for GqlError {
	fn extend(&self) -> async_graphql::Error {
		async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
	}
}
