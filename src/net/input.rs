use axum::body::Body;
use bytes::Bytes;
use http_body_util::{BodyExt, LengthLimitError, Limited};

use super::BodyStrategy;
use crate::cnf::HTTP_MAX_BODY_SIZE;
use crate::err::Error;

/// The body encodings a GraphQL request can arrive in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyType {
	Json,
	GraphQL,
	Form,
}

impl BodyType {
	pub fn classify(content_type: Option<&str>) -> Result<Self, Error> {
		let Some(content_type) = content_type else {
			return Err(Error::InvalidType);
		};
		// Parameters such as `charset` do not change the decoding
		let essence = content_type.split(';').next().unwrap_or_default().trim();
		match essence.to_ascii_lowercase().as_str() {
			"application/json" | "application/graphql+json" => Ok(BodyType::Json),
			"application/graphql" => Ok(BodyType::GraphQL),
			"application/x-www-form-urlencoded" => Ok(BodyType::Form),
			_ => Err(Error::InvalidType),
		}
	}
}

impl BodyStrategy {
	fn limit(self) -> Option<usize> {
		match self {
			BodyStrategy::Collect => Some(*HTTP_MAX_BODY_SIZE),
			BodyStrategy::CollectUpTo(max) => Some(max),
			BodyStrategy::Unbounded => None,
		}
	}

	/// Reads the whole body before anything is decoded.
	pub(crate) async fn collect(self, body: Body) -> Result<Bytes, Error> {
		match self.limit() {
			Some(max) => match Limited::new(body, max).collect().await {
				Ok(collected) => Ok(collected.to_bytes()),
				Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
					Err(Error::PayloadTooLarge)
				}
				Err(err) => Err(Error::Request(err.to_string())),
			},
			None => match body.collect().await {
				Ok(collected) => Ok(collected.to_bytes()),
				Err(err) => Err(Error::Request(err.to_string())),
			},
		}
	}
}
