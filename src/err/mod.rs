use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Failures that stop a request before it reaches the GraphQL engine.
///
/// These are the only errors answered with a status other than `200 OK`.
/// Everything that happens once a query is executing travels inside the
/// GraphQL response instead.
#[derive(Error, Debug)]
pub enum Error {
	#[error("The request body contains invalid data: {0}")]
	Request(String),

	#[error("The specified media type is unsupported")]
	InvalidType,

	#[error("The request body exceeds the maximum allowed size")]
	PayloadTooLarge,

	#[error("There was a problem with authentication")]
	InvalidAuth,

	#[error("Couldn't encode the GraphQL response: {0}")]
	Encode(#[from] serde_json::Error),
}

impl Error {
	pub fn status(&self) -> StatusCode {
		match self {
			Error::Request(_) => StatusCode::BAD_REQUEST,
			Error::InvalidType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
			Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
			Error::InvalidAuth => StatusCode::UNAUTHORIZED,
			Error::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		match self {
			Error::InvalidAuth => {
				ErrorMessage {
					code: StatusCode::UNAUTHORIZED,
					details: Some("Authentication failed".to_string()),
					description: Some("Your authentication details are invalid. Reauthenticate using valid authentication parameters.".to_string()),
					information: Some(self.to_string()),
				}.into_response()
			}
			Error::InvalidType => {
				ErrorMessage {
					code: StatusCode::UNSUPPORTED_MEDIA_TYPE,
					details: Some("Unsupported media type".to_string()),
					description: Some("GraphQL requests must be sent as application/json, application/graphql or application/x-www-form-urlencoded.".to_string()),
					information: None,
				}.into_response()
			}
			Error::PayloadTooLarge => {
				ErrorMessage {
					code: StatusCode::PAYLOAD_TOO_LARGE,
					details: Some("Payload too large".to_string()),
					description: None,
					information: Some(self.to_string()),
				}.into_response()
			}
			Error::Encode(_) => {
				error!("{self}");
				ErrorMessage {
					code: StatusCode::INTERNAL_SERVER_ERROR,
					details: Some("Internal error".to_string()),
					description: None,
					information: None,
				}.into_response()
			}
			Error::Request(_) => ErrorMessage {
				code: StatusCode::BAD_REQUEST,
				details: Some("Request problems detected".to_string()),
				description: Some("There is a problem with your request. A GraphQL request needs at least a query.".to_string()),
				information: Some(self.to_string()),
			}.into_response(),
		}
	}
}

#[derive(Serialize)]
pub(crate) struct ErrorMessage {
	#[serde(serialize_with = "serialize_status_code")]
	code: StatusCode,
	details: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	information: Option<String>,
}

fn serialize_status_code<S>(code: &StatusCode, s: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	code.as_u16().serialize(s)
}

impl IntoResponse for ErrorMessage {
	fn into_response(self) -> Response {
		(self.code, Json(self)).into_response()
	}
}
