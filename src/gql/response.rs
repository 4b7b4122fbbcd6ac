use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};

use super::error::GqlError;
use crate::cnf::RESPONSE_CONTENT_TYPE;
use crate::err::Error;

/// The HTTP rendering of an executed GraphQL request.
///
/// The status is `200 OK` whether or not the response carries errors. The
/// `data` object keeps the key order the engine produced, which follows the
/// selection order of the query document.
pub struct GraphQLResponse(pub async_graphql::Response);

impl GraphQLResponse {
	pub fn encode(self) -> Result<Response, Error> {
		let body = serde_json::to_vec(&self.0)?;
		let mut res = Response::new(Body::from(body));
		*res.status_mut() = StatusCode::OK;
		// Headers set by resolvers go first so the content type can't be overridden
		res.headers_mut().extend(self.0.http_headers);
		res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(RESPONSE_CONTENT_TYPE));
		Ok(res)
	}
}

impl From<async_graphql::Response> for GraphQLResponse {
	fn from(res: async_graphql::Response) -> Self {
		GraphQLResponse(res)
	}
}

impl From<GqlError> for GraphQLResponse {
	fn from(err: GqlError) -> Self {
		GraphQLResponse(async_graphql::Response::from_errors(vec![err.into_server_error()]))
	}
}

impl IntoResponse for GraphQLResponse {
	fn into_response(self) -> Response {
		match self.encode() {
			Ok(res) => res,
			Err(err) => err.into_response(),
		}
	}
}
