use async_graphql::Variables;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::GqlError;
use crate::err::Error;
use crate::net::input::BodyType;

/// A GraphQL operation as sent by a client, before execution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
	/// The GraphQL document
	pub query: String,
	/// Selects one operation when the document defines several
	#[serde(default)]
	pub operation_name: Option<String>,
	/// Values for the variables declared by the operation
	#[serde(default)]
	pub variables: Option<Map<String, Value>>,
}

impl QueryRequest {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Default::default()
		}
	}

	pub fn operation_name(mut self, name: impl Into<String>) -> Self {
		self.operation_name = Some(name.into());
		self
	}

	pub fn variables(mut self, variables: Map<String, Value>) -> Self {
		self.variables = Some(variables);
		self
	}

	/// Decodes a request body according to its declared content type.
	pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Result<Self, Error> {
		match BodyType::classify(content_type)? {
			BodyType::Json => serde_json::from_slice(body).map_err(|e| Error::Request(e.to_string())),
			BodyType::GraphQL => {
				let query = std::str::from_utf8(body).map_err(|e| Error::Request(e.to_string()))?;
				if query.trim().is_empty() {
					return Err(Error::Request("the request body is empty".to_string()));
				}
				Ok(Self::new(query))
			}
			BodyType::Form => {
				let params: QueryParams = serde_urlencoded::from_bytes(body)
					.map_err(|e| Error::Request(e.to_string()))?;
				// A form without a query is as unreadable as a JSON body without one
				params.try_into().map_err(|e: GqlError| Error::Request(e.to_string()))
			}
		}
	}

	pub(crate) fn into_graphql(self) -> async_graphql::Request {
		let mut request = async_graphql::Request::new(self.query);
		if let Some(name) = self.operation_name {
			request = request.operation_name(name);
		}
		if let Some(variables) = self.variables {
			request = request.variables(Variables::from_json(Value::Object(variables)));
		}
		request
	}
}

/// The GraphQL fields of a URL query string, before validation.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
	pub query: Option<String>,
	pub variables: Option<String>,
	pub operation_name: Option<String>,
}

impl QueryParams {
	/// Parses the raw query string of a request URI.
	pub fn from_query(raw: Option<&str>) -> Result<Self, Error> {
		serde_urlencoded::from_str(raw.unwrap_or_default()).map_err(|e| Error::Request(e.to_string()))
	}
}

impl TryFrom<QueryParams> for QueryRequest {
	type Error = GqlError;

	fn try_from(params: QueryParams) -> Result<Self, Self::Error> {
		let query = params.query.ok_or(GqlError::NoQueryFound)?;
		let variables = match params.variables.as_deref().map(str::trim) {
			None | Some("") | Some("null") => None,
			Some(raw) => Some(
				serde_json::from_str::<Map<String, Value>>(raw)
					.map_err(|e| GqlError::InvalidVariables(e.to_string()))?,
			),
		};
		Ok(QueryRequest {
			query,
			operation_name: params.operation_name,
			variables,
		})
	}
}
