use http::request::Parts;
use http::{Extensions, HeaderMap, Method, Uri};
use sea_orm::DatabaseConnection;

use super::error::GqlError;

/// Per-request state handed to every resolver.
///
/// It is built from the inbound HTTP request but exposes only what resolvers
/// need: the database handle, whatever identity the authentication layer
/// attached, and the request metadata.
#[derive(Clone, Debug)]
pub struct RequestContext {
	db: DatabaseConnection,
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	extensions: Extensions,
}

impl RequestContext {
	pub fn new(db: DatabaseConnection, parts: Parts) -> Self {
		Self {
			db,
			method: parts.method,
			uri: parts.uri,
			headers: parts.headers,
			extensions: parts.extensions,
		}
	}

	/// The database connection relationship queries run on.
	pub fn db(&self) -> &DatabaseConnection {
		&self.db
	}

	/// The identity of type `T` attached by an authentication layer, if any.
	pub fn identity<T>(&self) -> Option<&T>
	where
		T: Clone + Send + Sync + 'static,
	{
		self.extensions.get::<T>()
	}

	/// Like [`identity`](Self::identity), failing when no identity is attached.
	pub fn require<T>(&self) -> Result<&T, GqlError>
	where
		T: Clone + Send + Sync + 'static,
	{
		self.identity::<T>().ok_or(GqlError::Unauthenticated)
	}

	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	pub fn uri(&self) -> &Uri {
		&self.uri
	}
}
