use axum::RequestPartsExt;
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use futures_util::future::BoxFuture;
use http::Request;
use tower_http::auth::AsyncAuthorizeRequest;

use crate::err::Error;

/// Resolves a bearer token into the identity resolvers see.
#[async_trait::async_trait]
pub trait BearerAuthenticator: Clone + Send + Sync + 'static {
	type Identity: Clone + Send + Sync + 'static;

	async fn authenticate(&self, token: &str) -> Result<Self::Identity, Error>;
}

///
/// BearerAuth is a tower layer that implements the AsyncAuthorizeRequest trait.
/// It rejects requests without a valid `Authorization: Bearer` header with
/// `401 Unauthorized`, before any GraphQL handling happens.
///
/// It has to be used in conjunction with the tower_http::auth::AsyncRequireAuthorizationLayer layer:
///
/// ```ignore
/// use tower_http::auth::AsyncRequireAuthorizationLayer;
/// use graphql_kit::{BearerAuth, GraphQLRouter};
///
/// let app = Router::new()
///   .register(gql)
///   .route_layer(AsyncRequireAuthorizationLayer::new(BearerAuth::new(Tokens)));
/// ```
///
/// The authenticated identity is stored in the request extensions, where
/// `RequestContext::identity` finds it.
#[derive(Clone)]
pub struct BearerAuth<A> {
	authenticator: A,
}

impl<A> BearerAuth<A> {
	pub fn new(authenticator: A) -> Self {
		Self {
			authenticator,
		}
	}
}

impl<A, B> AsyncAuthorizeRequest<B> for BearerAuth<A>
where
	A: BearerAuthenticator,
	B: Send + 'static,
{
	type RequestBody = B;
	type ResponseBody = Body;
	type Future = BoxFuture<'static, Result<Request<B>, Response<Self::ResponseBody>>>;

	fn authorize(&mut self, request: Request<B>) -> Self::Future {
		let authenticator = self.authenticator.clone();
		Box::pin(async move {
			let (mut parts, body) = request.into_parts();
			let token = match parts.extract::<TypedHeader<Authorization<Bearer>>>().await {
				Ok(TypedHeader(au)) => au.token().to_owned(),
				Err(_) => {
					debug!("rejecting request without a bearer token");
					return Err(Error::InvalidAuth.into_response());
				}
			};
			match authenticator.authenticate(&token).await {
				Ok(identity) => {
					parts.extensions.insert(identity);
					Ok(Request::from_parts(parts, body))
				}
				Err(err) => {
					warn!("bearer authentication failed: {err}");
					Err(Error::InvalidAuth.into_response())
				}
			}
		})
	}
}
