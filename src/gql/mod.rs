mod context;
mod error;
pub mod relation;
mod request;
mod response;

use std::sync::Arc;

use async_graphql::ErrorExtensions;
use async_graphql::dynamic::{ResolverContext, Schema};

pub use context::RequestContext;
pub use error::GqlError;
pub use request::{QueryParams, QueryRequest};
pub use response::GraphQLResponse;

/// A schema bound to the root resolver that backs its top-level fields.
///
/// Built once at startup and cloned into every route. Cloning shares the
/// schema and the resolver; neither can be changed afterwards, so the value
/// is safe to use from any number of concurrent requests.
pub struct GraphQL<R> {
	schema: Schema,
	resolver: Arc<R>,
}

impl<R> Clone for GraphQL<R> {
	fn clone(&self) -> Self {
		Self {
			schema: self.schema.clone(),
			resolver: self.resolver.clone(),
		}
	}
}

struct Root<R>(Arc<R>);

impl<R> GraphQL<R>
where
	R: Send + Sync + 'static,
{
	pub fn new(schema: Schema, resolver: R) -> Self {
		Self {
			schema,
			resolver: Arc::new(resolver),
		}
	}

	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	/// Runs one request against the schema.
	///
	/// Parse, validation and resolver failures, including an ambiguous
	/// operation name, are reported in the returned response.
	pub async fn execute(&self, request: QueryRequest, context: RequestContext) -> async_graphql::Response {
		debug!(
			operation = request.operation_name.as_deref().unwrap_or_default(),
			method = %context.method(),
			"executing graphql request"
		);
		let request = request
			.into_graphql()
			.data(context)
			.data(Root(self.resolver.clone()));
		let response = self.schema.execute(request).await;
		if response.is_err() {
			debug!(errors = response.errors.len(), "graphql request finished with errors");
		}
		response
	}
}

/// The root resolver of the schema a field is being resolved for.
pub fn resolver<'a, R>(ctx: &'a ResolverContext<'_>) -> async_graphql::Result<&'a R>
where
	R: Send + Sync + 'static,
{
	match ctx.data::<Root<R>>() {
		Ok(root) => Ok(root.0.as_ref()),
		Err(_) => Err(GqlError::MissingContext("root resolver").extend()),
	}
}

/// The execution context of the request a field is being resolved for.
pub fn context<'a>(ctx: &'a ResolverContext<'_>) -> async_graphql::Result<&'a RequestContext> {
	match ctx.data::<RequestContext>() {
		Ok(context) => Ok(context),
		Err(_) => Err(GqlError::MissingContext("request context").extend()),
	}
}
