pub mod auth;
mod gql;
pub(crate) mod input;

use axum::Router;
use axum::extract::{FromRef, Request, State};
use axum::routing::post;
use sea_orm::DatabaseConnection;

use crate::cnf::DEFAULT_PATH;
use crate::gql::GraphQL;

/// How a `POST` body is read before it is decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyStrategy {
	/// Buffer the whole body, up to `GRAPHQL_KIT_HTTP_MAX_BODY_SIZE` bytes
	#[default]
	Collect,
	/// Buffer the whole body, up to the given number of bytes
	CollectUpTo(usize),
	/// Buffer the whole body, whatever its size
	Unbounded,
}

/// Where and how a GraphQL endpoint is mounted.
#[derive(Clone, Debug)]
pub struct RouteOptions {
	path: String,
	body: BodyStrategy,
}

impl Default for RouteOptions {
	fn default() -> Self {
		Self {
			path: DEFAULT_PATH.to_owned(),
			body: BodyStrategy::default(),
		}
	}
}

impl RouteOptions {
	/// Sets the route path. A leading `/` is added when missing.
	pub fn path(mut self, path: impl Into<String>) -> Self {
		self.path = path.into();
		self
	}

	pub fn body(mut self, body: BodyStrategy) -> Self {
		self.body = body;
		self
	}

	fn route_path(&self) -> String {
		if self.path.starts_with('/') {
			self.path.clone()
		} else {
			format!("/{}", self.path)
		}
	}
}

/// Mounts GraphQL endpoints on an axum [`Router`].
///
/// The router state must provide the [`DatabaseConnection`] handed to
/// resolvers through the request context.
pub trait GraphQLRouter {
	/// Installs `POST /graphql` and `GET /graphql` for `gql`.
	fn register<R>(self, gql: GraphQL<R>) -> Self
	where
		R: Send + Sync + 'static;

	/// Installs `POST` and `GET` handlers for `gql` as described by `options`.
	fn register_with<R>(self, gql: GraphQL<R>, options: RouteOptions) -> Self
	where
		R: Send + Sync + 'static;
}

impl<S> GraphQLRouter for Router<S>
where
	S: Clone + Send + Sync + 'static,
	DatabaseConnection: FromRef<S>,
{
	fn register<R>(self, gql: GraphQL<R>) -> Self
	where
		R: Send + Sync + 'static,
	{
		self.register_with(gql, RouteOptions::default())
	}

	fn register_with<R>(self, gql: GraphQL<R>, options: RouteOptions) -> Self
	where
		R: Send + Sync + 'static,
	{
		let path = options.route_path();
		let strategy = options.body;
		debug!(%path, ?strategy, "registering graphql routes");
		let by_query = gql.clone();
		self.route(
			&path,
			post(move |State(db): State<DatabaseConnection>, req: Request| {
				gql::post(gql, db, strategy, req)
			})
			.get(move |State(db): State<DatabaseConnection>, req: Request| {
				gql::get(by_query, db, req)
			}),
		)
	}
}
