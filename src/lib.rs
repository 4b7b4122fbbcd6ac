//! Serve an [`async_graphql`] dynamic schema on an [`axum`] router.
//!
//! A [`GraphQL`] value binds a schema to the root resolver object that backs its
//! top-level fields. Registering it on a router installs a `POST` handler that
//! decodes the request body and a `GET` handler that decodes the query string;
//! both run the same execution path and always answer `200 OK` with a JSON
//! GraphQL response unless the request itself could not be read.
//!
//! ```ignore
//! use graphql_kit::{GraphQL, GraphQLRouter};
//!
//! let gql = GraphQL::new(schema, Resolver);
//! let app = axum::Router::new().register(gql).with_state(db);
//! ```
//!
//! Fields of sea-orm models that follow a relation are built with the
//! constructors in [`relation`].

#[macro_use]
extern crate tracing;

#[macro_use]
mod mac;

pub mod cnf;
pub mod err;
pub mod gql;
pub mod net;

pub use gql::relation;
pub use gql::{GqlError, GraphQL, GraphQLResponse, QueryRequest, RequestContext};
pub use net::auth::{BearerAuth, BearerAuthenticator};
pub use net::{BodyStrategy, GraphQLRouter, RouteOptions};
