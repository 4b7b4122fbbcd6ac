use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use http::header::CONTENT_TYPE;
use sea_orm::DatabaseConnection;

use super::BodyStrategy;
use crate::err::Error;
use crate::gql::{GraphQL, GraphQLResponse, QueryParams, QueryRequest, RequestContext};

/// Executes the operation carried in the request body.
pub(super) async fn post<R>(
	gql: GraphQL<R>,
	db: DatabaseConnection,
	strategy: BodyStrategy,
	req: Request,
) -> Response
where
	R: Send + Sync + 'static,
{
	let (parts, body) = req.into_parts();
	let content_type = parts.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).map(str::to_owned);
	let query = match strategy.collect(body).await {
		Ok(bytes) => QueryRequest::from_body(content_type.as_deref(), &bytes),
		Err(err) => Err(err),
	};
	match query {
		Ok(query) => {
			let context = RequestContext::new(db, parts);
			GraphQLResponse(gql.execute(query, context).await).into_response()
		}
		Err(err) => rejected(err),
	}
}

/// Executes the operation carried in the URL query string.
pub(super) async fn get<R>(gql: GraphQL<R>, db: DatabaseConnection, req: Request) -> Response
where
	R: Send + Sync + 'static,
{
	let (parts, _) = req.into_parts();
	let params = match QueryParams::from_query(parts.uri.query()) {
		Ok(params) => params,
		Err(err) => return rejected(err),
	};
	match QueryRequest::try_from(params) {
		Ok(query) => {
			let context = RequestContext::new(db, parts);
			GraphQLResponse(gql.execute(query, context).await).into_response()
		}
		Err(err) => {
			debug!("{err}");
			GraphQLResponse::from(err).into_response()
		}
	}
}

fn rejected(err: Error) -> Response {
	debug!(status = %err.status(), "rejecting graphql request: {err}");
	err.into_response()
}
