//! GraphQL schema over the waters, stations, and trips collections.
//!
//! - [`QueryRoot`]: full scans and fetch-by-id
//! - [`MutationRoot`]: single-document creates

mod mutation;
mod query;
mod scalars;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::*;

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::db::Repository;
use crate::AppState;

pub type CreelSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(repo: Arc<Repository>) -> CreelSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .register_output_type::<Fish>()
        .data(repo)
        .finish()
}

/// POST /graphql
pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GET /graphql - GraphiQL explorer.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
