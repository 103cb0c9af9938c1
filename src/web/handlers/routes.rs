use crate::router::RouteTable;
use axum::{
    extract::Extension,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// Flattened route table, in declaration order.
pub async fn routes(table: Extension<Arc<RouteTable>>) -> Response {
    Json(table.records()).into_response()
}
