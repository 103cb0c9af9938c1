use crate::{router::RouteTable, web};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub table: RouteTable,
    pub config: web::ServeConfig,
}

/// Execute the serve action.
/// # Errors
/// Returns an error if the host fails to bind or stops unexpectedly.
pub async fn execute(args: Args) -> Result<()> {
    info!(
        host = %args.config.host,
        port = args.config.port,
        dist = %args.config.dist.display(),
        routes = args.table.len(),
        "starting host"
    );

    web::new(args.config, Arc::new(args.table)).await
}
