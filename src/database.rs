// src/database.rs
use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Database,
};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::StoreResult;

pub const PRODUCTS_COLLECTION: &str = "products";
pub const IMPORTS_COLLECTION: &str = "imports";
pub const EXPORTS_COLLECTION: &str = "exports";

/// Opens the process-wide client and verifies the deployment answers a ping.
pub async fn connect(config: &DatabaseConfig) -> StoreResult<Database> {
    let mut options = ClientOptions::parse(&config.uri).await?;

    options.app_name = config.app_name.clone();
    options.server_api = Some(
        ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build(),
    );
    options.connect_timeout = Some(Duration::from_secs(10));
    options.server_selection_timeout = Some(Duration::from_secs(30));

    let client = Client::with_options(options)?;
    client.database("admin").run_command(doc! { "ping": 1 }).await?;

    info!(database = %config.name, "Connected to MongoDB");
    Ok(client.database(&config.name))
}
