//! HTTP API for a product catalog with import/export ledgers on MongoDB.

pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;

use std::io;
use std::net::IpAddr;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Full application: API routes, banner, health check, CORS and request tracing.
pub fn build_app(state: AppState) -> Router {
    routes::create_router()
        .route("/", get(|| async { "BusinessHub API" }))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// How many ports past the configured one are tried when it is taken.
const PORT_FALLBACK_SPAN: u16 = 20;

/// Binds `host:port`, or the first free port among the next
/// [`PORT_FALLBACK_SPAN`] when it is already in use.
pub async fn bind_with_fallback(host: IpAddr, port: u16) -> io::Result<TcpListener> {
    let mut last_err = None;

    for candidate in port..=port.saturating_add(PORT_FALLBACK_SPAN) {
        match TcpListener::bind((host, candidate)).await {
            Ok(listener) => return Ok(listener),
            Err(e) => {
                tracing::warn!(%host, port = candidate, error = %e, "Port unavailable, trying next");
                last_err = Some(e);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| io::Error::from(io::ErrorKind::AddrInUse)))
}
