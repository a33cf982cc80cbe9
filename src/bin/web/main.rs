use std::net::SocketAddr;

use axum::{
	http::{HeaderValue, Method},
	Router,
};

use social::{
	dependencies::{config, repository},
	routes::{create_routes, AppState},
	services::response::ServiceError,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	dotenv::dotenv().ok();
	let config = config()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("social={},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!("Connections Are Being Pooled...");
	let state = AppState::new(repository(config).await?);

	let origins: Vec<HeaderValue> = config.allowed_origins().into_iter().filter_map(|o| o.parse().ok()).collect();
	let app = Router::new().merge(create_routes(state)).layer(
		ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
			CorsLayer::new()
				.allow_origin(AllowOrigin::list(origins))
				.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]),
		),
	);

	let addr: SocketAddr = config
		.server_ip_port()
		.parse()
		.map_err(|_| ServiceError::ConfigError(format!("Invalid listen address: {}", config.server_ip_port())))?;

	let listener = TcpListener::bind(addr).await?;
	tracing::info!("Server up and listening on {}", addr);
	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
	Ok(())
}

async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		tracing::error!("Failed to listen for shutdown signal: {}", err);
	}
	tracing::info!("Shutting down");
}
