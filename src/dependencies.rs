use std::sync::{Arc, OnceLock};

use crate::{
	adapters::repositories::{InMemoryRepository, SqlRepository, TRepository},
	config::Config,
	database::{connection_pool, migrate},
	services::response::ServiceError,
};

/// Process-wide configuration, read once from the environment.
pub fn config() -> Result<&'static Config, ServiceError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new()?;

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	Ok(config)
}

/// Builds the repository handed to the router: Postgres when `DATABASE_URL` is set, memory otherwise.
pub async fn repository(config: &Config) -> Result<Arc<dyn TRepository>, ServiceError> {
	match &config.database_url {
		Some(url) => {
			let pool = connection_pool(config, url).await?;
			migrate(&pool).await?;
			tracing::info!("Connected to database, migrations applied");
			Ok(Arc::new(SqlRepository::new(pool)))
		}
		None => {
			tracing::warn!("DATABASE_URL is not set; data will be kept in memory only");
			Ok(Arc::new(InMemoryRepository::new()))
		}
	}
}
