use crate::services::response::ServiceError;

#[derive(Debug, Clone)]
pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Address and port server is listening to
	pub server_ip: String,
	pub port: u16,

	/// When absent the server keeps its data in memory.
	pub database_url: Option<String>,
	pub max_connections: u32,
	pub allow_origins: String,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let log_level = lookup("LOG_LEVEL").unwrap_or("info".to_string());
		let server_ip = lookup("SERVER_IP").unwrap_or("0.0.0.0".into());
		let port = match lookup("PORT") {
			Some(port) => port.parse().map_err(|_| ServiceError::ConfigError(format!("PORT is not a valid port: {port}")))?,
			None => 4000,
		};
		let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
		let max_connections = match lookup("MAX_CONNECTIONS") {
			Some(n) => n.parse().map_err(|_| ServiceError::ConfigError(format!("MAX_CONNECTIONS is not a number: {n}")))?,
			None => 30,
		};
		let allow_origins = lookup("ALLOW_ORIGINS").unwrap_or("http://localhost:3000".to_string());

		Ok(Config {
			log_level,
			server_ip,
			port,
			database_url,
			max_connections,
			allow_origins,
		})
	}

	pub fn server_ip_port(&self) -> String {
		format!("{}:{}", self.server_ip, self.port)
	}

	pub fn allowed_origins(&self) -> Vec<&str> {
		self.allow_origins.split(',').map(str::trim).filter(|o| !o.is_empty()).collect()
	}
}
