use std::fmt::Display;

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

pub type AnyError = dyn std::error::Error + Send + Sync;

/// Success envelope: `{ "message": ..., "<key>": <payload> }`.
#[derive(Debug)]
pub struct ServiceResponse {
	pub status: StatusCode,
	pub message: String,
	pub payload: Option<(&'static str, Value)>,
}

impl ServiceResponse {
	pub fn ok(message: impl Into<String>) -> Self {
		Self {
			status: StatusCode::OK,
			message: message.into(),
			payload: None,
		}
	}
	pub fn created(message: impl Into<String>) -> Self {
		Self {
			status: StatusCode::CREATED,
			..Self::ok(message)
		}
	}

	/// Attaches `value` under `key`. Serializing the domain types cannot fail,
	/// so a failure here is reported as a server error.
	pub fn with<T: Serialize>(
		mut self,
		key: &'static str,
		value: T,
	) -> Result<Self, ServiceError> {
		let value = serde_json::to_value(value).map_err(|err| ServiceError::SerializationError(Box::new(err)))?;
		self.payload = Some((key, value));
		Ok(self)
	}

	pub fn body(&self) -> Value {
		let mut body = Map::new();
		body.insert("message".to_string(), Value::String(self.message.clone()));
		if let Some((key, value)) = &self.payload {
			body.insert(key.to_string(), value.clone());
		}
		Value::Object(body)
	}
}

impl IntoResponse for ServiceResponse {
	fn into_response(self) -> Response {
		(self.status, Json(self.body())).into_response()
	}
}

#[derive(Debug)]
pub enum ServiceError {
	/// A unique field is already held by an active record.
	Conflict(String),
	EntityNotFound(&'static str),
	BadRequest(String),
	DatabaseError(Box<AnyError>),
	SerializationError(Box<AnyError>),
	ConfigError(String),
}

impl ServiceError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServiceError::Conflict(_) => StatusCode::CONFLICT,
			ServiceError::EntityNotFound(_) => StatusCode::NOT_FOUND,
			ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ServiceError::DatabaseError(_) | ServiceError::SerializationError(_) | ServiceError::ConfigError(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	/// Message returned to the caller. Server-side failures carry no detail.
	pub fn public_message(&self) -> String {
		match self {
			ServiceError::Conflict(msg) | ServiceError::BadRequest(msg) => msg.clone(),
			ServiceError::EntityNotFound(entity) => format!("{} not found.", entity),
			_ => "Something went wrong.".to_string(),
		}
	}
}

impl Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
			ServiceError::EntityNotFound(entity) => write!(f, "EntityNotFound: {}", entity),
			ServiceError::BadRequest(msg) => write!(f, "BadRequest: {}", msg),
			ServiceError::DatabaseError(err) => write!(f, "DatabaseError: {}", err),
			ServiceError::SerializationError(err) => write!(f, "SerializationError: {}", err),
			ServiceError::ConfigError(msg) => write!(f, "ConfigError: {}", msg),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<sqlx::Error> for ServiceError {
	fn from(value: sqlx::Error) -> Self {
		ServiceError::DatabaseError(Box::new(value))
	}
}

impl From<sqlx::migrate::MigrateError> for ServiceError {
	fn from(value: sqlx::migrate::MigrateError) -> Self {
		ServiceError::DatabaseError(Box::new(value))
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		if status.is_server_error() {
			tracing::error!("Request failed: {}", self);
		} else {
			tracing::debug!("Request rejected: {}", self);
		}
		(status, Json(serde_json::json!({ "message": self.public_message() }))).into_response()
	}
}
