mod comments;
mod posts;
mod users;

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, routing::get, Router};
use uuid::Uuid;

use crate::{
	adapters::repositories::TRepository,
	services::response::{ServiceError, ServiceResponse},
};

/// Router state: the data-access handle shared by every request.
#[derive(Clone)]
pub struct AppState {
	pub repository: Arc<dyn TRepository>,
}

impl AppState {
	pub fn new(repository: Arc<dyn TRepository>) -> Self {
		Self { repository }
	}
	pub(crate) fn repository(&self) -> &dyn TRepository {
		self.repository.as_ref()
	}
}

pub fn create_routes(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.merge(users::user_routers())
		.merge(posts::post_routers())
		.merge(comments::comment_routers())
		.with_state(state)
}

async fn health() -> ServiceResponse {
	ServiceResponse::ok("OK")
}

/// A path id that is not a UUID cannot name any record.
pub(crate) fn parse_id(
	id: &str,
	entity: &'static str,
) -> Result<Uuid, ServiceError> {
	id.parse::<Uuid>().map_err(|_| ServiceError::EntityNotFound(entity))
}

impl From<JsonRejection> for ServiceError {
	fn from(value: JsonRejection) -> Self {
		ServiceError::BadRequest(value.body_text())
	}
}
