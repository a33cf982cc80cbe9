use axum::{
	extract::{rejection::JsonRejection, Path, State},
	routing::get,
	Json, Router,
};

use super::{parse_id, AppState};
use crate::{
	domain::user::commands::{CreateUser, UpdateUser},
	services::{
		handlers::{CommentHandler, PostHandler, UserHandler},
		response::{ServiceError, ServiceResponse},
	},
};

async fn create_user(
	State(state): State<AppState>,
	payload: Result<Json<CreateUser>, JsonRejection>,
) -> Result<ServiceResponse, ServiceError> {
	let Json(cmd) = payload?;
	UserHandler::create_user(cmd, state.repository()).await
}

async fn get_users(State(state): State<AppState>) -> Result<ServiceResponse, ServiceError> {
	UserHandler::get_users(state.repository()).await
}

async fn get_user(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<ServiceResponse, ServiceError> {
	UserHandler::get_user(parse_id(&id, "User")?, state.repository()).await
}

async fn update_user(
	Path(id): Path<String>,
	State(state): State<AppState>,
	payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<ServiceResponse, ServiceError> {
	let id = parse_id(&id, "User")?;
	let Json(cmd) = payload?;
	UserHandler::update_user(id, cmd, state.repository()).await
}

async fn delete_user(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<ServiceResponse, ServiceError> {
	UserHandler::delete_user(parse_id(&id, "User")?, state.repository()).await
}

async fn get_user_posts(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::get_user_posts(parse_id(&id, "User")?, state.repository()).await
}

async fn get_user_posts_with_comments(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::get_user_posts_with_comments(parse_id(&id, "User")?, state.repository()).await
}

async fn get_user_comments(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<ServiceResponse, ServiceError> {
	CommentHandler::get_user_comments(parse_id(&id, "User")?, state.repository()).await
}

pub fn user_routers() -> Router<AppState> {
	Router::new()
		.route("/users", get(get_users).post(create_user))
		.route("/users/:id", get(get_user).put(update_user).delete(delete_user))
		.route("/users/:id/posts", get(get_user_posts))
		.route("/users/:id/posts/comments", get(get_user_posts_with_comments))
		.route("/users/:id/comments", get(get_user_comments))
}
