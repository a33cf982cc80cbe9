use axum::{
	extract::{rejection::JsonRejection, Path, State},
	routing::get,
	Json, Router,
};

use super::{parse_id, AppState};
use crate::{
	domain::{
		comment::commands::CreateComment,
		post::commands::{CreatePost, UpdatePost},
	},
	services::{
		handlers::{CommentHandler, PostHandler},
		response::{ServiceError, ServiceResponse},
	},
};

async fn create_post(
	State(state): State<AppState>,
	payload: Result<Json<CreatePost>, JsonRejection>,
) -> Result<ServiceResponse, ServiceError> {
	let Json(cmd) = payload?;
	PostHandler::create_post(cmd, state.repository()).await
}

async fn get_posts(State(state): State<AppState>) -> Result<ServiceResponse, ServiceError> {
	PostHandler::get_posts(state.repository()).await
}

async fn get_post(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::get_post(parse_id(&id, "Post")?, state.repository()).await
}

async fn update_post(
	Path(id): Path<String>,
	State(state): State<AppState>,
	payload: Result<Json<UpdatePost>, JsonRejection>,
) -> Result<ServiceResponse, ServiceError> {
	let id = parse_id(&id, "Post")?;
	let Json(cmd) = payload?;
	PostHandler::update_post(id, cmd, state.repository()).await
}

async fn delete_post(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::delete_post(parse_id(&id, "Post")?, state.repository()).await
}

async fn create_comment(
	Path(id): Path<String>,
	State(state): State<AppState>,
	payload: Result<Json<CreateComment>, JsonRejection>,
) -> Result<ServiceResponse, ServiceError> {
	let post_id = parse_id(&id, "Post")?;
	let Json(cmd) = payload?;
	CommentHandler::create_comment(post_id, cmd, state.repository()).await
}

async fn get_post_comments(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<ServiceResponse, ServiceError> {
	CommentHandler::get_post_comments(parse_id(&id, "Post")?, state.repository()).await
}

pub fn post_routers() -> Router<AppState> {
	Router::new()
		.route("/posts", get(get_posts).post(create_post))
		.route("/posts/:id", get(get_post).put(update_post).delete(delete_post))
		.route("/posts/:id/comments", get(get_post_comments).post(create_comment))
}
