use axum::{
	extract::{rejection::JsonRejection, Path, State},
	routing::get,
	Json, Router,
};

use super::{parse_id, AppState};
use crate::{
	domain::comment::commands::UpdateComment,
	services::{
		handlers::CommentHandler,
		response::{ServiceError, ServiceResponse},
	},
};

async fn get_comments(State(state): State<AppState>) -> Result<ServiceResponse, ServiceError> {
	CommentHandler::get_comments(state.repository()).await
}

async fn get_comment(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<ServiceResponse, ServiceError> {
	CommentHandler::get_comment(parse_id(&id, "Comment")?, state.repository()).await
}

async fn update_comment(
	Path(id): Path<String>,
	State(state): State<AppState>,
	payload: Result<Json<UpdateComment>, JsonRejection>,
) -> Result<ServiceResponse, ServiceError> {
	let id = parse_id(&id, "Comment")?;
	let Json(cmd) = payload?;
	CommentHandler::update_comment(id, cmd, state.repository()).await
}

async fn delete_comment(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<ServiceResponse, ServiceError> {
	CommentHandler::delete_comment(parse_id(&id, "Comment")?, state.repository()).await
}

pub fn comment_routers() -> Router<AppState> {
	Router::new()
		.route("/comments", get(get_comments))
		.route("/comments/:id", get(get_comment).put(update_comment).delete(delete_comment))
}
