use uuid::Uuid;

use crate::{
	adapters::repositories::TRepository,
	domain::comment::{
		commands::{CreateComment, UpdateComment},
		Comment,
	},
	services::response::{ServiceError, ServiceResponse},
};

pub struct CommentHandler;
impl CommentHandler {
	pub async fn create_comment(
		post_id: Uuid,
		cmd: CreateComment,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		repository.get_post(post_id).await?.ok_or(ServiceError::EntityNotFound("Post"))?;
		repository.get_user(cmd.user_id).await?.ok_or(ServiceError::EntityNotFound("User"))?;

		let comment = Comment::new(post_id, cmd);
		repository.add_comment(&comment).await?;
		tracing::info!(id = %comment.id, %post_id, "comment created");

		ServiceResponse::created("Comment created successfully.").with("comment", comment)
	}

	pub async fn get_comments(repository: &dyn TRepository) -> Result<ServiceResponse, ServiceError> {
		let comments = repository.list_comments().await?;
		ServiceResponse::ok("Fetched all comments successfully.").with("comments", comments)
	}

	pub async fn get_comment(
		id: Uuid,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		let comment = repository.get_comment(id).await?.ok_or(ServiceError::EntityNotFound("Comment"))?;
		ServiceResponse::ok("Fetched comment successfully.").with("comment", comment)
	}

	pub async fn get_post_comments(
		post_id: Uuid,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		let comments = repository.list_post_comments(post_id).await?;
		ServiceResponse::ok("Fetched all post comments successfully.").with("comments", comments)
	}

	pub async fn get_user_comments(
		user_id: Uuid,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		let comments = repository.list_user_comments(user_id).await?;
		ServiceResponse::ok("Fetched all user comments successfully.").with("comments", comments)
	}

	pub async fn update_comment(
		id: Uuid,
		cmd: UpdateComment,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		let mut comment = repository.get_comment(id).await?.ok_or(ServiceError::EntityNotFound("Comment"))?;
		if comment.apply(cmd) && !repository.update_comment(&comment).await? {
			return Err(ServiceError::EntityNotFound("Comment"));
		}
		ServiceResponse::ok("Comment updated successfully.").with("comment", comment)
	}

	pub async fn delete_comment(
		id: Uuid,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		if !repository.delete_comment(id).await? {
			return Err(ServiceError::EntityNotFound("Comment"));
		}
		Ok(ServiceResponse::ok("Comment successfully deleted."))
	}
}
