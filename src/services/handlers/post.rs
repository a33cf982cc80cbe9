use uuid::Uuid;

use crate::{
	adapters::repositories::TRepository,
	domain::post::{
		commands::{CreatePost, UpdatePost},
		entity::Post,
		PostWithComments, PostWithUser,
	},
	services::response::{ServiceError, ServiceResponse},
};

pub struct PostHandler;
impl PostHandler {
	pub async fn create_post(
		cmd: CreatePost,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		let user = repository.get_user(cmd.user_id).await?.ok_or(ServiceError::EntityNotFound("User"))?;

		let post = Post::new(cmd);
		repository.add_post(&post).await?;
		tracing::info!(id = %post.id, user_id = %user.id, "post created");

		ServiceResponse::created("Post created successfully.").with("post", PostWithUser::new(post, user))
	}

	pub async fn get_posts(repository: &dyn TRepository) -> Result<ServiceResponse, ServiceError> {
		let posts = repository.list_posts().await?;
		ServiceResponse::ok("Fetched all posts successfully.").with("posts", posts)
	}

	pub async fn get_post(
		id: Uuid,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		let post = repository.get_post(id).await?.ok_or(ServiceError::EntityNotFound("Post"))?;
		ServiceResponse::ok("Fetched post successfully.").with("post", post)
	}

	pub async fn update_post(
		id: Uuid,
		cmd: UpdatePost,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		let mut post = repository.get_post(id).await?.ok_or(ServiceError::EntityNotFound("Post"))?;
		if post.apply(cmd) && !repository.update_post(&post).await? {
			return Err(ServiceError::EntityNotFound("Post"));
		}
		ServiceResponse::ok("Post updated successfully.").with("post", post)
	}

	pub async fn delete_post(
		id: Uuid,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		if !repository.delete_post(id).await? {
			return Err(ServiceError::EntityNotFound("Post"));
		}
		tracing::info!(%id, "post deleted");
		Ok(ServiceResponse::ok("Post successfully deleted."))
	}

	/// An unknown or deleted user simply has no posts.
	pub async fn get_user_posts(
		user_id: Uuid,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		let posts = repository.list_user_posts(user_id).await?;
		ServiceResponse::ok("Fetched all user posts successfully.").with("userPosts", posts)
	}

	pub async fn get_user_posts_with_comments(
		user_id: Uuid,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		let posts = repository.list_user_posts(user_id).await?;
		let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
		let comments = repository.list_comments_on_posts(&post_ids).await?;

		ServiceResponse::ok("Fetched all user posts with comments successfully.")
			.with("posts", PostWithComments::group(posts, comments))
	}
}
