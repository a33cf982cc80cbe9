//! Data access for the three aggregates.
//!
//! Every `get_*`/`list_*` method returns active records only, and every
//! `delete_*` method is a soft delete that reports `false` when there was no
//! active record to delete.

pub(crate) mod comment_repository;
pub mod memory;
pub(crate) mod post_repository;
pub(crate) mod user_repository;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::DatabaseExecutor;
use crate::domain::{
	comment::Comment,
	post::{entity::Post, PostWithUser},
	user::User,
};
use crate::services::response::ServiceError;

pub use memory::InMemoryRepository;

#[async_trait]
pub trait TUserRepository: Send + Sync {
	/// Finds an active user holding either unique field, other than `exclude`.
	async fn find_user_by_unique_fields(
		&self,
		email_address: Option<&str>,
		username: Option<&str>,
		exclude: Option<Uuid>,
	) -> Result<Option<User>, ServiceError>;
	async fn add_user(
		&self,
		user: &User,
	) -> Result<(), ServiceError>;
	async fn list_users(&self) -> Result<Vec<User>, ServiceError>;
	async fn get_user(
		&self,
		id: Uuid,
	) -> Result<Option<User>, ServiceError>;
	/// Writes an active record; `false` when it is no longer active.
	async fn update_user(
		&self,
		user: &User,
	) -> Result<bool, ServiceError>;
	/// Soft-deletes the user, its posts, the comments it wrote and the comments on its posts.
	async fn delete_user(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait TPostRepository: Send + Sync {
	async fn add_post(
		&self,
		post: &Post,
	) -> Result<(), ServiceError>;
	async fn list_posts(&self) -> Result<Vec<PostWithUser>, ServiceError>;
	async fn get_post(
		&self,
		id: Uuid,
	) -> Result<Option<PostWithUser>, ServiceError>;
	/// Writes an active record; `false` when it is no longer active.
	async fn update_post(
		&self,
		post: &Post,
	) -> Result<bool, ServiceError>;
	/// Soft-deletes the post and its comments.
	async fn delete_post(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError>;
	async fn list_user_posts(
		&self,
		user_id: Uuid,
	) -> Result<Vec<Post>, ServiceError>;
}

#[async_trait]
pub trait TCommentRepository: Send + Sync {
	async fn add_comment(
		&self,
		comment: &Comment,
	) -> Result<(), ServiceError>;
	async fn list_comments(&self) -> Result<Vec<Comment>, ServiceError>;
	async fn get_comment(
		&self,
		id: Uuid,
	) -> Result<Option<Comment>, ServiceError>;
	/// Writes an active record; `false` when it is no longer active.
	async fn update_comment(
		&self,
		comment: &Comment,
	) -> Result<bool, ServiceError>;
	async fn delete_comment(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError>;
	async fn list_post_comments(
		&self,
		post_id: Uuid,
	) -> Result<Vec<Comment>, ServiceError>;
	async fn list_user_comments(
		&self,
		user_id: Uuid,
	) -> Result<Vec<Comment>, ServiceError>;
	/// Active comments on any of `post_ids`.
	async fn list_comments_on_posts(
		&self,
		post_ids: &[Uuid],
	) -> Result<Vec<Comment>, ServiceError>;
}

/// The full data-access surface handed to the request handlers.
pub trait TRepository: TUserRepository + TPostRepository + TCommentRepository {}
impl<T: TUserRepository + TPostRepository + TCommentRepository> TRepository for T {}

/// Postgres-backed repository.
#[derive(Clone)]
pub struct SqlRepository {
	pool: PgPool,
}

impl SqlRepository {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}

	pub(crate) fn executor(&self) -> DatabaseExecutor {
		DatabaseExecutor::new(self.pool.clone())
	}
}
