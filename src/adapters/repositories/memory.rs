use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use super::{TCommentRepository, TPostRepository, TUserRepository};
use crate::{
	domain::{
		comment::Comment,
		post::{entity::Post, PostWithUser},
		user::User,
	},
	services::response::ServiceError,
};

#[derive(Default)]
struct Tables {
	users: Vec<User>,
	posts: Vec<Post>,
	comments: Vec<Comment>,
}

impl Tables {
	fn active_user(
		&self,
		id: Uuid,
	) -> Option<&User> {
		self.users.iter().find(|u| u.id == id && u.is_active())
	}

	fn with_user(
		&self,
		post: &Post,
	) -> Option<PostWithUser> {
		let user = self.users.iter().find(|u| u.id == post.user_id)?;
		Some(PostWithUser::new(post.clone(), user.clone()))
	}

	fn active_comments(
		&self,
		filter: impl Fn(&Comment) -> bool,
	) -> Vec<Comment> {
		self.comments.iter().filter(|c| !c.is_deleted && filter(c)).cloned().collect()
	}
}

/// Process-local store used when no database is configured, and by the tests.
/// Rows are kept in insertion order, which is also creation order.
#[derive(Default, Clone)]
pub struct InMemoryRepository(Arc<RwLock<Tables>>);

impl InMemoryRepository {
	pub fn new() -> Self {
		Self::default()
	}
	async fn read(&self) -> RwLockReadGuard<'_, Tables> {
		self.0.read().await
	}
	async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
		self.0.write().await
	}
}

#[async_trait]
impl TUserRepository for InMemoryRepository {
	async fn find_user_by_unique_fields(
		&self,
		email_address: Option<&str>,
		username: Option<&str>,
		exclude: Option<Uuid>,
	) -> Result<Option<User>, ServiceError> {
		let tables = self.read().await;
		let found = tables.users.iter().find(|u| {
			u.is_active()
				&& Some(u.id) != exclude
				&& (email_address == Some(u.email_address.as_str()) || username == Some(u.username.as_str()))
		});
		Ok(found.cloned())
	}

	async fn add_user(
		&self,
		user: &User,
	) -> Result<(), ServiceError> {
		self.write().await.users.push(user.clone());
		Ok(())
	}

	async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
		Ok(self.read().await.users.iter().filter(|u| u.is_active()).cloned().collect())
	}

	async fn get_user(
		&self,
		id: Uuid,
	) -> Result<Option<User>, ServiceError> {
		Ok(self.read().await.active_user(id).cloned())
	}

	async fn update_user(
		&self,
		user: &User,
	) -> Result<bool, ServiceError> {
		let mut tables = self.write().await;
		match tables.users.iter_mut().find(|u| u.id == user.id && u.is_active()) {
			Some(stored) => {
				*stored = user.clone();
				Ok(true)
			}
			None => Ok(false),
		}
	}

	async fn delete_user(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError> {
		let mut tables = self.write().await;
		let now = Utc::now();
		let Some(user) = tables.users.iter_mut().find(|u| u.id == id && u.is_active()) else {
			return Ok(false);
		};
		user.is_deleted = true;
		user.update_dt = now;

		let owned_posts: Vec<Uuid> = tables.posts.iter().filter(|p| p.user_id == id).map(|p| p.id).collect();
		for comment in tables
			.comments
			.iter_mut()
			.filter(|c| !c.is_deleted && (c.user_id == id || owned_posts.contains(&c.post_id)))
		{
			comment.is_deleted = true;
			comment.update_dt = now;
		}
		for post in tables.posts.iter_mut().filter(|p| p.user_id == id && !p.is_deleted) {
			post.is_deleted = true;
			post.update_dt = now;
		}
		Ok(true)
	}
}

#[async_trait]
impl TPostRepository for InMemoryRepository {
	async fn add_post(
		&self,
		post: &Post,
	) -> Result<(), ServiceError> {
		self.write().await.posts.push(post.clone());
		Ok(())
	}

	async fn list_posts(&self) -> Result<Vec<PostWithUser>, ServiceError> {
		let tables = self.read().await;
		Ok(tables.posts.iter().filter(|p| !p.is_deleted).filter_map(|p| tables.with_user(p)).collect())
	}

	async fn get_post(
		&self,
		id: Uuid,
	) -> Result<Option<PostWithUser>, ServiceError> {
		let tables = self.read().await;
		Ok(tables.posts.iter().find(|p| p.id == id && !p.is_deleted).and_then(|p| tables.with_user(p)))
	}

	async fn update_post(
		&self,
		post: &Post,
	) -> Result<bool, ServiceError> {
		let mut tables = self.write().await;
		match tables.posts.iter_mut().find(|p| p.id == post.id && !p.is_deleted) {
			Some(stored) => {
				*stored = post.clone();
				Ok(true)
			}
			None => Ok(false),
		}
	}

	async fn delete_post(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError> {
		let mut tables = self.write().await;
		let now = Utc::now();
		let Some(post) = tables.posts.iter_mut().find(|p| p.id == id && !p.is_deleted) else {
			return Ok(false);
		};
		post.is_deleted = true;
		post.update_dt = now;

		for comment in tables.comments.iter_mut().filter(|c| c.post_id == id && !c.is_deleted) {
			comment.is_deleted = true;
			comment.update_dt = now;
		}
		Ok(true)
	}

	async fn list_user_posts(
		&self,
		user_id: Uuid,
	) -> Result<Vec<Post>, ServiceError> {
		let tables = self.read().await;
		Ok(tables.posts.iter().filter(|p| p.user_id == user_id && !p.is_deleted).cloned().collect())
	}
}

#[async_trait]
impl TCommentRepository for InMemoryRepository {
	async fn add_comment(
		&self,
		comment: &Comment,
	) -> Result<(), ServiceError> {
		self.write().await.comments.push(comment.clone());
		Ok(())
	}

	async fn list_comments(&self) -> Result<Vec<Comment>, ServiceError> {
		Ok(self.read().await.active_comments(|_| true))
	}

	async fn get_comment(
		&self,
		id: Uuid,
	) -> Result<Option<Comment>, ServiceError> {
		Ok(self.read().await.active_comments(|c| c.id == id).pop())
	}

	async fn update_comment(
		&self,
		comment: &Comment,
	) -> Result<bool, ServiceError> {
		let mut tables = self.write().await;
		match tables.comments.iter_mut().find(|c| c.id == comment.id && !c.is_deleted) {
			Some(stored) => {
				*stored = comment.clone();
				Ok(true)
			}
			None => Ok(false),
		}
	}

	async fn delete_comment(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError> {
		let mut tables = self.write().await;
		match tables.comments.iter_mut().find(|c| c.id == id && !c.is_deleted) {
			Some(comment) => {
				comment.is_deleted = true;
				comment.update_dt = Utc::now();
				Ok(true)
			}
			None => Ok(false),
		}
	}

	async fn list_post_comments(
		&self,
		post_id: Uuid,
	) -> Result<Vec<Comment>, ServiceError> {
		Ok(self.read().await.active_comments(|c| c.post_id == post_id))
	}

	async fn list_user_comments(
		&self,
		user_id: Uuid,
	) -> Result<Vec<Comment>, ServiceError> {
		Ok(self.read().await.active_comments(|c| c.user_id == user_id))
	}

	async fn list_comments_on_posts(
		&self,
		post_ids: &[Uuid],
	) -> Result<Vec<Comment>, ServiceError> {
		Ok(self.read().await.active_comments(|c| post_ids.contains(&c.post_id)))
	}
}
