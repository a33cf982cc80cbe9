use async_trait::async_trait;
use uuid::Uuid;

use super::{SqlRepository, TCommentRepository};
use crate::{domain::comment::Comment, services::response::ServiceError};

const COMMENT_COLUMNS: &str = "id, content, user_id, post_id, is_deleted, create_dt, update_dt";

impl SqlRepository {
	async fn fetch_comments(
		&self,
		filter: &str,
		id: Option<Uuid>,
	) -> Result<Vec<Comment>, ServiceError> {
		let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE is_deleted = FALSE {filter} ORDER BY create_dt");
		let mut query = sqlx::query_as::<_, Comment>(&sql);
		if let Some(id) = id {
			query = query.bind(id);
		}
		Ok(query.fetch_all(&self.pool).await?)
	}
}

#[async_trait]
impl TCommentRepository for SqlRepository {
	async fn add_comment(
		&self,
		comment: &Comment,
	) -> Result<(), ServiceError> {
		sqlx::query(
			"INSERT INTO comments (id, content, user_id, post_id, is_deleted, create_dt, update_dt)
			VALUES ($1, $2, $3, $4, $5, $6, $7)",
		)
		.bind(comment.id)
		.bind(&comment.content)
		.bind(comment.user_id)
		.bind(comment.post_id)
		.bind(comment.is_deleted)
		.bind(comment.create_dt)
		.bind(comment.update_dt)
		.execute(&self.pool)
		.await?;
		Ok(())
	}

	async fn list_comments(&self) -> Result<Vec<Comment>, ServiceError> {
		self.fetch_comments("", None).await
	}

	async fn get_comment(
		&self,
		id: Uuid,
	) -> Result<Option<Comment>, ServiceError> {
		let comment = sqlx::query_as::<_, Comment>(&format!(
			"SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1 AND is_deleted = FALSE"
		))
		.bind(id)
		.fetch_optional(&self.pool)
		.await?;
		Ok(comment)
	}

	async fn update_comment(
		&self,
		comment: &Comment,
	) -> Result<bool, ServiceError> {
		let updated = sqlx::query("UPDATE comments SET content = $2, update_dt = $3 WHERE id = $1 AND is_deleted = FALSE")
			.bind(comment.id)
			.bind(&comment.content)
			.bind(comment.update_dt)
			.execute(&self.pool)
			.await?
			.rows_affected();
		Ok(updated > 0)
	}

	async fn delete_comment(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError> {
		let deleted = sqlx::query("UPDATE comments SET is_deleted = TRUE, update_dt = NOW() WHERE id = $1 AND is_deleted = FALSE")
			.bind(id)
			.execute(&self.pool)
			.await?
			.rows_affected();
		Ok(deleted > 0)
	}

	async fn list_post_comments(
		&self,
		post_id: Uuid,
	) -> Result<Vec<Comment>, ServiceError> {
		self.fetch_comments("AND post_id = $1", Some(post_id)).await
	}

	async fn list_user_comments(
		&self,
		user_id: Uuid,
	) -> Result<Vec<Comment>, ServiceError> {
		self.fetch_comments("AND user_id = $1", Some(user_id)).await
	}

	async fn list_comments_on_posts(
		&self,
		post_ids: &[Uuid],
	) -> Result<Vec<Comment>, ServiceError> {
		if post_ids.is_empty() {
			return Ok(vec![]);
		}
		let comments = sqlx::query_as::<_, Comment>(&format!(
			"SELECT {COMMENT_COLUMNS} FROM comments WHERE is_deleted = FALSE AND post_id = ANY($1) ORDER BY create_dt"
		))
		.bind(post_ids)
		.fetch_all(&self.pool)
		.await?;
		Ok(comments)
	}
}
