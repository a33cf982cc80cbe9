use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgConnection;
use uuid::Uuid;

use super::{SqlRepository, TPostRepository};
use crate::{
	database::rollback_with,
	domain::{
		post::{entity::Post, PostWithUser},
		user::User,
	},
	services::response::ServiceError,
};

const POST_COLUMNS: &str = "id, title, content, user_id, is_deleted, create_dt, update_dt";

const POST_WITH_USER_QUERY: &str = "SELECT
		p.id, p.title, p.content, p.user_id, p.is_deleted, p.create_dt, p.update_dt,
		u.first_name AS user_first_name, u.last_name AS user_last_name,
		u.email_address AS user_email_address, u.username AS user_username,
		u.is_deleted AS user_is_deleted, u.create_dt AS user_create_dt, u.update_dt AS user_update_dt
	FROM posts p
	JOIN users u ON u.id = p.user_id
	WHERE p.is_deleted = FALSE";

#[derive(sqlx::FromRow)]
struct PostWithUserRow {
	id: Uuid,
	title: String,
	content: String,
	user_id: Uuid,
	is_deleted: bool,
	create_dt: DateTime<Utc>,
	update_dt: DateTime<Utc>,
	user_first_name: String,
	user_last_name: String,
	user_email_address: String,
	user_username: String,
	user_is_deleted: bool,
	user_create_dt: DateTime<Utc>,
	user_update_dt: DateTime<Utc>,
}

impl From<PostWithUserRow> for PostWithUser {
	fn from(row: PostWithUserRow) -> Self {
		let user = User {
			id: row.user_id,
			first_name: row.user_first_name,
			last_name: row.user_last_name,
			email_address: row.user_email_address,
			username: row.user_username,
			is_deleted: row.user_is_deleted,
			create_dt: row.user_create_dt,
			update_dt: row.user_update_dt,
		};
		let post = Post {
			id: row.id,
			title: row.title,
			content: row.content,
			user_id: row.user_id,
			is_deleted: row.is_deleted,
			create_dt: row.create_dt,
			update_dt: row.update_dt,
		};
		PostWithUser::new(post, user)
	}
}

#[async_trait]
impl TPostRepository for SqlRepository {
	async fn add_post(
		&self,
		post: &Post,
	) -> Result<(), ServiceError> {
		sqlx::query(
			"INSERT INTO posts (id, title, content, user_id, is_deleted, create_dt, update_dt)
			VALUES ($1, $2, $3, $4, $5, $6, $7)",
		)
		.bind(post.id)
		.bind(&post.title)
		.bind(&post.content)
		.bind(post.user_id)
		.bind(post.is_deleted)
		.bind(post.create_dt)
		.bind(post.update_dt)
		.execute(&self.pool)
		.await?;
		Ok(())
	}

	async fn list_posts(&self) -> Result<Vec<PostWithUser>, ServiceError> {
		let rows = sqlx::query_as::<_, PostWithUserRow>(&format!("{POST_WITH_USER_QUERY} ORDER BY p.create_dt"))
			.fetch_all(&self.pool)
			.await?;
		Ok(rows.into_iter().map(PostWithUser::from).collect())
	}

	async fn get_post(
		&self,
		id: Uuid,
	) -> Result<Option<PostWithUser>, ServiceError> {
		let row = sqlx::query_as::<_, PostWithUserRow>(&format!("{POST_WITH_USER_QUERY} AND p.id = $1"))
			.bind(id)
			.fetch_optional(&self.pool)
			.await?;
		Ok(row.map(PostWithUser::from))
	}

	async fn update_post(
		&self,
		post: &Post,
	) -> Result<bool, ServiceError> {
		let updated = sqlx::query("UPDATE posts SET title = $2, content = $3, update_dt = $4 WHERE id = $1 AND is_deleted = FALSE")
			.bind(post.id)
			.bind(&post.title)
			.bind(&post.content)
			.bind(post.update_dt)
			.execute(&self.pool)
			.await?
			.rows_affected();
		Ok(updated > 0)
	}

	async fn delete_post(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError> {
		let mut executor = self.executor();
		executor.begin().await?;

		let result = cascade_delete_post(executor.transaction()?, id).await;
		match result {
			Ok(deleted) => {
				executor.commit().await?;
				Ok(deleted)
			}
			Err(err) => Err(rollback_with(err, executor.rollback()).await),
		}
	}

	async fn list_user_posts(
		&self,
		user_id: Uuid,
	) -> Result<Vec<Post>, ServiceError> {
		let posts = sqlx::query_as::<_, Post>(&format!(
			"SELECT {POST_COLUMNS} FROM posts WHERE user_id = $1 AND is_deleted = FALSE ORDER BY create_dt"
		))
		.bind(user_id)
		.fetch_all(&self.pool)
		.await?;
		Ok(posts)
	}
}

async fn cascade_delete_post(
	conn: &mut PgConnection,
	id: Uuid,
) -> Result<bool, ServiceError> {
	let deleted = sqlx::query("UPDATE posts SET is_deleted = TRUE, update_dt = NOW() WHERE id = $1 AND is_deleted = FALSE")
		.bind(id)
		.execute(&mut *conn)
		.await?
		.rows_affected();
	if deleted == 0 {
		return Ok(false);
	}

	sqlx::query("UPDATE comments SET is_deleted = TRUE, update_dt = NOW() WHERE post_id = $1 AND is_deleted = FALSE")
		.bind(id)
		.execute(&mut *conn)
		.await?;
	Ok(true)
}
