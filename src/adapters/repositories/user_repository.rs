use async_trait::async_trait;
use sqlx::PgConnection;
use uuid::Uuid;

use super::{SqlRepository, TUserRepository};
use crate::{database::rollback_with, domain::user::User, services::response::ServiceError};

const USER_COLUMNS: &str = "id, first_name, last_name, email_address, username, is_deleted, create_dt, update_dt";

#[async_trait]
impl TUserRepository for SqlRepository {
	async fn find_user_by_unique_fields(
		&self,
		email_address: Option<&str>,
		username: Option<&str>,
		exclude: Option<Uuid>,
	) -> Result<Option<User>, ServiceError> {
		let user = sqlx::query_as::<_, User>(&format!(
			"SELECT {USER_COLUMNS} FROM users
			WHERE is_deleted = FALSE
				AND (email_address = $1 OR username = $2)
				AND ($3::uuid IS NULL OR id <> $3)
			LIMIT 1"
		))
		.bind(email_address)
		.bind(username)
		.bind(exclude)
		.fetch_optional(&self.pool)
		.await?;
		Ok(user)
	}

	async fn add_user(
		&self,
		user: &User,
	) -> Result<(), ServiceError> {
		sqlx::query(
			"INSERT INTO users (id, first_name, last_name, email_address, username, is_deleted, create_dt, update_dt)
			VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
		)
		.bind(user.id)
		.bind(&user.first_name)
		.bind(&user.last_name)
		.bind(&user.email_address)
		.bind(&user.username)
		.bind(user.is_deleted)
		.bind(user.create_dt)
		.bind(user.update_dt)
		.execute(&self.pool)
		.await?;
		Ok(())
	}

	async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
		let users = sqlx::query_as::<_, User>(&format!(
			"SELECT {USER_COLUMNS} FROM users WHERE is_deleted = FALSE ORDER BY create_dt"
		))
		.fetch_all(&self.pool)
		.await?;
		Ok(users)
	}

	async fn get_user(
		&self,
		id: Uuid,
	) -> Result<Option<User>, ServiceError> {
		let user = sqlx::query_as::<_, User>(&format!(
			"SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND is_deleted = FALSE"
		))
		.bind(id)
		.fetch_optional(&self.pool)
		.await?;
		Ok(user)
	}

	async fn update_user(
		&self,
		user: &User,
	) -> Result<bool, ServiceError> {
		let updated = sqlx::query(
			"UPDATE users
			SET first_name = $2, last_name = $3, email_address = $4, username = $5, update_dt = $6
			WHERE id = $1 AND is_deleted = FALSE",
		)
		.bind(user.id)
		.bind(&user.first_name)
		.bind(&user.last_name)
		.bind(&user.email_address)
		.bind(&user.username)
		.bind(user.update_dt)
		.execute(&self.pool)
		.await?
		.rows_affected();
		Ok(updated > 0)
	}

	async fn delete_user(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError> {
		let mut executor = self.executor();
		executor.begin().await?;

		let result = cascade_delete_user(executor.transaction()?, id).await;
		match result {
			Ok(deleted) => {
				executor.commit().await?;
				Ok(deleted)
			}
			Err(err) => Err(rollback_with(err, executor.rollback()).await),
		}
	}
}

async fn cascade_delete_user(
	conn: &mut PgConnection,
	id: Uuid,
) -> Result<bool, ServiceError> {
	let deleted = sqlx::query("UPDATE users SET is_deleted = TRUE, update_dt = NOW() WHERE id = $1 AND is_deleted = FALSE")
		.bind(id)
		.execute(&mut *conn)
		.await?
		.rows_affected();
	if deleted == 0 {
		return Ok(false);
	}

	let comments = sqlx::query(
		"UPDATE comments SET is_deleted = TRUE, update_dt = NOW()
		WHERE is_deleted = FALSE
			AND (user_id = $1 OR post_id IN (SELECT id FROM posts WHERE user_id = $1))",
	)
	.bind(id)
	.execute(&mut *conn)
	.await?
	.rows_affected();

	let posts = sqlx::query("UPDATE posts SET is_deleted = TRUE, update_dt = NOW() WHERE user_id = $1 AND is_deleted = FALSE")
		.bind(id)
		.execute(&mut *conn)
		.await?
		.rows_affected();

	tracing::debug!(%id, posts, comments, "user soft-deleted");
	Ok(true)
}
