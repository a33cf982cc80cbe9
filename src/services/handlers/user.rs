use uuid::Uuid;

use crate::{
	adapters::repositories::TRepository,
	domain::user::{
		commands::{CreateUser, UpdateUser},
		User,
	},
	services::response::{ServiceError, ServiceResponse},
};

pub struct UserHandler;
impl UserHandler {
	pub async fn create_user(
		cmd: CreateUser,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		if repository
			.find_user_by_unique_fields(Some(cmd.email_address.as_str()), Some(cmd.username.as_str()), None)
			.await?
			.is_some()
		{
			return Err(ServiceError::Conflict(format!(
				"User with email address {} or username {} already exists.",
				cmd.email_address, cmd.username
			)));
		}

		let user = User::new(cmd);
		repository.add_user(&user).await?;
		tracing::info!(id = %user.id, "user created");

		ServiceResponse::created("User created successfully.").with("user", user)
	}

	pub async fn get_users(repository: &dyn TRepository) -> Result<ServiceResponse, ServiceError> {
		let users = repository.list_users().await?;
		ServiceResponse::ok("Fetched all users successfully.").with("users", users)
	}

	pub async fn get_user(
		id: Uuid,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		let user = repository.get_user(id).await?.ok_or(ServiceError::EntityNotFound("User"))?;
		ServiceResponse::ok("Fetched user successfully.").with("user", user)
	}

	pub async fn update_user(
		id: Uuid,
		cmd: UpdateUser,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		let mut user = repository.get_user(id).await?.ok_or(ServiceError::EntityNotFound("User"))?;

		let (email_address, username) = cmd.unique_fields();
		if (email_address.is_some() || username.is_some())
			&& repository.find_user_by_unique_fields(email_address, username, Some(id)).await?.is_some()
		{
			return Err(ServiceError::Conflict(format!(
				"User with email address {} or username {} already exists.",
				email_address.unwrap_or_default(),
				username.unwrap_or_default()
			)));
		}

		if user.apply(cmd) && !repository.update_user(&user).await? {
			return Err(ServiceError::EntityNotFound("User"));
		}
		ServiceResponse::ok("User updated successfully.").with("user", user)
	}

	pub async fn delete_user(
		id: Uuid,
		repository: &dyn TRepository,
	) -> Result<ServiceResponse, ServiceError> {
		if !repository.delete_user(id).await? {
			return Err(ServiceError::EntityNotFound("User"));
		}
		tracing::info!(%id, "user deleted");
		Ok(ServiceResponse::ok("User and related posts successfully deleted."))
	}
}

#[cfg(test)]
mod test {
	use axum::http::StatusCode;

	use super::UserHandler;
	use crate::{
		adapters::repositories::{InMemoryRepository, TPostRepository, TUserRepository},
		domain::{
			post::{commands::CreatePost, entity::Post},
			user::commands::{CreateUser, UpdateUser},
		},
		services::response::ServiceError,
	};

	fn create_user_cmd(name: &str) -> CreateUser {
		CreateUser {
			first_name: "A".to_string(),
			last_name: "B".to_string(),
			email_address: format!("{name}@x.com"),
			username: name.to_string(),
		}
	}

	async fn given_user(
		name: &str,
		repository: &InMemoryRepository,
	) -> uuid::Uuid {
		let response = UserHandler::create_user(create_user_cmd(name), repository).await.unwrap();
		let body = response.body();
		body["user"]["id"].as_str().unwrap().parse().unwrap()
	}

	#[tokio::test]
	async fn test_create_user() {
		let repository = InMemoryRepository::new();
		let response = UserHandler::create_user(create_user_cmd("a"), &repository).await.unwrap();

		assert_eq!(response.status, StatusCode::CREATED);
		assert_eq!(response.body()["user"]["username"], "a");
		assert_eq!(repository.list_users().await.unwrap().len(), 1);
	}

	#[tokio::test]
	async fn test_duplicate_username_or_email_conflicts() {
		'_given: {
			let repository = InMemoryRepository::new();
			given_user("a", &repository).await;

			'_when: {
				let mut same_email = create_user_cmd("b");
				same_email.email_address = "a@x.com".to_string();
				let mut same_username = create_user_cmd("c");
				same_username.username = "a".to_string();

				for cmd in [same_email, same_username] {
					let err = UserHandler::create_user(cmd, &repository).await.unwrap_err();
					assert!(matches!(err, ServiceError::Conflict(_)));
				}
				assert_eq!(repository.list_users().await.unwrap().len(), 1);
			}
		}
	}

	#[tokio::test]
	async fn test_deleted_user_frees_username() {
		let repository = InMemoryRepository::new();
		let id = given_user("a", &repository).await;
		UserHandler::delete_user(id, &repository).await.unwrap();

		let response = UserHandler::create_user(create_user_cmd("a"), &repository).await.unwrap();
		assert_eq!(response.status, StatusCode::CREATED);
	}

	#[tokio::test]
	async fn test_delete_user_cascades_to_posts() {
		'_given: {
			let repository = InMemoryRepository::new();
			let id = given_user("a", &repository).await;
			let post = Post::new(CreatePost {
				title: "t".to_string(),
				content: "c".to_string(),
				user_id: id,
			});
			repository.add_post(&post).await.unwrap();

			'_when: {
				let response = UserHandler::delete_user(id, &repository).await.unwrap();
				assert_eq!(response.status, StatusCode::OK);

				assert!(repository.get_user(id).await.unwrap().is_none());
				assert!(repository.list_users().await.unwrap().is_empty());
				assert!(repository.get_post(post.id).await.unwrap().is_none());
				assert!(repository.list_user_posts(id).await.unwrap().is_empty());
			}
		}
	}

	#[tokio::test]
	async fn test_delete_twice_is_not_found() {
		let repository = InMemoryRepository::new();
		let id = given_user("a", &repository).await;
		UserHandler::delete_user(id, &repository).await.unwrap();

		let err = UserHandler::delete_user(id, &repository).await.unwrap_err();
		assert!(matches!(err, ServiceError::EntityNotFound("User")));
		let err = UserHandler::get_user(id, &repository).await.unwrap_err();
		assert!(matches!(err, ServiceError::EntityNotFound("User")));
	}

	#[tokio::test]
	async fn test_update_user_partially() {
		let repository = InMemoryRepository::new();
		let id = given_user("a", &repository).await;

		let response = UserHandler::update_user(
			id,
			UpdateUser {
				first_name: Some("Z".to_string()),
				last_name: Some(String::new()),
				// Resubmitting one's own email is not a conflict.
				email_address: Some("a@x.com".to_string()),
				username: None,
			},
			&repository,
		)
		.await
		.unwrap();

		let body = response.body();
		let user = &body["user"];
		assert_eq!(user["firstName"], "Z");
		assert_eq!(user["lastName"], "B");
		assert_eq!(user["username"], "a");
		assert_eq!(repository.get_user(id).await.unwrap().unwrap().first_name, "Z");
	}

	#[tokio::test]
	async fn test_update_user_to_taken_username_conflicts() {
		let repository = InMemoryRepository::new();
		given_user("a", &repository).await;
		let id = given_user("b", &repository).await;

		let err = UserHandler::update_user(
			id,
			UpdateUser {
				username: Some("a".to_string()),
				..Default::default()
			},
			&repository,
		)
		.await
		.unwrap_err();

		assert!(matches!(err, ServiceError::Conflict(_)));
		assert_eq!(repository.get_user(id).await.unwrap().unwrap().username, "b");
	}
}
