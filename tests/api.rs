use std::sync::Arc;

use axum::{
	body::Body,
	http::{Method, Request, StatusCode},
	Router,
};
use serde_json::{json, Value};
use social::{
	adapters::repositories::InMemoryRepository,
	routes::{create_routes, AppState},
};
use tower::ServiceExt;

fn app() -> Router {
	create_routes(AppState::new(Arc::new(InMemoryRepository::new())))
}

async fn send(
	app: &Router,
	method: Method,
	uri: &str,
	body: Option<Value>,
) -> (StatusCode, Value) {
	let request = Request::builder()
		.method(method)
		.uri(uri)
		.header("content-type", "application/json")
		.body(match body {
			Some(body) => Body::from(body.to_string()),
			None => Body::empty(),
		})
		.unwrap();

	let response = app.clone().oneshot(request).await.unwrap();
	let status = response.status();
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
	(status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn user_body(name: &str) -> Value {
	json!({
		"firstName": "A",
		"lastName": "B",
		"emailAddress": format!("{name}@x.com"),
		"username": name,
	})
}

async fn create_user(
	app: &Router,
	name: &str,
) -> String {
	let (status, body) = send(app, Method::POST, "/users", Some(user_body(name))).await;
	assert_eq!(status, StatusCode::CREATED);
	body["user"]["id"].as_str().unwrap().to_string()
}

async fn create_post(
	app: &Router,
	user_id: &str,
) -> String {
	let (status, body) = send(
		app,
		Method::POST,
		"/posts",
		Some(json!({"title": "title", "content": "content", "userId": user_id})),
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);
	body["post"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_user_lifecycle() {
	let app = app();

	let (status, body) = send(&app, Method::POST, "/users", Some(user_body("a"))).await;
	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(body["message"], "User created successfully.");
	assert_eq!(body["user"]["emailAddress"], "a@x.com");
	let id = body["user"]["id"].as_str().unwrap().to_string();

	let (status, body) = send(&app, Method::POST, "/users", Some(user_body("a"))).await;
	assert_eq!(status, StatusCode::CONFLICT);
	assert!(body.get("user").is_none());

	let (status, body) = send(&app, Method::GET, "/users", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["users"].as_array().unwrap().len(), 1);

	let (status, _) = send(&app, Method::DELETE, &format!("/users/{id}"), None).await;
	assert_eq!(status, StatusCode::OK);

	let (status, body) = send(&app, Method::GET, &format!("/users/{id}"), None).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["message"], "User not found.");

	let (_, body) = send(&app, Method::GET, "/users", None).await;
	assert_eq!(body["users"], json!([]));
}

#[tokio::test]
async fn test_partial_update_user() {
	let app = app();
	let id = create_user(&app, "a").await;

	let (status, body) = send(
		&app,
		Method::PUT,
		&format!("/users/{id}"),
		Some(json!({"firstName": "", "lastName": "C", "username": null})),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["user"]["firstName"], "A");
	assert_eq!(body["user"]["lastName"], "C");
	assert_eq!(body["user"]["username"], "a");

	create_user(&app, "b").await;
	let (status, _) = send(&app, Method::PUT, &format!("/users/{id}"), Some(json!({"emailAddress": "b@x.com"}))).await;
	assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_falsy_update_fields_are_ignored() {
	let app = app();
	let id = create_user(&app, "a").await;

	let (status, body) = send(&app, Method::PUT, &format!("/users/{id}"), Some(json!({"firstName": 0}))).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["user"]["firstName"], "A");

	let (status, body) = send(
		&app,
		Method::PUT,
		&format!("/users/{id}"),
		Some(json!({"firstName": false, "lastName": "C"})),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["user"]["firstName"], "A");
	assert_eq!(body["user"]["lastName"], "C");

	let post_id = create_post(&app, &id).await;
	let (status, body) = send(&app, Method::PUT, &format!("/posts/{post_id}"), Some(json!({"title": 0, "content": null}))).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["post"]["title"], "title");
	assert_eq!(body["post"]["content"], "content");

	let (status, _) = send(&app, Method::PUT, &format!("/users/{id}"), Some(json!({"firstName": 1}))).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_user_cascades_to_posts_and_comments() {
	let app = app();
	let user_id = create_user(&app, "a").await;
	let other_id = create_user(&app, "b").await;
	let post_id = create_post(&app, &user_id).await;

	let (status, _) = send(
		&app,
		Method::POST,
		&format!("/posts/{post_id}/comments"),
		Some(json!({"content": "nice", "userId": other_id})),
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);

	let (status, body) = send(&app, Method::DELETE, &format!("/users/{user_id}"), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["message"], "User and related posts successfully deleted.");

	let (status, _) = send(&app, Method::GET, &format!("/posts/{post_id}"), None).await;
	assert_eq!(status, StatusCode::NOT_FOUND);

	let (status, body) = send(&app, Method::GET, &format!("/users/{user_id}/posts"), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["userPosts"], json!([]));

	let (_, body) = send(&app, Method::GET, "/comments", None).await;
	assert_eq!(body["comments"], json!([]));
}

#[tokio::test]
async fn test_posts_embed_owner() {
	let app = app();
	let user_id = create_user(&app, "a").await;
	let post_id = create_post(&app, &user_id).await;

	let (status, body) = send(&app, Method::GET, "/posts", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["posts"][0]["id"], post_id);
	assert_eq!(body["posts"][0]["user"]["id"], user_id);

	let (status, body) = send(&app, Method::PUT, &format!("/posts/{post_id}"), Some(json!({"title": "new"}))).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["post"]["title"], "new");
	assert_eq!(body["post"]["content"], "content");

	let (status, _) = send(&app, Method::DELETE, &format!("/posts/{post_id}"), None).await;
	assert_eq!(status, StatusCode::OK);
	let (status, _) = send(&app, Method::DELETE, &format!("/posts/{post_id}"), None).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comment_routes() {
	let app = app();
	let user_id = create_user(&app, "a").await;
	let post_id = create_post(&app, &user_id).await;

	let (status, body) = send(
		&app,
		Method::POST,
		&format!("/posts/{post_id}/comments"),
		Some(json!({"content": "first", "userId": user_id})),
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);
	let comment_id = body["comment"]["id"].as_str().unwrap().to_string();

	for uri in [format!("/posts/{post_id}/comments"), format!("/users/{user_id}/comments")] {
		let (status, body) = send(&app, Method::GET, &uri, None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["comments"][0]["id"], comment_id);
	}

	let (_, body) = send(&app, Method::GET, &format!("/users/{user_id}/posts/comments"), None).await;
	assert_eq!(body["posts"][0]["comments"][0]["content"], "first");

	let (status, body) = send(&app, Method::PUT, &format!("/comments/{comment_id}"), Some(json!({"content": "edited"}))).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["comment"]["content"], "edited");

	let (status, _) = send(&app, Method::DELETE, &format!("/comments/{comment_id}"), None).await;
	assert_eq!(status, StatusCode::OK);
	let (status, _) = send(&app, Method::GET, &format!("/comments/{comment_id}"), None).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_input() {
	let app = app();

	let (status, _) = send(&app, Method::GET, "/users/not-a-uuid", None).await;
	assert_eq!(status, StatusCode::NOT_FOUND);

	let (status, body) = send(&app, Method::POST, "/users", Some(json!({"firstName": "A"}))).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert!(body["message"].is_string());

	let (status, body) = send(
		&app,
		Method::POST,
		"/posts",
		Some(json!({"title": "t", "content": "c", "userId": uuid::Uuid::new_v4()})),
	)
	.await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["message"], "User not found.");
}

#[tokio::test]
async fn test_health() {
	let (status, body) = send(&app(), Method::GET, "/health", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["message"], "OK");
}
