use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
	pub title: String,
	pub content: String,
	pub user_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePost {
	#[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
	pub title: Option<String>,
	#[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
	pub content: Option<String>,
}
