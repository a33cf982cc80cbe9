use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
	pub first_name: String,
	pub last_name: String,
	pub email_address: String,
	pub username: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
	#[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
	pub first_name: Option<String>,
	#[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
	pub last_name: Option<String>,
	#[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
	pub email_address: Option<String>,
	#[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
	pub username: Option<String>,
}

impl UpdateUser {
	/// Unique fields that will actually be written, i.e. supplied and non-empty.
	pub fn unique_fields(&self) -> (Option<&str>, Option<&str>) {
		(present(&self.email_address), present(&self.username))
	}
}

fn present(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|s| !s.is_empty())
}
