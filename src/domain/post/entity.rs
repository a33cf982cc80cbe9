use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::{CreatePost, UpdatePost};
use crate::domain::overwrite_if_present;

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	pub id: Uuid,
	pub title: String,
	pub content: String,
	pub user_id: Uuid,
	pub is_deleted: bool,
	pub create_dt: DateTime<Utc>,
	pub update_dt: DateTime<Utc>,
}

impl Post {
	pub fn new(cmd: CreatePost) -> Self {
		let now = Utc::now();
		Self {
			id: Uuid::new_v4(),
			title: cmd.title,
			content: cmd.content,
			user_id: cmd.user_id,
			is_deleted: false,
			create_dt: now,
			update_dt: now,
		}
	}

	pub fn apply(
		&mut self,
		cmd: UpdatePost,
	) -> bool {
		let mut changed = overwrite_if_present(&mut self.title, cmd.title);
		changed |= overwrite_if_present(&mut self.content, cmd.content);
		if changed {
			self.update_dt = Utc::now();
		}
		changed
	}
}
