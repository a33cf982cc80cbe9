use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::{CreateComment, UpdateComment};
use crate::domain::overwrite_if_present;

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
	pub id: Uuid,
	pub content: String,
	pub user_id: Uuid,
	pub post_id: Uuid,
	pub is_deleted: bool,
	pub create_dt: DateTime<Utc>,
	pub update_dt: DateTime<Utc>,
}

impl Comment {
	pub fn new(
		post_id: Uuid,
		cmd: CreateComment,
	) -> Self {
		let now = Utc::now();
		Self {
			id: Uuid::new_v4(),
			content: cmd.content,
			user_id: cmd.user_id,
			post_id,
			is_deleted: false,
			create_dt: now,
			update_dt: now,
		}
	}

	pub fn apply(
		&mut self,
		cmd: UpdateComment,
	) -> bool {
		let changed = overwrite_if_present(&mut self.content, cmd.content);
		if changed {
			self.update_dt = Utc::now();
		}
		changed
	}
}
