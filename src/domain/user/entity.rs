use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::{CreateUser, UpdateUser};
use crate::domain::overwrite_if_present;

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: Uuid,
	pub first_name: String,
	pub last_name: String,
	pub email_address: String,
	pub username: String,
	pub is_deleted: bool,
	pub create_dt: DateTime<Utc>,
	pub update_dt: DateTime<Utc>,
}

impl User {
	pub fn new(cmd: CreateUser) -> Self {
		let now = Utc::now();
		Self {
			id: Uuid::new_v4(),
			first_name: cmd.first_name,
			last_name: cmd.last_name,
			email_address: cmd.email_address,
			username: cmd.username,
			is_deleted: false,
			create_dt: now,
			update_dt: now,
		}
	}

	/// Applies a partial update. Returns whether anything changed.
	pub fn apply(
		&mut self,
		cmd: UpdateUser,
	) -> bool {
		let mut changed = overwrite_if_present(&mut self.first_name, cmd.first_name);
		changed |= overwrite_if_present(&mut self.last_name, cmd.last_name);
		changed |= overwrite_if_present(&mut self.email_address, cmd.email_address);
		changed |= overwrite_if_present(&mut self.username, cmd.username);
		if changed {
			self.update_dt = Utc::now();
		}
		changed
	}

	pub fn is_active(&self) -> bool {
		!self.is_deleted
	}
}
