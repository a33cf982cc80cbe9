use std::ops::{Deref, DerefMut};

use serde::Serialize;

use self::entity::Post;
use crate::domain::{comment::Comment, user::User};
pub mod commands;
pub mod entity;

/// A post together with its owner, as returned by the post listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostWithUser {
	#[serde(flatten)]
	pub(crate) post: Post,
	pub(crate) user: User,
}

impl PostWithUser {
	pub fn new(
		post: Post,
		user: User,
	) -> Self {
		Self { post, user }
	}
	pub fn user(&self) -> &User {
		&self.user
	}
}

impl Deref for PostWithUser {
	type Target = Post;
	fn deref(&self) -> &Self::Target {
		&self.post
	}
}
impl DerefMut for PostWithUser {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.post
	}
}

/// A post with its active comments nested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostWithComments {
	#[serde(flatten)]
	pub(crate) post: Post,
	pub(crate) comments: Vec<Comment>,
}

impl PostWithComments {
	/// Groups `comments` under the posts they belong to, keeping the order of `posts`.
	pub fn group(
		posts: Vec<Post>,
		comments: Vec<Comment>,
	) -> Vec<Self> {
		let mut grouped: Vec<Self> = posts.into_iter().map(|post| Self { post, comments: vec![] }).collect();
		for comment in comments {
			if let Some(entry) = grouped.iter_mut().find(|p| p.post.id == comment.post_id) {
				entry.comments.push(comment);
			}
		}
		grouped
	}
	pub fn comments(&self) -> &[Comment] {
		&self.comments
	}
}

impl Deref for PostWithComments {
	type Target = Post;
	fn deref(&self) -> &Self::Target {
		&self.post
	}
}
