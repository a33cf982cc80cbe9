//! Request handlers. Each one checks existence/uniqueness, issues the
//! repository calls and shapes the envelope; HTTP extraction lives in `routes`.

mod comment;
mod post;
mod user;

pub use comment::CommentHandler;
pub use post::PostHandler;
pub use user::UserHandler;
