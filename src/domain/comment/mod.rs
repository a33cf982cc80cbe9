pub mod commands;
pub mod entity;

pub use entity::Comment;
