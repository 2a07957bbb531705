pub mod error;
pub mod like;
pub mod post;
pub mod tag;
