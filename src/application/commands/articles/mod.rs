mod materialize;
mod persist;
mod service;

pub use materialize::{MaterializeArticleCommand, MaterializeArticleCommandBuilder};
pub use service::ArticleCommandService;
