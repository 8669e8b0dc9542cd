pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::{Article, ArticleDraft, Section, SectionDraft, ValidatedArticle};
pub use repository::ArticleRepository;
pub use validation::{ValidationError, ValidationRule};
pub use value_objects::{ArticleId, ArticleKey, ArticleTitle, SectionId};
