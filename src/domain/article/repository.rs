use crate::domain::article::entity::{Article, ValidatedArticle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence boundary for the article aggregate.
///
/// `save` writes the article row and every attached section row as one
/// logical unit: either all rows commit or none do. The count accessors are
/// the observation surface tests use to check exactly how many rows a save
/// produced.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn save(&self, article: ValidatedArticle) -> DomainResult<Article>;
    async fn article_count(&self) -> DomainResult<u64>;
    async fn section_count(&self) -> DomainResult<u64>;
}
