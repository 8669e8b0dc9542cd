// src/application/commands/articles/persist.rs
use super::ArticleCommandService;
use super::materialize::MaterializeArticleCommand;
use crate::application::error::ApplicationResult;
use crate::domain::article::{Article, ValidatedArticle};

impl ArticleCommandService {
    /// Hand a validated aggregate to the persistence boundary as one logical
    /// unit. Repository errors pass through unchanged; this layer neither
    /// interprets nor retries them.
    pub async fn persist(&self, article: ValidatedArticle) -> ApplicationResult<Article> {
        let saved = self.repository.save(article).await?;
        tracing::info!(
            article_id = %saved.id,
            sections = saved.sections.len(),
            "article aggregate persisted"
        );
        Ok(saved)
    }

    /// The common composed path: materialize, then persist.
    pub async fn create(&self, command: MaterializeArticleCommand) -> ApplicationResult<Article> {
        let validated = self.materialize(command)?;
        self.persist(validated).await
    }
}
