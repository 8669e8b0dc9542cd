// tests/support/builders.rs
// Construction harness: recipes with default attribute values, composable
// with materialize/persist so tests can build without persisting or persist
// and inspect counts.
use chrono::Utc;

use folio_core::application::ApplicationResult;
use folio_core::application::commands::articles::{
    ArticleCommandService, MaterializeArticleCommand,
};
use folio_core::domain::article::{Article, ArticleDraft, SectionDraft, ValidatedArticle};

pub struct ArticleRecipe {
    title: String,
    sections: Vec<SectionDraft>,
}

impl Default for ArticleRecipe {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleRecipe {
    pub fn new() -> Self {
        Self {
            title: "My Article".into(),
            sections: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn section(mut self, section: SectionDraft) -> Self {
        self.sections.push(section);
        self
    }

    /// Materialize without persisting.
    pub fn build(self, service: &ArticleCommandService) -> ApplicationResult<ValidatedArticle> {
        service.materialize(self.into_command())
    }

    /// Materialize and persist.
    pub async fn create(self, service: &ArticleCommandService) -> ApplicationResult<Article> {
        service.create(self.into_command()).await
    }

    fn into_command(self) -> MaterializeArticleCommand {
        MaterializeArticleCommand {
            title: self.title,
            sections: self.sections,
        }
    }
}

pub struct SectionRecipe;

impl SectionRecipe {
    /// A section with an auto-supplied implied owner draft. Nothing is
    /// persisted; attaching the section elsewhere re-parents it.
    pub fn build() -> SectionDraft {
        let implied_owner = ArticleDraft::new("My Article", Utc::now());
        SectionDraft::new(&implied_owner)
    }

    /// Persist a standalone section by persisting its implied owner
    /// aggregate: one article row and exactly one section row.
    pub async fn create(service: &ArticleCommandService) -> ApplicationResult<Article> {
        ArticleRecipe::new().section(Self::build()).create(service).await
    }
}
