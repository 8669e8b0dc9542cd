// src/application/commands/articles/materialize.rs
use super::ArticleCommandService;
use crate::application::error::ApplicationResult;
use crate::domain::article::{ArticleDraft, SectionDraft, ValidatedArticle};

/// Request to assemble an article aggregate in memory. `sections` may be
/// empty; whether it is decides the default-section policy.
pub struct MaterializeArticleCommand {
    pub title: String,
    pub sections: Vec<SectionDraft>,
}

impl MaterializeArticleCommand {
    pub fn builder() -> MaterializeArticleCommandBuilder {
        MaterializeArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct MaterializeArticleCommandBuilder {
    title: Option<String>,
    sections: Vec<SectionDraft>,
}

impl MaterializeArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn section(mut self, section: SectionDraft) -> Self {
        self.sections.push(section);
        self
    }

    pub fn sections(mut self, sections: impl IntoIterator<Item = SectionDraft>) -> Self {
        self.sections.extend(sections);
        self
    }

    pub fn build(self) -> Result<MaterializeArticleCommand, &'static str> {
        Ok(MaterializeArticleCommand {
            title: self.title.ok_or("title is required")?,
            sections: self.sections,
        })
    }
}

impl ArticleCommandService {
    /// Assemble and validate the aggregate. Synchronous: no I/O happens here.
    ///
    /// Any explicitly supplied section, regardless of count, suppresses
    /// default creation entirely; an empty list gets exactly one synthesized
    /// section. Runs once per aggregate, so explicit sections are never
    /// duplicated.
    pub fn materialize(
        &self,
        command: MaterializeArticleCommand,
    ) -> ApplicationResult<ValidatedArticle> {
        let now = self.clock.now();
        let mut draft = ArticleDraft::new(command.title, now);

        if command.sections.is_empty() {
            let section = SectionDraft::new(&draft);
            draft.attach_section(section);
            tracing::debug!(article_key = %draft.key(), "synthesized default section");
        } else {
            tracing::debug!(
                article_key = %draft.key(),
                supplied = command.sections.len(),
                "attaching explicit sections"
            );
            draft.attach_sections(command.sections);
        }

        let validated = ValidatedArticle::new(draft)?;
        Ok(validated)
    }
}
