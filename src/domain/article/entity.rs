// src/domain/article/entity.rs
use crate::domain::article::validation::{self, ValidationError};
use crate::domain::article::value_objects::{ArticleId, ArticleKey, ArticleTitle, SectionId};
use chrono::{DateTime, Utc};

/// An article under construction: no identity assigned yet, title not yet
/// validated. The section collection is private so that only the draft itself
/// can mutate it.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    key: ArticleKey,
    title: String,
    sections: Vec<SectionDraft>,
    created_at: DateTime<Utc>,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            key: ArticleKey::generate(),
            title: title.into(),
            sections: Vec::new(),
            created_at,
        }
    }

    pub fn key(&self) -> ArticleKey {
        self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[SectionDraft] {
        &self.sections
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attach a section, re-parenting it to this draft. A section built
    /// against another owner ends up referencing this one, matching the
    /// semantics of explicitly supplying a pre-built section.
    pub fn attach_section(&mut self, mut section: SectionDraft) {
        section.article = self.key;
        self.sections.push(section);
    }

    pub fn attach_sections(&mut self, sections: impl IntoIterator<Item = SectionDraft>) {
        for section in sections {
            self.attach_section(section);
        }
    }
}

/// A section exists only in the context of an article: every construction
/// path supplies an owner. The back-reference is a key, not ownership.
#[derive(Debug, Clone)]
pub struct SectionDraft {
    article: ArticleKey,
}

impl SectionDraft {
    pub fn new(owner: &ArticleDraft) -> Self {
        Self { article: owner.key() }
    }

    pub fn article(&self) -> ArticleKey {
        self.article
    }
}

/// An article that has passed validation and is ready to persist. Only
/// producible through `ValidatedArticle::new`, which makes "validated before
/// persisted" a compile-time guarantee rather than a runtime convention.
#[derive(Debug, Clone)]
pub struct ValidatedArticle {
    key: ArticleKey,
    title: ArticleTitle,
    sections: Vec<SectionDraft>,
    created_at: DateTime<Utc>,
}

impl ValidatedArticle {
    pub fn new(draft: ArticleDraft) -> Result<Self, ValidationError> {
        validation::validate(&draft)?;
        let ArticleDraft {
            key,
            title,
            sections,
            created_at,
        } = draft;
        // validate already established the title is non-blank
        let title = ArticleTitle::new(title)?;
        Ok(Self {
            key,
            title,
            sections,
            created_at,
        })
    }

    pub fn key(&self) -> ArticleKey {
        self.key
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn sections(&self) -> &[SectionDraft] {
        &self.sections
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Persisted view of the aggregate, as returned by the persistence boundary.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub sections: Vec<Section>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: SectionId,
    pub article_id: ArticleId,
    pub created_at: DateTime<Utc>,
}
