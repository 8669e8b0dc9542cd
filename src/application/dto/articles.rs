use crate::domain::article::{Article, Section};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub sections: Vec<SectionDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDto {
    pub id: i64,
    pub article_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            sections: article.sections.into_iter().map(Into::into).collect(),
            created_at: article.created_at,
        }
    }
}

impl From<Section> for SectionDto {
    fn from(section: Section) -> Self {
        Self {
            id: section.id.into(),
            article_id: section.article_id.into(),
            created_at: section.created_at,
        }
    }
}
