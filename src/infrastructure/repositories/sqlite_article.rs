use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleRepository, ArticleTitle, Section, SectionId, ValidatedArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct SectionRow {
    id: i64,
    article_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<SectionRow> for Section {
    type Error = DomainError;

    fn try_from(row: SectionRow) -> Result<Self, Self::Error> {
        Ok(Section {
            id: SectionId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    /// Writes the article row and all section rows inside one transaction.
    /// An error on any insert rolls the whole aggregate back.
    async fn save(&self, article: ValidatedArticle) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, created_at) VALUES (?, ?) RETURNING id, title, created_at",
        )
        .bind(article.title().as_str())
        .bind(article.created_at())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let article_id = ArticleId::new(row.id)?;

        let mut sections = Vec::with_capacity(article.sections().len());
        for _ in article.sections() {
            let section_row = sqlx::query_as::<_, SectionRow>(
                "INSERT INTO sections (article_id, created_at) VALUES (?, ?) RETURNING id, article_id, created_at",
            )
            .bind(i64::from(article_id))
            .bind(article.created_at())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
            sections.push(Section::try_from(section_row)?);
        }

        tx.commit().await.map_err(map_sqlx)?;
        tracing::debug!(article_id = row.id, sections = sections.len(), "aggregate committed");

        Ok(Article {
            id: article_id,
            title: ArticleTitle::new(row.title)?,
            sections,
            created_at: row.created_at,
        })
    }

    async fn article_count(&self) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM articles")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count as u64)
    }

    async fn section_count(&self) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM sections")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count as u64)
    }
}
