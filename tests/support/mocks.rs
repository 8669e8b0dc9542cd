// tests/support/mocks.rs
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use folio_core::application::commands::articles::ArticleCommandService;
use folio_core::application::ports::time::Clock;
use folio_core::domain::article::{
    Article, ArticleId, ArticleRepository, Section, SectionId, ValidatedArticle,
};
use folio_core::domain::errors::{DomainError, DomainResult};

/// Route tracing output through the test harness. Safe to call from every
/// test; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic timestamp for tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/* -------------------------------- InMemoryArticleRepository -------------------------------- */

#[derive(Default)]
struct Store {
    next_article_id: i64,
    next_section_id: i64,
    articles: Vec<Article>,
}

/// Assigns sequential ids and keeps saved aggregates so tests can inspect
/// counts, mirroring the observation surface of the real adapter.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    inner: Mutex<Store>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_articles(&self) -> Vec<Article> {
        self.inner.lock().unwrap().articles.clone()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn save(&self, article: ValidatedArticle) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();

        store.next_article_id += 1;
        let article_id = ArticleId::new(store.next_article_id)?;

        let mut sections = Vec::with_capacity(article.sections().len());
        for _ in article.sections() {
            store.next_section_id += 1;
            sections.push(Section {
                id: SectionId::new(store.next_section_id)?,
                article_id,
                created_at: article.created_at(),
            });
        }

        let saved = Article {
            id: article_id,
            title: article.title().clone(),
            sections,
            created_at: article.created_at(),
        };
        store.articles.push(saved.clone());
        Ok(saved)
    }

    async fn article_count(&self) -> DomainResult<u64> {
        let store = self.inner.lock().unwrap();
        Ok(store.articles.len() as u64)
    }

    async fn section_count(&self) -> DomainResult<u64> {
        let store = self.inner.lock().unwrap();
        Ok(store.articles.iter().map(|a| a.sections.len() as u64).sum())
    }
}

/* -------------------------------- FailingArticleRepository -------------------------------- */

/// Rejects every save, standing in for a persistence boundary failure. The
/// error message must surface to the caller unchanged.
pub struct FailingArticleRepository;

#[async_trait]
impl ArticleRepository for FailingArticleRepository {
    async fn save(&self, _article: ValidatedArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("connection reset by peer".into()))
    }

    async fn article_count(&self) -> DomainResult<u64> {
        Ok(0)
    }

    async fn section_count(&self) -> DomainResult<u64> {
        Ok(0)
    }
}

/* -------------------------------- service wiring -------------------------------- */

pub fn service_with(repository: Arc<dyn ArticleRepository>) -> ArticleCommandService {
    ArticleCommandService::new(repository, Arc::new(FixedClock))
}
