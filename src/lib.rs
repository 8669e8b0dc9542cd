//! Article/section aggregate core.
//!
//! An article owns an ordered collection of sections and may never be
//! persisted without at least one. Callers assemble aggregates through
//! [`application::commands::articles::ArticleCommandService::materialize`],
//! which synthesizes a single default section when none are supplied
//! explicitly, then hand the validated result to `persist` for an
//! all-or-nothing save.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
