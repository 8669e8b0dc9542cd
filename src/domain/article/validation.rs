// src/domain/article/validation.rs
use crate::domain::article::entity::ArticleDraft;
use std::collections::BTreeSet;
use thiserror::Error;

/// One broken rule per independent validation check. The checks never
/// short-circuit each other, so a caller can observe every broken rule from a
/// single `validate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationRule {
    TitleRequired,
    SectionsRequired,
}

impl ValidationRule {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TitleRequired => "title is required",
            Self::SectionsRequired => "at least one section is required",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", .rules.iter().map(|r| r.as_str()).collect::<Vec<_>>().join("; "))]
pub struct ValidationError {
    rules: BTreeSet<ValidationRule>,
}

impl ValidationError {
    pub(crate) fn single(rule: ValidationRule) -> Self {
        Self {
            rules: BTreeSet::from([rule]),
        }
    }

    pub fn rules(&self) -> &BTreeSet<ValidationRule> {
        &self.rules
    }

    pub fn contains(&self, rule: ValidationRule) -> bool {
        self.rules.contains(&rule)
    }
}

/// Validation predicate applied before persistence. A draft may transiently
/// hold zero sections in memory; only here is the at-least-one-section
/// invariant enforced.
pub fn validate(draft: &ArticleDraft) -> Result<(), ValidationError> {
    let mut rules = BTreeSet::new();

    if draft.title().trim().is_empty() {
        rules.insert(ValidationRule::TitleRequired);
    }
    if draft.sections().is_empty() {
        rules.insert(ValidationRule::SectionsRequired);
    }

    if rules.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { rules })
    }
}
