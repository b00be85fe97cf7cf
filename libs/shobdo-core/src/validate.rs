//! Id checks for parsed passages and chapters.
//!
//! Ids come straight from the source text and are never renumbered. These
//! checks only report duplicates and gaps so authors can fix the files.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Chapter, Passage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdIssue {
    /// `id` appears `count` times.
    Duplicate { id: u32, count: usize },
    /// No id between `after` and `next`.
    Gap { after: u32, next: u32 },
}

impl fmt::Display for IdIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { id, count } => write!(f, "id {} appears {} times", id, count),
            Self::Gap { after, next } => write!(f, "ids jump from {} to {}", after, next),
        }
    }
}

/// Duplicate and gap report for a list of ids, in ascending id order.
pub fn check_ids(ids: impl IntoIterator<Item = u32>) -> Vec<IdIssue> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for id in ids {
        *counts.entry(id).or_default() += 1;
    }

    let mut issues = Vec::new();
    let mut previous: Option<u32> = None;
    for (&id, &count) in &counts {
        if let Some(after) = previous {
            if id > after + 1 {
                issues.push(IdIssue::Gap { after, next: id });
            }
        }
        if count > 1 {
            issues.push(IdIssue::Duplicate { id, count });
        }
        previous = Some(id);
    }
    issues
}

pub fn passage_ids(passages: &[Passage]) -> Vec<IdIssue> {
    let issues = check_ids(passages.iter().map(|p| p.id));
    for issue in &issues {
        tracing::warn!("passage {}", issue);
    }
    issues
}

pub fn chapter_ids(chapters: &[Chapter]) -> Vec<IdIssue> {
    let issues = check_ids(chapters.iter().map(|c| c.id));
    for issue in &issues {
        tracing::warn!("grammar chapter {}", issue);
    }
    issues
}
