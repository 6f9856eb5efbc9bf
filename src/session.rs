//! Assessment Session Log
//!
//! In-memory record of the assessments produced during a presentation
//! session. This is the presentation layer's "last assessment" memory —
//! the classifier itself is stateless and never touches it. Nothing here
//! is persisted; the log dies with the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::RiskAssessment;

/// One logged assessment with the moment it was produced.
///
/// The timestamp is stamped here, outside the classifier, so the core
/// stays deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedAssessment {
    pub assessment: RiskAssessment,
    pub timestamp: DateTime<Utc>,
}

/// Session-scoped assessment history, newest entries last.
#[derive(Debug, Clone, Default)]
pub struct AssessmentLog {
    entries: Vec<SavedAssessment>,
}

impl AssessmentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assessment, stamping it with the current time.
    pub fn record(&mut self, assessment: RiskAssessment) -> &SavedAssessment {
        self.entries.push(SavedAssessment {
            assessment,
            timestamp: Utc::now(),
        });
        match self.entries.last() {
            Some(entry) => entry,
            None => unreachable!("entry was just pushed"),
        }
    }

    /// The most recently recorded assessment, if any.
    pub fn last(&self) -> Option<&SavedAssessment> {
        self.entries.last()
    }

    /// The most recent `limit` assessments, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&SavedAssessment> {
        self.entries.iter().rev().take(limit).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all recorded assessments (the "reset assessment" action).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
