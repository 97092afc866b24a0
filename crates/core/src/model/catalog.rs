use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{SubjectId, UnitId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("progress must be between 0 and 100, got {0}")]
    InvalidProgress(u8),

    #[error("unit {unit} belongs to {owner}, not {subject}")]
    ForeignUnit {
        unit: UnitId,
        owner: SubjectId,
        subject: SubjectId,
    },
}

fn check_progress(progress: u8) -> Result<u8, CatalogError> {
    if progress > 100 {
        return Err(CatalogError::InvalidProgress(progress));
    }
    Ok(progress)
}

//
// ─── UNIT ──────────────────────────────────────────────────────────────────────
//

/// Unvalidated unit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDraft {
    pub id: UnitId,
    pub subject_id: SubjectId,
    pub title: String,
    pub description: String,
    pub question_count: u32,
    pub progress: u8,
}

impl UnitDraft {
    /// # Errors
    ///
    /// Returns `CatalogError` for an empty title or progress above 100.
    pub fn validate(self) -> Result<Unit, CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle);
        }
        let progress = check_progress(self.progress)?;
        Ok(Unit {
            id: self.id,
            subject_id: self.subject_id,
            title: self.title,
            description: self.description,
            question_count: self.question_count,
            progress,
        })
    }
}

/// A syllabus subdivision within a subject.
///
/// `question_count` and `progress` are display hints from the catalog; they are
/// never derived from practice activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    id: UnitId,
    subject_id: SubjectId,
    title: String,
    description: String,
    question_count: u32,
    progress: u8,
}

impl Unit {
    #[must_use]
    pub fn id(&self) -> &UnitId {
        &self.id
    }

    #[must_use]
    pub fn subject_id(&self) -> &SubjectId {
        &self.subject_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }
}

//
// ─── SUBJECT ───────────────────────────────────────────────────────────────────
//

/// Unvalidated subject record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDraft {
    pub id: SubjectId,
    pub title: String,
    pub short_title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub progress: u8,
    pub units: Vec<UnitDraft>,
}

impl SubjectDraft {
    /// Validate the subject and every unit it owns.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for an empty title, progress above 100, or a unit
    /// that names a different subject.
    pub fn validate(self) -> Result<Subject, CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle);
        }
        let progress = check_progress(self.progress)?;

        let mut units = Vec::with_capacity(self.units.len());
        for draft in self.units {
            if draft.subject_id != self.id {
                return Err(CatalogError::ForeignUnit {
                    unit: draft.id,
                    owner: draft.subject_id,
                    subject: self.id,
                });
            }
            units.push(draft.validate()?);
        }

        let short_title = if self.short_title.trim().is_empty() {
            self.title.clone()
        } else {
            self.short_title
        };

        Ok(Subject {
            id: self.id,
            title: self.title,
            short_title,
            description: self.description,
            icon: self.icon,
            color: self.color,
            units,
            progress,
        })
    }
}

/// An AP course with its ordered units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    id: SubjectId,
    title: String,
    short_title: String,
    description: String,
    icon: String,
    color: String,
    units: Vec<Unit>,
    progress: u8,
}

impl Subject {
    #[must_use]
    pub fn id(&self) -> &SubjectId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn short_title(&self) -> &str {
        &self.short_title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    #[must_use]
    pub fn unit(&self, id: &UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id() == id)
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Sum of the per-unit question hints.
    #[must_use]
    pub fn question_count_hint(&self) -> u32 {
        self.units.iter().map(Unit::question_count).sum()
    }
}
