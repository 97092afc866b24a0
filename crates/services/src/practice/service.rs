use std::sync::Arc;

use ap_core::exam::ExamSession;
use ap_core::model::UnitId;
use rand::Rng;
use rand::seq::SliceRandom;
use storage::repository::{CatalogRepository, StorageError};
use tracing::{debug, info, warn};

use super::filter::DifficultyFilter;
use crate::error::PracticeError;
use crate::streak_service::StreakService;

/// Builds exam sessions from the catalog and forwards graded answers to the
/// streak tracker.
#[derive(Clone)]
pub struct PracticeService {
    catalog: Arc<dyn CatalogRepository>,
    streak: Arc<StreakService>,
}

impl PracticeService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>, streak: Arc<StreakService>) -> Self {
        Self { catalog, streak }
    }

    /// Start a session over the unit's questions that pass `filter`.
    ///
    /// # Errors
    ///
    /// - `PracticeError::UnitNotFound` for an unknown unit
    /// - `PracticeError::Empty` when no question passes the filter
    /// - `PracticeError::Storage` if repository access fails
    pub async fn start_session(
        &self,
        unit_id: &UnitId,
        filter: DifficultyFilter,
    ) -> Result<ExamSession, PracticeError> {
        let questions = match self.catalog.list_questions(unit_id).await {
            Ok(questions) => questions,
            Err(StorageError::NotFound) => {
                return Err(PracticeError::UnitNotFound(unit_id.clone()));
            }
            Err(other) => return Err(other.into()),
        };

        let selected: Vec<_> = questions.into_iter().filter(|q| filter.matches(q)).collect();
        if selected.is_empty() {
            debug!(unit = %unit_id, %filter, "no questions match");
            return Err(PracticeError::Empty(unit_id.clone()));
        }

        info!(unit = %unit_id, %filter, questions = selected.len(), "practice session started");
        Ok(ExamSession::new(selected)?)
    }

    /// A fresh session over the same questions in random order.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Exam` only if the session had no questions.
    pub fn shuffled(&self, session: &ExamSession) -> Result<ExamSession, PracticeError> {
        self.shuffled_with(session, &mut rand::rng())
    }

    /// Like `shuffled`, drawing from the given generator.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Exam` only if the session had no questions.
    pub fn shuffled_with<R: Rng + ?Sized>(
        &self,
        session: &ExamSession,
        rng: &mut R,
    ) -> Result<ExamSession, PracticeError> {
        let mut questions = session.questions().to_vec();
        questions.shuffle(rng);
        info!(questions = questions.len(), "practice session shuffled");
        Ok(ExamSession::new(questions)?)
    }

    /// Check the answer at `index` and count the day toward the streak.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Exam` when the session refuses the check; the
    /// session is then unchanged.
    pub fn check_answer(
        &self,
        session: &mut ExamSession,
        index: usize,
    ) -> Result<bool, PracticeError> {
        let correct = session.check_answer(index)?;
        debug!(index, correct, "answer checked");
        if let Err(err) = self.streak.record_study() {
            warn!(error = %err, "failed to record study day");
        }
        Ok(correct)
    }
}
