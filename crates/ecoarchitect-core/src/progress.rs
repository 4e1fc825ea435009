//! Player progress: applying results and best-effort persistence.
//!
//! The session treats persistence as optional. A [`ProgressStore`] reports
//! failures as [`ProgressError`]; the session logs them and carries on.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use ecoarchitect_types::{PlayerProgress, ScoreBreakdown};

/// Errors from a progress store.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Reading or writing the progress file failed.
    #[error("progress I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The stored progress could not be encoded or decoded.
    #[error("malformed progress data: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// A shared in-memory store was poisoned by a panicking writer.
    #[error("progress store lock poisoned")]
    Poisoned,
}

/// How reputation grows on a first completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReputationRule {
    /// Points added the first time a scenario is passed.
    pub increment: u32,
    /// Reputation never exceeds this.
    pub cap: u32,
}

impl Default for ReputationRule {
    fn default() -> Self {
        Self {
            increment: 5,
            cap: 100,
        }
    }
}

/// What [`apply_result`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// The scenario was passed for the first time.
    pub first_completion: bool,
    /// The overall score beat the stored best.
    pub new_best: bool,
}

/// Fold one scored submission into the player's progress.
///
/// A pass on a scenario not yet completed records it and adds the
/// reputation increment (capped). The best score is replaced only by a
/// strictly higher overall score, whether or not the attempt passed.
pub fn apply_result(
    progress: &mut PlayerProgress,
    scenario_id: &str,
    breakdown: &ScoreBreakdown,
    rule: ReputationRule,
) -> ProgressUpdate {
    let mut update = ProgressUpdate::default();

    if breakdown.passed && !progress.has_completed(scenario_id) {
        progress.completed_scenarios.push(scenario_id.to_owned());
        progress.reputation = progress
            .reputation
            .saturating_add(rule.increment)
            .min(rule.cap);
        update.first_completion = true;
    }

    if breakdown.overall_score > progress.best_score(scenario_id) {
        progress
            .best_scores
            .insert(scenario_id.to_owned(), breakdown.overall_score);
        update.new_best = true;
    }

    update
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// Durable home for [`PlayerProgress`].
pub trait ProgressStore: Send {
    /// Read the stored progress. Nothing stored yet yields the default.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError`] if the store exists but cannot be read.
    fn load(&self) -> Result<PlayerProgress, ProgressError>;

    /// Replace the stored progress.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError`] if the write fails.
    fn save(&mut self, progress: &PlayerProgress) -> Result<(), ProgressError>;
}

/// Progress kept as a camelCase JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<PlayerProgress, ProgressError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(PlayerProgress::default()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&mut self, progress: &PlayerProgress) -> Result<(), ProgressError> {
        let json = serde_json::to_string_pretty(progress)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Progress held in memory.
///
/// Clones share the same slot, so a test can keep a handle while the
/// session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<PlayerProgress>>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `progress`.
    pub fn with_progress(progress: PlayerProgress) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(progress))),
        }
    }

    /// The last saved progress, if any.
    pub fn saved(&self) -> Option<PlayerProgress> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<PlayerProgress, ProgressError> {
        let slot = self.slot.lock().map_err(|_poisoned| ProgressError::Poisoned)?;
        Ok(slot.clone().unwrap_or_default())
    }

    fn save(&mut self, progress: &PlayerProgress) -> Result<(), ProgressError> {
        let mut slot = self.slot.lock().map_err(|_poisoned| ProgressError::Poisoned)?;
        *slot = Some(progress.clone());
        Ok(())
    }
}

/// Discards everything; always loads the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl ProgressStore for NullStore {
    fn load(&self) -> Result<PlayerProgress, ProgressError> {
        Ok(PlayerProgress::default())
    }

    fn save(&mut self, _progress: &PlayerProgress) -> Result<(), ProgressError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ecoarchitect_types::DEFAULT_REPUTATION;

    use super::*;

    fn breakdown(overall: u32, passed: bool) -> ScoreBreakdown {
        ScoreBreakdown {
            overall_score: overall,
            passed,
            ..ScoreBreakdown::default()
        }
    }

    fn scratch_file(name: &str) -> PathBuf {
        let unique = format!("ecoarchitect_{name}_{}", uuid::Uuid::new_v4());
        std::env::temp_dir().join(unique)
    }

    #[test]
    fn first_pass_adds_reputation_once() {
        let mut progress = PlayerProgress::default();
        let rule = ReputationRule::default();

        let first = apply_result(&mut progress, "scenario-1", &breakdown(86, true), rule);
        assert!(first.first_completion);
        assert_eq!(progress.reputation, DEFAULT_REPUTATION.saturating_add(5));

        let again = apply_result(&mut progress, "scenario-1", &breakdown(90, true), rule);
        assert!(!again.first_completion);
        assert!(again.new_best);
        assert_eq!(progress.reputation, DEFAULT_REPUTATION.saturating_add(5));
        assert_eq!(progress.completed_scenarios, vec!["scenario-1".to_owned()]);
        assert_eq!(progress.best_score("scenario-1"), 90);
    }

    #[test]
    fn reputation_is_capped() {
        let mut progress = PlayerProgress {
            reputation: 98,
            ..PlayerProgress::default()
        };
        apply_result(
            &mut progress,
            "scenario-2",
            &breakdown(75, true),
            ReputationRule::default(),
        );
        assert_eq!(progress.reputation, 100);
    }

    #[test]
    fn failed_attempt_still_sets_best() {
        let mut progress = PlayerProgress::default();
        let update = apply_result(
            &mut progress,
            "scenario-1",
            &breakdown(44, false),
            ReputationRule::default(),
        );
        assert_eq!(
            update,
            ProgressUpdate {
                first_completion: false,
                new_best: true
            }
        );
        assert!(!progress.has_completed("scenario-1"));
        assert_eq!(progress.best_score("scenario-1"), 44);
    }

    #[test]
    fn best_score_needs_strict_improvement() {
        let mut progress = PlayerProgress::default();
        let zero = apply_result(
            &mut progress,
            "scenario-1",
            &breakdown(0, false),
            ReputationRule::default(),
        );
        assert!(!zero.new_best);
        assert!(progress.best_scores.is_empty());

        progress.best_scores.insert("scenario-1".to_owned(), 80);
        let tie = apply_result(
            &mut progress,
            "scenario-1",
            &breakdown(80, true),
            ReputationRule::default(),
        );
        assert!(!tie.new_best);
    }

    #[test]
    fn json_store_round_trips_camel_case() {
        let path = scratch_file("progress.json");
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), PlayerProgress::default());

        let mut progress = PlayerProgress::default();
        progress.completed_scenarios.push("scenario-1".to_owned());
        progress.best_scores.insert("scenario-1".to_owned(), 86);
        store.save(&progress).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("completedScenarios"));
        assert!(raw.contains("bestScores"));
        assert_eq!(store.load().unwrap(), progress);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn legacy_keys_are_ignored() {
        let path = scratch_file("legacy.json");
        std::fs::write(
            &path,
            r#"{"reputation":55,"completedScenarios":["scenario-1"],"achievements":[],"totalCreditsEarned":0,"bestScores":{"scenario-1":72}}"#,
        )
        .unwrap();
        let progress = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(progress.reputation, 55);
        assert_eq!(progress.best_score("scenario-1"), 72);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_file("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ProgressError::Json { .. }));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn memory_store_handles_share_state() {
        let handle = MemoryStore::new();
        let mut owned = handle.clone();
        assert!(handle.saved().is_none());
        let progress = PlayerProgress {
            reputation: 60,
            ..PlayerProgress::default()
        };
        owned.save(&progress).unwrap();
        assert_eq!(handle.saved(), Some(progress));
    }
}
