//! Preview callback that logs each live score.

use ecoarchitect_core::PreviewCallback;
use ecoarchitect_types::ScoreBreakdown;
use tracing::info;

/// Logs the overall score whenever it changes, plus every stakeholder at
/// debug level.
#[derive(Debug, Default)]
pub struct LogPreview {
    last_overall: Option<u32>,
}

impl LogPreview {
    /// A callback that has not logged anything yet.
    pub const fn new() -> Self {
        Self { last_overall: None }
    }
}

impl PreviewCallback for LogPreview {
    fn on_preview(&mut self, breakdown: &ScoreBreakdown, seconds_remaining: u32) {
        if self.last_overall == Some(breakdown.overall_score) {
            return;
        }
        self.last_overall = Some(breakdown.overall_score);
        info!(
            overall = breakdown.overall_score,
            passed = breakdown.passed,
            stars = breakdown.stars,
            seconds_remaining,
            "Live score changed"
        );
        for stakeholder in &breakdown.stakeholder_scores {
            tracing::debug!(
                stakeholder = %stakeholder.id,
                score = stakeholder.score,
                target = stakeholder.target_percent,
                band = ?stakeholder.band,
                "Stakeholder preview"
            );
        }
    }
}
