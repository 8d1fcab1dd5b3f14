//! Overlay text for the run lifecycle
//!
//! The overlay collaborator shows a title, a body line, and a button label
//! for every non-running phase. Kept DOM-free so it can be tested directly.

use crate::sim::{RunPhase, RunState};

/// Strings for the lifecycle overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayText {
    pub title: String,
    pub body: String,
    pub button: String,
}

/// Overlay content for the current phase; `None` while a run is active
pub fn overlay_for(state: &RunState) -> Option<OverlayText> {
    match state.phase {
        RunPhase::Running => None,
        RunPhase::Idle => Some(OverlayText {
            title: "Lane Rush".to_string(),
            body: "Drag or use the arrow keys to switch lanes. Grab green upgrades, dodge red blocks, and make it to the finish line.".to_string(),
            button: "Start Run".to_string(),
        }),
        RunPhase::Finished => Some(OverlayText {
            title: "Finish Line!".to_string(),
            body: format!(
                "You banked {} coins. Strength x{:.1} boosts rewards.",
                state.reward.unwrap_or(0),
                state.strength
            ),
            button: "Run Again".to_string(),
        }),
        RunPhase::Failed => Some(OverlayText {
            title: "Run Failed".to_string(),
            body: "Your strength dropped to zero. Grab more upgrades next time!".to_string(),
            button: "Try Again".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::RunState;

    #[test]
    fn test_running_has_no_overlay() {
        let mut state = RunState::new(5);
        state.begin_run();
        assert!(overlay_for(&state).is_none());
    }

    #[test]
    fn test_idle_overlay_invites_a_start() {
        let state = RunState::new(5);
        let overlay = overlay_for(&state).expect("idle overlay");
        assert_eq!(overlay.button, "Start Run");
    }

    #[test]
    fn test_finished_overlay_reports_banked_reward() {
        let mut state = RunState::new(5);
        state.begin_run();
        state.phase = crate::sim::RunPhase::Finished;
        state.reward = Some(50);
        let overlay = overlay_for(&state).expect("finish overlay");
        assert_eq!(overlay.title, "Finish Line!");
        assert!(overlay.body.contains("50"));
        assert_eq!(overlay.button, "Run Again");
    }

    #[test]
    fn test_failed_overlay_offers_retry() {
        let mut state = RunState::new(5);
        state.begin_run();
        state.phase = crate::sim::RunPhase::Failed;
        let overlay = overlay_for(&state).expect("fail overlay");
        assert_eq!(overlay.title, "Run Failed");
        assert_eq!(overlay.button, "Try Again");
    }
}
