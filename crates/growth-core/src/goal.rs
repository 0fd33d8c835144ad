//! Progress/status consistency for goals.
//!
//! Two mutation paths touch a goal's completion state: a continuous progress
//! control and a completion toggle. Both are expressed as a [`GoalChange`]
//! and routed through [`reconcile`], which is the only place the
//! progress/status pairing is decided.
//!
//! Rules:
//! - progress 100 always means Completed;
//! - lowering progress on a completed goal reopens it as In Progress;
//! - nonzero progress promotes a Pending goal to In Progress;
//! - explicitly completing snaps progress to 100;
//! - explicitly reopening a completed goal without a progress value snaps
//!   progress to 50;
//! - explicitly resetting to Pending snaps progress to 0.

use crate::models::GoalStatus;

/// The completion-state portion of a goal update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalChange {
    /// Requested progress, if the update carries one.
    pub progress: Option<u8>,
    /// Requested status, if the update carries one.
    pub status: Option<GoalStatus>,
}

impl GoalChange {
    /// True when the update touches neither progress nor status.
    pub fn is_empty(&self) -> bool {
        self.progress.is_none() && self.status.is_none()
    }
}

/// Compute the consistent (progress, status) pair for a goal after a change.
///
/// `progress` and `status` are the goal's current values; `change` is the
/// requested update. Progress values above 100 are clamped. When a change
/// carries both fields, the progress value is authoritative and the status
/// is re-derived from it.
pub fn reconcile(progress: u8, status: GoalStatus, change: GoalChange) -> (u8, GoalStatus) {
    match (change.progress, change.status) {
        (Some(p), _) => {
            let p = p.min(100);
            let next = if p == 100 {
                GoalStatus::Completed
            } else if status == GoalStatus::Completed {
                // Dialing back a completed goal reopens it
                GoalStatus::InProgress
            } else if p > 0 && status == GoalStatus::Pending {
                GoalStatus::InProgress
            } else {
                status
            };
            (p, next)
        }
        (None, Some(requested)) => match requested {
            GoalStatus::Completed => (100, GoalStatus::Completed),
            GoalStatus::InProgress => {
                if status == GoalStatus::Completed {
                    // Toggle reopen: snap to the halfway mark
                    (50, GoalStatus::InProgress)
                } else {
                    (progress, GoalStatus::InProgress)
                }
            }
            GoalStatus::Pending => (0, GoalStatus::Pending),
        },
        (None, None) => (progress, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress_change(p: u8) -> GoalChange {
        GoalChange {
            progress: Some(p),
            status: None,
        }
    }

    fn status_change(s: GoalStatus) -> GoalChange {
        GoalChange {
            progress: None,
            status: Some(s),
        }
    }

    #[test]
    fn progress_100_completes() {
        let (p, s) = reconcile(40, GoalStatus::InProgress, progress_change(100));
        assert_eq!((p, s), (100, GoalStatus::Completed));
    }

    #[test]
    fn progress_100_completes_from_pending() {
        let (p, s) = reconcile(0, GoalStatus::Pending, progress_change(100));
        assert_eq!((p, s), (100, GoalStatus::Completed));
    }

    #[test]
    fn lowering_progress_reopens_completed_goal() {
        let (p, s) = reconcile(100, GoalStatus::Completed, progress_change(40));
        assert_eq!((p, s), (40, GoalStatus::InProgress));
    }

    #[test]
    fn zero_progress_on_completed_goal_reopens_it() {
        let (p, s) = reconcile(100, GoalStatus::Completed, progress_change(0));
        assert_eq!((p, s), (0, GoalStatus::InProgress));
    }

    #[test]
    fn nonzero_progress_promotes_pending() {
        let (p, s) = reconcile(0, GoalStatus::Pending, progress_change(10));
        assert_eq!((p, s), (10, GoalStatus::InProgress));
    }

    #[test]
    fn zero_progress_keeps_pending() {
        let (p, s) = reconcile(0, GoalStatus::Pending, progress_change(0));
        assert_eq!((p, s), (0, GoalStatus::Pending));
    }

    #[test]
    fn mid_progress_keeps_in_progress() {
        let (p, s) = reconcile(30, GoalStatus::InProgress, progress_change(70));
        assert_eq!((p, s), (70, GoalStatus::InProgress));
    }

    #[test]
    fn overshoot_progress_is_clamped() {
        let (p, s) = reconcile(30, GoalStatus::InProgress, progress_change(250));
        assert_eq!((p, s), (100, GoalStatus::Completed));
    }

    #[test]
    fn toggle_complete_snaps_to_100() {
        let (p, s) = reconcile(40, GoalStatus::InProgress, status_change(GoalStatus::Completed));
        assert_eq!((p, s), (100, GoalStatus::Completed));
    }

    #[test]
    fn toggle_reopen_snaps_to_50() {
        let (p, s) = reconcile(100, GoalStatus::Completed, status_change(GoalStatus::InProgress));
        assert_eq!((p, s), (50, GoalStatus::InProgress));
    }

    #[test]
    fn starting_a_pending_goal_keeps_its_progress() {
        let (p, s) = reconcile(0, GoalStatus::Pending, status_change(GoalStatus::InProgress));
        assert_eq!((p, s), (0, GoalStatus::InProgress));
    }

    #[test]
    fn reset_to_pending_zeroes_progress() {
        let (p, s) = reconcile(70, GoalStatus::InProgress, status_change(GoalStatus::Pending));
        assert_eq!((p, s), (0, GoalStatus::Pending));
    }

    #[test]
    fn joint_update_lets_progress_win() {
        let change = GoalChange {
            progress: Some(100),
            status: Some(GoalStatus::Pending),
        };
        let (p, s) = reconcile(10, GoalStatus::InProgress, change);
        assert_eq!((p, s), (100, GoalStatus::Completed));
    }

    #[test]
    fn empty_change_is_identity() {
        let change = GoalChange {
            progress: None,
            status: None,
        };
        let (p, s) = reconcile(55, GoalStatus::InProgress, change);
        assert_eq!((p, s), (55, GoalStatus::InProgress));
    }
}
