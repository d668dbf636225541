// Collapse policy: collapse is derived from current size, never stored.

use crate::config::WorkspaceConfig;
use crate::workspace::{Pane, WorkspaceLayout};

/// A pane is collapsed when its size is at or below the threshold.
pub fn is_collapsed(size_pct: f32, threshold_pct: f32) -> bool {
    size_pct <= threshold_pct
}

/// Collapse state of a pane under the config's thresholds.
///
/// Deriving this per call (instead of storing a flag) means the size and
/// the collapse state can never disagree.
pub fn is_pane_collapsed(layout: &WorkspaceLayout, config: &WorkspaceConfig, pane: Pane) -> bool {
    is_collapsed(layout.size_of(pane), config.threshold_for(pane))
}
