// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

use crate::model::NodeId;

/// Two-click edge creation: Off -> WaitingForSource -> WaitingForTarget.
///
/// Completing a pair returns to WaitingForSource so several edges can be
/// chained without re-toggling; only an explicit toggle turns the mode off.
/// While the mode is active the caller suppresses plain click-to-select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EdgeCreationMode {
    #[default]
    Off,
    WaitingForSource,
    WaitingForTarget {
        source: NodeId,
    },
}

/// What a node click meant to the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// The mode is off (or the click repeated the source); nothing to do.
    Ignored,
    /// The click picked the source; the next distinct node completes a pair.
    SourceSelected,
    /// A source/target pair is complete; the caller creates the edge.
    Connect { source: NodeId, target: NodeId },
}

impl EdgeCreationMode {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Flips the mode; any half-selected source is discarded on the way off.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Off => Self::WaitingForSource,
            Self::WaitingForSource | Self::WaitingForTarget { .. } => Self::Off,
        };
    }

    pub fn click(&mut self, node_id: NodeId) -> ClickAction {
        match std::mem::take(self) {
            Self::Off => ClickAction::Ignored,
            Self::WaitingForSource => {
                *self = Self::WaitingForTarget { source: node_id };
                ClickAction::SourceSelected
            }
            Self::WaitingForTarget { source } => {
                if source == node_id {
                    // Self-edge attempt; keep waiting for a distinct target.
                    *self = Self::WaitingForTarget { source };
                    return ClickAction::Ignored;
                }
                *self = Self::WaitingForSource;
                ClickAction::Connect { source, target: node_id }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClickAction, EdgeCreationMode};
    use crate::model::NodeId;

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    #[test]
    fn two_distinct_clicks_form_a_pair_and_mode_stays_active() {
        let mut mode = EdgeCreationMode::default();
        assert!(!mode.is_active());

        mode.toggle();
        assert!(mode.is_active());

        assert_eq!(mode.click(nid("n-a")), ClickAction::SourceSelected);
        assert_eq!(
            mode.click(nid("n-b")),
            ClickAction::Connect { source: nid("n-a"), target: nid("n-b") }
        );

        // Still armed for the next pair.
        assert_eq!(mode, EdgeCreationMode::WaitingForSource);
    }

    #[test]
    fn clicking_the_source_again_is_a_no_op() {
        let mut mode = EdgeCreationMode::default();
        mode.toggle();

        assert_eq!(mode.click(nid("n-a")), ClickAction::SourceSelected);
        assert_eq!(mode.click(nid("n-a")), ClickAction::Ignored);

        // The source selection survives the rejected self-edge.
        assert_eq!(
            mode.click(nid("n-b")),
            ClickAction::Connect { source: nid("n-a"), target: nid("n-b") }
        );
    }

    #[test]
    fn toggle_off_clears_a_pending_source() {
        let mut mode = EdgeCreationMode::default();
        mode.toggle();
        mode.click(nid("n-a"));

        mode.toggle();
        assert_eq!(mode, EdgeCreationMode::Off);

        mode.toggle();
        // A fresh activation starts from scratch.
        assert_eq!(mode.click(nid("n-b")), ClickAction::SourceSelected);
    }

    #[test]
    fn clicks_while_off_are_ignored() {
        let mut mode = EdgeCreationMode::default();
        assert_eq!(mode.click(nid("n-a")), ClickAction::Ignored);
        assert_eq!(mode, EdgeCreationMode::Off);
    }
}
