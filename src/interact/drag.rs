// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::model::{NodeId, Point};

/// Tracks an in-progress node drag: Idle -> Dragging -> Idle.
///
/// On pointer-down the offset between pointer and node origin is captured so
/// the node does not jump under the cursor. Every pointer-move yields a new
/// local position; nothing here persists anything. Pointer capture is
/// exclusive, so at most one session exists at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragController {
    session: Option<DragSession>,
}

#[derive(Debug, Clone, PartialEq)]
struct DragSession {
    node_id: NodeId,
    offset: Point,
    origin: Point,
}

/// The completed gesture: the caller persists `final_pos` with a single call
/// and falls back to `origin` if that save fails.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome {
    pub node_id: NodeId,
    pub origin: Point,
    pub final_pos: Point,
}

impl DragController {
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn dragged_node(&self) -> Option<&NodeId> {
        self.session.as_ref().map(|session| &session.node_id)
    }

    /// Starts a drag for `node_id` at its current position `node_pos`.
    pub fn begin(
        &mut self,
        node_id: NodeId,
        pointer: Point,
        node_pos: Point,
    ) -> Result<(), DragError> {
        if let Some(session) = &self.session {
            return Err(DragError::AlreadyDragging { node_id: session.node_id.clone() });
        }
        self.session = Some(DragSession {
            node_id,
            offset: pointer - node_pos,
            origin: node_pos,
        });
        Ok(())
    }

    /// Converts a pointer-move into the dragged node's new position.
    ///
    /// Returns `None` when no drag is active (stray move events are normal
    /// and ignored).
    pub fn pointer_move(&self, pointer: Point) -> Option<(NodeId, Point)> {
        let session = self.session.as_ref()?;
        Some((session.node_id.clone(), pointer - session.offset))
    }

    /// Ends the session on pointer-up, yielding the final position exactly
    /// once.
    pub fn release(&mut self, pointer: Point) -> Option<DragOutcome> {
        let session = self.session.take()?;
        Some(DragOutcome {
            final_pos: pointer - session.offset,
            node_id: session.node_id,
            origin: session.origin,
        })
    }

    /// Drops the session without a final position, e.g. on Escape; returns
    /// the origin so the caller can restore the node.
    pub fn cancel(&mut self) -> Option<(NodeId, Point)> {
        let session = self.session.take()?;
        Some((session.node_id, session.origin))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    AlreadyDragging { node_id: NodeId },
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyDragging { node_id } => {
                write!(f, "a drag is already active (node id={node_id})")
            }
        }
    }
}

impl std::error::Error for DragError {}

#[cfg(test)]
mod tests {
    use super::{DragController, DragError};
    use crate::model::{NodeId, Point};

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    #[test]
    fn drag_keeps_pointer_offset() {
        let mut drag = DragController::default();
        drag.begin(nid("n-1"), Point::new(12.0, 14.0), Point::new(10.0, 10.0))
            .expect("begin");

        // Pointer grabbed the node 2,4 inside its box; moves preserve that.
        let (node_id, pos) = drag.pointer_move(Point::new(30.0, 40.0)).expect("move");
        assert_eq!(node_id, nid("n-1"));
        assert_eq!(pos, Point::new(28.0, 36.0));
    }

    #[test]
    fn release_yields_outcome_exactly_once() {
        let mut drag = DragController::default();
        drag.begin(nid("n-1"), Point::new(12.0, 14.0), Point::new(10.0, 10.0))
            .expect("begin");

        drag.pointer_move(Point::new(20.0, 20.0));
        drag.pointer_move(Point::new(40.0, 60.0));

        let outcome = drag.release(Point::new(52.0, 84.0)).expect("outcome");
        assert_eq!(outcome.node_id, nid("n-1"));
        assert_eq!(outcome.origin, Point::new(10.0, 10.0));
        assert_eq!(outcome.final_pos, Point::new(50.0, 80.0));

        assert!(!drag.is_dragging());
        assert_eq!(drag.release(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn second_begin_is_rejected_while_dragging() {
        let mut drag = DragController::default();
        drag.begin(nid("n-1"), Point::default(), Point::default()).expect("begin");

        let result = drag.begin(nid("n-2"), Point::default(), Point::default());
        assert_eq!(result, Err(DragError::AlreadyDragging { node_id: nid("n-1") }));
        assert_eq!(drag.dragged_node(), Some(&nid("n-1")));
    }

    #[test]
    fn moves_without_a_session_are_ignored() {
        let drag = DragController::default();
        assert_eq!(drag.pointer_move(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn cancel_restores_origin() {
        let mut drag = DragController::default();
        drag.begin(nid("n-1"), Point::new(5.0, 5.0), Point::new(1.0, 2.0)).expect("begin");

        let (node_id, origin) = drag.cancel().expect("cancel");
        assert_eq!(node_id, nid("n-1"));
        assert_eq!(origin, Point::new(1.0, 2.0));
        assert!(!drag.is_dragging());
    }
}
