// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

//! Orchestration of local graph state, pointer interaction, and server sync.
//!
//! The flow for every mutation follows the same shape: creates and deletes
//! call the server first and apply locally only on success; position drags
//! are optimistic (the map follows the pointer) and persist once on release,
//! rolling back to the drag origin if that single save fails. Every failure
//! surfaces a [`Notice`] for the shell's toast area in addition to the
//! returned error; nothing is retried automatically.
//!
//! Saves for one node cannot overlap: all mutation methods take `&mut self`,
//! so a second save is only issued after the previous response was applied.
//! Last write wins.

use std::fmt;

use tracing::warn;

use crate::interact::{ClickAction, DragController, DragError, DragOutcome, EdgeCreationMode};
use crate::model::{EdgeId, MapFile, MindMap, NodeId, Point};
use crate::remote::{MindmapApi, RemoteError};
use crate::store::{GraphStore, NodePatch, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A user-facing message for the shell's non-blocking toast area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// What a node click resolved to, given the current edge-creation mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Plain selection; the shell opens its edit panel for this node.
    OpenEditPanel(NodeId),
    /// Edge mode consumed the click as the source selection.
    SourceSelected,
    /// Edge mode completed a pair and the edge was created.
    EdgeCreated(EdgeId),
    /// The click had no effect (e.g. repeated source while in edge mode).
    Ignored,
}

pub struct MindmapEditor {
    api: MindmapApi,
    store: GraphStore,
    drag: DragController,
    connect: EdgeCreationMode,
    notices: Vec<Notice>,
}

impl MindmapEditor {
    pub fn new(api: MindmapApi) -> Self {
        Self {
            api,
            store: GraphStore::default(),
            drag: DragController::default(),
            connect: EdgeCreationMode::default(),
            notices: Vec::new(),
        }
    }

    pub fn mindmap(&self) -> &MindMap {
        self.store.mindmap()
    }

    /// Pending user-facing messages, oldest first; draining clears them.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn edge_mode_active(&self) -> bool {
        self.connect.is_active()
    }

    pub fn toggle_edge_mode(&mut self) {
        self.connect.toggle();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Loads (or reloads) the whole map from the server, replacing local
    /// state. A failure leaves local state untouched so the shell can show
    /// its error view with a retry action.
    pub async fn load(&mut self) -> Result<(), EditorError> {
        let map = self.api.fetch_mindmap().await.map_err(|err| {
            warn!(error = %err, "mindmap load failed");
            EditorError::from(err)
        })?;
        self.store.replace(map);
        Ok(())
    }

    pub async fn attachable_files(&mut self) -> Result<Vec<MapFile>, EditorError> {
        match self.api.fetch_files().await {
            Ok(files) => Ok(files),
            Err(err) => Err(self.fail("Could not load the file list", err)),
        }
    }

    /// Creates a node server-side first; it appears locally only on success.
    pub async fn create_node(
        &mut self,
        title: &str,
        notes: Option<&str>,
        pos: Point,
    ) -> Result<NodeId, EditorError> {
        let (node_id, node) = match self.api.create_node(title, notes, pos).await {
            Ok(created) => created,
            Err(err) => return Err(self.fail("Could not create the node", err)),
        };
        self.store.add_node(node_id.clone(), node)?;
        Ok(node_id)
    }

    /// Saves title/notes edits; local state is updated only from the
    /// server's confirmed copy, so a failed save leaves the edit panel input
    /// intact and the map unchanged.
    pub async fn save_node_fields(
        &mut self,
        node_id: &NodeId,
        title: &str,
        notes: Option<&str>,
    ) -> Result<(), EditorError> {
        if !self.store.contains_node(node_id) {
            return Err(EditorError::Store(StoreError::NodeNotFound {
                node_id: node_id.clone(),
            }));
        }

        let (confirmed_id, confirmed) =
            match self.api.update_node_fields(node_id, title, notes).await {
                Ok(updated) => updated,
                Err(err) => return Err(self.fail("Could not save the node", err)),
            };

        self.store.update_node(
            &confirmed_id,
            NodePatch {
                title: Some(confirmed.title().to_owned()),
                notes: Some(confirmed.notes().map(str::to_owned)),
            },
        )?;
        Ok(())
    }

    /// Starts dragging `node_id` from the given pointer position.
    pub fn begin_drag(&mut self, node_id: &NodeId, pointer: Point) -> Result<(), EditorError> {
        let node_pos = self
            .store
            .node(node_id)
            .ok_or_else(|| StoreError::NodeNotFound { node_id: node_id.clone() })?
            .pos();
        self.drag.begin(node_id.clone(), pointer, node_pos)?;
        Ok(())
    }

    /// Applies a pointer-move to the dragged node, locally only. Called at
    /// display refresh frequency; never triggers a network call.
    pub fn drag_to(&mut self, pointer: Point) -> Result<(), EditorError> {
        let Some((node_id, pos)) = self.drag.pointer_move(pointer) else {
            return Ok(());
        };
        self.store.move_node(&node_id, pos)?;
        Ok(())
    }

    /// Ends the drag and persists the final position with exactly one call,
    /// however many intermediate moves happened. On failure the node snaps
    /// back to where the drag started.
    pub async fn end_drag(&mut self, pointer: Point) -> Result<(), EditorError> {
        let DragOutcome { node_id, origin, final_pos } =
            self.drag.release(pointer).ok_or(EditorError::NoActiveDrag)?;

        self.store.move_node(&node_id, final_pos)?;

        match self.api.update_node_position(&node_id, final_pos).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.store.move_node(&node_id, origin)?;
                Err(self.fail("Could not save the node position", err))
            }
        }
    }

    /// Aborts an in-progress drag and restores the node to its origin.
    pub fn cancel_drag(&mut self) -> Result<(), EditorError> {
        let Some((node_id, origin)) = self.drag.cancel() else {
            return Ok(());
        };
        self.store.move_node(&node_id, origin)?;
        Ok(())
    }

    /// Routes a node click. With edge mode off this is a plain selection;
    /// with edge mode on the click feeds the source/target state machine and
    /// may complete an edge.
    pub async fn click_node(&mut self, node_id: &NodeId) -> Result<ClickOutcome, EditorError> {
        if !self.store.contains_node(node_id) {
            return Err(EditorError::Store(StoreError::NodeNotFound {
                node_id: node_id.clone(),
            }));
        }

        if !self.connect.is_active() {
            return Ok(ClickOutcome::OpenEditPanel(node_id.clone()));
        }

        match self.connect.click(node_id.clone()) {
            ClickAction::Ignored => Ok(ClickOutcome::Ignored),
            ClickAction::SourceSelected => Ok(ClickOutcome::SourceSelected),
            ClickAction::Connect { source, target } => {
                let edge_id = self.create_edge(&source, &target, None).await?;
                Ok(ClickOutcome::EdgeCreated(edge_id))
            }
        }
    }

    /// Creates an edge server-side first; it appears locally on success.
    pub async fn create_edge(
        &mut self,
        source: &NodeId,
        target: &NodeId,
        label: Option<&str>,
    ) -> Result<EdgeId, EditorError> {
        if source == target {
            return Err(EditorError::Store(StoreError::SelfEdge { node_id: source.clone() }));
        }

        let (edge_id, edge) = match self.api.create_edge(source, target, label).await {
            Ok(created) => created,
            Err(err) => return Err(self.fail("Could not create the connection", err)),
        };
        self.store.add_edge(edge_id.clone(), edge)?;
        Ok(edge_id)
    }

    /// Deletes a node and, after server confirmation, its incident edges.
    /// Callers prompt the user for confirmation before invoking this.
    pub async fn delete_node(&mut self, node_id: &NodeId) -> Result<Vec<EdgeId>, EditorError> {
        if !self.store.contains_node(node_id) {
            return Err(EditorError::Store(StoreError::NodeNotFound {
                node_id: node_id.clone(),
            }));
        }

        if let Err(err) = self.api.delete_node(node_id).await {
            return Err(self.fail("Could not delete the node", err));
        }

        // The dragged node may be deleted out from under an active gesture
        // (e.g. via the edit panel); stray pointer events must then be
        // ignored rather than error on the vanished node.
        if self.drag.dragged_node() == Some(node_id) {
            self.drag.cancel();
        }

        let removed = self.store.remove_node(node_id)?;
        if !removed.is_empty() {
            self.push_notice(
                NoticeLevel::Info,
                format!("Removed {} linked connection(s)", removed.len()),
            );
        }
        Ok(removed)
    }

    /// Deletes an edge after server confirmation. Callers prompt the user
    /// for confirmation before invoking this.
    pub async fn delete_edge(&mut self, edge_id: &EdgeId) -> Result<(), EditorError> {
        if self.store.edge(edge_id).is_none() {
            return Err(EditorError::Store(StoreError::EdgeNotFound {
                edge_id: edge_id.clone(),
            }));
        }

        if let Err(err) = self.api.delete_edge(edge_id).await {
            return Err(self.fail("Could not delete the connection", err));
        }
        self.store.remove_edge(edge_id)?;
        Ok(())
    }

    fn fail(&mut self, context: &str, err: RemoteError) -> EditorError {
        warn!(error = %err, "{context}");
        self.push_notice(NoticeLevel::Error, format!("{context}: {err}"));
        EditorError::Remote(err)
    }

    fn push_notice(&mut self, level: NoticeLevel, message: String) {
        self.notices.push(Notice { level, message });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    Remote(RemoteError),
    Store(StoreError),
    Drag(DragError),
    NoActiveDrag,
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(err) => write!(f, "sync failed: {err}"),
            Self::Store(err) => write!(f, "local state error: {err}"),
            Self::Drag(err) => write!(f, "drag error: {err}"),
            Self::NoActiveDrag => f.write_str("no drag is active"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Remote(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Drag(err) => Some(err),
            Self::NoActiveDrag => None,
        }
    }
}

impl From<RemoteError> for EditorError {
    fn from(err: RemoteError) -> Self {
        Self::Remote(err)
    }
}

impl From<StoreError> for EditorError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<DragError> for EditorError {
    fn from(err: DragError) -> Self {
        Self::Drag(err)
    }
}
