// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

use super::geometry::Point;
use super::ids::FileId;

/// A labeled point in the campaign mind map, positioned in 2D space.
#[derive(Debug, Clone, PartialEq)]
pub struct MapNode {
    title: String,
    notes: Option<String>,
    pos: Point,
    files: Vec<FileId>,
}

impl MapNode {
    pub fn new(title: impl Into<String>, pos: Point) -> Self {
        Self {
            title: title.into(),
            notes: None,
            pos,
            files: Vec::new(),
        }
    }

    pub fn new_with(
        title: impl Into<String>,
        notes: Option<String>,
        pos: Point,
        files: Vec<FileId>,
    ) -> Self {
        Self {
            title: title.into(),
            notes,
            pos,
            files,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn set_notes<T: Into<String>>(&mut self, notes: Option<T>) {
        self.notes = notes.map(Into::into);
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    pub fn files(&self) -> &[FileId] {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut Vec<FileId> {
        &mut self.files
    }
}

/// An entry from the campaign's attachable-file listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFile {
    file_id: FileId,
    name: String,
}

impl MapFile {
    pub fn new(file_id: FileId, name: impl Into<String>) -> Self {
        Self {
            file_id,
            name: name.into(),
        }
    }

    pub fn file_id(&self) -> &FileId {
        &self.file_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::MapNode;
    use crate::model::{FileId, Point};

    #[test]
    fn map_node_can_be_constructed_and_updated() {
        let mut node = MapNode::new("Tavern", Point::new(10.0, 20.0));
        assert_eq!(node.title(), "Tavern");
        assert_eq!(node.notes(), None);
        assert_eq!(node.pos(), Point::new(10.0, 20.0));
        assert!(node.files().is_empty());

        node.set_title("Prancing Pony");
        node.set_notes(Some("meet the contact here"));
        node.set_pos(Point::new(42.0, -3.5));
        node.files_mut().push(FileId::new("f-1").expect("file id"));

        assert_eq!(node.title(), "Prancing Pony");
        assert_eq!(node.notes(), Some("meet the contact here"));
        assert_eq!(node.pos(), Point::new(42.0, -3.5));
        assert_eq!(node.files().len(), 1);

        node.set_notes::<&str>(None);
        assert_eq!(node.notes(), None);
    }
}
