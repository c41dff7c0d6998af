//! Drag-and-drop event types reported by the display widget.

use serde::{Deserialize, Serialize};

/// Where a dragged node lands relative to the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropMode {
    /// Nest the moving node as the last child of the target
    Into,
    /// Make the moving node a sibling of the target at the given index
    BeforeOrAfter,
}

/// Drag-completion event as emitted by the display widget.
///
/// Row indices are visual rows (see [`crate::store::VisibleRows`]), not
/// positions in the backing sequence. `from_component` / `to_component`
/// identify the widget instances the drag started and ended in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEvent {
    pub from_index: usize,
    pub to_index: usize,
    #[serde(default)]
    pub from_component: String,
    #[serde(default)]
    pub to_component: String,
    #[serde(default)]
    pub drop_inside_item: bool,
}

impl DragEvent {
    /// Event for a drag that starts and ends inside the same widget
    pub fn within(from_index: usize, to_index: usize, drop_inside_item: bool) -> Self {
        Self {
            from_index,
            to_index,
            from_component: "treeview".to_string(),
            to_component: "treeview".to_string(),
            drop_inside_item,
        }
    }

    pub fn same_component(&self) -> bool {
        self.from_component == self.to_component
    }

    /// The drop mode this event asks for
    pub fn drop_mode(&self) -> DropMode {
        if self.drop_inside_item {
            DropMode::Into
        } else {
            DropMode::BeforeOrAfter
        }
    }

    /// Visual row of the drop target.
    ///
    /// Within one widget, a reorder dragging downwards lands below the row
    /// under the pointer, so the row index is shifted by one. Cross-widget
    /// drops and "into" drops use the raw index.
    pub fn target_row(&self) -> usize {
        if !self.same_component() || self.drop_inside_item {
            return self.to_index;
        }
        if self.from_index >= self.to_index {
            self.to_index
        } else {
            self.to_index.saturating_add(1)
        }
    }

    /// True when the drag ended where it started
    pub fn is_noop(&self) -> bool {
        self.same_component() && self.from_index == self.to_index
    }
}
