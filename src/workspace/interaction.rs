// Divider drag state machine and document-listener lifecycle.

use std::cell::Cell;
use std::rc::Rc;

use crate::workspace::{Axis, Divider, Pane};

/// Cursor types needed for divider interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    Default,
    EwResize,
    NsResize,
}

/// Effects the host should apply after forwarding a pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEffect {
    /// No visible effect.
    None,
    /// Change the mouse cursor icon.
    SetCursor(CursorKind),
    /// A pane was resized; `applied_pct` is the clamped value actually
    /// written, which may differ from what the pointer requested.
    Resized { pane: Pane, applied_pct: f32 },
}

/// Count of document-level pointer listeners the host should currently
/// have attached for this workspace.
///
/// Handles are cheap clones sharing one counter; the engine increments
/// on drag start and decrements when the drag's listener guard is
/// released, on pointer-up or on teardown mid-drag. While
/// [`is_attached`] is true the host must deliver pointer-move and
/// pointer-up events from the whole document, not just the divider's
/// hit-region.
///
/// [`is_attached`]: ListenerRegistry::is_attached
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    active: Rc<Cell<usize>>,
}

impl ListenerRegistry {
    /// Number of attached document-level listener sets.
    pub fn attached(&self) -> usize {
        self.active.get()
    }

    /// Whether any document-level listeners are attached.
    pub fn is_attached(&self) -> bool {
        self.active.get() > 0
    }

    fn acquire(&self) -> ListenerGuard {
        self.active.set(self.active.get() + 1);
        ListenerGuard {
            active: Rc::clone(&self.active),
        }
    }
}

/// Scoped listener attachment. Dropping the guard detaches, so every
/// exit path from a drag (pointer-up, forced teardown, a workspace
/// dropped mid-drag) releases the listeners.
#[derive(Debug)]
struct ListenerGuard {
    active: Rc<Cell<usize>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
    }
}

/// The current state of pointer interaction with the dividers.
#[derive(Debug)]
enum DragState {
    /// No interaction in progress.
    Idle,
    /// Pointer is over a divider's hit-region.
    Hovering { divider: Divider },
    /// A divider is being dragged; the guard holds the document-level
    /// listener attachment for the duration.
    Dragging {
        divider: Divider,
        _guard: ListenerGuard,
    },
}

/// State machine managing divider drags for one workspace.
///
/// At most one divider drags at a time; a pointer-down while another
/// divider is dragging is dropped, not queued.
pub struct DragController {
    state: DragState,
    registry: ListenerRegistry,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            registry: ListenerRegistry::default(),
        }
    }

    /// The registry hosts use to observe listener attachment.
    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    /// The divider currently being dragged, if any.
    pub fn dragging(&self) -> Option<Divider> {
        match &self.state {
            DragState::Dragging { divider, .. } => Some(*divider),
            _ => None,
        }
    }

    /// The divider currently hovered, if any.
    pub fn hovered(&self) -> Option<Divider> {
        match &self.state {
            DragState::Hovering { divider } => Some(*divider),
            _ => None,
        }
    }

    /// Update hover state from a hit-test result. Ignored while
    /// dragging; the cursor stays a resize cursor for the whole drag.
    pub fn hover(&mut self, over: Option<Divider>) -> PointerEffect {
        match (&self.state, over) {
            (DragState::Dragging { .. }, _) => PointerEffect::None,
            (DragState::Hovering { divider }, Some(d)) if *divider == d => PointerEffect::None,
            (_, Some(d)) => {
                self.state = DragState::Hovering { divider: d };
                PointerEffect::SetCursor(resize_cursor(d.axis()))
            }
            (DragState::Hovering { .. }, None) => {
                self.state = DragState::Idle;
                PointerEffect::SetCursor(CursorKind::Default)
            }
            (DragState::Idle, None) => PointerEffect::None,
        }
    }

    /// Pointer-down on a divider's hit-region. Attaches the document
    /// listeners and enters `Dragging`. Returns false if another divider
    /// is already dragging.
    pub fn begin_drag(&mut self, divider: Divider) -> bool {
        if let DragState::Dragging { divider: active, .. } = &self.state {
            log::debug!("pointer-down on {divider:?} dropped, {active:?} is dragging");
            return false;
        }
        log::debug!("drag start on {divider:?}");
        self.state = DragState::Dragging {
            divider,
            _guard: self.registry.acquire(),
        };
        true
    }

    /// Pointer-up anywhere in the document. Releases the listener guard
    /// and returns to `Idle`.
    pub fn end_drag(&mut self) -> PointerEffect {
        match &self.state {
            DragState::Dragging { divider, .. } => {
                log::debug!("drag end on {divider:?}");
                self.state = DragState::Idle;
                PointerEffect::SetCursor(CursorKind::Default)
            }
            _ => PointerEffect::None,
        }
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

fn resize_cursor(axis: Axis) -> CursorKind {
    match axis {
        Axis::Vertical => CursorKind::EwResize,
        Axis::Horizontal => CursorKind::NsResize,
    }
}
