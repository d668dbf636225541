// Workspace layout engine: named-percentage pane store and the facade
// tying the store, collapse policy, composer, and drag controller together.

pub mod collapse;
pub mod composer;
pub mod interaction;

use crate::config::WorkspaceConfig;
use crate::geometry::{self, GeometryError, Rect};
use interaction::{DragController, ListenerRegistry, PointerEffect};

/// One rectangular region of the workspace.
///
/// The top section holds three columns, the bottom section two panes.
/// `Top`, `ColumnA`, `ColumnB`, and `Left` are stored degrees of freedom;
/// `Bottom`, `ColumnC`, and `Right` are derived. `Bottom` and `Right` can
/// still be addressed through their stored complement; `ColumnC` has no
/// divider and no affordance, so it cannot be addressed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    Top,
    Bottom,
    ColumnA,
    ColumnB,
    ColumnC,
    Left,
    Right,
}

impl Pane {
    /// All panes, in the composer's stable order.
    pub const ALL: [Pane; 7] = [
        Pane::Top,
        Pane::ColumnA,
        Pane::ColumnB,
        Pane::ColumnC,
        Pane::Bottom,
        Pane::Left,
        Pane::Right,
    ];

    /// The row this pane belongs to.
    pub fn row(self) -> Row {
        match self {
            Pane::Top | Pane::Bottom => Row::Sections,
            Pane::ColumnA | Pane::ColumnB | Pane::ColumnC => Row::Columns,
            Pane::Left | Pane::Right => Row::Halves,
        }
    }
}

/// A row of sibling panes sharing one 100% budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// The three-column top section.
    Columns,
    /// The two-pane bottom section.
    Halves,
    /// The vertical top/bottom section split.
    Sections,
}

/// Axis a divider line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal divider line (resize up/down).
    Horizontal,
    /// Vertical divider line (resize left/right).
    Vertical,
}

/// A draggable boundary between two sibling panes. Four per workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Divider {
    /// The horizontal boundary between the top and bottom sections.
    TopBottom,
    /// The boundary between the first and second top-row columns.
    ColumnsAB,
    /// The boundary between the second and third top-row columns.
    ColumnsBC,
    /// The boundary between the bottom-row panes.
    LeftRight,
}

impl Divider {
    /// All dividers, in the composer's stable order.
    pub const ALL: [Divider; 4] = [
        Divider::TopBottom,
        Divider::ColumnsAB,
        Divider::ColumnsBC,
        Divider::LeftRight,
    ];

    /// The row whose budget this divider redistributes.
    pub fn row(self) -> Row {
        match self {
            Divider::TopBottom => Row::Sections,
            Divider::ColumnsAB | Divider::ColumnsBC => Row::Columns,
            Divider::LeftRight => Row::Halves,
        }
    }

    /// Direction of the divider line.
    pub fn axis(self) -> Axis {
        match self {
            Divider::TopBottom => Axis::Horizontal,
            _ => Axis::Vertical,
        }
    }

    /// The two siblings whose shared boundary this divider moves.
    pub fn affected_panes(self) -> (Pane, Pane) {
        match self {
            Divider::TopBottom => (Pane::Top, Pane::Bottom),
            Divider::ColumnsAB => (Pane::ColumnA, Pane::ColumnB),
            Divider::ColumnsBC => (Pane::ColumnB, Pane::ColumnC),
            Divider::LeftRight => (Pane::Left, Pane::Right),
        }
    }
}

/// Errors from addressing panes in the store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The pane's size is derived from its siblings and cannot be set,
    /// collapsed, or expanded directly. This is a wiring mistake in the
    /// caller, not a runtime condition.
    #[error("pane {0:?} has no stored size of its own")]
    ImplicitPane(Pane),
}

/// The named percentages for one workspace instance.
///
/// Only four values are stored; every other pane size is derived, so each
/// row's sizes sum to 100 by construction rather than by correction.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceLayout {
    top_height: f32,
    column_a: f32,
    column_b: f32,
    left_width: f32,
}

impl WorkspaceLayout {
    /// Create a layout at the config's default percentages.
    pub fn new(config: &WorkspaceConfig) -> Self {
        Self {
            top_height: config.default_top_height,
            column_a: config.default_column_a,
            column_b: config.default_column_b,
            left_width: config.default_left_width,
        }
    }

    pub fn top_height(&self) -> f32 {
        self.top_height
    }

    pub fn bottom_height(&self) -> f32 {
        100.0 - self.top_height
    }

    pub fn column_a(&self) -> f32 {
        self.column_a
    }

    pub fn column_b(&self) -> f32 {
        self.column_b
    }

    pub fn column_c(&self) -> f32 {
        100.0 - self.column_a - self.column_b
    }

    pub fn left_width(&self) -> f32 {
        self.left_width
    }

    pub fn right_width(&self) -> f32 {
        100.0 - self.left_width
    }

    /// Current size of any pane, stored or derived.
    pub fn size_of(&self, pane: Pane) -> f32 {
        match pane {
            Pane::Top => self.top_height(),
            Pane::Bottom => self.bottom_height(),
            Pane::ColumnA => self.column_a(),
            Pane::ColumnB => self.column_b(),
            Pane::ColumnC => self.column_c(),
            Pane::Left => self.left_width(),
            Pane::Right => self.right_width(),
        }
    }

    /// Set a pane's size, clamping so that no sibling in the row falls
    /// below its minimum. Returns the value actually applied, so callers
    /// can reflect the clamped size rather than the requested one.
    pub fn set_pane(
        &mut self,
        pane: Pane,
        value: f32,
        config: &WorkspaceConfig,
    ) -> Result<f32, LayoutError> {
        let min = config.min_for_row(pane.row());
        match pane {
            Pane::Top => {
                self.top_height = clamp_pct(value, min, 100.0 - min);
                Ok(self.top_height)
            }
            Pane::Bottom => {
                self.top_height = clamp_pct(100.0 - value, min, 100.0 - min);
                Ok(self.bottom_height())
            }
            Pane::ColumnA => {
                // Column B keeps its width; column C absorbs the motion,
                // so the cap reserves B plus C's minimum.
                let max = 100.0 - self.column_b - min;
                self.column_a = clamp_pct(value, min, max);
                Ok(self.column_a)
            }
            Pane::ColumnB => {
                let max = 100.0 - self.column_a - min;
                self.column_b = clamp_pct(value, min, max);
                Ok(self.column_b)
            }
            Pane::Left => {
                self.left_width = clamp_pct(value, min, 100.0 - min);
                Ok(self.left_width)
            }
            Pane::Right => {
                self.left_width = clamp_pct(100.0 - value, min, 100.0 - min);
                Ok(self.right_width())
            }
            Pane::ColumnC => Err(LayoutError::ImplicitPane(pane)),
        }
    }

    /// Drive a pane to exactly its collapse threshold. Collapse bypasses
    /// the row minimum: a sub-minimum size is only reachable here, never
    /// by dragging. Returns the pane's new size.
    pub fn collapse(&mut self, pane: Pane, config: &WorkspaceConfig) -> Result<f32, LayoutError> {
        let threshold = config.threshold_for(pane);
        match pane {
            Pane::Top => self.top_height = threshold,
            Pane::Bottom => self.top_height = 100.0 - threshold,
            Pane::ColumnA => self.column_a = threshold,
            Pane::ColumnB => self.column_b = threshold,
            Pane::Left => self.left_width = threshold,
            Pane::Right => self.left_width = 100.0 - threshold,
            Pane::ColumnC => return Err(LayoutError::ImplicitPane(pane)),
        }
        Ok(self.size_of(pane))
    }

    /// Restore a pane to a caller-supplied remembered size.
    ///
    /// In the three-column row this is a dual reset: the sibling column
    /// returns to its configured default at the same time. The row stores
    /// only two of its three widths, so restoring one column against a
    /// collapsed sibling could drive the derived third column negative;
    /// resetting both named widths together keeps the derivation valid.
    pub fn expand(
        &mut self,
        pane: Pane,
        restore_value: f32,
        config: &WorkspaceConfig,
    ) -> Result<f32, LayoutError> {
        match pane {
            Pane::ColumnA => {
                self.column_b = config.default_column_b;
                self.set_pane(Pane::ColumnA, restore_value, config)
            }
            Pane::ColumnB => {
                self.column_a = config.default_column_a;
                self.set_pane(Pane::ColumnB, restore_value, config)
            }
            _ => self.set_pane(pane, restore_value, config),
        }
    }
}

/// Clamp with the lower bound winning if the bounds cross.
fn clamp_pct(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// One workspace instance: config, pane sizes, and divider interaction.
///
/// Host integration: forward pointer-down events on divider hit-regions
/// to [`on_pointer_down`]. While [`ListenerRegistry::is_attached`]
/// reports listeners attached, forward document-level pointer-move and
/// pointer-up events to [`on_pointer_move`] / [`on_pointer_up`] no matter
/// what element the pointer is over.
///
/// [`on_pointer_down`]: Workspace::on_pointer_down
/// [`on_pointer_move`]: Workspace::on_pointer_move
/// [`on_pointer_up`]: Workspace::on_pointer_up
pub struct Workspace {
    config: WorkspaceConfig,
    layout: WorkspaceLayout,
    controller: DragController,
}

impl Workspace {
    /// Create a workspace at the config's default sizes.
    pub fn new(config: WorkspaceConfig) -> Self {
        let layout = WorkspaceLayout::new(&config);
        Self {
            config,
            layout,
            controller: DragController::new(),
        }
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn layout(&self) -> &WorkspaceLayout {
        &self.layout
    }

    /// Handle to the document-listener registry. The handle stays valid
    /// after the workspace is torn down, so hosts can verify detachment.
    pub fn listener_registry(&self) -> ListenerRegistry {
        self.controller.registry().clone()
    }

    /// Whether a divider drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.controller.dragging().is_some()
    }

    /// Compose the current pane list for rendering.
    pub fn compose(&self) -> composer::ComposedLayout {
        composer::compose(&self.layout, &self.config)
    }

    /// Pointer-down on a divider's hit-region. Starts a drag and attaches
    /// the document-level listeners. Returns false if another divider is
    /// already dragging; the press is dropped, not queued.
    pub fn on_pointer_down(&mut self, divider: Divider) -> bool {
        self.controller.begin_drag(divider)
    }

    /// Pointer-move anywhere in the document.
    ///
    /// While dragging, converts the pointer position into a percentage of
    /// the container's relevant axis and writes it through the store; the
    /// effect reports the clamped value actually applied. A degenerate
    /// container skips the frame. While idle, tracks divider hover so the
    /// host can swap the resize cursor.
    pub fn on_pointer_move(&mut self, pointer: (f32, f32), container: Rect) -> PointerEffect {
        let Some(divider) = self.controller.dragging() else {
            return self.hover(pointer, container);
        };

        let (coord, origin, extent) = match divider.axis() {
            Axis::Vertical => (pointer.0, container.x, container.width),
            Axis::Horizontal => (pointer.1, container.y, container.height),
        };
        let pct = match geometry::axis_pct(coord, origin, extent) {
            Ok(pct) => pct,
            Err(GeometryError::DegenerateContainer { extent }) => {
                log::debug!("skipping drag frame, degenerate container extent {extent}");
                return PointerEffect::None;
            }
        };

        // The first column-row divider moves column A's boundary; the
        // second sits past column A, so its pointer percentage converts
        // to a column B width by subtracting A.
        let (pane, value) = match divider {
            Divider::TopBottom => (Pane::Top, pct),
            Divider::ColumnsAB => (Pane::ColumnA, pct),
            Divider::ColumnsBC => (Pane::ColumnB, pct - self.layout.column_a()),
            Divider::LeftRight => (Pane::Left, pct),
        };
        match self.layout.set_pane(pane, value, &self.config) {
            Ok(applied) => PointerEffect::Resized {
                pane,
                applied_pct: applied,
            },
            // Unreachable: every divider maps to a stored pane.
            Err(_) => PointerEffect::None,
        }
    }

    /// Pointer-up anywhere in the document. Ends the drag and detaches
    /// the document-level listeners.
    pub fn on_pointer_up(&mut self) -> PointerEffect {
        self.controller.end_drag()
    }

    /// Collapse a pane to its threshold via its affordance.
    pub fn collapse_pane(&mut self, pane: Pane) -> Result<f32, LayoutError> {
        self.layout.collapse(pane, &self.config)
    }

    /// Expand a pane via its affordance. `restore_value` is the caller's
    /// remembered size; `None` restores the configured default.
    pub fn expand_pane(&mut self, pane: Pane, restore_value: Option<f32>) -> Result<f32, LayoutError> {
        let restore = match restore_value {
            Some(v) => v,
            None => self.default_for(pane)?,
        };
        self.layout.expand(pane, restore, &self.config)
    }

    /// Set a pane's size directly (clamped). Returns the applied value.
    pub fn set_pane(&mut self, pane: Pane, value: f32) -> Result<f32, LayoutError> {
        self.layout.set_pane(pane, value, &self.config)
    }

    fn default_for(&self, pane: Pane) -> Result<f32, LayoutError> {
        match pane {
            Pane::Top => Ok(self.config.default_top_height),
            Pane::Bottom => Ok(100.0 - self.config.default_top_height),
            Pane::ColumnA => Ok(self.config.default_column_a),
            Pane::ColumnB => Ok(self.config.default_column_b),
            Pane::Left => Ok(self.config.default_left_width),
            Pane::Right => Ok(100.0 - self.config.default_left_width),
            Pane::ColumnC => Err(LayoutError::ImplicitPane(pane)),
        }
    }

    fn hover(&mut self, pointer: (f32, f32), container: Rect) -> PointerEffect {
        let composed = self.compose();
        let dividers = composed.divider_rects(container);
        let hit = composer::hit_test_divider(pointer, &dividers, composer::HIT_TEST_MARGIN);
        self.controller.hover(hit)
    }
}
