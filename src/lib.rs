//! Split-pane workspace layout engine.
//!
//! Partitions a rectangular viewport into a two-level hierarchy of
//! resizable, collapsible panes: a top section split into three columns
//! and a bottom section split into two, with draggable dividers between
//! siblings and between the sections. Sizes are stored as percentages;
//! each row stores one fewer value than it has panes, so row sums hold by
//! construction. Pane content is opaque to the engine; the host render
//! tree draws whatever it likes inside the rectangles it is given.

pub mod config;
pub mod geometry;
pub mod workspace;

pub use config::{ConfigError, WorkspaceConfig};
pub use geometry::{GeometryError, Rect};
pub use workspace::composer::{ComposedLayout, DividerRect, PaneSlot};
pub use workspace::interaction::{CursorKind, ListenerRegistry, PointerEffect};
pub use workspace::{Axis, Divider, LayoutError, Pane, Row, Workspace, WorkspaceLayout};
