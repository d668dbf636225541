// Layout composer: pane slots in a fixed row/column order, pixel
// realization with collapsed-strip compensation, divider rects.

use crate::config::WorkspaceConfig;
use crate::geometry::Rect;
use crate::workspace::collapse::is_pane_collapsed;
use crate::workspace::{Axis, Divider, Pane, WorkspaceLayout};

/// Thickness of a divider handle in pixels.
pub const DIVIDER_WIDTH: f32 = 2.0;

/// Default hit-test margin in pixels around a divider.
pub const HIT_TEST_MARGIN: f32 = 8.0;

/// How one pane should be rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaneSlot {
    /// Normal pane: render content at this percentage of the row.
    Expanded { size_pct: f32 },
    /// Collapsed pane: render a fixed strip with an expand affordance.
    /// The strip is reserved in pixels, outside the percentage budget.
    Collapsed { strip_px: f32 },
}

/// A pane together with its render slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposedPane {
    pub pane: Pane,
    pub slot: PaneSlot,
}

/// The full pane list for one render pass.
///
/// Ordering is fixed and stable across renders (panes never change
/// position in their row, only size) so divider hit-regions stay
/// addressable by a stable id.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedLayout {
    /// The top section as a whole.
    pub top: ComposedPane,
    /// Top-section columns, left to right.
    pub columns: [ComposedPane; 3],
    /// Height of the strip between the sections, in pixels.
    pub divider_px: f32,
    /// The bottom section as a whole.
    pub bottom: ComposedPane,
    /// Bottom-section panes, left to right.
    pub halves: [ComposedPane; 2],
}

/// A divider handle's pixel rect, addressable by its stable id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerRect {
    pub divider: Divider,
    pub axis: Axis,
    pub rect: Rect,
}

/// Compose the pane list from the current sizes and collapse policy.
pub fn compose(layout: &WorkspaceLayout, config: &WorkspaceConfig) -> ComposedLayout {
    let slot = |pane: Pane| ComposedPane {
        pane,
        slot: if is_pane_collapsed(layout, config, pane) {
            PaneSlot::Collapsed {
                strip_px: config.collapsed_strip_px,
            }
        } else {
            PaneSlot::Expanded {
                size_pct: layout.size_of(pane),
            }
        },
    };
    ComposedLayout {
        top: slot(Pane::Top),
        columns: [slot(Pane::ColumnA), slot(Pane::ColumnB), slot(Pane::ColumnC)],
        divider_px: DIVIDER_WIDTH,
        bottom: slot(Pane::Bottom),
        halves: [slot(Pane::Left), slot(Pane::Right)],
    }
}

impl ComposedLayout {
    /// The render slot for a pane.
    pub fn slot(&self, pane: Pane) -> &PaneSlot {
        match pane {
            Pane::Top => &self.top.slot,
            Pane::Bottom => &self.bottom.slot,
            Pane::ColumnA => &self.columns[0].slot,
            Pane::ColumnB => &self.columns[1].slot,
            Pane::ColumnC => &self.columns[2].slot,
            Pane::Left => &self.halves[0].slot,
            Pane::Right => &self.halves[1].slot,
        }
    }

    /// Pixel rects for the five content panes within a container.
    ///
    /// Collapsed panes take their fixed strip; expanded siblings share
    /// the remaining pixels in proportion to their percentages. This is
    /// where the strip is compensated for.
    pub fn pane_rects(&self, container: Rect) -> Vec<(Pane, Rect)> {
        let (top_rect, bottom_rect) = self.section_rects(container);
        let mut rects = Vec::with_capacity(5);

        let widths = resolve_px(
            &[&self.columns[0].slot, &self.columns[1].slot, &self.columns[2].slot],
            top_rect.width,
        );
        let mut x = top_rect.x;
        for (column, width) in self.columns.iter().zip(widths) {
            rects.push((column.pane, Rect::new(x, top_rect.y, width, top_rect.height)));
            x += width;
        }

        let widths = resolve_px(&[&self.halves[0].slot, &self.halves[1].slot], bottom_rect.width);
        let mut x = bottom_rect.x;
        for (half, width) in self.halves.iter().zip(widths) {
            rects.push((half.pane, Rect::new(x, bottom_rect.y, width, bottom_rect.height)));
            x += width;
        }

        rects
    }

    /// Pixel rects for the four divider handles. Vertical handles are
    /// centered on their pane boundary; the section handle occupies its
    /// own fixed-height strip.
    pub fn divider_rects(&self, container: Rect) -> [DividerRect; 4] {
        let (top_rect, bottom_rect) = self.section_rects(container);
        let col_widths = resolve_px(
            &[&self.columns[0].slot, &self.columns[1].slot, &self.columns[2].slot],
            top_rect.width,
        );
        let half_widths =
            resolve_px(&[&self.halves[0].slot, &self.halves[1].slot], bottom_rect.width);

        let ab_x = top_rect.x + col_widths[0];
        let bc_x = ab_x + col_widths[1];
        let lr_x = bottom_rect.x + half_widths[0];

        [
            DividerRect {
                divider: Divider::TopBottom,
                axis: Axis::Horizontal,
                rect: Rect::new(
                    container.x,
                    top_rect.y + top_rect.height,
                    container.width,
                    self.divider_px,
                ),
            },
            DividerRect {
                divider: Divider::ColumnsAB,
                axis: Axis::Vertical,
                rect: Rect::new(
                    ab_x - DIVIDER_WIDTH / 2.0,
                    top_rect.y,
                    DIVIDER_WIDTH,
                    top_rect.height,
                ),
            },
            DividerRect {
                divider: Divider::ColumnsBC,
                axis: Axis::Vertical,
                rect: Rect::new(
                    bc_x - DIVIDER_WIDTH / 2.0,
                    top_rect.y,
                    DIVIDER_WIDTH,
                    top_rect.height,
                ),
            },
            DividerRect {
                divider: Divider::LeftRight,
                axis: Axis::Vertical,
                rect: Rect::new(
                    lr_x - DIVIDER_WIDTH / 2.0,
                    bottom_rect.y,
                    DIVIDER_WIDTH,
                    bottom_rect.height,
                ),
            },
        ]
    }

    fn section_rects(&self, container: Rect) -> (Rect, Rect) {
        let heights = resolve_px(
            &[&self.top.slot, &self.bottom.slot],
            container.height - self.divider_px,
        );
        let top = Rect::new(container.x, container.y, container.width, heights[0]);
        let bottom = Rect::new(
            container.x,
            container.y + heights[0] + self.divider_px,
            container.width,
            heights[1],
        );
        (top, bottom)
    }
}

/// Distribute an extent across slots: collapsed strips take their fixed
/// pixels, expanded slots share the remainder in proportion to their
/// percentages.
fn resolve_px(slots: &[&PaneSlot], extent: f32) -> Vec<f32> {
    let strip_total: f32 = slots
        .iter()
        .map(|slot| match slot {
            PaneSlot::Collapsed { strip_px } => *strip_px,
            PaneSlot::Expanded { .. } => 0.0,
        })
        .sum();
    let pct_total: f32 = slots
        .iter()
        .map(|slot| match slot {
            PaneSlot::Expanded { size_pct } => *size_pct,
            PaneSlot::Collapsed { .. } => 0.0,
        })
        .sum();
    let remaining = (extent - strip_total).max(0.0);

    slots
        .iter()
        .map(|slot| match slot {
            PaneSlot::Collapsed { strip_px } => *strip_px,
            PaneSlot::Expanded { size_pct } => {
                if pct_total > 0.0 {
                    remaining * size_pct / pct_total
                } else {
                    0.0
                }
            }
        })
        .collect()
}

/// Hit-test a point against divider handles, returning the first within
/// margin. The margin expands the handle rect on its thin axis.
pub fn hit_test_divider(
    point: (f32, f32),
    dividers: &[DividerRect],
    margin: f32,
) -> Option<Divider> {
    let (px, py) = point;
    for d in dividers {
        let r = &d.rect;
        let expanded = match d.axis {
            Axis::Vertical => Rect::new(r.x - margin, r.y, r.width + margin * 2.0, r.height),
            Axis::Horizontal => Rect::new(r.x, r.y - margin, r.width, r.height + margin * 2.0),
        };
        if expanded.contains_point(px, py) {
            return Some(d.divider);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceConfig;

    fn setup() -> (WorkspaceLayout, WorkspaceConfig) {
        let config = WorkspaceConfig::campaign_interviews();
        (WorkspaceLayout::new(&config), config)
    }

    fn container() -> Rect {
        // 802px tall so the sections share 800px around the 2px strip.
        Rect::new(0.0, 0.0, 1000.0, 802.0)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-2,
            "expected {expected}, got {actual}"
        );
    }

    // ── Composition ─────────────────────────────────────────────────

    #[test]
    fn order_is_stable_and_fixed() {
        let (layout, config) = setup();
        let composed = compose(&layout, &config);
        assert_eq!(
            composed.columns.map(|c| c.pane),
            [Pane::ColumnA, Pane::ColumnB, Pane::ColumnC]
        );
        assert_eq!(composed.halves.map(|h| h.pane), [Pane::Left, Pane::Right]);
        assert_eq!(composed.top.pane, Pane::Top);
        assert_eq!(composed.bottom.pane, Pane::Bottom);
    }

    #[test]
    fn order_survives_resizes() {
        let (mut layout, config) = setup();
        layout.set_pane(Pane::ColumnA, 40.0, &config).unwrap();
        layout.set_pane(Pane::Left, 20.0, &config).unwrap();
        let composed = compose(&layout, &config);
        assert_eq!(
            composed.columns.map(|c| c.pane),
            [Pane::ColumnA, Pane::ColumnB, Pane::ColumnC]
        );
    }

    #[test]
    fn expanded_slots_carry_current_percentages() {
        let (layout, config) = setup();
        let composed = compose(&layout, &config);
        assert_eq!(
            *composed.slot(Pane::ColumnB),
            PaneSlot::Expanded { size_pct: 50.0 }
        );
        assert_eq!(*composed.slot(Pane::Top), PaneSlot::Expanded { size_pct: 35.0 });
    }

    #[test]
    fn collapsed_pane_becomes_a_fixed_strip() {
        let (mut layout, config) = setup();
        layout.collapse(Pane::ColumnA, &config).unwrap();
        let composed = compose(&layout, &config);
        assert_eq!(
            *composed.slot(Pane::ColumnA),
            PaneSlot::Collapsed { strip_px: 24.0 }
        );
    }

    #[test]
    fn collapse_is_reevaluated_each_compose() {
        let (mut layout, config) = setup();
        layout.collapse(Pane::Left, &config).unwrap();
        assert!(matches!(
            compose(&layout, &config).slot(Pane::Left),
            PaneSlot::Collapsed { .. }
        ));
        layout.expand(Pane::Left, 60.0, &config).unwrap();
        assert!(matches!(
            compose(&layout, &config).slot(Pane::Left),
            PaneSlot::Expanded { .. }
        ));
    }

    // ── Pixel realization ───────────────────────────────────────────

    #[test]
    fn pane_rects_fill_the_container() {
        let (layout, config) = setup();
        let rects = compose(&layout, &config).pane_rects(container());
        assert_eq!(rects.len(), 5);

        // Top section: 35% of 800 = 280px, columns 25/50/25.
        let (pane, a) = rects[0];
        assert_eq!(pane, Pane::ColumnA);
        assert_close(a.width, 250.0);
        assert_close(a.height, 280.0);
        let (_, b) = rects[1];
        assert_close(b.x, 250.0);
        assert_close(b.width, 500.0);
        let (_, c) = rects[2];
        assert_close(c.width, 250.0);

        // Bottom section starts past the divider strip.
        let (pane, left) = rects[3];
        assert_eq!(pane, Pane::Left);
        assert_close(left.y, 282.0);
        assert_close(left.height, 520.0);
        assert_close(left.width, 600.0);
        let (_, right) = rects[4];
        assert_close(right.x, 600.0);
        assert_close(right.width, 400.0);
    }

    #[test]
    fn collapsed_column_strip_is_compensated_by_siblings() {
        let (mut layout, config) = setup();
        layout.collapse(Pane::ColumnA, &config).unwrap();
        let rects = compose(&layout, &config).pane_rects(container());
        let (_, a) = rects[0];
        assert_eq!(a.width, 24.0);
        // B and C share the remaining 976px at 50:25.
        let (_, b) = rects[1];
        let (_, c) = rects[2];
        assert_close(b.width, 976.0 * 50.0 / 75.0);
        assert_close(c.width, 976.0 * 25.0 / 75.0);
        assert_close(a.width + b.width + c.width, 1000.0);
    }

    #[test]
    fn collapsed_top_section_leaves_height_to_the_bottom() {
        let (mut layout, config) = setup();
        layout.collapse(Pane::Top, &config).unwrap();
        let rects = compose(&layout, &config).pane_rects(container());
        let (_, a) = rects[0];
        assert_eq!(a.height, 24.0);
        let (_, left) = rects[3];
        assert_close(left.y, 26.0);
        assert_close(left.height, 802.0 - 24.0 - 2.0);
    }

    #[test]
    fn degenerate_container_yields_empty_rects_not_panics() {
        let (layout, config) = setup();
        let rects = compose(&layout, &config).pane_rects(Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(rects.len(), 5);
        for (_, rect) in rects {
            assert!(rect.width >= 0.0);
            assert!(rect.height >= 0.0);
        }
    }

    // ── Divider rects and hit-testing ───────────────────────────────

    #[test]
    fn divider_rects_are_stable_ids_in_order() {
        let (layout, config) = setup();
        let dividers = compose(&layout, &config).divider_rects(container());
        assert_eq!(
            dividers.map(|d| d.divider),
            [
                Divider::TopBottom,
                Divider::ColumnsAB,
                Divider::ColumnsBC,
                Divider::LeftRight
            ]
        );
    }

    #[test]
    fn section_divider_spans_the_container_width() {
        let (layout, config) = setup();
        let dividers = compose(&layout, &config).divider_rects(container());
        let d = dividers[0];
        assert_eq!(d.axis, Axis::Horizontal);
        assert_close(d.rect.y, 280.0);
        assert_eq!(d.rect.width, 1000.0);
        assert_eq!(d.rect.height, DIVIDER_WIDTH);
    }

    #[test]
    fn column_dividers_center_on_their_boundaries() {
        let (layout, config) = setup();
        let dividers = compose(&layout, &config).divider_rects(container());
        assert_close(dividers[1].rect.x, 250.0 - DIVIDER_WIDTH / 2.0);
        assert_close(dividers[2].rect.x, 750.0 - DIVIDER_WIDTH / 2.0);
        assert_close(dividers[1].rect.height, 280.0);
    }

    #[test]
    fn bottom_divider_spans_only_the_bottom_section() {
        let (layout, config) = setup();
        let dividers = compose(&layout, &config).divider_rects(container());
        let d = dividers[3];
        assert_close(d.rect.x, 600.0 - DIVIDER_WIDTH / 2.0);
        assert_close(d.rect.y, 282.0);
        assert_close(d.rect.height, 520.0);
    }

    #[test]
    fn hit_test_on_divider_returns_its_id() {
        let (layout, config) = setup();
        let dividers = compose(&layout, &config).divider_rects(container());
        let hit = hit_test_divider((500.0, 281.0), &dividers, HIT_TEST_MARGIN);
        assert_eq!(hit, Some(Divider::TopBottom));
    }

    #[test]
    fn hit_test_within_margin_returns_the_id() {
        let (layout, config) = setup();
        let dividers = compose(&layout, &config).divider_rects(container());
        // 6px left of the A|B boundary, inside the 8px margin.
        let hit = hit_test_divider((244.0, 100.0), &dividers, HIT_TEST_MARGIN);
        assert_eq!(hit, Some(Divider::ColumnsAB));
    }

    #[test]
    fn hit_test_outside_margin_misses() {
        let (layout, config) = setup();
        let dividers = compose(&layout, &config).divider_rects(container());
        let hit = hit_test_divider((200.0, 100.0), &dividers, HIT_TEST_MARGIN);
        assert_eq!(hit, None);
    }

    #[test]
    fn hit_test_beyond_divider_length_misses() {
        let (layout, config) = setup();
        let dividers = compose(&layout, &config).divider_rects(container());
        // Correct x for the bottom divider, but in the top section.
        let hit = hit_test_divider((600.0, 100.0), &dividers, 0.0);
        assert_eq!(hit, None);
    }

    #[test]
    fn hit_test_zero_margin_requires_the_handle_itself() {
        let (layout, config) = setup();
        let dividers = compose(&layout, &config).divider_rects(container());
        assert_eq!(
            hit_test_divider((250.0, 100.0), &dividers, 0.0),
            Some(Divider::ColumnsAB)
        );
        assert_eq!(hit_test_divider((246.0, 100.0), &dividers, 0.0), None);
    }
}
