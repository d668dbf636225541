// Geometry utilities: pointer coordinates → container-axis percentages.

/// Errors from geometry computations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// The container's extent along the relevant axis is zero, negative,
    /// or not finite. The caller should skip the update for this frame.
    #[error("degenerate container extent: {extent}")]
    DegenerateContainer { extent: f32 },
}

/// A rectangle in physical pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point (px, py) is inside this rectangle.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Convert a pointer's absolute coordinate into a percentage of the
/// container's axis, clamped to [0, 100].
///
/// `origin` and `extent` describe the container along the relevant axis
/// (x/width for vertical dividers, y/height for the horizontal divider).
pub fn axis_pct(pointer: f32, origin: f32, extent: f32) -> Result<f32, GeometryError> {
    axis_pct_bounded(pointer, origin, extent, 0.0, 100.0)
}

/// Like [`axis_pct`], but clamped to caller-supplied bounds. Callers pass
/// tighter bounds to enforce minimum pane sizes at the geometry level.
pub fn axis_pct_bounded(
    pointer: f32,
    origin: f32,
    extent: f32,
    bound_min: f32,
    bound_max: f32,
) -> Result<f32, GeometryError> {
    if !(extent > 0.0) || !extent.is_finite() {
        return Err(GeometryError::DegenerateContainer { extent });
    }
    let pct = (pointer - origin) / extent * 100.0;
    // Max-then-min so the lower bound wins if the bounds ever cross.
    Ok(pct.min(bound_max).max(bound_min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ── Rect tests ────────────────────────────────────────────────────

    #[test]
    fn rect_construction() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.x, 10.0);
        assert_eq!(r.y, 20.0);
        assert_eq!(r.width, 100.0);
        assert_eq!(r.height, 50.0);
    }

    #[test]
    fn rect_contains_point_inside() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains_point(50.0, 50.0));
    }

    #[test]
    fn rect_contains_point_on_top_left_edge() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains_point(10.0, 20.0));
    }

    #[test]
    fn rect_does_not_contain_point_on_bottom_right_edge() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        // Exclusive on the right/bottom edge
        assert!(!r.contains_point(100.0, 100.0));
    }

    #[test]
    fn rect_does_not_contain_point_outside() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!r.contains_point(-1.0, 50.0));
        assert!(!r.contains_point(50.0, -1.0));
    }

    // ── axis_pct tests ────────────────────────────────────────────────

    #[rstest]
    #[case(0.0, 0.0, 1000.0, 0.0)]
    #[case(500.0, 0.0, 1000.0, 50.0)]
    #[case(1000.0, 0.0, 1000.0, 100.0)]
    #[case(350.0, 100.0, 1000.0, 25.0)]
    #[case(250.0, 0.0, 1000.0, 25.0)]
    fn pointer_position_maps_to_percentage(
        #[case] pointer: f32,
        #[case] origin: f32,
        #[case] extent: f32,
        #[case] expected: f32,
    ) {
        assert_eq!(axis_pct(pointer, origin, extent).unwrap(), expected);
    }

    #[rstest]
    #[case(-50.0, 0.0)]
    #[case(1500.0, 100.0)]
    fn pointer_outside_container_clamps_to_default_bounds(
        #[case] pointer: f32,
        #[case] expected: f32,
    ) {
        assert_eq!(axis_pct(pointer, 0.0, 1000.0).unwrap(), expected);
    }

    #[test]
    fn tighter_bounds_clamp_the_result() {
        let pct = axis_pct_bounded(30.0, 0.0, 1000.0, 5.0, 95.0).unwrap();
        assert_eq!(pct, 5.0);
        let pct = axis_pct_bounded(990.0, 0.0, 1000.0, 5.0, 95.0).unwrap();
        assert_eq!(pct, 95.0);
    }

    #[test]
    fn in_range_pointer_is_unaffected_by_bounds() {
        let pct = axis_pct_bounded(400.0, 0.0, 1000.0, 5.0, 95.0).unwrap();
        assert_eq!(pct, 40.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-100.0)]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    fn degenerate_extent_is_an_error(#[case] extent: f32) {
        assert!(matches!(
            axis_pct(500.0, 0.0, extent),
            Err(GeometryError::DegenerateContainer { .. })
        ));
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let a = axis_pct(372.0, 12.0, 987.0).unwrap();
        let b = axis_pct(372.0, 12.0, 987.0).unwrap();
        assert_eq!(a, b);
    }
}
