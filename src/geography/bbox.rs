use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

/// Axis-aligned extent in projected units. Always `xmax > xmin` and `ymax > ymin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox {
    /// Construct a box, or `None` if it has no positive width and height.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Option<Self> {
        (xmax > xmin && ymax > ymin).then_some(Self { xmin, xmax, ymin, ymax })
    }

    pub fn from_rect(rect: &Rect<f64>) -> Option<Self> {
        Self::new(rect.min().x, rect.max().x, rect.min().y, rect.max().y)
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(Coord { x: self.xmin, y: self.ymin }, Coord { x: self.xmax, y: self.ymax })
    }

    #[inline] pub fn width(&self) -> f64 { self.xmax - self.xmin }

    #[inline] pub fn height(&self) -> f64 { self.ymax - self.ymin }

    /// Width over height.
    #[inline] pub fn aspect_ratio(&self) -> f64 { self.width() / self.height() }

    /// Check if `other` lies entirely inside this box.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.xmin <= other.xmin && other.xmax <= self.xmax
            && self.ymin <= other.ymin && other.ymax <= self.ymax
    }

    /// Grow every side by `(1 - zoom) * width`. A zoom of 1 leaves the box unchanged.
    pub fn zoomed(&self, zoom: f64) -> BoundingBox {
        let margin = (1.0 - zoom) * self.width();
        self.grown(margin, margin)
    }

    /// Grow the shorter axis until `width / height == aspect_ratio`.
    /// Neither axis ever shrinks.
    pub fn reshaped(&self, aspect_ratio: f64) -> BoundingBox {
        let dx = axis_expansion(self.width(), aspect_ratio * self.height());
        let widened = self.grown(dx / 2.0, 0.0);

        let dy = axis_expansion(widened.height(), widened.width() / aspect_ratio);
        widened.grown(0.0, dy / 2.0)
    }

    /// Grow symmetrically by `dx` on the left and right and `dy` on top and bottom.
    fn grown(&self, dx: f64, dy: f64) -> BoundingBox {
        BoundingBox {
            xmin: self.xmin - dx,
            xmax: self.xmax + dx,
            ymin: self.ymin - dy,
            ymax: self.ymax + dy,
        }
    }
}

/// Amount an axis of length `current` has to grow to reach `required`, never negative.
#[inline]
pub(crate) fn axis_expansion(current: f64, required: f64) -> f64 {
    (required - current).max(0.0)
}

/// Zoom the base box, then reshape it to the requested aspect ratio.
/// Returns the final box and its effective aspect ratio.
pub(crate) fn frame(base: &BoundingBox, zoom: f64, aspect_ratio: Option<f64>) -> (BoundingBox, f64) {
    let zoomed = base.zoomed(zoom);
    tracing::debug!(?base, zoom, ?zoomed, "zoomed framing box");

    match aspect_ratio {
        Some(aspect_ratio) => {
            let reshaped = zoomed.reshaped(aspect_ratio);
            tracing::debug!(aspect_ratio, ?reshaped, "reshaped framing box");
            (reshaped, aspect_ratio)
        }
        None => (zoomed, zoomed.aspect_ratio()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(w: f64, h: f64) -> BoundingBox { BoundingBox::new(0.0, w, 0.0, h).unwrap() }

    #[test]
    fn degenerate_boxes_are_rejected() {
        assert!(BoundingBox::new(0.0, 0.0, 0.0, 1.0).is_none());
        assert!(BoundingBox::new(0.0, 1.0, 2.0, 1.0).is_none());
    }

    #[test]
    fn zoom_of_one_is_identity() {
        let base = unit(4.0, 2.0);
        assert_eq!(base.zoomed(1.0), base);
    }

    #[test]
    fn zoom_margin_uses_width_on_every_side() {
        let zoomed = unit(10.0, 4.0).zoomed(0.9);
        assert!((zoomed.xmin + 1.0).abs() < 1e-12);
        assert!((zoomed.xmax - 11.0).abs() < 1e-12);
        assert!((zoomed.ymin + 1.0).abs() < 1e-12);
        assert!((zoomed.ymax - 5.0).abs() < 1e-12);
    }

    #[test]
    fn smaller_zoom_contains_larger_zoom() {
        let base = BoundingBox::new(-3.0, 7.0, 2.0, 5.0).unwrap();
        assert!(base.zoomed(0.6).contains(&base.zoomed(0.9)));
        assert!(base.zoomed(0.5).contains(&base.zoomed(0.6)));
    }

    #[test]
    fn reshape_widens_tall_boxes() {
        let reshaped = unit(2.0, 4.0).reshaped(1.5);
        assert_eq!(reshaped.height(), 4.0);
        assert!((reshaped.width() - 6.0).abs() < 1e-12);
        assert!((reshaped.xmin + 2.0).abs() < 1e-12);
    }

    #[test]
    fn reshape_heightens_wide_boxes() {
        let reshaped = unit(8.0, 2.0).reshaped(2.0);
        assert_eq!(reshaped.width(), 8.0);
        assert!((reshaped.height() - 4.0).abs() < 1e-12);
        assert!((reshaped.ymin + 1.0).abs() < 1e-12);
    }

    #[test]
    fn reshape_never_shrinks_either_axis() {
        for &(w, h) in &[(1.0, 1.0), (3.0, 1.0), (1.0, 3.0), (0.2, 5.0)] {
            for &a in &[0.5, 0.8, 1.0, 1.3, 2.0] {
                let before = unit(w, h);
                let after = before.reshaped(a);
                assert!(after.width() >= before.width());
                assert!(after.height() >= before.height());
                assert!(after.contains(&before));
                assert!((after.aspect_ratio() - a).abs() < 1e-9, "{w}x{h} -> {a}");
            }
        }
    }

    #[test]
    fn axis_expansion_is_non_negative() {
        assert_eq!(axis_expansion(2.0, 5.0), 3.0);
        assert_eq!(axis_expansion(5.0, 2.0), 0.0);
    }

    #[test]
    fn frame_reads_off_ratio_without_request() {
        let (bbox, ratio) = frame(&unit(4.0, 2.0), 1.0, None);
        assert_eq!(bbox, unit(4.0, 2.0));
        assert_eq!(ratio, 2.0);

        let (bbox, ratio) = frame(&unit(4.0, 2.0), 1.0, Some(1.0));
        assert_eq!(ratio, 1.0);
        assert_eq!(bbox.height(), 4.0);
    }
}
