use super::{CaptureBounds, NormalizedPoint, RawTap};
use crate::consts::{KEYPAD_ASPECT_RATIO, MIN_DIMENSION_RATIO};
use tracing::debug;

/// Axis-aligned box in pixel space, stored as origin + extent.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PixelBox {
    min_x: f64,
    min_y: f64,
    width: f64,
    height: f64,
}

impl PixelBox {
    fn enclosing(taps: &[RawTap]) -> Self {
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for t in taps {
            min_x = min_x.min(t.x);
            max_x = max_x.max(t.x);
            min_y = min_y.min(t.y);
            max_y = max_y.max(t.y);
        }
        PixelBox {
            min_x,
            min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Grows the box so neither side is a sliver of the other.
    fn enforce_min_dimensions(&mut self) {
        // Collinear taps: synthesize the missing side around the line.
        if self.width == 0.0 {
            let target = self.height * MIN_DIMENSION_RATIO;
            self.min_x -= target / 2.0;
            self.width = target;
        }
        if self.height == 0.0 {
            let target = self.width * MIN_DIMENSION_RATIO;
            self.min_y -= target / 2.0;
            self.height = target;
        }

        if self.width < self.height * MIN_DIMENSION_RATIO {
            let target = self.height * MIN_DIMENSION_RATIO;
            let center = self.min_x + self.width / 2.0;
            self.min_x = center - target / 2.0;
            self.width = target;
        }
        if self.height < self.width * MIN_DIMENSION_RATIO {
            let target = self.width * MIN_DIMENSION_RATIO;
            let center = self.min_y + self.height / 2.0;
            self.min_y = center - target / 2.0;
            self.height = target;
        }
    }

    /// Pads the short side so width / height matches the keypad exactly.
    fn correct_aspect(&mut self) {
        let aspect = self.width / self.height;
        if aspect > KEYPAD_ASPECT_RATIO {
            let target = self.width / KEYPAD_ASPECT_RATIO;
            self.min_y -= (target - self.height) / 2.0;
            self.height = target;
        } else {
            let target = self.height * KEYPAD_ASPECT_RATIO;
            self.min_x -= (target - self.width) / 2.0;
            self.width = target;
        }
    }

    #[inline(always)]
    fn map(&self, tap: &RawTap) -> NormalizedPoint {
        NormalizedPoint::new(
            (tap.x - self.min_x) / self.width,
            (tap.y - self.min_y) / self.height,
        )
    }
}

/// Maps raw taps into keypad space.
///
/// With usable `bounds` each tap keeps its absolute place on the capture
/// surface (`x / width`, `y / height`), so the same shape traced in different
/// corners lands on different keys. Without them the taps are fitted to their
/// own bounding box, padded to the keypad aspect ratio.
pub fn normalize_taps(taps: &[RawTap], bounds: Option<CaptureBounds>) -> Vec<NormalizedPoint> {
    if taps.is_empty() {
        return Vec::new();
    }

    match bounds {
        Some(b) if b.is_usable() => taps
            .iter()
            .map(|t| NormalizedPoint::new(t.x / b.width, t.y / b.height))
            .collect(),
        _ => {
            debug!("No usable capture bounds, falling back to bounding-box normalization");
            normalize_by_bounding_box(taps)
        }
    }
}

fn normalize_by_bounding_box(taps: &[RawTap]) -> Vec<NormalizedPoint> {
    let mut bbox = PixelBox::enclosing(taps);

    if bbox.width == 0.0 && bbox.height == 0.0 {
        return vec![NormalizedPoint::new(0.5, 0.5); taps.len()];
    }

    bbox.enforce_min_dimensions();
    bbox.correct_aspect();

    taps.iter().map(|t| bbox.map(t)).collect()
}
