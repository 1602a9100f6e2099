use crate::consts::PIN_LENGTH;
use crate::geometry::{CaptureBounds, RawTap};
use tracing::debug;

/// Collects the taps of one PIN entry.
///
/// Taps are kept in chronological order. The capture surface's size is
/// recorded with the first tap and kept for the whole session, so a resize
/// mid-entry does not skew normalization. Taps beyond the fourth are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TapCapture {
    taps: Vec<RawTap>,
    bounds: Option<CaptureBounds>,
}

impl TapCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a tap. Returns `false` (and changes nothing) once complete.
    pub fn add_tap(&mut self, tap: RawTap, surface: Option<CaptureBounds>) -> bool {
        if self.is_complete() {
            debug!("Capture already complete, ignoring tap at ({}, {})", tap.x, tap.y);
            return false;
        }
        if self.taps.is_empty() {
            self.bounds = surface;
        }
        self.taps.push(tap);
        true
    }

    pub fn is_complete(&self) -> bool {
        self.taps.len() == PIN_LENGTH
    }

    pub fn tap_count(&self) -> usize {
        self.taps.len()
    }

    pub fn taps(&self) -> &[RawTap] {
        &self.taps
    }

    pub fn bounds(&self) -> Option<CaptureBounds> {
        self.bounds
    }

    pub fn reset(&mut self) {
        self.taps.clear();
        self.bounds = None;
    }
}
