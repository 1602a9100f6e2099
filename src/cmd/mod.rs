pub mod analyze;
pub mod sweep;
pub mod validate;

use clap::Args;
use pinsight::geometry::{CaptureBounds, RawTap};
use tracing::warn;

/// Taps and capture surface shared by the analysis commands.
#[derive(Args, Debug, Clone)]
pub struct TapArgs {
    /// One tap as X,Y in pixels; pass exactly four in entry order
    #[arg(short, long = "tap", value_parser = parse_tap, allow_hyphen_values = true, required = true)]
    pub taps: Vec<RawTap>,

    /// Capture surface width in pixels (omit for bounding-box normalization)
    #[arg(long, requires = "height")]
    pub width: Option<f64>,

    /// Capture surface height in pixels
    #[arg(long, requires = "width")]
    pub height: Option<f64>,
}

impl TapArgs {
    pub fn bounds(&self) -> Option<CaptureBounds> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => {
                let b = CaptureBounds::new(w, h);
                if !b.is_usable() {
                    warn!(
                        "⚠️  Capture bounds {}x{} are not positive; using bounding-box normalization",
                        w, h
                    );
                }
                Some(b)
            }
            _ => None,
        }
    }
}

fn parse_tap(s: &str) -> Result<RawTap, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid X coordinate in '{}'", s))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid Y coordinate in '{}'", s))?;
    Ok(RawTap::new(x, y))
}
