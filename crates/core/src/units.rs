//! Length and size units used by the document model.
//!
//! All geometry is stored in EMUs (English Metric Units), the native OOXML
//! length unit. Builders speak inches; conversion happens once,
//! when a value enters the model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// EMUs per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// A length in English Metric Units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Emu(pub i64);

impl Emu {
    pub const ZERO: Emu = Emu(0);

    /// Convert inches to EMUs, rounding to the nearest EMU.
    pub fn from_inches(inches: f64) -> Self {
        Emu((inches * EMU_PER_INCH as f64).round() as i64)
    }

    /// The value in inches.
    pub fn inches(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH as f64
    }
}

impl std::ops::Add for Emu {
    type Output = Emu;

    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl fmt::Display for Emu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A font or spacing size in points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Points(pub f64);

impl Points {
    /// The value in hundredths of a point, as OOXML stores `sz` and `spcPts`.
    pub fn centipoints(self) -> i64 {
        (self.0 * 100.0).round() as i64
    }
}

/// Shorthand for a point size.
pub fn pt(points: f64) -> Points {
    Points(points)
}

/// Position and size of a shape, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Rect {
    /// Create a rectangle from raw EMU values.
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle from inch values.
    pub fn inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(
            Emu::from_inches(left),
            Emu::from_inches(top),
            Emu::from_inches(width),
            Emu::from_inches(height),
        )
    }

    /// Right edge.
    pub fn right(&self) -> Emu {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> Emu {
        self.top + self.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.3}in, {:.3}in) {:.3}in x {:.3}in",
            self.left.inches(),
            self.top.inches(),
            self.width.inches(),
            self.height.inches()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inches() {
        assert_eq!(Emu::from_inches(1.0), Emu(914_400));
        assert_eq!(Emu::from_inches(0.08), Emu(73_152));
        assert_eq!(Emu::from_inches(7.5), Emu(6_858_000));
        assert_eq!(Emu::from_inches(13.333), Emu(12_191_695));
    }

    #[test]
    fn test_from_inches_rounds_instead_of_truncating() {
        // 0.35 has no exact binary representation.
        assert_eq!(Emu::from_inches(0.35), Emu(320_040));
    }

    #[test]
    fn test_centipoints() {
        assert_eq!(pt(18.0).centipoints(), 1800);
        assert_eq!(pt(10.5).centipoints(), 1050);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::inches(0.6, 1.8, 2.8, 4.5);
        assert_eq!(rect.right(), Emu::from_inches(0.6) + Emu::from_inches(2.8));
        assert_eq!(rect.bottom(), Emu(1_645_920 + 4_114_800));
    }
}
