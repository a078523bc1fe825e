//! Area resolution: physical millimeters to logical rectangles.
//!
//! The user defines the area in millimeters on the digitizer surface.
//! Each input modality reports positions in its own logical range, so
//! the same physical rectangle resolves to a different logical
//! rectangle per modality via that modality's lines-per-millimeter
//! scale, which may differ between axes.

use serde::{Deserialize, Serialize};

use relarea_device_core::DigitizerSpec;

/// A user-defined rectangle in millimeters, centered at a point on the
/// digitizer surface.
///
/// Zero or negative dimensions are legal and produce a degenerate
/// rectangle that matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalArea {
    /// Center position on the X axis (mm).
    pub center_x_mm: f32,
    /// Center position on the Y axis (mm).
    pub center_y_mm: f32,
    /// Width of the area (mm).
    pub width_mm: f32,
    /// Height of the area (mm).
    pub height_mm: f32,
}

impl PhysicalArea {
    pub fn new(center_x_mm: f32, center_y_mm: f32, width_mm: f32, height_mm: f32) -> Self {
        Self {
            center_x_mm,
            center_y_mm,
            width_mm,
            height_mm,
        }
    }
}

impl Default for PhysicalArea {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }
}

/// Physical-to-logical scale for one input modality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Maximum logical value of the X axis.
    pub max_logical_x: f32,
    /// Maximum logical value of the Y axis.
    pub max_logical_y: f32,
    /// Physical width of the sensing surface (mm).
    pub physical_width_mm: f32,
    /// Physical height of the sensing surface (mm).
    pub physical_height_mm: f32,
}

impl Calibration {
    /// Pen calibration straight from the digitizer specification.
    pub fn from_digitizer(spec: &DigitizerSpec) -> Self {
        Self {
            max_logical_x: spec.max_x,
            max_logical_y: spec.max_y,
            physical_width_mm: spec.width_mm,
            physical_height_mm: spec.height_mm,
        }
    }

    /// Touch calibration: user-supplied logical maxima over the same
    /// physical surface the pen digitizer reports.
    ///
    /// Each axis scales by its own maximum. Sharing the X maximum
    /// across both axes skews the area on non-square surfaces.
    pub fn for_touch(max_x: f32, max_y: f32, spec: &DigitizerSpec) -> Self {
        Self {
            max_logical_x: max_x,
            max_logical_y: max_y,
            physical_width_mm: spec.width_mm,
            physical_height_mm: spec.height_mm,
        }
    }

    /// Per-axis scale factors (logical units per millimeter).
    pub fn lines_per_mm(&self) -> (f32, f32) {
        (
            self.max_logical_x / self.physical_width_mm,
            self.max_logical_y / self.physical_height_mm,
        )
    }
}

/// An axis-aligned rectangle in logical units for one modality.
///
/// Negative spans are kept as-is — `left > right` is the legitimate
/// "nothing passes" configuration, never normalized away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaRect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl AreaRect {
    /// Right edge.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Closed containment test, inclusive on all four edges.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if x < self.left || x > self.right() {
            return false;
        }
        if y < self.top || y > self.bottom() {
            return false;
        }
        true
    }

    /// Whether any part of the rectangle lies outside `[0, max]` on
    /// either axis.
    pub fn exceeds_bounds(&self, max_x: f32, max_y: f32) -> bool {
        self.left < 0.0 || self.top < 0.0 || self.right() > max_x || self.bottom() > max_y
    }
}

/// Resolve a physical area into logical units for one modality.
///
/// Pure and deterministic: identical inputs give bit-identical output.
pub fn resolve(area: &PhysicalArea, calibration: &Calibration) -> AreaRect {
    let (lpmm_x, lpmm_y) = calibration.lines_per_mm();

    let left_mm = area.center_x_mm - area.width_mm / 2.0;
    let top_mm = area.center_y_mm - area.height_mm / 2.0;

    AreaRect {
        left: left_mm * lpmm_x,
        top: top_mm * lpmm_y,
        width: area.width_mm * lpmm_x,
        height: area.height_mm * lpmm_y,
    }
}
