//! The stream filter: one pass/drop decision per report.
//!
//! The filter sits pre-transform in the host pipeline, upstream of the
//! output-mode remapping, so pen rectangles stay meaningful in raw
//! digitizer units. It never blocks the stream: any report it cannot
//! judge (nothing bound yet, or an unresolved modality, or no position
//! to test) is forwarded unchanged.

use std::sync::Arc;

use relarea_common::config::FilterConfig;
use relarea_device_core::{find_relative_device, DeviceDirectory, TabletRef};
use relarea_report_model::DeviceReport;

use crate::area::{resolve, AreaRect, Calibration, PhysicalArea};

/// Where a pipeline element runs relative to output-mode remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Before remapping: positions are raw digitizer units.
    PreTransform,
    /// After remapping: positions are output coordinates.
    PostTransform,
}

/// The logical range the touch sensor reports over the digitizer
/// surface. User-supplied; the digitizer spec only covers the pen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchRange {
    pub max_x: f32,
    pub max_y: f32,
}

/// Resolved rectangles for one configuration epoch.
///
/// Replaced as a single value on every re-resolution so `consume`
/// never observes a pen rectangle from one epoch paired with a touch
/// rectangle from another. `None` per modality means that modality is
/// unresolved and fails open.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RectSnapshot {
    pen: Option<AreaRect>,
    touch: Option<AreaRect>,
}

/// An area filter bound to one tablet.
///
/// Owned by a single pipeline; binding events and report delivery are
/// expected on the same thread. Reports flow through [`consume`],
/// which is side-effect free.
///
/// [`consume`]: AreaFilter::consume
pub struct AreaFilter {
    area: PhysicalArea,
    touch: Option<TouchRange>,
    tablet: Option<TabletRef>,
    driver: Option<Arc<dyn DeviceDirectory>>,
    snapshot: Option<RectSnapshot>,
}

impl AreaFilter {
    /// A filter that judges pen reports only; touch passes through.
    pub fn pen_only(area: PhysicalArea) -> Self {
        Self {
            area,
            touch: None,
            tablet: None,
            driver: None,
            snapshot: None,
        }
    }

    /// A filter that judges pen and touch reports.
    pub fn with_touch(area: PhysicalArea, touch: TouchRange) -> Self {
        Self {
            touch: Some(touch),
            ..Self::pen_only(area)
        }
    }

    /// Build a filter from the user configuration.
    pub fn from_config(config: &FilterConfig) -> Self {
        let area = PhysicalArea::new(
            config.area.center_x_mm,
            config.area.center_y_mm,
            config.area.width_mm,
            config.area.height_mm,
        );
        if config.touch.enabled {
            Self::with_touch(
                area,
                TouchRange {
                    max_x: config.touch.max_x,
                    max_y: config.touch.max_y,
                },
            )
        } else {
            Self::pen_only(area)
        }
    }

    /// The filter must run before output-mode remapping.
    pub fn stage(&self) -> PipelineStage {
        PipelineStage::PreTransform
    }

    /// Whether rectangles are currently resolved.
    pub fn is_initialized(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The resolved pen rectangle, if any.
    pub fn pen_rect(&self) -> Option<AreaRect> {
        self.snapshot.and_then(|s| s.pen)
    }

    /// The resolved touch rectangle, if any.
    pub fn touch_rect(&self) -> Option<AreaRect> {
        self.snapshot.and_then(|s| s.touch)
    }

    /// The host bound (or unbound) a tablet reference.
    pub fn on_tablet_bound(&mut self, tablet: Option<TabletRef>) {
        self.tablet = tablet;
        self.reinitialize();
    }

    /// The host bound (or unbound) the driver's device directory.
    pub fn on_driver_bound(&mut self, driver: Option<Arc<dyn DeviceDirectory>>) {
        self.driver = driver;
        self.reinitialize();
    }

    /// The user changed the area; takes effect immediately.
    pub fn set_area(&mut self, area: PhysicalArea) {
        self.area = area;
        self.reinitialize();
    }

    /// Decide one report: `Some` forwards it unchanged, `None` drops it.
    ///
    /// Never buffers, reorders, or mutates. Dropping is the expected
    /// steady-state behavior and produces no diagnostic.
    pub fn consume(&self, report: DeviceReport) -> Option<DeviceReport> {
        let Some(snapshot) = self.snapshot else {
            // Nothing resolved yet: fail open.
            return Some(report);
        };

        let rect = if report.is_touch() {
            snapshot.touch
        } else {
            snapshot.pen
        };

        match (rect, report.position()) {
            (Some(rect), Some((x, y))) => rect.contains(x, y).then_some(report),
            // Unresolved modality or no position to judge.
            _ => Some(report),
        }
    }

    fn reinitialize(&mut self) {
        let Some(tablet) = self.tablet.clone() else {
            // Not bound yet: not an error, resolution simply waits.
            self.snapshot = None;
            return;
        };

        let digitizer = tablet.properties.digitizer;
        let pen = resolve(&self.area, &Calibration::from_digitizer(&digitizer));
        if pen.exceeds_bounds(digitizer.max_x, digitizer.max_y) {
            tracing::warn!(
                tablet = %tablet.properties.name,
                ?pen,
                "Part of the defined area is outside of the tablet's digitizer area"
            );
        }

        let touch = self.resolve_touch(&tablet);

        self.snapshot = Some(RectSnapshot {
            pen: Some(pen),
            touch,
        });
        tracing::debug!(
            tablet = %tablet.properties.name,
            touch_active = touch.is_some(),
            "Area filter initialized"
        );
    }

    /// Touch needs a driver binding and a device in relative output
    /// mode on top of the tablet reference. Returns `None` (fail-open
    /// for touch) when any of that is missing.
    fn resolve_touch(&self, tablet: &TabletRef) -> Option<AreaRect> {
        let range = self.touch?;
        let driver = self.driver.as_ref()?;

        match find_relative_device(driver.as_ref(), &tablet.properties) {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::error!(
                    tablet = %tablet.properties.name,
                    directory = %driver.name(),
                    "Could not find relative mode tablet"
                );
                return None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Device enumeration failed");
                return None;
            }
        }

        let digitizer = &tablet.properties.digitizer;
        let rect = resolve(
            &self.area,
            &Calibration::for_touch(range.max_x, range.max_y, digitizer),
        );
        if rect.exceeds_bounds(range.max_x, range.max_y) {
            tracing::warn!(
                tablet = %tablet.properties.name,
                ?rect,
                "Part of the defined area is outside of the touch digitizer area"
            );
        }
        Some(rect)
    }
}
