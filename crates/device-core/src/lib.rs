//! Relarea device contracts.
//!
//! This crate contains the data structures and trait used by the
//! filter to talk about devices without coupling to a concrete driver
//! backend. Driver discovery and binding live in the host; the filter
//! only consumes the digitizer specification of the tablet it is bound
//! to and an enumeration of currently bound input devices.

use serde::{Deserialize, Serialize};

use relarea_common::error::RelareaResult;

/// Physical and logical characteristics of a pen digitizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DigitizerSpec {
    /// Maximum logical value of the X axis.
    pub max_x: f32,
    /// Maximum logical value of the Y axis.
    pub max_y: f32,
    /// Physical width of the sensing surface (mm).
    pub width_mm: f32,
    /// Physical height of the sensing surface (mm).
    pub height_mm: f32,
}

/// Identifying properties of a tablet model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabletProperties {
    /// Human-readable model name.
    pub name: String,
    /// The pen digitizer specification.
    pub digitizer: DigitizerSpec,
}

/// A reference to a bound tablet, handed to the filter by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct TabletRef {
    pub properties: TabletProperties,
}

/// The active output mode of a bound device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputModeKind {
    /// Positions are mapped to screen coordinates.
    Absolute,
    /// Positions are converted to deltas downstream.
    Relative,
}

/// One entry in the driver's bound-device list.
///
/// The same tablet model may be bound more than once (for example over
/// USB and Bluetooth), each binding with its own output mode.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDeviceInfo {
    pub properties: TabletProperties,
    pub output_mode: OutputModeKind,
}

/// Enumeration of the devices currently bound by the driver.
///
/// Implemented by the host driver layer; tests use [`StubDirectory`].
pub trait DeviceDirectory: Send + Sync {
    /// List the currently bound input devices.
    fn input_devices(&self) -> RelareaResult<Vec<InputDeviceInfo>>;

    /// Directory name for logging.
    fn name(&self) -> &str;
}

/// Find the first bound device matching `properties` whose active
/// output mode is relative.
pub fn find_relative_device(
    directory: &dyn DeviceDirectory,
    properties: &TabletProperties,
) -> RelareaResult<Option<InputDeviceInfo>> {
    let devices = directory.input_devices()?;
    Ok(devices
        .into_iter()
        .find(|d| d.properties == *properties && d.output_mode == OutputModeKind::Relative))
}

/// Stub directory for testing — serves a fixed device list.
pub struct StubDirectory {
    devices: Vec<InputDeviceInfo>,
}

impl StubDirectory {
    /// Create a stub directory with pre-loaded devices.
    pub fn new(devices: Vec<InputDeviceInfo>) -> Self {
        Self { devices }
    }

    /// Create an empty stub that never lists a device.
    pub fn empty() -> Self {
        Self { devices: vec![] }
    }
}

impl DeviceDirectory for StubDirectory {
    fn input_devices(&self) -> RelareaResult<Vec<InputDeviceInfo>> {
        Ok(self.devices.clone())
    }

    fn name(&self) -> &str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_properties() -> TabletProperties {
        TabletProperties {
            name: "CTL-480".to_string(),
            digitizer: DigitizerSpec {
                max_x: 15200.0,
                max_y: 9500.0,
                width_mm: 152.0,
                height_mm: 95.0,
            },
        }
    }

    #[test]
    fn relative_lookup_skips_absolute_bindings() {
        let properties = test_properties();
        let directory = StubDirectory::new(vec![
            InputDeviceInfo {
                properties: properties.clone(),
                output_mode: OutputModeKind::Absolute,
            },
            InputDeviceInfo {
                properties: properties.clone(),
                output_mode: OutputModeKind::Relative,
            },
        ]);

        let found = find_relative_device(&directory, &properties)
            .unwrap()
            .unwrap();
        assert_eq!(found.output_mode, OutputModeKind::Relative);
    }

    #[test]
    fn relative_lookup_requires_matching_properties() {
        let mut other = test_properties();
        other.name = "CTL-672".to_string();

        let directory = StubDirectory::new(vec![InputDeviceInfo {
            properties: other,
            output_mode: OutputModeKind::Relative,
        }]);

        let found = find_relative_device(&directory, &test_properties()).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn empty_directory_finds_nothing() {
        let directory = StubDirectory::empty();
        let found = find_relative_device(&directory, &test_properties()).unwrap();
        assert!(found.is_none());
    }
}
