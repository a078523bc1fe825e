//! Device report types.
//!
//! Reports can be serialized to JSONL (one JSON object per line) for
//! capture fixtures and replay tests. Positions are logical digitizer
//! units; pen and touch use independently calibrated ranges even on
//! the same physical surface.

use serde::{Deserialize, Serialize};

/// A single report from a tablet device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceReport {
    /// Absolute pen position in pen logical units.
    Pen {
        x: f32,
        y: f32,
        /// Raw pressure value, zero when hovering.
        pressure: u32,
    },

    /// Converted touch position in touch logical units.
    Touch { x: f32, y: f32 },

    /// Auxiliary button press/release. Carries no position.
    Aux { button: u8, pressed: bool },

    /// Wheel rotation. Carries no position.
    Wheel { delta: i32 },
}

impl DeviceReport {
    /// Create a pen report.
    pub fn pen(x: f32, y: f32, pressure: u32) -> Self {
        Self::Pen { x, y, pressure }
    }

    /// Create a touch report.
    pub fn touch(x: f32, y: f32) -> Self {
        Self::Touch { x, y }
    }

    /// Create an auxiliary button report.
    pub fn aux(button: u8, pressed: bool) -> Self {
        Self::Aux { button, pressed }
    }

    /// Whether this report came from the touch sensor.
    pub fn is_touch(&self) -> bool {
        matches!(self, Self::Touch { .. })
    }

    /// Extract the absolute position if this report carries one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::Pen { x, y, .. } => Some((*x, *y)),
            Self::Touch { x, y } => Some((*x, *y)),
            Self::Aux { .. } | Self::Wheel { .. } => None,
        }
    }
}

/// Parse reports from JSONL content (one JSON object per line).
pub fn parse_reports(jsonl: &str) -> Result<Vec<DeviceReport>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize reports to JSONL format.
pub fn serialize_reports(reports: &[DeviceReport]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for report in reports {
        output.push_str(&serde_json::to_string(report)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_report_roundtrip() {
        let report = DeviceReport::pen(431.0, 902.5, 1024);
        let json = serde_json::to_string(&report).unwrap();
        let parsed: DeviceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, parsed);
    }

    #[test]
    fn test_touch_report_roundtrip() {
        let report = DeviceReport::touch(2047.0, 2047.0);
        let json = serde_json::to_string(&report).unwrap();
        let parsed: DeviceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, parsed);
    }

    #[test]
    fn test_jsonl_roundtrip() {
        let reports = vec![
            DeviceReport::pen(0.0, 0.0, 0),
            DeviceReport::touch(100.0, 200.0),
            DeviceReport::aux(1, true),
            DeviceReport::Wheel { delta: -1 },
        ];
        let jsonl = serialize_reports(&reports).unwrap();
        let parsed = parse_reports(&jsonl).unwrap();
        assert_eq!(reports, parsed);
    }

    #[test]
    fn test_parse_reports_skips_comments_and_blanks() {
        let jsonl = "# capture: test tablet\n\n{\"type\":\"pen\",\"x\":1.0,\"y\":2.0,\"pressure\":0}\n";
        let parsed = parse_reports(jsonl).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].position(), Some((1.0, 2.0)));
    }

    #[test]
    fn test_position_extraction() {
        assert_eq!(DeviceReport::pen(3.0, 7.0, 0).position(), Some((3.0, 7.0)));
        assert_eq!(DeviceReport::touch(5.0, 5.0).position(), Some((5.0, 5.0)));
        assert_eq!(DeviceReport::aux(0, true).position(), None);
        assert_eq!(DeviceReport::Wheel { delta: 2 }.position(), None);
    }

    #[test]
    fn test_modality_classification() {
        assert!(DeviceReport::touch(0.0, 0.0).is_touch());
        assert!(!DeviceReport::pen(0.0, 0.0, 0).is_touch());
        assert!(!DeviceReport::aux(0, false).is_touch());
    }

    #[test]
    fn test_json_format_is_tagged() {
        let json = serde_json::to_string(&DeviceReport::pen(1.0, 2.0, 512)).unwrap();
        assert!(json.contains("\"type\":\"pen\""));
        assert!(json.contains("\"pressure\":512"));
    }
}
