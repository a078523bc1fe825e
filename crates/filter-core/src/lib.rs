//! Relarea Filter Core
//!
//! Decides, report by report, whether a pen or touch position falls
//! inside a user-defined physical area of the digitizer surface:
//! - **Area resolution:** convert a millimeter rectangle into logical
//!   coordinate rectangles, one per input modality
//! - **Stream filtering:** forward reports inside the area, drop the
//!   rest, and fail open whenever resolution has not happened
//!
//! This crate is pure computation — no I/O, no driver dependencies.
//! All inputs are data; all outputs are data.

pub mod area;
pub mod filter;

pub use area::{resolve, AreaRect, Calibration, PhysicalArea};
pub use filter::{AreaFilter, PipelineStage, TouchRange};
