//! Relarea Report Model
//!
//! Data types for reports emitted by a tablet digitizer. The filter
//! treats reports as opaque values: it inspects position and modality,
//! forwards or drops, and never rewrites a field. Coordinates are raw
//! logical digitizer units, pre-transform — upstream of any
//! output-mode remapping.

pub mod report;

pub use report::*;
