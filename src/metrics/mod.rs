//! # Training Metrics Module
//!
//! Collects per-epoch results (training loss, testing loss, validity) while
//! a network learns, and exports them as CSV for plotting. The export is
//! headed by a comment line carrying the JSON-encoded network configuration,
//! so a metrics file is self-describing.

pub mod tracker;

pub use tracker::{EpochRecord, MetricsTracker};
