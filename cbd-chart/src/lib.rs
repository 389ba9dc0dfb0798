//! Chart specifications for the Citi Bike dashboard.
//!
//! Builders are pure functions of a loaded table plus fixed styling. The
//! resulting specs serialize to JSON and are drawn by the D3.js scripts in
//! `cbd-chart-ui`; no sorting, filtering or aggregation happens here.

pub mod bar;
pub mod colorscale;
pub mod dual_axis;

/// Serialize any chart spec for the JS bridge.
pub fn to_json<T: serde::Serialize>(spec: &T) -> serde_json::Result<String> {
    serde_json::to_string(spec)
}
