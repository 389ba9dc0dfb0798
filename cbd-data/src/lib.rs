//! Core types and dataset loaders for the Citi Bike ridership dashboard.
//!
//! Every dataset is produced upstream and only read here:
//! - `station_ranking`: the precomputed top-15 start stations
//! - `daily_aggregate`: one row per day with trips, temperature, season and month
//! - `reduced_trip`: the reduced per-trip table (kept opaque)
//! - `map_document`: the prebuilt trip-flow map, embedded verbatim
//!
//! `loader::Datasets` bundles all four and `config::DatasetPaths` names
//! where they live on disk.

pub mod columns;
pub mod config;
pub mod daily_aggregate;
pub mod loader;
pub mod map_document;
pub mod reduced_trip;
pub mod season;
pub mod station_ranking;
