//! Build script for cbd-dashboard.
//!
//! Copies the four dashboard inputs into OUT_DIR so they can be embedded via
//! `include_str!`/`include_bytes!` at compile time. Each input path can be
//! overridden with its `CBD_*` environment variable; relative paths are
//! resolved against this crate's directory. The resolved path of each input
//! is exported as `CBD_*_SOURCE` so load errors can name it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// (environment variable, default path, name inside OUT_DIR, compile-time
/// variable carrying the source path)
const INPUTS: [(&str, &str, &str, &str); 4] = [
    (
        "CBD_TOP_STATIONS_CSV",
        "../fixtures/top15_start_NY_2022.csv",
        "top_stations.csv",
        "CBD_TOP_STATIONS_SOURCE",
    ),
    (
        "CBD_REDUCED_TRIPS_CSV",
        "../fixtures/df_1_reduced_data.csv.gz",
        "reduced_trips.bin",
        "CBD_REDUCED_TRIPS_SOURCE",
    ),
    (
        "CBD_DAILY_CSV",
        "../fixtures/df_daily_trips_temp.csv",
        "daily_trips_temp.csv",
        "CBD_DAILY_SOURCE",
    ),
    ("CBD_MAP_HTML", "../fixtures/NY_2022_CityBike_Map.html", "map.html", "CBD_MAP_SOURCE"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (var, default, dest_name, source_var) in &INPUTS {
        let src: PathBuf = env::var(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(default));
        let dest = Path::new(&out_dir).join(dest_name);
        if !src.exists() {
            panic!(
                "Dashboard input {} not found (set {} to override)",
                src.display(),
                var
            );
        }
        fs::copy(&src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src.display(), dest.display(), e);
        });
        println!("cargo:rustc-env={}={}", source_var, src.display());
        println!("cargo:rerun-if-env-changed={}", var);
        println!("cargo:rerun-if-changed={}", src.display());
    }

    println!("cargo:rerun-if-changed=build.rs");
}
