//! In-memory SQLite dataset store for the Citi Bike dashboard.
//!
//! The precomputed tables are loaded once into an in-memory SQLite database
//! and read back through typed query methods. Nothing is ever updated after
//! loading, so every page render sees the same tables.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - CSV data arrives either from disk (CLI) or via `include_str!` (dashboard)
//! - Typed query methods return the `cbd-data` row types, serializable for D3.js
//!
//! # Usage
//!
//! ```rust
//! use cbd_db::Database;
//! use cbd_data::season::Season;
//!
//! let db = Database::new().unwrap();
//! db.load_daily_aggregates("date,bike_rides_daily,avgTemp,Season,month\n2022-07-01,500,28.0,Summer,7\n").unwrap();
//!
//! let total = db.query_total_trips_by_season(&[Season::Summer]).unwrap();
//! assert_eq!(total, 500);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the dashboard tables.
///
/// Cheaply cloneable (via `Rc`) for sharing across Dioxus components in a
/// single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl PartialEq for Database {
    /// Two handles are equal when they share the same connection.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
