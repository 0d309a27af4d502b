//! Durable storage for the payroll engine.
//!
//! This module contains the CSV persistence collaborator: a per-record
//! line [`codec`] and the [`CsvStore`] that owns the data directory. The
//! engine core never touches encoding details; it exchanges plain
//! collections of records with the store at startup and at checkpoints.

pub mod codec;
mod store;

pub use store::CsvStore;
