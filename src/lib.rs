//! Core library for the etl-tools command line application.
//!
//! The pipeline reads a pipe-delimited column catalog and data file, merges
//! them into one table, writes it as CSV, and hands the file to a storage
//! loader. File adapters live under [`io`], the in-memory representation in
//! [`model`], the storage seam in [`storage`], and the run orchestration in
//! [`etl`].

pub mod config;
pub mod error;
pub mod etl;
pub mod io;
pub mod logging;
pub mod model;
pub mod storage;

pub use error::{EtlError, Result};
