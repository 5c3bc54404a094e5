//! Utilities that don't belong anywhere in particular: logging setup and reading/writing JSON.

#[macro_use]
extern crate log;

pub mod logger;
mod io;

pub use crate::io::{read_json, to_json, write_json};
