//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod document;
pub mod error;
pub mod persistence;
pub mod ports;
pub mod random;
pub mod settings;

#[cfg(test)]
mod sheet_file_tests;
