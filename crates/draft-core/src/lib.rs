//! Core types for the draft design-to-code compiler.
//!
//! This crate provides the foundational types shared by the other draft crates:
//! - The read-only scene graph handed over by the design host
//! - The tag tree IR produced by style inference and consumed by the emitters
//! - Unit formatting and identifier sanitization helpers
//! - Error types

pub mod error;
pub mod naming;
pub mod scene;
pub mod tag;
pub mod units;

pub use error::{CoreError, Result};
pub use scene::*;
pub use tag::*;
pub use units::{format_number, format_px_floor, format_size, UnitType};
