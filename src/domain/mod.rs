//! Domain Layer
//!
//! Planning logic for a backup run, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Plans, invocations, execution results
//! - `value_objects/` - Cadence, Runtime, platform target names
//! - `services/` - Plan builder, overlap analyzer, invocation builder
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
