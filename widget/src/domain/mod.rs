//! Domain layer
//!
//! Contains the widget's state and records with no HTTP or runtime dependencies.
//! - `entities`: Domain models
//! - `ports`: Trait definitions for storage

pub mod entities;
pub mod ports;
