//! Step definitions for webhook routing scenarios.

pub mod then;
pub mod when;
pub mod world;
