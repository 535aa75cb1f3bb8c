//! Source-control backend routing for scm-router.
//!
//! This module treats any number of source-control backends (GitHub,
//! GitLab, Bitbucket, or the bundled in-memory backend) as one logical
//! service. Backends are loaded from descriptors, keyed by an opaque SCM
//! context, and selected either from an explicit context in a request, by
//! sniffing an inbound webhook, or all at once for fan-out reads. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
