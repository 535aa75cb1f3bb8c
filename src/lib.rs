//! scm-router: one logical SCM over many source-control backends.
//!
//! This crate lets a CI platform talk to several source-control providers
//! at once. Each backend is registered under an SCM context key; the router
//! forwards every call to the backend named by the request, finds the owner
//! of an inbound webhook, and merges fan-out reads across all backends.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Context keys, descriptors, webhook inputs, request and
//!   response values
//! - **Ports**: The `Scm` capability trait and the error-reporting seam
//! - **Adapters**: The in-memory backend and the error reporters
//! - **Services**: Registry, loader, classifier, aggregator and router
//!
//! # Modules
//!
//! - [`scm`]: Backend registry, routing and the bundled backends

pub mod scm;
