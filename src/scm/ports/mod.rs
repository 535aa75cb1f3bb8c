//! Port contracts for SCM backend routing.
//!
//! Ports define the capability interface backends implement and the seam
//! through which recovered failures are reported.

pub mod reporter;
pub mod scm;

pub use reporter::{ErrorReporter, RouterDiagnostic};
#[cfg(test)]
pub use scm::MockScm;
pub use scm::{Scm, ScmError, ScmResult};
