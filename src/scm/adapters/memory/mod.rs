//! In-memory SCM backend for tests and local wiring.

mod scm;
mod settings;
mod signature;
mod state;

pub use scm::{BOT_USERNAME, DELIVERY_HEADER, InMemoryScm};
pub use settings::{InMemoryScmSettings, MEMORY_PLUGIN_NAME, MEMORY_PROVIDER};
pub use signature::{SIGNATURE_HEADER, sign_payload, verify_signature};
pub use state::{CommentRecord, CommitStatusRecord, RecordedCall, WebhookRecord};
