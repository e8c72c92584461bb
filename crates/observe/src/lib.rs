//! Logging setup shared between the binaries and tests of the workspace.
pub mod tracing;

pub use self::tracing::{initialize, initialize_reentrant};
