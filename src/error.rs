//! Public error types for radixwatch.

use thiserror::Error;

use crate::ObserverId;

/// Returned by deregistration when the observer is not currently registered.
///
/// Mirrors set-removal semantics: removing an absent member is an error
/// surfaced to the caller, not a silent no-op.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("observer {0} is not registered")]
pub struct NotRegistered(pub ObserverId);
