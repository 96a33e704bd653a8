//! Error taxonomy for the geometry core.
//!
//! There are exactly two kinds a caller of the library surface can observe:
//! an internal consistency failure (a programming error somewhere upstream)
//! or a guarded division by a near-zero scalar. Neither is raised by
//! well-formed geometric input; both exist so the kernel and the
//! accelerator never have to guess instead of failing loudly.

use thiserror::Error;

/// Errors surfaced by the geometry core (kernel + accelerator).
///
/// This is distinct from [`InputError`], which belongs to the CLI's parser
/// and is never produced by anything in this crate's library surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An internal invariant was broken: an unrecognised triangle
    /// discriminant reached a dispatch site, a leaf node was built with an
    /// empty triangle view, or a build-time index fell outside the
    /// triangle buffer. These indicate a bug in this crate, not bad input.
    #[error("invariant violated: {detail}")]
    InvariantViolation { detail: String },

    /// A vector division or normalisation was attempted with a divisor
    /// whose magnitude is at or below [`crate::EPSILON`].
    #[error("division by a value within epsilon of zero")]
    DivisionByZero,
}

impl GeometryError {
    pub(crate) fn invariant(detail: impl Into<String>) -> Self {
        GeometryError::InvariantViolation {
            detail: detail.into(),
        }
    }
}

/// Errors raised by the CLI's stdin parser. Never produced by the library
/// surface; kept as its own type because it belongs to a collaborator the
/// core doesn't depend on (see SPEC_FULL.md §7).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// A triangle failed to decode. `index` is the 0-based triangle index
    /// as a string, or the literal `"count"` when the leading triangle
    /// count itself failed to parse.
    #[error("malformed input at triangle {index}: {reason}")]
    Malformed { index: String, reason: String },
}
