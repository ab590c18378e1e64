//! View error types.

use thiserror::Error;

/// Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors raised by the view router.
///
/// Unknown pages are not errors; they render the placeholder page.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The document has no element to mount the content region on.
    #[error("mount point '#{id}' not found in document")]
    MissingMountPoint { id: String },

    /// A page identifier did not match any known page.
    ///
    /// Only returned by strict parsing ([`crate::PageId`]'s `FromStr`);
    /// navigation itself never fails on unknown ids.
    #[error("unknown page '{0}'. Available pages: {available}", available = crate::PageId::slugs().join(", "))]
    UnknownPage(String),

    /// Unknown theme name.
    #[error("unknown theme '{0}' (expected 'dark' or 'light')")]
    UnknownTheme(String),

    /// Template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}
