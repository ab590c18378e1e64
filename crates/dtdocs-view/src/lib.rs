//! View router for the DTEmpire documentation site.
//!
//! The site is a single page: one content region whose contents are fully
//! replaced on every navigation. This crate models that page without a
//! browser:
//!
//! - [`PageId`] / [`Route`]: the closed set of pages and the navigation intent
//! - [`pages::build`]: pure page builders (route in, [`Rendered`] out)
//! - [`Document`]: a DOM-like element registry with the content region,
//!   breadcrumb and navigation entries
//! - [`ViewRouter`]: applies rendered pages to the document, wires click
//!   listeners and drives the in-page console
//!
//! # Example
//!
//! ```
//! use dtdocs_view::{Document, PageId, ViewRouter};
//!
//! let mut router = ViewRouter::new(Document::shell("DTEmpire Docs")).unwrap();
//! router.navigate(PageId::Lavalink).unwrap();
//!
//! let nav = router.document().get("nav-lavalink").unwrap();
//! assert!(nav.has_class("active"));
//! ```

mod console;
mod document;
mod error;
mod page;
pub mod pages;
mod router;
mod shell;
mod state;

pub use console::{ConsoleEffect, ConsoleReply, PROMPT, execute as execute_command};
pub use document::{
    BREADCRUMB_ID, CONTENT_REGION_ID, Document, Element, Listener, TERMINAL_OUTPUT_ID,
};
pub use error::{ViewError, ViewResult};
pub use page::{Breadcrumb, NavSection, PageId, Route};
pub use pages::Rendered;
pub use router::{ClickOutcome, Navigation, ViewRouter};
pub use state::{CssVar, Theme, ViewState};
