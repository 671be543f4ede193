//! Helper functions for templates
//!
//! These functions back the Tera filters and functions registered by the
//! template renderer: URL generation, image tags, dates and the table of
//! contents.

mod date;
mod html;
mod toc;
mod url;

pub use date::*;
pub use html::*;
pub use toc::*;
pub use url::*;
