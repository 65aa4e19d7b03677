//! Country metadata proxy.
//!
//! Fetches `/metas/countries/<name>/` from the metadata site and returns the
//! content of its `<main>` element. Failures are explicit in
//! [`MetadataClient::fetch`] and collapsed into a fallback fragment by
//! [`MetadataClient::fetch_or_fallback`], which is what the HTTP handler uses.

mod client;
mod extract;

pub use client::{HtmlFragment, MetadataClient, MetadataPage};
pub use extract::{extract_main_content, normalize_country_name};
