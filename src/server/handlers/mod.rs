//! HTTP handlers.

mod location;
mod metadata;
mod script;
mod status;

pub use location::{get_location, location_options, post_location};
pub use metadata::{get_country_metadata, metadata_options};
pub use script::userscript_handler;
pub use status::status_handler;
