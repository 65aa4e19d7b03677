//! Location store: the latest coordinate reading received from the userscript.

mod store;
mod types;

pub use store::{InMemoryLocationStore, LocationStore};
pub use types::{Coordinates, Reading};
