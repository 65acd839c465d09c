mod audio;
mod catalog;
mod entry;
mod ids;

pub use audio::{AudioRef, AudioRefError};
pub use catalog::Catalog;
pub use entry::{CatalogEntry, EntryDraft, EntryValidationError};
pub use ids::{EntryIndex, ParseIndexError};
