//! HTML content extraction
//!
//! Pure functions over rendered HTML:
//! - text: visible text nodes joined by newlines
//! - links / images: anchors with an href, images with a src
//! - tables: every `<table>` flattened into headers and rows
//! - selector: CSS / XPath selector classification and static querying

pub mod html;
pub mod selector;
pub mod tables;

pub use html::{extract_images, extract_links, extract_text, truncate_preview};
pub use selector::{SelectorKind, query_static};
pub use tables::extract_tables;
