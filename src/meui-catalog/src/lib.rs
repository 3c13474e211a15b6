//! Named component sources for the Me-UI showcase.
//!
//! The catalog is built once and never mutated. Sources are stored exactly
//! as they should be copied or exported; highlighting is a display concern
//! handled by `meui-syntax` and never feeds back into this text.
//!
//! ```rust
//! use meui_catalog::catalog;
//!
//! let entry = catalog().get("BookingBar").unwrap();
//! assert_eq!(entry.display_name(), "Booking Bar");
//! ```

#![deny(missing_docs)]

pub mod catalog;

pub use catalog::{
    catalog, display_name, import_snippet, Catalog, CatalogError, ComponentSource, Result,
    PACKAGE_NAME,
};
