#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # libris
//!
//! libris searches a remote book catalog (the Google Books volumes API) and maps each result into
//! a [`BookRecord`]. Results are kept on a [`shelf::Shelf`] that can be filtered to e-books and
//! sorted by rating, and are rendered as a list or a detail [`view`].
//!
//! The [`widget::Widget`] ties these together: it is initialised once with a [`Catalog`] and a
//! [`widget::Surface`] and then driven by [`widget::Event`]s.

mod api;
pub mod config;
mod error;
pub mod record;
pub mod shelf;
pub mod view;
pub mod widget;

pub use api::{Catalog, Client, SearchKind};
pub use config::CatalogConfig;
pub use error::{Error, ErrorKind};
pub use record::BookRecord;

use log::trace;

/// Search the catalog for `query` by `kind` (`title`, `author` or `isbn`) using the default
/// HTTP client.
///
/// # Errors
///
/// An `Err` is returned when `kind` is not a known search kind, when the request fails or when
/// the response cannot be parsed into book records.
#[inline]
pub fn search(config: CatalogConfig, query: &str, kind: &str) -> Result<Vec<BookRecord>, Error> {
    trace!("Search books by {kind} of '{query}'");
    Catalog::<reqwest::blocking::Client>::new(config).search(query, kind)
}
