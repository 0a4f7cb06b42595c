//! The in-memory model behind the list and detail views.
//!
//! A [`Shelf`] holds the records of the latest search in presentation order together with a
//! visibility flag per record. Filtering and sorting operate on this model only, views are
//! always derived from it (see [`crate::view`]).

use log::trace;

use crate::record::{BookRecord, EbookAccess};

/// Which of the two views is currently shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// The result list is shown.
    List,
    /// The detail view of the shelf item at this index is shown.
    Detail(usize),
}

/// One record of the shelf and whether it passes the current filter.
#[derive(Clone, Debug, PartialEq)]
pub struct ShelfItem {
    record: BookRecord,
    visible: bool,
}

impl ShelfItem {
    /// The record of this item.
    #[must_use]
    pub const fn record(&self) -> &BookRecord {
        &self.record
    }

    /// Whether the item is shown in the list.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }
}

/// Ordered records of one search plus the current filter and screen.
#[derive(Debug)]
pub struct Shelf {
    items: Vec<ShelfItem>,
    ebooks_only: bool,
    screen: Screen,
}

impl Default for Shelf {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            ebooks_only: false,
            screen: Screen::List,
        }
    }
}

impl Shelf {
    /// Replaces all records with the results of a new search.
    ///
    /// The current e-book filter is applied to the new records and the list screen is shown.
    pub fn replace(&mut self, records: Vec<BookRecord>) {
        trace!("Replacing shelf contents with {} records", records.len());
        self.items = records
            .into_iter()
            .map(|record| ShelfItem {
                record,
                visible: true,
            })
            .collect();
        self.apply_filter();
        self.screen = Screen::List;
    }

    /// Shows only e-books when `on`, every record otherwise.
    ///
    /// Applying the same state again leaves the visible set unchanged.
    pub fn set_ebooks_only(&mut self, on: bool) {
        self.ebooks_only = on;
        self.apply_filter();
    }

    /// Reorders the records by rating, highest first.
    ///
    /// Unrated records hold a rating of `0` and sort with it. Equal ratings keep their relative
    /// order and the e-book filter still holds afterwards.
    pub fn sort_by_rating(&mut self) {
        self.items.sort_by(|a, b| {
            b.record
                .ratings_sortable()
                .total_cmp(&a.record.ratings_sortable())
        });
        self.apply_filter();
    }

    /// Switches to the detail screen of the item at `index`.
    ///
    /// Returns the record shown, or `None` (and leaves the screen alone) when there is no visible
    /// item at `index`.
    pub fn select(&mut self, index: usize) -> Option<&BookRecord> {
        let item = self.items.get(index).filter(|item| item.visible)?;
        self.screen = Screen::Detail(index);
        Some(&item.record)
    }

    /// Switches back to the list screen. The records are left untouched.
    pub fn back_to_list(&mut self) {
        self.screen = Screen::List;
    }

    /// The screen currently shown.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Whether only e-books are shown.
    #[must_use]
    pub const fn ebooks_only(&self) -> bool {
        self.ebooks_only
    }

    /// All items in presentation order, hidden ones included.
    #[must_use]
    pub fn items(&self) -> &[ShelfItem] {
        &self.items
    }

    /// Visible items with their shelf index, in presentation order.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &BookRecord)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.visible)
            .map(|(index, item)| (index, &item.record))
    }

    /// Number of records on the shelf, hidden ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the shelf holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn apply_filter(&mut self) {
        let ebooks_only = self.ebooks_only;
        for item in &mut self.items {
            item.visible = !ebooks_only || item.record.ebook_access() == EbookAccess::Available;
        }
    }
}
