//! Event wiring between the catalog, the shelf model and the output surface.

use log::{debug, warn};

use crate::{
    api::{Catalog, Client},
    shelf::Shelf,
    view::{DetailView, ListView},
    Error,
};

/// The output side of the page: where views and errors are shown.
pub trait Surface {
    /// Shows the result list and hides the detail view.
    fn show_list(&mut self, view: &ListView);

    /// Shows the detail view and hides the result list.
    fn show_detail(&mut self, view: &DetailView);

    /// Shows a search failure. The previous list stays as it was.
    fn show_error(&mut self, error: &Error);
}

/// Input events of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Submit the search form.
    Search {
        /// Free text query.
        query: String,
        /// One of `title`, `author` or `isbn`.
        kind: String,
    },
    /// Open the detail view of the visible shelf item at this index.
    Select(usize),
    /// Return from the detail view to the list.
    BackToList,
    /// Change the "e-books only" filter.
    SetEbooksOnly(bool),
    /// Sort the list by rating, highest first.
    SortByRating,
}

/// The book search widget: owns the shelf and renders it to a [`Surface`] on every event.
pub struct Widget<C: Client, S: Surface> {
    catalog: Catalog<C>,
    surface: S,
    shelf: Shelf,
}

impl<C: Client, S: Surface> Widget<C, S> {
    /// Wires the catalog to the surface and shows the initial, empty list.
    pub fn init(catalog: Catalog<C>, mut surface: S) -> Self {
        let shelf = Shelf::default();
        surface.show_list(&ListView::render(&shelf));
        Self {
            catalog,
            surface,
            shelf,
        }
    }

    /// Handles a single event.
    ///
    /// Search failures are shown on the surface and returned so the caller can decide how to
    /// exit; they never leave the widget in an unusable state.
    ///
    /// # Errors
    ///
    /// The [`Error`] of a failed [`Event::Search`].
    pub fn handle(&mut self, event: Event) -> Result<(), Error> {
        debug!("Handling {event:?}");
        match event {
            Event::Search { query, kind } => match self.catalog.search(&query, &kind) {
                Ok(records) => {
                    self.shelf.replace(records);
                    self.show_list();
                }
                Err(err) => {
                    self.surface.show_error(&err);
                    return Err(err);
                }
            },
            Event::Select(index) => {
                if let Some(record) = self.shelf.select(index) {
                    self.surface.show_detail(&DetailView::render(record));
                } else {
                    warn!("No visible book at position {index} - ignoring selection");
                }
            }
            Event::BackToList => {
                self.shelf.back_to_list();
                self.show_list();
            }
            Event::SetEbooksOnly(on) => {
                self.shelf.set_ebooks_only(on);
                self.show_list();
            }
            Event::SortByRating => {
                self.shelf.sort_by_rating();
                self.show_list();
            }
        }
        Ok(())
    }

    /// The model behind the current views.
    #[must_use]
    pub const fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    /// The surface views are shown on.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    fn show_list(&mut self) {
        self.shelf.back_to_list();
        self.surface.show_list(&ListView::render(&self.shelf));
    }
}
