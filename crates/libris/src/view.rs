//! Declarative list and detail views derived from a [`Shelf`].
//!
//! Every region of a view is already rendered to the text the page shows, e.g. `Rating: 4.5`.
//! Views are never read back, state stays in the [`Shelf`].

use std::fmt;

use crate::{record::BookRecord, shelf::Shelf};

/// One entry of the result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    /// Shelf index of the record, used to open its detail view.
    pub index: usize,
    /// Title region.
    pub title: String,
    /// Author region.
    pub author: String,
    /// Cover image region.
    pub cover: String,
    /// Rating region.
    pub rating: String,
    /// E-book access region.
    pub ebook: String,
}

impl ListItem {
    fn render(index: usize, record: &BookRecord) -> Self {
        Self {
            index,
            title: record.title().to_owned(),
            author: format!("Author: {}", record.author_name()),
            cover: format!("Cover: {}", record.cover_i()),
            rating: format!("Rating: {}", record.ratings_sortable()),
            ebook: format!("E-book: {}", record.ebook_access()),
        }
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "    {}", self.author)?;
        writeln!(f, "    {}", self.cover)?;
        writeln!(f, "    {}", self.rating)?;
        write!(f, "    {}", self.ebook)
    }
}

/// The rendered result list: one [`ListItem`] per visible shelf record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListView {
    /// Visible items in presentation order.
    pub items: Vec<ListItem>,
    /// Number of records on the shelf, hidden ones included.
    pub total: usize,
    /// Whether the e-book filter is on.
    pub ebooks_only: bool,
}

impl ListView {
    /// Renders the visible records of `shelf`, replacing any previous list entirely.
    #[must_use]
    pub fn render(shelf: &Shelf) -> Self {
        Self {
            items: shelf
                .visible()
                .map(|(index, record)| ListItem::render(index, record))
                .collect(),
            total: shelf.len(),
            ebooks_only: shelf.ebooks_only(),
        }
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} books", self.items.len(), self.total)?;
        if self.ebooks_only {
            f.write_str(" (e-books only)")?;
        }

        for (position, item) in self.items.iter().enumerate() {
            write!(f, "\n\n{:>2}. {item}", position + 1)?;
        }
        Ok(())
    }
}

/// The rendered detail view of a single record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    /// Title region.
    pub title: String,
    /// Author region.
    pub author: String,
    /// First publish year region.
    pub first_publish_year: String,
    /// ISBN region.
    pub isbn: String,
    /// E-book access region.
    pub ebook_access: String,
    /// Rating region.
    pub rating: String,
    /// Cover image region.
    pub cover: String,
}

impl DetailView {
    /// Renders every field of `record`.
    #[must_use]
    pub fn render(record: &BookRecord) -> Self {
        Self {
            title: record.title().to_owned(),
            author: format!("Author: {}", record.author_name()),
            first_publish_year: format!("First Publish Year: {}", record.first_publish_year()),
            isbn: format!("ISBN: {}", record.isbn()),
            ebook_access: format!("E-book Access: {}", record.ebook_access()),
            rating: format!("Rating: {}", record.ratings_sortable()),
            cover: format!("Cover: {}", record.cover_i()),
        }
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        for region in [
            &self.author,
            &self.first_publish_year,
            &self.isbn,
            &self.ebook_access,
            &self.rating,
        ] {
            writeln!(f, "{region}")?;
        }
        write!(f, "{}", self.cover)
    }
}

#[cfg(test)]
mod tests {
    use super::{DetailView, ListView};
    use crate::{record::stub, shelf::Shelf};

    #[test]
    fn list_renders_five_regions_per_visible_record() {
        let mut shelf = Shelf::default();
        shelf.replace(vec![stub("Dune", 4.5, true), stub("Emma", 0.0, false)]);
        shelf.set_ebooks_only(true);

        let view = ListView::render(&shelf);

        assert_eq!(1, view.items.len());
        assert_eq!(2, view.total);
        let item = &view.items[0];
        assert_eq!(0, item.index);
        assert_eq!("Dune", item.title);
        assert_eq!("Author: ", item.author);
        assert_eq!("Cover: No Image", item.cover);
        assert_eq!("Rating: 4.5", item.rating);
        assert_eq!("E-book: Available", item.ebook);
    }

    #[test]
    fn whole_number_ratings_render_without_fraction() {
        let mut shelf = Shelf::default();
        shelf.replace(vec![stub("Emma", 0.0, false), stub("Dune", 4.0, false)]);

        let view = ListView::render(&shelf);
        assert_eq!("Rating: 0", view.items[0].rating);
        assert_eq!("Rating: 4", view.items[1].rating);
    }

    #[test]
    fn detail_renders_seven_labeled_regions() {
        let view = DetailView::render(&stub("Dune", 4.5, false));

        assert_eq!("Dune", view.title);
        assert_eq!("Author: ", view.author);
        assert_eq!("First Publish Year: Unknown", view.first_publish_year);
        assert_eq!("ISBN: Unknown", view.isbn);
        assert_eq!("E-book Access: Not Available", view.ebook_access);
        assert_eq!("Rating: 4.5", view.rating);
        assert_eq!("Cover: No Image", view.cover);
    }

    #[test]
    fn list_display_numbers_items_and_notes_filter() {
        let mut shelf = Shelf::default();
        shelf.replace(vec![stub("Dune", 4.5, true)]);
        shelf.set_ebooks_only(true);

        let text = ListView::render(&shelf).to_string();
        assert!(text.starts_with("Showing 1 of 1 books (e-books only)"), "{text}");
        assert!(text.contains(" 1. Dune\n    Author: "), "{text}");
    }
}
