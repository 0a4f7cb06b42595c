//! The normalized book record produced for every catalog search result.

use std::fmt;

use serde::{Serialize, Serializer};

/// Placeholder used when the catalog has no value for a text field.
pub const UNKNOWN: &str = "Unknown";
/// Placeholder used when the catalog has no cover thumbnail.
pub const NO_IMAGE: &str = "No Image";

/// A normalized, immutable representation of one catalog search result.
///
/// Records are only built from a raw catalog item (see [`crate::Catalog::search`]) and expose
/// their fields through getters so they cannot change after construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BookRecord {
    title: String,
    author_name: String,
    isbn: String,
    cover_i: String,
    ebook_access: EbookAccess,
    first_publish_year: PublishYear,
    ratings_sortable: f64,
}

impl BookRecord {
    pub(crate) const fn new(
        title: String,
        author_name: String,
        isbn: String,
        cover_i: String,
        ebook_access: EbookAccess,
        first_publish_year: PublishYear,
        ratings_sortable: f64,
    ) -> Self {
        Self {
            title,
            author_name,
            isbn,
            cover_i,
            ebook_access,
            first_publish_year,
            ratings_sortable,
        }
    }

    /// Title of the book.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Authors joined by `", "`, empty when the catalog lists no authors.
    #[must_use]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// First industry identifier of the book or [`UNKNOWN`].
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Thumbnail URL of the cover or [`NO_IMAGE`].
    #[must_use]
    pub fn cover_i(&self) -> &str {
        &self.cover_i
    }

    /// Whether the book is available as an e-book.
    #[must_use]
    pub const fn ebook_access(&self) -> EbookAccess {
        self.ebook_access
    }

    /// Year of first publication.
    #[must_use]
    pub const fn first_publish_year(&self) -> PublishYear {
        self.first_publish_year
    }

    /// Average rating, `0` when the book has not been rated.
    #[must_use]
    pub const fn ratings_sortable(&self) -> f64 {
        self.ratings_sortable
    }
}

/// E-book availability of a [`BookRecord`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum EbookAccess {
    /// An e-pub edition is available.
    Available,
    /// No e-pub edition is available.
    #[serde(rename = "Not Available")]
    NotAvailable,
}

impl EbookAccess {
    /// Label used when rendering the access value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::NotAvailable => "Not Available",
        }
    }
}

impl From<bool> for EbookAccess {
    fn from(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::NotAvailable
        }
    }
}

impl fmt::Display for EbookAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Year of first publication of a [`BookRecord`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PublishYear {
    /// The year parsed from the catalog publication date.
    Year(i32),
    /// The catalog has no (usable) publication date.
    Unknown,
}

impl PublishYear {
    /// Parses the leading year of a `YYYY`, `YYYY-MM` or `YYYY-MM-DD` date string.
    ///
    /// Anything without a numeric leading year is [`PublishYear::Unknown`].
    #[must_use]
    pub fn from_date(date: &str) -> Self {
        // date parts = Year-Month-Day, where Month and Day are often omitted.
        date.trim()
            .split('-')
            .next()
            .filter(|year| !year.is_empty())
            .and_then(|year| year.parse().ok())
            .map_or(Self::Unknown, Self::Year)
    }
}

impl fmt::Display for PublishYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{year}"),
            Self::Unknown => f.write_str(UNKNOWN),
        }
    }
}

impl Serialize for PublishYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Year(year) => serializer.serialize_i32(*year),
            Self::Unknown => serializer.serialize_str(UNKNOWN),
        }
    }
}

#[cfg(test)]
pub(crate) fn stub(title: &str, rating: f64, ebook: bool) -> BookRecord {
    BookRecord::new(
        title.to_owned(),
        String::new(),
        UNKNOWN.to_owned(),
        NO_IMAGE.to_owned(),
        ebook.into(),
        PublishYear::Unknown,
        rating,
    )
}

#[cfg(test)]
mod tests {
    use super::{stub, EbookAccess, PublishYear};

    #[test]
    fn publish_year_takes_leading_year_of_any_date_precision() {
        assert_eq!(PublishYear::Year(2004), PublishYear::from_date("2004"));
        assert_eq!(PublishYear::Year(2004), PublishYear::from_date("2004-05"));
        assert_eq!(PublishYear::Year(2004), PublishYear::from_date("2004-05-01"));
    }

    #[test]
    fn publish_year_is_unknown_for_garbage() {
        assert_eq!(PublishYear::Unknown, PublishYear::from_date(""));
        assert_eq!(PublishYear::Unknown, PublishYear::from_date("2022@apples"));
        assert_eq!(PublishYear::Unknown, PublishYear::from_date("-05"));
    }

    #[test]
    fn ebook_access_labels() {
        assert_eq!("Available", EbookAccess::Available.to_string());
        assert_eq!("Not Available", EbookAccess::NotAvailable.to_string());
    }

    #[test]
    fn record_serializes_with_sentinels() {
        let json = serde_json::to_value(stub("Dune", 0.0, false)).unwrap();

        assert_eq!("Dune", json["title"]);
        assert_eq!("Unknown", json["isbn"]);
        assert_eq!("No Image", json["cover_i"]);
        assert_eq!("Not Available", json["ebook_access"]);
        assert_eq!("Unknown", json["first_publish_year"]);
        assert_eq!(0.0, json["ratings_sortable"]);
    }

    #[test]
    fn known_year_serializes_as_number() {
        let json = serde_json::to_value(PublishYear::Year(1954)).unwrap();
        assert_eq!(1954, json);
    }
}
