use log::{info, trace};
use serde::{de::IgnoredAny, Deserialize, Deserializer};

use crate::{
    record::{BookRecord, EbookAccess, PublishYear, NO_IMAGE, UNKNOWN},
    Error,
};

use super::Client;

pub(crate) fn get_records<C: Client>(client: &C, url: &str) -> Result<Vec<BookRecord>, Error> {
    info!("Searching for books using Google Books API");
    let GoogleModel { items } = client.get_json(url)?;

    trace!("Request was successful");

    Ok(items.into_iter().map(BookRecord::from).collect())
}

/// Search response, the `items` array is the only required part of it.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct GoogleModel {
    items: Vec<Item>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(rename_all = "camelCase")]
struct Item {
    volume_info: VolumeInfo,
    #[serde(default)]
    access_info: Option<AccessInfo>,
}

/// Volume information from the Google Book API
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: String,
    #[serde(default)]
    authors: Option<Vec<String>>,
    #[serde(default)]
    industry_identifiers: Option<Vec<IndustryIdentifier>>,
    image_links: Option<ImageLinks>,
    published_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_rating")]
    average_rating: Option<f64>,
}

/// Any rating that is not a number (a string, `null`, ...) is read as no rating.
fn lenient_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rating {
        Number(f64),
        Other(IgnoredAny),
    }

    Ok(match Rating::deserialize(deserializer)? {
        Rating::Number(rating) => Some(rating),
        Rating::Other(_) => None,
    })
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct IndustryIdentifier {
    identifier: String,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct ImageLinks {
    thumbnail: Option<String>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct AccessInfo {
    epub: Option<Epub>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(rename_all = "camelCase")]
struct Epub {
    is_available: Option<bool>,
}

impl From<Item> for BookRecord {
    fn from(item: Item) -> Self {
        // Deconstruct item to take ownership of fields (avoids cloning).
        let Item {
            volume_info:
                VolumeInfo {
                    title,
                    authors,
                    industry_identifiers,
                    image_links,
                    published_date,
                    average_rating,
                },
            access_info,
        } = item;

        let mut authors = authors.unwrap_or_default();
        authors.retain(|author| !author.is_empty());

        let isbn = industry_identifiers
            .into_iter()
            .flatten()
            .next()
            .map_or_else(|| UNKNOWN.to_owned(), |id| id.identifier);

        let cover = image_links
            .and_then(|links| links.thumbnail)
            .unwrap_or_else(|| NO_IMAGE.to_owned());

        let epub_available = access_info
            .and_then(|access| access.epub)
            .and_then(|epub| epub.is_available)
            .unwrap_or(false);

        let year = published_date
            .as_deref()
            .map_or(PublishYear::Unknown, PublishYear::from_date);

        BookRecord::new(
            title,
            authors.join(", "),
            isbn,
            cover,
            EbookAccess::from(epub_available),
            year,
            average_rating.unwrap_or(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{get_records, GoogleModel};
    use crate::{
        api::{impl_text_producer, MockClient},
        record::{EbookAccess, PublishYear},
        BookRecord, Error, ErrorKind,
    };

    const SEARCH_JSON: &str = include_str!("../../tests/data/google_books_search.json");

    impl_text_producer! {
        ValidJsonProducer => Ok(SEARCH_JSON.to_owned()),
        NoItemsProducer => Ok(r#"{ "kind": "books#volumes", "totalItems": 0 }"#.to_owned()),
    }

    fn map_item(json: &str) -> BookRecord {
        let model: GoogleModel = serde_json::from_str(&format!(r#"{{ "items": [{json}] }}"#))
            .expect("test item should deserialize");
        model.items.into_iter().map(BookRecord::from).next().unwrap()
    }

    #[test]
    fn fully_populated_item_maps_every_field() {
        let record = map_item(
            r#"{
                "volumeInfo": {
                    "title": "The Hobbit",
                    "authors": ["J. R. R. Tolkien", "Christopher Tolkien"],
                    "industryIdentifiers": [
                        { "type": "ISBN_13", "identifier": "9780547928227" },
                        { "type": "ISBN_10", "identifier": "054792822X" }
                    ],
                    "imageLinks": { "thumbnail": "http://books.google.com/hobbit.jpg" },
                    "publishedDate": "2012-09-18",
                    "averageRating": 4.5
                },
                "accessInfo": { "epub": { "isAvailable": true } }
            }"#,
        );

        assert_eq!("The Hobbit", record.title());
        assert_eq!("J. R. R. Tolkien, Christopher Tolkien", record.author_name());
        assert_eq!("9780547928227", record.isbn());
        assert_eq!("http://books.google.com/hobbit.jpg", record.cover_i());
        assert_eq!(EbookAccess::Available, record.ebook_access());
        assert_eq!(PublishYear::Year(2012), record.first_publish_year());
        assert!((record.ratings_sortable() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn bare_item_maps_to_sentinels() {
        let record = map_item(r#"{ "volumeInfo": { "title": "Bare" } }"#);

        assert_eq!("", record.author_name(), "absent authors are an empty list");
        assert_eq!("Unknown", record.isbn());
        assert_eq!("No Image", record.cover_i());
        assert_eq!(EbookAccess::NotAvailable, record.ebook_access());
        assert_eq!(PublishYear::Unknown, record.first_publish_year());
        assert!(record.ratings_sortable().abs() < f64::EPSILON);
    }

    #[test]
    fn null_authors_are_an_empty_list() {
        let record = map_item(r#"{ "volumeInfo": { "title": "x", "authors": null } }"#);
        assert_eq!("", record.author_name());
    }

    #[test]
    fn non_numeric_rating_is_zero() {
        let text = map_item(r#"{ "volumeInfo": { "title": "x", "averageRating": "unknown" } }"#);
        let null = map_item(r#"{ "volumeInfo": { "title": "x", "averageRating": null } }"#);

        assert!(text.ratings_sortable().abs() < f64::EPSILON);
        assert!(null.ratings_sortable().abs() < f64::EPSILON);
    }

    #[test]
    fn odd_optional_fields_do_not_drop_other_items() {
        let json = r#"{ "items": [
            { "volumeInfo": { "title": "x", "averageRating": "unknown", "authors": null,
                              "industryIdentifiers": null },
              "accessInfo": { "epub": null } },
            { "volumeInfo": { "title": "ok", "averageRating": 3.5 } }
        ] }"#;
        let model: GoogleModel = serde_json::from_str(json).expect("both items should deserialize");
        let records: Vec<BookRecord> = model.items.into_iter().map(BookRecord::from).collect();

        assert_eq!(2, records.len());
        assert_eq!("Unknown", records[0].isbn());
        assert_eq!(EbookAccess::NotAvailable, records[0].ebook_access());
        assert!((records[1].ratings_sortable() - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_identifier_list_is_unknown() {
        let record = map_item(r#"{ "volumeInfo": { "title": "x", "industryIdentifiers": [] } }"#);
        assert_eq!("Unknown", record.isbn());
    }

    #[test]
    fn image_links_without_thumbnail_is_no_image() {
        let record = map_item(
            r#"{ "volumeInfo": { "title": "x", "imageLinks": { "smallThumbnail": "http://s" } } }"#,
        );
        assert_eq!("No Image", record.cover_i());
    }

    #[test]
    fn epub_flag_false_or_missing_is_not_available() {
        let explicit = map_item(
            r#"{ "volumeInfo": { "title": "x" }, "accessInfo": { "epub": { "isAvailable": false } } }"#,
        );
        let no_epub = map_item(r#"{ "volumeInfo": { "title": "x" }, "accessInfo": {} }"#);

        assert_eq!(EbookAccess::NotAvailable, explicit.ebook_access());
        assert_eq!(EbookAccess::NotAvailable, no_epub.ebook_access());
    }

    #[test]
    fn search_response_maps_in_catalog_order() {
        let records = get_records(&MockClient::<ValidJsonProducer>::default(), "test")
            .expect("ValidJsonProducer always produces a valid json String to be deserialized");

        let titles: Vec<_> = records.iter().map(BookRecord::title).collect();
        assert_eq!(
            vec!["The Fellowship of the Ring", "The Silmarillion", "Tolkien: A Biography"],
            titles
        );
        assert_eq!("Unknown", records[2].isbn());
        assert_eq!("", records[2].author_name());
    }

    #[test]
    fn missing_items_array_is_a_parse_error() {
        let err = get_records(&MockClient::<NoItemsProducer>::default(), "test").unwrap_err();
        assert_eq!(ErrorKind::Parse, Error::kind(&err));
    }
}
