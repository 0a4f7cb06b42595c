use std::{fmt, str::FromStr};

use log::{debug, trace};
use serde::de::DeserializeOwned;

pub(crate) mod google_books;

use crate::{config::CatalogConfig, BookRecord, Error, ErrorKind};

/// A blocking HTTP client able to fetch and deserialize JSON documents.
pub trait Client
where
    Self: Default,
{
    /// Sends a GET request to `url` and deserializes the JSON body.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::Network`] error when the request fails and an [`ErrorKind::Parse`] error
    /// when the body is not the expected JSON shape.
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::wrap(ErrorKind::Network, e))
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Parse, e)))
    }
}

/// The field a search query is matched against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchKind {
    /// Match the query against book titles.
    Title,
    /// Match the query against author names.
    Author,
    /// Match the query against ISBNs.
    Isbn,
}

impl SearchKind {
    /// Builds the catalog query expression, e.g. `inauthor:tolkien`.
    #[must_use]
    pub fn expression(self, query: &str) -> String {
        match self {
            Self::Title => format!("intitle:{query}"),
            Self::Author => format!("inauthor:{query}"),
            // remove hyphens and spaces from ISBN-13 (if applicable)
            Self::Isbn => {
                let isbn: String = query
                    .chars()
                    .filter(|c| *c != '-' && !c.is_whitespace())
                    .collect();
                format!("isbn:{isbn}")
            }
        }
    }

    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Isbn => "isbn",
        }
    }
}

impl FromStr for SearchKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "isbn" => Ok(Self::Isbn),
            _ => Err(Error::new(
                ErrorKind::InvalidSearchKind,
                format!("'{s}' is not one of title, author or isbn"),
            )),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client side of the book catalog: builds search requests and maps the results.
pub struct Catalog<C: Client = reqwest::blocking::Client> {
    client: C,
    config: CatalogConfig,
}

impl<C: Client> Catalog<C> {
    /// Creates a catalog using a default `C` client.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: C::default(),
            config,
        }
    }

    /// The configuration requests are built from.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Searches the catalog for `query` matched against the field named by `kind`.
    ///
    /// At most [`CatalogConfig::max_results`] records are returned, in the order the catalog
    /// ranked them.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::InvalidSearchKind`] error, before any request is made, when `kind` is not
    /// one of `title`, `author` or `isbn`.
    /// An [`ErrorKind::Network`] error when the request fails.
    /// An [`ErrorKind::Parse`] error when the response has no `items` array or is malformed.
    pub fn search(&self, query: &str, kind: &str) -> Result<Vec<BookRecord>, Error> {
        let kind = kind.parse::<SearchKind>()?;
        self.search_by(query, kind)
    }

    /// Same as [`Catalog::search`] with an already validated [`SearchKind`].
    ///
    /// # Errors
    ///
    /// See [`Catalog::search`].
    pub fn search_by(&self, query: &str, kind: SearchKind) -> Result<Vec<BookRecord>, Error> {
        let expression = kind.expression(query);
        debug!("Searching the catalog with '{expression}'");

        let url = self.search_url(&expression)?;
        let records = google_books::get_records(&self.client, url.as_str())?;

        trace!("Catalog returned {} records", records.len());
        Ok(records)
    }

    fn search_url(&self, expression: &str) -> Result<reqwest::Url, Error> {
        let max_results = self.config.max_results.to_string();
        let mut params = vec![("q", expression), ("maxResults", max_results.as_str())];
        if let Some(key) = &self.config.api_key {
            params.push(("key", key.as_str()));
        }

        reqwest::Url::parse_with_params(&self.config.base_url, &params)
            .map_err(|e| Error::wrap(ErrorKind::Parse, e))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, MockClient, NetworkErrorProducer, Producer, URL_SINK,
};
