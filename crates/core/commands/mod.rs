use std::io::{self, Write};

use libris::{
    widget::{Event, Widget},
    BookRecord, Catalog, CatalogConfig, Client,
};

use clap::Subcommand;
use eyre::{eyre, Context, Result};
use log::{info, trace};

use crate::{app, surface::LatestList};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search the catalog once and print the results
    #[clap(arg_required_else_help = true)]
    Search {
        /// Free text to search for
        query: String,

        /// What the query is matched against: title, author or isbn
        #[clap(short, long, default_value = "title")]
        by: String,

        /// Only show books that are available as e-books
        #[clap(short, long)]
        ebooks_only: bool,

        /// Sort the results by rating, highest first
        #[clap(short, long)]
        sort_rating: bool,

        /// Print the results as JSON instead of a list
        #[clap(long)]
        json: bool,
    },

    /// Search and browse the results interactively
    ///
    /// The list can be filtered to e-books and sorted by rating, and every book can be opened in
    /// a detail view.
    Browse {
        /// Free text to search for straight away
        query: Option<String>,

        /// What the first query is matched against: title, author or isbn
        #[clap(short, long, default_value = "title")]
        by: String,
    },
}

/// Options of a one-shot search.
struct SearchOpts {
    query: String,
    by: String,
    ebooks_only: bool,
    sort_rating: bool,
    json: bool,
}

impl Commands {
    pub fn execute(self, config: CatalogConfig) -> Result<()> {
        match self {
            Commands::Search {
                query,
                by,
                ebooks_only,
                sort_rating,
                json,
            } => {
                let opts = SearchOpts {
                    query,
                    by,
                    ebooks_only,
                    sort_rating,
                    json,
                };
                let catalog: Catalog = Catalog::new(config);
                let stdout = io::stdout();
                search(catalog, opts, &mut stdout.lock())
            }
            Commands::Browse { query, by } => app::browse(config, query, by),
        }
    }
}

/// Runs the search form, filter and sort as widget events and prints the final list.
fn search<C: Client, W: Write>(catalog: Catalog<C>, opts: SearchOpts, out: &mut W) -> Result<()> {
    let mut widget = Widget::init(catalog, LatestList::default());

    widget.handle(Event::Search {
        query: opts.query,
        kind: opts.by,
    })?;
    info!("Found {} books", widget.shelf().len());

    widget.handle(Event::SetEbooksOnly(opts.ebooks_only))?;
    if opts.sort_rating {
        trace!("Sorting results by rating");
        widget.handle(Event::SortByRating)?;
    }

    if opts.json {
        let visible: Vec<&BookRecord> = widget.shelf().visible().map(|(_, record)| record).collect();
        serde_json::to_writer_pretty(&mut *out, &visible).wrap_err("Cannot write results")?;
        writeln!(out).wrap_err("Cannot write results")
    } else {
        let view = widget
            .surface()
            .view()
            .ok_or_else(|| eyre!("Internal error: the widget did not render a list"))?;
        writeln!(out, "{view}").wrap_err("Cannot write results")
    }
}
