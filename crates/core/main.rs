#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::process;

mod app;
mod commands;
mod interact;
mod surface;

use commands::Commands;

use libris::CatalogConfig;

use clap::{Args, Parser};
use eyre::Context;
use log::trace;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        command,
        global_opts:
            GlobalOpts {
                api_key,
                base_url,
                verbosity,
                quiet,
            },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    let config = CatalogConfig::default()
        .with_base_url(base_url)
        .with_api_key(api_key);

    if config.api_key.is_some() {
        trace!("Using the API key from the command line or environment");
    }

    command.execute(config)
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new()
        .verbosity(verbosity)
        .init()
        .wrap_err("Cannot set up logging")
}

#[derive(Parser)]
#[clap(name = "libris")]
#[clap(about = "Search a book catalog and browse the results in the terminal")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// API key for the catalog, requests are sent without one when it is not set
    #[clap(long, env = "LIBRIS_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Search endpoint of the catalog API
    #[clap(
        long,
        env = "LIBRIS_BASE_URL",
        default_value = libris::config::GOOGLE_BOOKS_URL,
        global = true
    )]
    base_url: String,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Only print errors, the results are still written to stdout.
    #[clap(short, long, global = true)]
    quiet: bool,
}
