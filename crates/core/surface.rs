use std::io::{self, Write};

use libris::{
    view::{DetailView, ListView},
    widget::Surface,
    Error,
};

use log::{debug, error};

/// Draws the widget views as plain text onto a terminal (or any other writer).
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalSurface<W> {
    fn draw(&mut self, text: &dyn std::fmt::Display) {
        if let Err(err) = writeln!(self.out, "\n{text}\n").and_then(|()| self.out.flush()) {
            error!("Cannot write to the terminal: {err}");
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn show_list(&mut self, view: &ListView) {
        self.draw(view);
    }

    fn show_detail(&mut self, view: &DetailView) {
        self.draw(view);
    }

    fn show_error(&mut self, error: &Error) {
        self.draw(&format_args!("Search failed - {error}"));
    }
}

/// Keeps only the most recent list view, for printing once all events have been handled.
#[derive(Default)]
pub struct LatestList {
    view: Option<ListView>,
}

impl LatestList {
    pub const fn view(&self) -> Option<&ListView> {
        self.view.as_ref()
    }
}

impl Surface for LatestList {
    fn show_list(&mut self, view: &ListView) {
        self.view = Some(view.clone());
    }

    fn show_detail(&mut self, _: &DetailView) {}

    // the error is returned by `Widget::handle` and reported on exit
    fn show_error(&mut self, error: &Error) {
        debug!("Search failed - {error}");
    }
}
