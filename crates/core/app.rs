use libris::{
    shelf::{Screen, Shelf},
    widget::{Event, Surface, Widget},
    Catalog, CatalogConfig, Client, SearchKind,
};

use eyre::Result;
use log::{debug, trace};

use crate::{
    interact::{user_input, user_select},
    surface::TerminalSurface,
};

const SEARCH_KINDS: [SearchKind; 3] = [SearchKind::Title, SearchKind::Author, SearchKind::Isbn];

/// What the user asked for from one of the menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    OpenBook,
    NewSearch,
    ToggleEbooks,
    SortByRating,
    BackToList,
    Quit,
}

impl Choice {
    const fn label(self, ebooks_only: bool) -> &'static str {
        match self {
            Self::OpenBook => "Open a book",
            Self::NewSearch => "New search",
            Self::ToggleEbooks if ebooks_only => "Show all books",
            Self::ToggleEbooks => "Show e-books only",
            Self::SortByRating => "Sort by rating",
            Self::BackToList => "Back to list",
            Self::Quit => "Quit",
        }
    }
}

/// Menu choices offered for the current screen of `shelf`.
fn menu(shelf: &Shelf) -> Vec<Choice> {
    match shelf.screen() {
        Screen::Detail(_) => vec![Choice::BackToList, Choice::Quit],
        Screen::List => {
            let mut choices = Vec::with_capacity(5);
            if shelf.visible().next().is_some() {
                choices.push(Choice::OpenBook);
            }
            choices.push(Choice::NewSearch);
            if !shelf.is_empty() {
                choices.extend([Choice::ToggleEbooks, Choice::SortByRating]);
            }
            choices.push(Choice::Quit);
            choices
        }
    }
}

/// Runs the interactive page until the user quits.
pub fn browse(config: CatalogConfig, query: Option<String>, kind: String) -> Result<()> {
    let catalog: Catalog = Catalog::new(config);
    let mut widget = Widget::init(catalog, TerminalSurface::stdout());

    if let Some(query) = query {
        dispatch(&mut widget, Event::Search { query, kind });
    }

    while let Some(event) = next_event(widget.shelf())? {
        dispatch(&mut widget, event);
    }

    trace!("Leaving browse mode");
    Ok(())
}

fn dispatch<C: Client, S: Surface>(widget: &mut Widget<C, S>, event: Event) {
    // search errors have already been drawn on the surface, the page stays usable.
    if let Err(err) = widget.handle(event) {
        debug!("Search failed: {err}");
    }
}

/// Prompts until the user picks something that maps to an event, `None` once they quit.
fn next_event(shelf: &Shelf) -> Result<Option<Event>> {
    loop {
        let choices = menu(shelf);
        let labels: Vec<_> = choices
            .iter()
            .map(|choice| choice.label(shelf.ebooks_only()))
            .collect();

        let choice = match user_select("What next?", &labels)? {
            Some(index) => choices[index],
            None => Choice::Quit,
        };

        let event = match choice {
            Choice::OpenBook => pick_book(shelf)?.map(Event::Select),
            Choice::NewSearch => Some(search_form()?),
            Choice::ToggleEbooks => Some(Event::SetEbooksOnly(!shelf.ebooks_only())),
            Choice::SortByRating => Some(Event::SortByRating),
            Choice::BackToList => Some(Event::BackToList),
            Choice::Quit => return Ok(None),
        };

        // a cancelled book selection goes back to the menu
        if event.is_some() {
            return Ok(event);
        }
    }
}

fn pick_book(shelf: &Shelf) -> Result<Option<usize>> {
    let (indices, titles): (Vec<_>, Vec<_>) = shelf
        .visible()
        .map(|(index, record)| (index, record.title()))
        .unzip();

    Ok(user_select("Which book?", &titles)?.map(|position| indices[position]))
}

fn search_form() -> Result<Event> {
    let query = user_input("Search for")?;
    let kind = user_select("Search by", &SEARCH_KINDS)?
        .map_or(SearchKind::Title, |index| SEARCH_KINDS[index]);

    Ok(Event::Search {
        query,
        kind: kind.to_string(),
    })
}
