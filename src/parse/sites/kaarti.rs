use scraper::Html;

use crate::days::Days;
use crate::menu::MenuEntry;
use crate::parse::submenu::submenu;
use crate::parse::text_from_selection::{select_one, text_blocks};
use crate::parse::Error;
use crate::static_selector;

/// Python-style capitalize: first letter upper case, the rest lower case.
fn sentence_case(line: &str) -> String {
    let mut chars = line.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

pub fn entry(html: &Html, url: &str, days: &Days) -> Result<MenuEntry, Error> {
    static_selector!(WEEKLY_MENU_SELECTOR <- "div#column1Content");
    static_selector!(PARAGRAPH_SELECTOR <- "p");

    let weekly_menu =
        select_one(&WEEKLY_MENU_SELECTOR, html.root_element(), "page", "weekly menu")?;
    let blocks = text_blocks(&PARAGRAPH_SELECTOR, weekly_menu);
    // the site writes everything in capitals
    let lines: Vec<String> = submenu(&blocks, days.today_fi(), days.tomorrow_fi())
        .iter()
        .map(|line| sentence_case(line))
        .collect();

    Ok(MenuEntry::new("Kaarti", ":kaarti:", &lines, url))
}
