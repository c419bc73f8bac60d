use scraper::Html;

use crate::days::Days;
use crate::menu::MenuEntry;
use crate::parse::submenu::submenu;
use crate::parse::text_from_selection::text_blocks;
use crate::parse::Error;
use crate::static_selector;

pub fn entry(html: &Html, url: &str, days: &Days) -> Result<MenuEntry, Error> {
    static_selector!(SECTION_SELECTOR <- "section");
    static_selector!(PARAGRAPH_SELECTOR <- "p");

    // the weekly menu is the second section on the page
    let weekly_menu = html
        .select(&SECTION_SELECTOR)
        .nth(1)
        .ok_or_else(|| Error::html_parse_error("Page should have a second section"))?;
    let blocks = text_blocks(&PARAGRAPH_SELECTOR, weekly_menu);
    let lines = submenu(&blocks, days.today_fi(), days.tomorrow_fi());

    Ok(MenuEntry::new("KuuKuu", ":kuukuu:", &lines, url))
}
