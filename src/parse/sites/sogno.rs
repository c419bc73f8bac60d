use scraper::Html;

use crate::days::Days;
use crate::menu::MenuEntry;
use crate::parse::submenu::submenu;
use crate::parse::text_from_selection::{select_one, text_blocks};
use crate::parse::Error;
use crate::static_selector;

pub fn entry(html: &Html, url: &str, days: &Days) -> Result<MenuEntry, Error> {
    static_selector!(WEEKLY_MENU_SELECTOR <- "div.mainTextWidgetContent");
    static_selector!(PARAGRAPH_SELECTOR <- "p");

    let weekly_menu =
        select_one(&WEEKLY_MENU_SELECTOR, html.root_element(), "page", "weekly menu")?;
    let blocks = text_blocks(&PARAGRAPH_SELECTOR, weekly_menu);
    let lines = submenu(&blocks, days.today_fi(), days.tomorrow_fi());

    Ok(MenuEntry::new("Sogno", ":sogno:", &lines, url))
}
