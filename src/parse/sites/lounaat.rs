//! lounaat.info: one listing page for the restaurants around an address, and
//! one page per restaurant with the whole week.
use scraper::Html;
use url::Url;

use crate::days::Days;
use crate::menu::MenuEntry;
use crate::parse::text_from_selection::{
    select_containing, select_one, text_from_selection, tidy_text,
};
use crate::parse::Error;
use crate::static_selector;

static_selector!(ITEM_BODY_SELECTOR <- "div.item-body");
static_selector!(ITEM_FOOTER_SELECTOR <- "div.item-footer");

/// Custom Slack emoji named after the restaurant, eg. `:BankLunchClub:`.
pub fn emoji_for(name: &str) -> String {
    format!(":{}:", name.replace(' ', ""))
}

fn menu_lines(body: String, hours: &str, footer: &str) -> Vec<String> {
    vec![body, format!("{hours} {footer}").trim().to_owned()]
}

/// Today's menu of `name` from the shared listing. Links on the listing are
/// relative to `base`.
pub fn listing_entry(html: &Html, name: &str, base: &Url) -> Result<MenuEntry, Error> {
    static_selector!(MENU_SELECTOR <- "div.menu");
    static_selector!(LINK_SELECTOR <- "h3 a");
    static_selector!(HOURS_SELECTOR <- "p.lunch");

    let element = select_containing(&MENU_SELECTOR, html, name)?;
    // eg. '/lounas/presto/helsinki'
    let href = select_one(&LINK_SELECTOR, element, "menu", "link")?
        .attr("href")
        .ok_or_else(|| Error::html_parse_error("menu link does not have a href attr"))?;
    let Ok(url) = base.join(href) else {
        return Err(Error::HtmlParse(format!("Menu link {href} is invalid")));
    };

    let hours = tidy_text(select_one(&HOURS_SELECTOR, element, "menu", "opening hours")?);
    let body = text_from_selection(&ITEM_BODY_SELECTOR, element, "menu", "item body")?;
    let footer = tidy_text(select_one(&ITEM_FOOTER_SELECTOR, element, "menu", "item footer")?);

    Ok(MenuEntry::new(
        name,
        emoji_for(name),
        &menu_lines(body, &hours, &footer),
        url,
    ))
}

/// Today's menu from a restaurant's own lounaat.info page.
pub fn restaurant_page_entry(
    html: &Html,
    name: &str,
    url: &str,
    days: &Days,
) -> Result<MenuEntry, Error> {
    static_selector!(DAY_SELECTOR <- "div.item");
    static_selector!(TILE_SELECTOR <- "div.tile");

    let element = select_containing(&DAY_SELECTOR, html, days.today_fi())?;
    // the tile listing opening hours starts with "ma-pe"
    let hours = tidy_text(select_containing(&TILE_SELECTOR, html, "ma-")?);
    let body = text_from_selection(&ITEM_BODY_SELECTOR, element, "day", "item body")?;
    let footer = tidy_text(select_one(&ITEM_FOOTER_SELECTOR, element, "day", "item footer")?);

    Ok(MenuEntry::new(
        name,
        emoji_for(name),
        &menu_lines(body, &hours, &footer),
        url,
    ))
}
