use scraper::Html;

use crate::days::Days;
use crate::menu::MenuEntry;
use crate::parse::submenu::submenu;
use crate::parse::text_from_selection::{descendant_blocks, select_one};
use crate::parse::Error;
use crate::static_selector;

/// Weekly burgers are listed above the days, and are served every day.
const WEEKLY_BURGERS: &str = "viikon burgerit:";

pub fn entry(html: &Html, url: &str, days: &Days) -> Result<MenuEntry, Error> {
    static_selector!(MENU_BOX_SELECTOR <- "div.menu-box");
    static_selector!(WYSIWYG_SELECTOR <- "div.wysiwyg");

    let menu_box = select_one(&MENU_BOX_SELECTOR, html.root_element(), "page", "menu box")?;
    let weekly_menu = select_one(&WYSIWYG_SELECTOR, menu_box, "menu box", "text block")?;
    let blocks = descendant_blocks(weekly_menu);

    let mut lines = submenu(&blocks, WEEKLY_BURGERS, Days::monday_fi());
    lines.push(String::new());
    lines.extend(submenu(&blocks, days.today_fi(), days.tomorrow_fi()));

    Ok(MenuEntry::new("Sävel", ":savel:", &lines, url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_tuesday_with_weekly_burgers() {
        let html = Html::parse_document(
            &fs::read_to_string("./src/parse/html_examples/savel.html").unwrap(),
        );
        let entry = entry(&html, "http://toolonsavel.fi/menu/?lang=fi#lounas", &Days::new(1))
            .expect("The example html should be valid");
        assert_eq!(entry.emoji, ":savel:");
        assert_eq!(
            entry.menu,
            "Viikon burgerit:\nHalloumiburger 14,50\n\nTiistai\nKanasalaatti"
        );
        assert_eq!(
            entry.cleaned().menu,
            "Viikon burgerit:\nHalloumiburger 14,50\nTiistai\nKanasalaatti"
        );
    }
}
