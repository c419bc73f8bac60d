//! Site parsers declare their CSS selectors as statics next to the code that
//! uses them, eg. `static_selector!(MENU_SELECTOR <- "div.menu");`, and use
//! them wherever scraper wants a `&Selector`.
use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector that is parsed the first time it is used. Lives in a
/// `static`, so each selector is parsed once per run no matter how many
/// restaurants read it.
#[derive(Debug)]
pub(super) struct StaticSelector<'a> {
    cell: OnceLock<Selector>,
    selector: &'a str,
}

impl<'a> StaticSelector<'a> {
    pub(super) const fn new(selector: &'a str) -> Self {
        Self {
            cell: OnceLock::new(),
            selector,
        }
    }
}

impl<'a> core::ops::Deref for StaticSelector<'a> {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        // all selectors are literals in this crate, so a parse failure is a bug
        self.cell
            .get_or_init(|| match Selector::parse(self.selector) {
                Ok(sel) => sel,
                Err(e) => panic!("Error parsing static selector {}: {:?}", self.selector, e),
            })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
