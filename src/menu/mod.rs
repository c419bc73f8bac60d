mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parse::squeeze_newlines;

pub use store::FileStore;

/// One restaurant's menu for today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    pub emoji: String,
    pub menu: String,
    pub url: String,
}

impl MenuEntry {
    pub fn new(
        title: impl Into<String>,
        emoji: impl Into<String>,
        lines: &[String],
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            emoji: emoji.into(),
            menu: lines.join("\n"),
            url: url.into(),
        }
    }

    /// Drops non-breaking spaces and collapses blank lines in the menu text.
    #[must_use]
    pub fn cleaned(mut self) -> Self {
        let menu = self.menu.replace('\u{a0}', "");
        self.menu = squeeze_newlines(&menu).into_owned();
        self
    }

    /// `:emoji: Title`
    pub fn heading(&self) -> String {
        format!("{} {}", self.emoji, self.title)
    }

    /// Menu text followed by the source link, as posted.
    pub fn blurb(&self) -> String {
        format!("{}\n{}", self.menu, self.url)
    }
}

/// Everything one run produced. `None` marks a restaurant that was processed
/// but had nothing to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutput {
    pub menus: Vec<Option<MenuEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl RunOutput {
    pub fn push(&mut self, entry: Option<MenuEntry>) {
        self.menus.push(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.menus.iter().filter_map(Option::as_ref)
    }

    pub fn stamp(&mut self, at: DateTime<Utc>) {
        self.updated = Some(at.format("%A, %d %B %Y, %X UTC").to_string());
    }
}
