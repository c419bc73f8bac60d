use chrono::NaiveDate;
use scraper::Html;

use crate::days::Days;
use crate::error::{Error, Result};
use crate::fetch::Session;
use crate::menu::MenuEntry;
use crate::parse::sites::{kaarti, kuukuu, lounaat, savel, sogno};

/// Restaurants on the lounaat.info listing for Kasarmikatu 42.
pub const KASSU: &[&str] = &[
    "bank",
    "block-by-dylan",
    "cock",
    "factory-aleksi",
    "paisano",
    "pompier",
    "presto",
];

/// Restaurants in Pasila, each with its own lounaat.info page.
pub const PASILA: &[&str] = &[
    "antell-akavatalo",
    "factory-vallila",
    "savor-vallila",
    "viherlatva",
];

/// Restaurants with their own websites. Selectable by id, not part of `all`.
pub const OWN_SITES: &[&str] = &["kaarti", "kuukuu", "savel", "sogno"];

/// Website layouts we know how to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Site {
    Lounaat,
    Kaarti,
    KuuKuu,
    Savel,
    Sogno,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Found by name on the shared listing page.
    Listing,
    /// A page of its own.
    Page { site: Site, url: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Restaurant {
    pub id: String,
    pub title: String,
    pub source: Source,
    /// Closed until this date.
    pub reopens: Option<NaiveDate>,
}

impl Restaurant {
    pub fn listed(id: &str, title: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            source: Source::Listing,
            reopens: None,
        }
    }

    pub fn page(id: &str, title: &str, site: Site, url: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            source: Source::Page {
                site,
                url: url.to_owned(),
            },
            reopens: None,
        }
    }

    #[must_use]
    pub fn reopening(mut self, date: NaiveDate) -> Self {
        self.reopens = Some(date);
        self
    }

    pub fn is_paused(&self, today: NaiveDate) -> bool {
        self.reopens.is_some_and(|reopens| today < reopens)
    }

    /// Downloads and reads today's menu.
    pub async fn extract(&self, session: &Session, days: &Days) -> Result<MenuEntry> {
        match &self.source {
            Source::Listing => {
                let page = session.listing().await?;
                let html = Html::parse_document(page);
                Ok(lounaat::listing_entry(
                    &html,
                    &self.title,
                    session.listing_url(),
                )?)
            }
            Source::Page { site, url } => {
                let page = session.page(url).await?;
                let html = Html::parse_document(&page);
                let entry = match site {
                    Site::Lounaat => lounaat::restaurant_page_entry(&html, &self.title, url, days),
                    Site::Kaarti => kaarti::entry(&html, url, days),
                    Site::KuuKuu => kuukuu::entry(&html, url, days),
                    Site::Savel => savel::entry(&html, url, days),
                    Site::Sogno => sogno::entry(&html, url, days),
                }?;
                Ok(entry)
            }
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("reopen dates should be valid")
}

/// Every restaurant we know about.
pub fn registry() -> Vec<Restaurant> {
    vec![
        Restaurant::listed("bank", "Bank Lunch Club"),
        Restaurant::listed("block-by-dylan", "Block by Dylan"),
        Restaurant::listed("cock", "The Cock").reopening(date(2019, 8, 12)),
        Restaurant::listed("factory-aleksi", "Factory Aleksi"),
        Restaurant::listed("paisano", "Paisano"),
        Restaurant::listed("pompier", "Pompier Espa"),
        Restaurant::listed("presto", "Presto").reopening(date(2019, 7, 1)),
        Restaurant::page(
            "antell-akavatalo",
            "Antell Akavatalo",
            Site::Lounaat,
            "https://www.lounaat.info/lounas/antell-akavatalo/helsinki",
        ),
        Restaurant::page(
            "factory-vallila",
            "Factory Vallila",
            Site::Lounaat,
            "https://www.lounaat.info/lounas/factory-vallila/helsinki",
        ),
        Restaurant::page(
            "savor-vallila",
            "Savor Vallila",
            Site::Lounaat,
            "https://www.lounaat.info/lounas/savor-vallila/helsinki",
        ),
        Restaurant::page(
            "viherlatva",
            "Viherlatva",
            Site::Lounaat,
            "https://www.lounaat.info/lounas/amica-viherlatva/helsinki",
        ),
        Restaurant::page(
            "kaarti",
            "Kaarti",
            Site::Kaarti,
            "http://www.ravintolakaarti.fi/lounas",
        ),
        Restaurant::page(
            "kuukuu",
            "KuuKuu",
            Site::KuuKuu,
            "https://www.kuukuu.fi/fi/lounas",
        ),
        Restaurant::page(
            "savel",
            "Sävel",
            Site::Savel,
            "http://toolonsavel.fi/menu/?lang=fi#lounas",
        ),
        Restaurant::page(
            "sogno",
            "Sogno",
            Site::Sogno,
            "http://www.trattoriasogno.fi/lounas",
        ),
    ]
}

pub fn ids() -> Vec<&'static str> {
    KASSU
        .iter()
        .chain(PASILA)
        .chain(OWN_SITES)
        .copied()
        .collect()
}

pub fn lookup(id: &str) -> Result<Restaurant> {
    registry()
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| Error::UnknownRestaurant(id.to_owned()))
}

/// Which restaurants a run covers. The group shortcuts win over the list,
/// and `all` stands for both groups.
pub fn select(requested: &[String], kassu: bool, pasila: bool) -> Result<Vec<Restaurant>> {
    let ids: Vec<&str> = if kassu {
        KASSU.to_vec()
    } else if pasila {
        PASILA.to_vec()
    } else if requested.is_empty() || requested.iter().any(|r| r == "all") {
        KASSU.iter().chain(PASILA).copied().collect()
    } else {
        requested.iter().map(String::as_str).collect()
    };
    ids.into_iter().map(lookup).collect()
}
