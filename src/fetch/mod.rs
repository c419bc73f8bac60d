use reqwest::Client;
use tokio::sync::OnceCell;
use tracing::{instrument, Level};
use url::Url;

use crate::error::{Error, Result};

pub const LOUNAAT_LISTING_URL: &str = "https://www.lounaat.info/kasarmikatu-42-00130-helsinki";

pub fn make_client() -> Client {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

/// Downloads a page as text. Non-2xx answers count as errors.
#[instrument(skip(client), level = Level::TRACE)]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let start = std::time::Instant::now();
    let res = client.get(url).send().await?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::Status(status, url.to_owned()));
    }
    let text = res.text().await?;
    log::trace!("Got text of {url} in \t {:?}", start.elapsed());
    Ok(text)
}

/// State shared by all restaurants of one run: the HTTP client, and the
/// lounaat.info listing that several restaurants are read from, downloaded
/// on first use.
#[derive(Debug)]
pub struct Session {
    client: Client,
    listing_url: Url,
    listing: OnceCell<String>,
}

impl Session {
    pub fn new(client: Client, listing_url: Url) -> Self {
        Self {
            client,
            listing_url,
            listing: OnceCell::new(),
        }
    }

    pub const fn client(&self) -> &Client {
        &self.client
    }

    pub const fn listing_url(&self) -> &Url {
        &self.listing_url
    }

    pub async fn page(&self, url: &str) -> Result<String> {
        fetch_page(&self.client, url).await
    }

    /// The shared listing page. A failed download leaves the cell empty, so
    /// the next caller tries again.
    pub async fn listing(&self) -> Result<&str> {
        self.listing
            .get_or_try_init(|| fetch_page(&self.client, self.listing_url.as_str()))
            .await
            .map(String::as_str)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            make_client(),
            Url::parse(LOUNAAT_LISTING_URL).expect("listing url should be valid"),
        )
    }
}
