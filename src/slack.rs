use rand::seq::SliceRandom;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha224};
use tracing::{instrument, Level};
use url::Url;

use crate::error::{Error, Result};
use crate::menu::MenuEntry;

pub const DEFAULT_API: &str = "https://slack.com/api/";
pub const DEFAULT_CHANNEL: &str = "lunch";
const USERNAME: &str = "LunchBot";

/// Bot avatars, one picked at random for every message.
pub const ICONS: &[&str] = &[
    ":fork_and_knife:",
    ":pizza:",
    ":hamburger:",
    ":fries:",
    ":poultry_leg:",
    ":meat_on_bone:",
    ":spaghetti:",
    ":curry:",
    ":fried_shrimp:",
    ":bento:",
    ":sushi:",
    ":fish_cake:",
    ":rice_ball:",
    ":rice_cracker:",
    ":rice:",
    ":ramen:",
    ":stew:",
    ":oden:",
    ":dango:",
    ":egg:",
    ":bread:",
    ":doughnut:",
    ":custard:",
    ":icecream:",
    ":ice_cream:",
    ":shaved_ice:",
    ":birthday:",
    ":cake:",
    ":cookie:",
    ":chocolate_bar:",
    ":candy:",
    ":lollipop:",
    ":honey_pot:",
    ":apple:",
    ":green_apple:",
    ":tangerine:",
    ":lemon:",
    ":cherries:",
    ":grapes:",
    ":watermelon:",
    ":strawberry:",
    ":peach:",
    ":melon:",
    ":banana:",
    ":pear:",
    ":pineapple:",
    ":sweet_potato:",
    ":eggplant:",
    ":tomato:",
    ":corn:",
];

/// Where messages go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Channel(String),
    User(String),
}

impl Target {
    /// A channel wins over a user; with neither, `#lunch`.
    pub fn pick(user: Option<String>, channel: Option<String>) -> Self {
        match (channel, user) {
            (Some(channel), _) => Self::Channel(channel),
            (None, Some(user)) => Self::User(user),
            (None, None) => Self::Channel(DEFAULT_CHANNEL.to_owned()),
        }
    }

    /// Value of the `channel` argument of `chat.postMessage`.
    pub fn channel(&self) -> String {
        match self {
            Self::Channel(c) if c.starts_with('#') => c.clone(),
            Self::Channel(c) => format!("#{c}"),
            Self::User(u) => u.clone(),
        }
    }
}

/// A stable colour per restaurant: the first six hex digits of the name's SHA-224.
pub fn colour(name: &str) -> String {
    let digest = hex::encode(Sha224::digest(name.as_bytes()));
    format!("#{}", &digest[..6])
}

#[derive(Debug, Serialize)]
pub struct Field {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct Attachment {
    pub color: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub channel: String,
    pub username: &'static str,
    pub icon_emoji: &'static str,
    pub text: &'static str,
    pub attachments: Vec<Attachment>,
}

impl Message {
    pub fn for_menu(target: &Target, restaurant_id: &str, entry: &MenuEntry) -> Self {
        let icon_emoji = ICONS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(ICONS[0]);
        Self {
            channel: target.channel(),
            username: USERNAME,
            icon_emoji,
            text: "",
            attachments: vec![Attachment {
                color: colour(restaurant_id),
                fields: vec![Field {
                    title: entry.heading(),
                    value: entry.blurb(),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Posts messages through the Slack Web API.
#[derive(Debug)]
pub struct Poster {
    client: Client,
    api: Url,
    token: String,
    target: Target,
}

impl Poster {
    pub fn new(client: Client, api: Url, token: String, target: Target) -> Self {
        Self {
            client,
            api,
            token,
            target,
        }
    }

    pub const fn target(&self) -> &Target {
        &self.target
    }

    #[instrument(skip(self, entry), fields(title = %entry.title), level = Level::TRACE)]
    pub async fn post(&self, restaurant_id: &str, entry: &MenuEntry) -> Result<()> {
        let url = self
            .api
            .join("chat.postMessage")
            .map_err(|e| Error::Slack(format!("bad API url {}: {e}", self.api)))?;
        let message = Message::for_menu(&self.target, restaurant_id, entry);
        let res = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&message)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Status(status, self.api.to_string()));
        }
        let body: ApiResponse = res.json().await?;
        if body.ok {
            Ok(())
        } else {
            Err(Error::Slack(
                body.error.unwrap_or_else(|| "unknown error".to_owned()),
            ))
        }
    }
}
