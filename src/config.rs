use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::slack::{Target, DEFAULT_API};

/// Post what's for lunch at local restaurants to Slack
#[derive(Parser, Clone)]
#[command(name = "lunchbot", version, about)]
pub struct Config {
    /// Which restaurants to check: ids, or `all`
    #[arg(short, long, num_args = 1.., default_value = "all")]
    pub restaurants: Vec<String>,

    /// Shortcut for the restaurants near Kassu
    #[arg(long)]
    pub kassu: bool,

    /// Shortcut for the restaurants in Pasila
    #[arg(long, conflicts_with = "kassu")]
    pub pasila: bool,

    /// Send to this Slack user instead of #lunch
    #[arg(short, long)]
    pub user: Option<String>,

    /// Send to this Slack channel instead of #lunch
    #[arg(short, long)]
    pub channel: Option<String>,

    /// Don't post to Slack
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Save data as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Where --json writes to
    #[arg(long, default_value = "lunch.json")]
    pub json_path: PathBuf,

    /// Slack bot token
    #[arg(long, env = "LUNCHBOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Slack Web API base url
    #[arg(long, env = "LUNCHBOT_SLACK_API", default_value = DEFAULT_API)]
    pub slack_api: Url,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("restaurants", &self.restaurants)
            .field("kassu", &self.kassu)
            .field("pasila", &self.pasila)
            .field("user", &self.user)
            .field("channel", &self.channel)
            .field("dry_run", &self.dry_run)
            .field("json", &self.json)
            .field("json_path", &self.json_path)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("slack_api", &self.slack_api)
            .finish()
    }
}

impl Config {
    pub fn target(&self) -> Target {
        Target::pick(self.user.clone(), self.channel.clone())
    }
}
