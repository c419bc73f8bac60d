#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod days;
mod error;
mod fetch;
mod menu;
mod parse;
mod restaurants;
mod run;
mod slack;

use chrono::{Local, Utc};
use clap::Parser;
use rand::seq::SliceRandom;

use crate::{
    config::Config,
    days::Days,
    error::Error,
    fetch::Session,
    menu::FileStore,
    slack::Poster,
};

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::parse();
    log::debug!("{config:?}");

    let mut restaurants =
        restaurants::select(&config.restaurants, config.kassu, config.pasila)?;
    restaurants.shuffle(&mut rand::thread_rng());

    let today = Local::now().date_naive();
    let days = Days::on(today);
    log::info!(
        "Today is {} ({}), next menu day {} ({})",
        days.today_fi(),
        days.today_en(),
        days.tomorrow_fi(),
        days.tomorrow_en()
    );

    let session = Session::default();
    let poster = if config.dry_run {
        None
    } else {
        let token = config.token.clone().ok_or(Error::MissingToken)?;
        let poster = Poster::new(
            session.client().clone(),
            config.slack_api.clone(),
            token,
            config.target(),
        );
        log::info!("Posting to {}", poster.target().channel());
        Some(poster)
    };

    let mut output = run::run(
        &restaurants,
        &session,
        &days,
        today,
        poster.as_ref(),
    )
    .await;

    if config.json {
        output.stamp(Utc::now());
        let store = FileStore::open(&config.json_path);
        store.save(&output).await?;
        log::info!("Saved menus to {}", store.path().display());
    }
    Ok(())
}
