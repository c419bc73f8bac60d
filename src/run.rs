use chrono::NaiveDate;

use crate::days::Days;
use crate::error::Result;
use crate::fetch::Session;
use crate::menu::{MenuEntry, RunOutput};
use crate::restaurants::Restaurant;
use crate::slack::Poster;

/// How many times a restaurant is tried when its website misbehaves.
pub const ATTEMPTS: usize = 3;

#[derive(Debug)]
pub enum Outcome {
    Menu(MenuEntry),
    /// Closed, or the page did not look like we expected.
    Empty,
    /// The website could not be reached.
    Unreachable,
}

async fn extract_with_retries(
    restaurant: &Restaurant,
    session: &Session,
    days: &Days,
) -> Result<MenuEntry> {
    let mut attempt = 1;
    loop {
        match restaurant.extract(session, days).await {
            Err(e) if e.is_http() && attempt < ATTEMPTS => {
                log::warn!("{}: attempt {attempt} failed: {e}", restaurant.id);
                attempt += 1;
            }
            res => return res,
        }
    }
}

/// Fetches one restaurant's menu and, when a poster is given, sends it on.
pub async fn process(
    restaurant: &Restaurant,
    session: &Session,
    days: &Days,
    today: NaiveDate,
    poster: Option<&Poster>,
) -> Outcome {
    if restaurant.is_paused(today) {
        log::info!("Skip {}, closed until {:?}", restaurant.id, restaurant.reopens);
        return Outcome::Empty;
    }
    let entry = match extract_with_retries(restaurant, session, days).await {
        Ok(entry) => entry.cleaned(),
        Err(e) if e.is_http() => {
            log::error!("{}: giving up after {ATTEMPTS} attempts: {e}", restaurant.id);
            return Outcome::Unreachable;
        }
        Err(e) => {
            log::error!("{}: {e}", restaurant.id);
            return Outcome::Empty;
        }
    };

    println!("{}", entry.heading());
    println!("{}", entry.blurb());
    println!();

    if let Some(poster) = poster {
        if let Err(e) = poster.post(&restaurant.id, &entry).await {
            log::warn!("{}: posting to Slack failed: {e}", restaurant.id);
        }
    }
    Outcome::Menu(entry)
}

/// Goes through the restaurants one by one, in the given order.
pub async fn run(
    restaurants: &[Restaurant],
    session: &Session,
    days: &Days,
    today: NaiveDate,
    poster: Option<&Poster>,
) -> RunOutput {
    let mut output = RunOutput::default();
    for restaurant in restaurants {
        match process(restaurant, session, days, today, poster).await {
            Outcome::Menu(entry) => output.push(Some(entry)),
            Outcome::Empty => output.push(None),
            Outcome::Unreachable => {}
        }
    }
    log::info!(
        "Got {} menus from {} restaurants",
        output.entries().count(),
        restaurants.len()
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::make_client;
    use crate::restaurants::Site;
    use crate::slack::Target;

    use serde_json::json;
    use std::fs;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fixture(name: &str) -> String {
        fs::read_to_string(format!("./src/parse/html_examples/{name}")).unwrap()
    }

    async fn serve(server: &MockServer, route: &str, status: u16, body: String, times: u64) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(times)
            .mount(server)
            .await;
    }

    fn session(server: &MockServer) -> Session {
        let listing = Url::parse(&format!("{}/kasarmikatu", server.uri())).unwrap();
        Session::new(make_client(), listing)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    #[tokio::test]
    async fn test_missing_markup_is_recorded_empty() {
        let server = MockServer::start().await;
        serve(&server, "/kaarti", 200, "<html><body></body></html>".into(), 1).await;
        serve(&server, "/sogno", 200, fixture("sogno.html"), 1).await;
        let restaurants = [
            Restaurant::page("kaarti", "Kaarti", Site::Kaarti, &format!("{}/kaarti", server.uri())),
            Restaurant::page("sogno", "Sogno", Site::Sogno, &format!("{}/sogno", server.uri())),
        ];

        let output = run(&restaurants, &session(&server), &Days::new(3), today(), None).await;

        assert_eq!(output.menus.len(), 2);
        assert!(output.menus[0].is_none());
        let sogno = output.menus[1].as_ref().unwrap();
        assert_eq!(sogno.menu, "Torstai\nLasagne");
        assert_eq!(sogno.url, format!("{}/sogno", server.uri()));
    }

    #[tokio::test]
    async fn test_server_errors_are_retried_then_skipped() {
        let server = MockServer::start().await;
        serve(&server, "/kuukuu", 500, String::new(), ATTEMPTS as u64).await;
        serve(&server, "/sogno", 200, fixture("sogno.html"), 1).await;
        let restaurants = [
            Restaurant::page("kuukuu", "KuuKuu", Site::KuuKuu, &format!("{}/kuukuu", server.uri())),
            Restaurant::page("sogno", "Sogno", Site::Sogno, &format!("{}/sogno", server.uri())),
        ];

        let output = run(&restaurants, &session(&server), &Days::new(3), today(), None).await;

        assert_eq!(output.menus.len(), 1);
        assert_eq!(output.menus[0].as_ref().unwrap().title, "Sogno");
    }

    #[tokio::test]
    async fn test_listing_is_shared_and_paused_restaurants_skipped() {
        let server = MockServer::start().await;
        serve(&server, "/kasarmikatu", 200, fixture("lounaat/listing.html"), 1).await;
        let restaurants = [
            Restaurant::listed("bank", "Bank Lunch Club"),
            Restaurant::listed("cock", "The Cock"),
            Restaurant::listed("presto", "Presto")
                .reopening(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()),
        ];

        let output = run(&restaurants, &session(&server), &Days::new(3), today(), None).await;

        assert_eq!(output.menus.len(), 3);
        let bank = output.menus[0].as_ref().unwrap();
        assert_eq!(bank.url, format!("{}/lounas/bank-lunch-club/helsinki", server.uri()));
        assert_eq!(output.menus[1].as_ref().unwrap().emoji, ":TheCock:");
        assert!(output.menus[2].is_none());
    }

    #[tokio::test]
    async fn test_menus_are_posted() {
        let server = MockServer::start().await;
        serve(&server, "/sogno", 200, fixture("sogno.html"), 1).await;
        serve(&server, "/kaarti", 200, fixture("kaarti.html"), 1).await;
        Mock::given(method("POST"))
            .and(path("/api/chat.postMessage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(2)
            .mount(&server)
            .await;
        let poster = Poster::new(
            make_client(),
            Url::parse(&format!("{}/api/", server.uri())).unwrap(),
            "xoxb-test".into(),
            Target::pick(None, None),
        );
        let restaurants = [
            Restaurant::page("sogno", "Sogno", Site::Sogno, &format!("{}/sogno", server.uri())),
            Restaurant::page("kaarti", "Kaarti", Site::Kaarti, &format!("{}/kaarti", server.uri())),
        ];

        let output = run(
            &restaurants,
            &session(&server),
            &Days::new(3),
            today(),
            Some(&poster),
        )
        .await;

        assert_eq!(output.entries().count(), 2);
    }

    #[tokio::test]
    async fn test_failed_post_keeps_menu() {
        let server = MockServer::start().await;
        serve(&server, "/sogno", 200, fixture("sogno.html"), 1).await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "error": "invalid_auth"})),
            )
            .mount(&server)
            .await;
        let poster = Poster::new(
            make_client(),
            Url::parse(&format!("{}/api/", server.uri())).unwrap(),
            "xoxb-bad".into(),
            Target::pick(None, None),
        );
        let sogno =
            Restaurant::page("sogno", "Sogno", Site::Sogno, &format!("{}/sogno", server.uri()));

        let session = session(&server);
        let outcome = process(&sogno, &session, &Days::new(3), today(), Some(&poster)).await;

        assert!(matches!(outcome, Outcome::Menu(entry) if entry.title == "Sogno"));
    }
}
