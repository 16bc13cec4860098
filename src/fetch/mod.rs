use std::{string::FromUtf8Error, time::Duration};

use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{instrument, Level};

use crate::config::ProviderConfig;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP client could not be built: {0}")]
    Client(#[source] reqwest::Error),
    #[error("HTTP Request Error: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Provider answered with status {0}")]
    Status(StatusCode),
    #[error("Provider response is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

/// Anything that can hand out the plan markup for a date.
pub trait MarkupSource {
    fn fetch(&self, date: NaiveDate) -> Result<String, Error>;
}

impl<T: MarkupSource + ?Sized> MarkupSource for &T {
    fn fetch(&self, date: NaiveDate) -> Result<String, Error> {
        (**self).fetch(date)
    }
}

/// Form body of the plan request.
#[derive(Debug, serde::Serialize)]
pub struct PlanForm<'a> {
    func: &'a str,
    #[serde(rename = "locId")]
    loc_id: u32,
    lang: &'a str,
    // yyyy-MM-dd
    date: String,
}

impl<'a> PlanForm<'a> {
    pub fn new(config: &'a ProviderConfig, date: NaiveDate) -> Self {
        Self {
            func: &config.function,
            loc_id: config.location,
            lang: &config.lang,
            date: date.format("%Y-%m-%d").to_string(),
        }
    }
}

pub fn make_client(timeout: Duration) -> Result<Client, Error> {
    Client::builder()
        .gzip(true)
        .timeout(timeout)
        .build()
        .map_err(Error::Client)
}

/// Fetches plan pages from the provider over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: ProviderConfig,
}

impl HttpSource {
    pub fn new(config: ProviderConfig) -> Result<Self, Error> {
        let client = make_client(config.timeout)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

impl MarkupSource for HttpSource {
    #[instrument(skip(self, date), fields(
        location = self.config.location,
        date = %date,
    ), level = Level::TRACE)]
    fn fetch(&self, date: NaiveDate) -> Result<String, Error> {
        let form = PlanForm::new(&self.config, date);
        let start = std::time::Instant::now();
        let res = self
            .client
            .post(self.config.url.clone())
            .form(&form)
            .send()
            .map_err(Error::Request)?;
        let status = res.status();
        if !status.is_success() {
            log::warn!("provider answered {status} for {date}");
            return Err(Error::Status(status));
        }
        // the body is utf-8 whatever the content-type says
        let body = res.bytes().map_err(Error::Request)?;
        log::trace!("Got plan page for {date} in \t {:?}", start.elapsed());
        Ok(String::from_utf8(body.to_vec())?)
    }
}

pub fn date_iter(start: NaiveDate, count: u32) -> impl Iterator<Item = NaiveDate> {
    (0..i64::from(count)).map(move |x| start + chrono::Duration::days(x))
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 1, 29).unwrap()
    }

    fn source_for(server: &mockito::ServerGuard) -> HttpSource {
        let config = ProviderConfig {
            url: format!("{}/spl", server.url()).parse().unwrap(),
            timeout: Duration::from_secs(5),
            ..ProviderConfig::default()
        };
        HttpSource::new(config).unwrap()
    }

    #[test]
    fn test_form_encoding() {
        let config = ProviderConfig::default();
        let body = serde_json::to_value(PlanForm::new(&config, date())).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"func": "make_spl", "locId": 7, "lang": "de", "date": "2016-01-29"})
        );
    }

    #[test]
    fn test_fetch_posts_form() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/spl")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::Exact(
                "func=make_spl&locId=7&lang=de&date=2016-01-29".to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<div class=\"cell2\"><div>Klöße</div></div>")
            .create();

        let page = source_for(&server).fetch(date()).unwrap();
        assert_eq!(page, "<div class=\"cell2\"><div>Klöße</div></div>");
        mock.assert();
    }

    #[test]
    fn test_error_status() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/spl").with_status(503).create();
        let err = source_for(&server).fetch(date()).unwrap_err();
        assert!(
            matches!(err, Error::Status(status) if status == StatusCode::SERVICE_UNAVAILABLE)
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/spl")
            .with_status(200)
            .with_body([b'K', 0x6c, 0xf6, b'#'])
            .create();
        let err = source_for(&server).fetch(date()).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_unreachable() {
        let config = ProviderConfig {
            url: "http://127.0.0.1:9/spl".parse().unwrap(),
            timeout: Duration::from_secs(2),
            ..ProviderConfig::default()
        };
        let err = HttpSource::new(config).unwrap().fetch(date()).unwrap_err();
        assert!(matches!(err, Error::Request(_)));
    }

    #[test]
    fn test_date_iter() {
        let dates: Vec<_> = date_iter(date(), 3).collect();
        assert_eq!(
            dates,
            [
                date(),
                NaiveDate::from_ymd_opt(2016, 1, 30).unwrap(),
                NaiveDate::from_ymd_opt(2016, 1, 31).unwrap(),
            ]
        );
        assert_eq!(date_iter(date(), 0).count(), 0);
    }
}
