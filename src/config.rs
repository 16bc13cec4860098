use std::{env, num::ParseIntError, time::Duration};

use url::Url;

pub const PROVIDER_URL: &str =
    "https://www.maxmanager.de/daten-extern/os-neu/html/inc/ajax-php_konnektor.inc.php";
/// The connector function that renders a daily plan.
pub const PLAN_FUNCTION: &str = "make_spl";
pub const DEFAULT_LOCATION: u32 = 7;
pub const DEFAULT_LANG: &str = "de";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{var} is not a valid url: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },
    #[error("{var} is not a valid location id: {source}")]
    InvalidLocation {
        var: &'static str,
        source: ParseIntError,
    },
    #[error("{var} is not a valid number of seconds: {source}")]
    InvalidTimeout {
        var: &'static str,
        source: ParseIntError,
    },
}

/// How to reach the plan provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub url: Url,
    pub function: String,
    pub location: u32,
    pub lang: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(PROVIDER_URL).expect("provider url should be valid"),
            function: PLAN_FUNCTION.to_string(),
            location: DEFAULT_LOCATION,
            lang: DEFAULT_LANG.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProviderConfig {
    pub const URL_VAR: &'static str = "MENSA_PROVIDER_URL";
    pub const LOCATION_VAR: &'static str = "MENSA_LOCATION";
    pub const LANG_VAR: &'static str = "MENSA_LANG";
    pub const TIMEOUT_VAR: &'static str = "MENSA_TIMEOUT_SECS";

    /// Defaults, overridden by whichever `MENSA_*` variables are set.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(url) = lookup(Self::URL_VAR) {
            config.url = Url::parse(&url).map_err(|source| Error::InvalidUrl {
                var: Self::URL_VAR,
                source,
            })?;
        }
        if let Some(location) = lookup(Self::LOCATION_VAR) {
            config.location =
                location
                    .trim()
                    .parse()
                    .map_err(|source| Error::InvalidLocation {
                        var: Self::LOCATION_VAR,
                        source,
                    })?;
        }
        if let Some(lang) = lookup(Self::LANG_VAR) {
            config.lang = lang;
        }
        if let Some(secs) = lookup(Self::TIMEOUT_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|source| Error::InvalidTimeout {
                var: Self::TIMEOUT_VAR,
                source,
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        log::debug!("provider config: {config:?}");
        Ok(config)
    }
}
