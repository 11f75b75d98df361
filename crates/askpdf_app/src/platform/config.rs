//! Run configuration: the backend URL plus a few run options from flags.

use std::path::PathBuf;
use std::time::Duration;

use askpdf_engine::SubmitSettings;
use clap::ArgMatches;
use log::LevelFilter;
use thiserror::Error;
use url::Url;

/// Environment variable (also read from `.env`) naming the backend endpoint.
pub const BACKEND_URL_ENV: &str = "ASKPDF_BACKEND_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no backend URL configured; pass --backend-url or set ASKPDF_BACKEND_URL")]
    MissingBackendUrl,
    #[error("backend URL {value:?} is not valid: {source}")]
    InvalidBackendUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: Url,
    pub request_timeout: Option<Duration>,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let flag = matches.get_one::<String>("backend-url").map(String::as_str);
        let backend_url = resolve_backend_url(flag, |key| std::env::var(key).ok())?;

        Ok(Self {
            backend_url,
            request_timeout: matches
                .get_one::<u64>("timeout")
                .map(|secs| Duration::from_secs(*secs)),
            log_file: matches
                .get_one::<PathBuf>("log-file")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("askpdf.log")),
            verbose: matches.get_flag("verbose"),
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn submit_settings(&self) -> SubmitSettings {
        SubmitSettings {
            request_timeout: self.request_timeout,
            ..SubmitSettings::new(self.backend_url.clone())
        }
    }
}

/// Flag first, then the environment. Blank values count as unset.
pub fn resolve_backend_url(
    flag: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Url, ConfigError> {
    let raw = flag
        .map(str::to_owned)
        .or_else(|| env(BACKEND_URL_ENV))
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingBackendUrl)?;

    Url::parse(&raw).map_err(|source| ConfigError::InvalidBackendUrl { value: raw, source })
}
