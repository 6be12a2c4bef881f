use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use log::Level;
use thiserror::Error;
use url::Url;

/// Application deadline. Without an offset it is read as browser-local time.
pub const DEADLINE: &str = "2025-03-18T23:59:59";

/// External application form, opened in a new tab by the Apply button.
pub const APPLY_FORM_URL: &str = "https://form.typeform.com/to/LPz52SQ4";

pub const HEADLINE: &str = "Recruitments 2025";
pub const HEADLINE_REVEAL_MS: u32 = 2000;

pub const COUNTDOWN_REFRESH_MS: u32 = 1000;

pub const BACKGROUND_AUDIO: &str = "/audio.mp3";
pub const BACKGROUND_VIDEO: &str = "/background.mp4";

const LOCAL_DEADLINE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("application deadline is empty")]
    EmptyDeadline,

    #[error("invalid application deadline {value:?}: {source}")]
    InvalidDeadline {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("application deadline {0:?} does not exist in the local time zone")]
    NonexistentLocalTime(String),

    #[error("invalid apply form url {value:?}: {source}")]
    InvalidApplyUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("apply form url {0:?} must be http(s) with a host")]
    UnsupportedApplyUrl(String),
}

/// Validated site settings, built once before the app is mounted.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub deadline: DateTime<Utc>,
    pub apply_url: &'static str,
}

impl SiteConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_parts(DEADLINE, APPLY_FORM_URL)
    }

    pub fn from_parts(deadline: &str, apply_url: &'static str) -> Result<Self, ConfigError> {
        Ok(Self {
            deadline: parse_deadline(deadline)?,
            apply_url: validate_apply_url(apply_url)?,
        })
    }
}

/// Accepts RFC 3339 (with offset) or a bare local date-time.
pub fn parse_deadline(value: &str) -> Result<DateTime<Utc>, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::EmptyDeadline);
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(value, LOCAL_DEADLINE_FORMAT).map_err(|source| {
        ConfigError::InvalidDeadline {
            value: value.to_string(),
            source,
        }
    })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| ConfigError::NonexistentLocalTime(value.to_string()))
}

fn validate_apply_url(url: &'static str) -> Result<&'static str, ConfigError> {
    let parsed = Url::parse(url).map_err(|source| ConfigError::InvalidApplyUrl {
        value: url.to_string(),
        source,
    })?;

    let web_scheme = matches!(parsed.scheme(), "http" | "https");
    let has_host = parsed.host_str().map_or(false, |host| !host.is_empty());
    if !web_scheme || !has_host {
        return Err(ConfigError::UnsupportedApplyUrl(url.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_loads() {
        let config = SiteConfig::load().expect("shipped config must be valid");
        assert_eq!(config.apply_url, APPLY_FORM_URL);
    }

    #[test]
    fn local_deadline_matches_local_wall_clock() {
        let deadline = parse_deadline(DEADLINE).unwrap();
        let local = deadline.with_timezone(&Local).naive_local();
        assert_eq!(local.format(LOCAL_DEADLINE_FORMAT).to_string(), DEADLINE);
    }

    #[test]
    fn rfc3339_deadline_keeps_its_offset() {
        let deadline = parse_deadline("2025-03-18T23:59:59+05:30").unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 3, 18, 18, 29, 59).unwrap();
        assert_eq!(deadline, expected);
    }

    #[test]
    fn blank_deadline_is_rejected() {
        assert!(matches!(parse_deadline("   "), Err(ConfigError::EmptyDeadline)));
    }

    #[test]
    fn malformed_deadline_is_rejected() {
        let err = parse_deadline("next tuesday").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDeadline { ref value, .. } if value == "next tuesday"));
        assert!(err.to_string().contains("next tuesday"));
    }

    #[test]
    fn apply_url_accepts_absolute_http() {
        assert!(SiteConfig::from_parts(DEADLINE, "https://form.typeform.com/to/x").is_ok());
        assert!(SiteConfig::from_parts(DEADLINE, "http://localhost:8080/form").is_ok());
    }

    #[test]
    fn malformed_apply_urls_are_rejected() {
        for bad in [
            "",
            "form.typeform.com/to/x",
            "https://",
            "https://[::1",
            "https://host:99999/x",
            "https://?q=1",
            "https://:80/form",
            "https://exa<mple>.com",
            "https://exa%mple/",
            "https://a b",
        ] {
            let err = SiteConfig::from_parts(DEADLINE, bad).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidApplyUrl { ref value, .. } if value == bad),
                "{bad:?} should fail to parse, got {err:?}"
            );
        }
    }

    #[test]
    fn non_web_apply_urls_are_rejected() {
        for bad in ["ftp://example.com/form", "mailto:club@example.com", "file:///tmp/form"] {
            assert!(
                matches!(
                    SiteConfig::from_parts(DEADLINE, bad),
                    Err(ConfigError::UnsupportedApplyUrl(ref value)) if value == bad
                ),
                "{bad:?} should be rejected"
            );
        }
    }
}
