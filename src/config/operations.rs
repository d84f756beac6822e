//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{PostError, Result};
use chrono::{FixedOffset, NaiveTime};
use std::path::Path;
use tracing::{info, warn};

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PostError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PostError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path`, writing the defaults there first if it is missing.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        warn!(path = %path.display(), "config file not found, writing defaults");
        let config = Config::default();
        crate::fs::atomic_write_file(path, &config.to_yaml()?)?;
        info!(path = %path.display(), topics = config.topics.len(), "created default config");
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are ignored; an empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| PostError::Config(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PostError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - at least one topic, each with a title and a single-component category
    /// - timeouts and `max_tokens` are positive, temperature is within 0..=2
    /// - `schedule.time` is `HH:MM`
    /// - `posts.timezone_offset`, when set, is `+HH:MM` or `-HH:MM`
    pub fn validate(&self) -> Result<()> {
        if self.topics.is_empty() {
            return Err(invalid("topics must contain at least one entry"));
        }

        for (i, topic) in self.topics.iter().enumerate() {
            if topic.title.trim().is_empty() {
                return Err(invalid(&format!("topic #{} has an empty title", i + 1)));
            }
            if !is_safe_category(&topic.category) {
                return Err(invalid(&format!(
                    "topic '{}' has category '{}', which is not a plain directory name",
                    topic.title, topic.category
                )));
            }
        }

        let endpoint = &self.endpoint;
        if endpoint.base_url.trim().is_empty() {
            return Err(invalid("endpoint.base_url must not be empty"));
        }
        if endpoint.probe_timeout_secs == 0 || endpoint.request_timeout_secs == 0 {
            return Err(invalid("endpoint timeouts must be greater than 0"));
        }
        if endpoint.max_tokens == 0 {
            return Err(invalid("endpoint.max_tokens must be greater than 0"));
        }
        if !(0.0..=2.0).contains(&endpoint.temperature) {
            return Err(invalid(&format!(
                "endpoint.temperature must be between 0 and 2 (found {})",
                endpoint.temperature
            )));
        }

        if NaiveTime::parse_from_str(&self.schedule.time, "%H:%M").is_err() {
            return Err(invalid(&format!(
                "schedule.time must be HH:MM (found '{}')",
                self.schedule.time
            )));
        }

        self.timezone_offset()?;

        Ok(())
    }

    /// The configured fixed UTC offset, if any.
    pub fn timezone_offset(&self) -> Result<Option<FixedOffset>> {
        match &self.posts.timezone_offset {
            None => Ok(None),
            Some(raw) => parse_utc_offset(raw).map(Some).ok_or_else(|| {
                invalid(&format!(
                    "posts.timezone_offset must look like +05:30 (found '{}')",
                    raw
                ))
            }),
        }
    }
}

fn invalid(message: &str) -> PostError {
    PostError::Config(format!("config validation failed: {}", message))
}

fn is_safe_category(category: &str) -> bool {
    !category.is_empty()
        && category != "."
        && category != ".."
        && !category.contains(['/', '\\'])
        && category.trim() == category
}

/// Parse `+HH:MM`, `-HH:MM`, `+HHMM` or `Z` into a fixed offset.
pub(crate) fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw == "Z" {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match raw.split_at_checked(1)? {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
