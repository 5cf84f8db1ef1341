use std::env;

use crate::error::ConfigError;
use crate::models::ScheduleSlot;

/// Settings read once at startup and handed to each component by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub telegram_channel_id: String,
    pub openai_api_key: String,

    pub company_name: String,
    pub main_product: String,
    pub website_url: String,
    pub company_location: String,
    pub company_focus: String,

    pub posting_times: Vec<ScheduleSlot>,
    // Descriptive only, slots are matched against local wall-clock time.
    pub timezone: String,
    pub posts_per_day: usize,
    pub content_variety: String,

    pub log_file: String,
}

const REQUIRED: [&str; 3] = ["TELEGRAM_BOT_TOKEN", "TELEGRAM_CHANNEL_ID", "OPENAI_API_KEY"];

impl Config {
    /// Load from the process environment (after `.env` has been applied).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let missing: Vec<&'static str> = REQUIRED
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let posting_times = or("POSTING_HOURS", "10:15,17:30")
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<ScheduleSlot>, _>>()?;

        let posts_per_day = or("POSTS_PER_DAY", "4");
        let posts_per_day = posts_per_day
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidNumber {
                key: "POSTS_PER_DAY",
                value: posts_per_day.clone(),
            })?;

        Ok(Config {
            telegram_bot_token: or("TELEGRAM_BOT_TOKEN", ""),
            telegram_channel_id: or("TELEGRAM_CHANNEL_ID", "").trim().to_string(),
            openai_api_key: or("OPENAI_API_KEY", ""),
            company_name: or("COMPANY_NAME", "Sawa Coco"),
            main_product: or(
                "MAIN_PRODUCT",
                "MCT Oils, MCT Powders & Coconut Shell Charcoal",
            ),
            website_url: or("WEBSITE_URL", "https://www.sawa-coco.com"),
            company_location: or("COMPANY_LOCATION", "Thailand"),
            company_focus: or(
                "COMPANY_FOCUS",
                "B2B bulk supplier for brands, labs & manufacturers",
            ),
            posting_times,
            timezone: or("TIMEZONE", "UTC"),
            posts_per_day,
            content_variety: or("CONTENT_VARIETY", "high"),
            log_file: or("LOG_FILE", "bot.log"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const CREDENTIALS: [(&str, &str); 3] = [
        ("TELEGRAM_BOT_TOKEN", "123:abc"),
        ("TELEGRAM_CHANNEL_ID", "@sawacoco"),
        ("OPENAI_API_KEY", "sk-test"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&CREDENTIALS)).unwrap();
        assert_eq!(config.company_name, "Sawa Coco");
        assert_eq!(config.website_url, "https://www.sawa-coco.com");
        assert_eq!(config.posts_per_day, 4);
        assert_eq!(config.timezone, "UTC");
        let slots: Vec<String> = config.posting_times.iter().map(|s| s.to_string()).collect();
        assert_eq!(slots, vec!["10:15", "17:30"]);
    }

    #[test]
    fn test_missing_credentials_reported_together() {
        let err = Config::from_lookup(lookup(&[("TELEGRAM_CHANNEL_ID", "@sawacoco")])).unwrap_err();
        match err {
            ConfigError::Missing(keys) => {
                assert_eq!(keys, vec!["TELEGRAM_BOT_TOKEN", "OPENAI_API_KEY"])
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "  "),
            ("TELEGRAM_CHANNEL_ID", "@sawacoco"),
            ("OPENAI_API_KEY", "sk-test"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn test_custom_posting_hours() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("POSTING_HOURS", "08:00, 12:30,12:30"));
        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.posting_times.len(), 3);
        assert_eq!(config.posting_times[1], config.posting_times[2]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("POSTING_HOURS", "10:15,25:00"));
        assert!(matches!(
            Config::from_lookup(lookup(&pairs)),
            Err(ConfigError::InvalidSlot(_))
        ));

        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("POSTS_PER_DAY", "four"));
        assert!(matches!(
            Config::from_lookup(lookup(&pairs)),
            Err(ConfigError::InvalidNumber { key: "POSTS_PER_DAY", .. })
        ));
    }
}
