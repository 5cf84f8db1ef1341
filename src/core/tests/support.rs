// Test doubles for the generator, the channel and the clock.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rig::completion::{CompletionError, PromptError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use teloxide::{ApiError, RequestError};

use crate::config::Config;
use crate::core::agent::TextGenerator;
use crate::core::scheduler::Clock;
use crate::error::{GenerationError, PublishError, VerifyError};
use crate::providers::{ChannelIdentity, ChannelPublisher};

pub fn test_config(extra: &[(&str, &str)]) -> Config {
    let mut vars = vec![
        ("TELEGRAM_BOT_TOKEN", "123:abc"),
        ("TELEGRAM_CHANNEL_ID", "@sawacoco"),
        ("OPENAI_API_KEY", "sk-test"),
    ];
    vars.extend_from_slice(extra);
    Config::from_lookup(|key| {
        vars.iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
    .unwrap()
}

pub struct ScriptedGenerator {
    reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        ScriptedGenerator {
            reply: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        ScriptedGenerator {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(PromptError::CompletionError(CompletionError::ProviderError(
                "insufficient_quota".to_string(),
            ))
            .into()),
        }
    }
}

#[derive(Default)]
pub struct RecordingChannel {
    pub sent: Mutex<Vec<String>>,
    pub attempts: AtomicUsize,
    fail_first: usize,
    unreachable: bool,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_first(sends: usize) -> Self {
        RecordingChannel {
            fail_first: sends,
            ..Self::default()
        }
    }

    pub fn unreachable() -> Self {
        RecordingChannel {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelPublisher for RecordingChannel {
    fn channel(&self) -> &str {
        "@sawacoco"
    }

    async fn send(&self, text: &str) -> Result<(), PublishError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.fail_first {
            return Err(RequestError::Api(ApiError::ChatNotFound).into());
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn verify(&self) -> Result<ChannelIdentity, VerifyError> {
        if self.unreachable {
            return Err(VerifyError::ChannelAccess {
                channel: self.channel().to_string(),
                source: RequestError::Api(ApiError::ChatNotFound),
            });
        }
        Ok(ChannelIdentity {
            bot_username: "sawacoco_bot".to_string(),
            channel_title: "Sawa Coco".to_string(),
        })
    }
}

/// Clock the test moves by hand.
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn at(hour: u32, minute: u32) -> Self {
        ManualClock {
            now: Mutex::new(day().and_hms_opt(hour, minute, 0).unwrap()),
        }
    }

    pub fn set(&self, hour: u32, minute: u32) {
        *self.now.lock().unwrap() = day().and_hms_opt(hour, minute, 0).unwrap();
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }
}
