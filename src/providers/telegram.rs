use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, Recipient};

use crate::error::{PublishError, VerifyError};
use crate::providers::{ChannelIdentity, ChannelPublisher};

pub struct Telegram {
    pub bot: Bot,
    channel: Recipient,
    channel_id: String,
}

impl Telegram {
    pub fn new(token: &str, channel_id: &str) -> Self {
        Telegram {
            bot: Bot::new(token),
            channel: recipient(channel_id),
            channel_id: channel_id.to_string(),
        }
    }
}

/// Numeric ids address a chat directly, anything else is taken as a
/// channel username such as `@sawacoco`.
pub fn recipient(channel_id: &str) -> Recipient {
    match channel_id.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(channel_id.trim().to_string()),
    }
}

#[async_trait]
impl ChannelPublisher for Telegram {
    fn channel(&self) -> &str {
        &self.channel_id
    }

    async fn send(&self, text: &str) -> Result<(), PublishError> {
        self.bot
            .send_message(self.channel.clone(), text)
            .parse_mode(ParseMode::Html)
            .disable_web_page_preview(false)
            .await?;
        Ok(())
    }

    async fn verify(&self) -> Result<ChannelIdentity, VerifyError> {
        let me = self.bot.get_me().await.map_err(VerifyError::Identity)?;
        let chat = self
            .bot
            .get_chat(self.channel.clone())
            .await
            .map_err(|source| VerifyError::ChannelAccess {
                channel: self.channel_id.clone(),
                source,
            })?;

        Ok(ChannelIdentity {
            bot_username: me.username().to_string(),
            channel_title: chat.title().unwrap_or(self.channel_id.as_str()).to_string(),
        })
    }
}
