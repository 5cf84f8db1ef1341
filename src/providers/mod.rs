pub mod telegram;

use async_trait::async_trait;

use crate::error::{PublishError, VerifyError};

#[derive(Debug, Clone)]
pub struct ChannelIdentity {
    pub bot_username: String,
    pub channel_title: String,
}

/// Outbound side of the bot: one destination channel.
#[async_trait]
pub trait ChannelPublisher: Send + Sync {
    fn channel(&self) -> &str;

    /// Send one formatted message. No retry.
    async fn send(&self, text: &str) -> Result<(), PublishError>;

    /// Check the credential and that the channel is reachable.
    async fn verify(&self) -> Result<ChannelIdentity, VerifyError>;
}
