use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::{
    config::Config,
    core::agent::Agent,
    core::composer::Composer,
    core::scheduler::{Clock, LocalClock, ScheduleEvent, ScheduleTimer},
    error::{RuntimeError, VerifyError},
    models::{Post, PostType, Topic},
    providers::{telegram::Telegram, ChannelPublisher},
};

#[derive(Clone)]
pub struct Runtime {
    config: Arc<Config>,
    composer: Arc<Composer>,
    publisher: Arc<dyn ChannelPublisher>,
    clock: Arc<dyn Clock>,
}

impl Runtime {
    pub fn new(config: Config) -> Self {
        let agent = Arc::new(Agent::new(&config.openai_api_key));
        let composer = Composer::new(&config, agent);
        let telegram = Telegram::new(&config.telegram_bot_token, &config.telegram_channel_id);
        Self::with_parts(config, composer, Arc::new(telegram), Arc::new(LocalClock))
    }

    pub fn with_parts(
        config: Config,
        composer: Composer,
        publisher: Arc<dyn ChannelPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Runtime {
            config: Arc::new(config),
            composer: Arc::new(composer),
            publisher,
            clock,
        }
    }

    pub async fn verify_connection(&self) -> Result<(), VerifyError> {
        match self.publisher.verify().await {
            Ok(identity) => {
                info!(bot = %identity.bot_username, "Bot connected successfully");
                info!(channel = %identity.channel_title, "Channel access confirmed");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Connection test failed");
                Err(e)
            }
        }
    }

    /// One send attempt; failures are logged and reported as `false`.
    pub async fn publish(&self, content: &str) -> bool {
        match self.publisher.send(content).await {
            Ok(()) => {
                info!(channel = %self.publisher.channel(), "Successfully sent post");
                true
            }
            Err(e) => {
                error!(channel = %self.publisher.channel(), error = %e, "Failed to send post");
                false
            }
        }
    }

    pub fn test_post(&self) -> String {
        format!(
            "🧪 <b>Test Post - {company} bot is LIVE!</b>\n\n\
            This is a test message to verify the bot is working correctly!\n\n\
            🥥 {focus}\n\
            ✅ {product}\n\
            ✅ 100% palm-free, sustainable, chemical-free production\n\n\
            #MCTOil #CoconutCharcoal #SawaCoco #Thailand #TestPost\n\n\
            {footer}\n\
            {url}",
            company = self.config.company_name,
            focus = self.config.company_focus,
            product = self.config.main_product,
            footer = self.composer.footer(),
            url = self.config.website_url,
        )
    }

    pub async fn send_test_post(&self) -> bool {
        let success = self.publish(&self.test_post()).await;
        if success {
            info!("Test post sent successfully!");
        }
        success
    }

    pub async fn send_scheduled_post(&self) -> bool {
        info!("Generating scheduled post...");
        let post = self.composer.compose(None, None).await;

        let success = self.publish(&post.content).await;
        if success {
            info!(topic = %post.topic, post_type = %post.post_type, "Posted scheduled content");
        } else {
            error!(topic = %post.topic, post_type = %post.post_type, "Failed to send scheduled post");
        }
        success
    }

    pub async fn manual_post(&self, topic: Option<Topic>, post_type: Option<PostType>) -> bool {
        info!(topic = ?topic, post_type = ?post_type, "Manual post requested");
        let post = self.composer.compose(topic, post_type).await;

        let success = self.publish(&post.content).await;
        if success {
            info!(topic = %post.topic, post_type = %post.post_type, "Manual post sent successfully");
        }
        success
    }

    /// Compose a day's batch without sending anything.
    pub async fn preview(&self, count: Option<usize>) -> Vec<Post> {
        let count = count.unwrap_or(self.config.posts_per_day);
        self.composer.compose_batch(count).await
    }

    /// Drain the slot queue, one posting cycle per event, until the timer
    /// side is gone.
    pub async fn run_worker(self, mut rx: UnboundedReceiver<ScheduleEvent>) {
        while let Some(event) = rx.recv().await {
            match event {
                ScheduleEvent::SlotDue(slot) => {
                    info!(slot = %slot, "Running scheduled posting cycle");
                    self.send_scheduled_post().await;
                }
            }
        }
        info!("Post worker stopped");
    }

    /// Verify, send the test post, start the schedule and idle until
    /// `shutdown` fires.
    pub async fn start(&self, shutdown: CancellationToken) -> Result<(), RuntimeError> {
        info!(company = %self.config.company_name, "Starting content bot...");
        info!(
            timezone = %self.config.timezone,
            posts_per_day = self.config.posts_per_day,
            content_variety = %self.config.content_variety,
            "Posting configuration"
        );

        if let Err(e) = self.verify_connection().await {
            error!("Bot startup failed - connection test failed");
            return Err(e.into());
        }

        info!("Sending test post...");
        if !self.send_test_post().await {
            warn!("Test post failed, continuing with schedule");
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let timer = ScheduleTimer::new(&self.config.posting_times, self.clock.clone(), tx);
        for slot in &self.config.posting_times {
            info!(slot = %slot, "Scheduled post");
        }
        let timer = tokio::spawn(timer.run(shutdown.clone()));
        let worker = tokio::spawn(self.clone().run_worker(rx));

        info!("Bot started successfully! Scheduled posting is now active.");
        shutdown.cancelled().await;
        info!("Shutting down bot...");

        if let Err(e) = timer.await {
            error!(error = %e, "Schedule timer task failed");
        }
        if let Err(e) = worker.await {
            error!(error = %e, "Post worker task failed");
        }
        Ok(())
    }
}
