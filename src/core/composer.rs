use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

use crate::catalog;
use crate::config::Config;
use crate::core::agent::TextGenerator;
use crate::error::GenerationError;
use crate::models::{ContentSource, Post, PostType, Topic};

/// Hands out catalog topics so that none repeats until every topic has been
/// used once; after that the window starts over.
#[derive(Debug, Default)]
pub struct VarietySelector {
    used: HashSet<Topic>,
}

impl VarietySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_topic<R: Rng>(&mut self, rng: &mut R) -> Topic {
        let mut available: Vec<&Topic> = Topic::CATALOG
            .iter()
            .filter(|topic| !self.used.contains(*topic))
            .collect();
        if available.is_empty() {
            self.used.clear();
            available = Topic::CATALOG.iter().collect();
        }

        let topic = available[rng.gen_range(0..available.len())].clone();
        self.used.insert(topic.clone());
        topic
    }
}

pub fn random_topic<R: Rng>(rng: &mut R) -> Topic {
    Topic::CATALOG[rng.gen_range(0..Topic::CATALOG.len())].clone()
}

pub fn random_post_type<R: Rng>(rng: &mut R) -> PostType {
    PostType::ALL[rng.gen_range(0..PostType::ALL.len())]
}

pub struct Composer {
    generator: Arc<dyn TextGenerator>,
    company_name: String,
    main_product: String,
    company_location: String,
    website_url: String,
}

impl Composer {
    pub fn new(config: &Config, generator: Arc<dyn TextGenerator>) -> Self {
        Composer {
            generator,
            company_name: config.company_name.clone(),
            main_product: config.main_product.clone(),
            company_location: config.company_location.clone(),
            website_url: config.website_url.clone(),
        }
    }

    /// Build one post. Missing topic or post type is picked at random; a
    /// generator failure swaps in the static body, so this never fails.
    pub async fn compose(&self, topic: Option<Topic>, post_type: Option<PostType>) -> Post {
        let (topic, post_type) = {
            let mut rng = rand::thread_rng();
            let topic = topic.unwrap_or_else(|| random_topic(&mut rng));
            let post_type = post_type.unwrap_or_else(|| random_post_type(&mut rng));
            (topic, post_type)
        };

        let prompt = catalog::build_prompt(&topic, post_type);
        let generated = match self.generator.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Ok(_) => Err(GenerationError::EmptyResponse),
            Err(e) => Err(e),
        };
        let (body, source) = match generated {
            Ok(body) => (body, ContentSource::Generated),
            Err(e) => {
                warn!(topic = %topic, post_type = %post_type, error = %e, "Content generation failed, using fallback");
                (
                    catalog::fallback_or_generic(&topic).to_string(),
                    ContentSource::Fallback,
                )
            }
        };

        let hashtags = catalog::hashtags(&topic);
        let content = self.assemble(&body, &topic, &hashtags);
        info!(topic = %topic, line = ?topic.product_line(), post_type = %post_type, source = ?source, "Composed post");

        Post {
            content,
            topic,
            post_type,
            hashtags,
            source,
        }
    }

    /// Daily batch with topic variety: no topic repeats until the catalog is
    /// exhausted. Post types stay independent per post.
    pub async fn compose_batch(&self, count: usize) -> Vec<Post> {
        let mut selector = VarietySelector::new();
        let mut posts = Vec::with_capacity(count);

        for _ in 0..count {
            let topic = {
                let mut rng = rand::thread_rng();
                selector.next_topic(&mut rng)
            };
            posts.push(self.compose(Some(topic), None).await);
        }

        posts
    }

    pub fn footer(&self) -> String {
        format!(
            "🥥 {} - {}\n🌍 Sustainable sourcing from {}",
            self.company_name, self.main_product, self.company_location
        )
    }

    fn assemble(&self, body: &str, topic: &Topic, hashtags: &str) -> String {
        format!(
            "{}\n\n{}\n\n{}\n\n{}\n{}",
            body,
            hashtags,
            self.footer(),
            catalog::call_to_action(topic),
            self.website_url
        )
    }
}
