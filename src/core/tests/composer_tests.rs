use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::Arc;

use super::super::composer::{Composer, VarietySelector};
use super::support::{test_config, ScriptedGenerator};
use crate::catalog;
use crate::models::{ContentSource, PostType, Topic};

fn composer(generator: ScriptedGenerator) -> (Composer, Arc<ScriptedGenerator>) {
    let generator = Arc::new(generator);
    let composer = Composer::new(&test_config(&[]), generator.clone());
    (composer, generator)
}

fn distinct(topics: &[Topic]) -> bool {
    topics.iter().collect::<HashSet<_>>().len() == topics.len()
}

#[test]
fn test_selector_exhausts_catalog_before_repeating() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut selector = VarietySelector::new();

    let first: Vec<Topic> = (0..22).map(|_| selector.next_topic(&mut rng)).collect();
    assert!(distinct(&first));
    assert_eq!(first.len(), Topic::CATALOG.len());

    let second: Vec<Topic> = (0..22).map(|_| selector.next_topic(&mut rng)).collect();
    assert!(distinct(&second), "window should restart after a full pass");
}

#[tokio::test]
async fn test_batch_topics_distinct_up_to_catalog_size() {
    let (composer, _) = composer(ScriptedGenerator::replying("Fresh post"));

    for count in [1, 4, 13, 22] {
        let posts = composer.compose_batch(count).await;
        assert_eq!(posts.len(), count);
        let topics: Vec<Topic> = posts.into_iter().map(|p| p.topic).collect();
        assert!(distinct(&topics), "repeat within batch of {count}");
    }
}

#[tokio::test]
async fn test_batch_larger_than_catalog_restarts_window() {
    let (composer, _) = composer(ScriptedGenerator::replying("Fresh post"));

    let posts = composer.compose_batch(50).await;
    assert_eq!(posts.len(), 50);
    let topics: Vec<Topic> = posts.into_iter().map(|p| p.topic).collect();
    assert!(distinct(&topics[..22]));
    assert!(distinct(&topics[22..44]));
    assert!(distinct(&topics[44..]));
}

#[tokio::test]
async fn test_bbq_tip_layout() {
    let (composer, generator) = composer(ScriptedGenerator::replying(
        "  Light it once, grill all evening 🔥  \n",
    ));

    let post = composer
        .compose(Some(Topic::BbqGrilling), Some(PostType::Tip))
        .await;

    let expected = format!(
        "Light it once, grill all evening 🔥\n\n\
        #MCTOil #SawaCoco #CoconutBased #Thailand #BBQ #Grilling #EcoFriendly\n\n\
        🥥 Sawa Coco - MCT Oils, MCT Powders & Coconut Shell Charcoal\n\
        🌍 Sustainable sourcing from Thailand\n\n\
        {}\n\
        https://www.sawa-coco.com",
        catalog::call_to_action(&Topic::BbqGrilling)
    );
    assert_eq!(post.content, expected);
    assert_eq!(post.topic, Topic::BbqGrilling);
    assert_eq!(post.post_type, PostType::Tip);
    assert_eq!(post.source, ContentSource::Generated);
    assert!(post.content.ends_with("https://www.sawa-coco.com"));

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("Create a tip post about using coconut shell charcoal"));
}

#[tokio::test]
async fn test_generator_failure_uses_topic_fallback() {
    let (composer, generator) = composer(ScriptedGenerator::failing());

    let post = composer
        .compose(Some(Topic::ShishaHookah), Some(PostType::Fact))
        .await;

    assert_eq!(post.source, ContentSource::Fallback);
    assert!(post
        .content
        .starts_with(catalog::fallback_or_generic(&Topic::ShishaHookah)));
    assert!(post.content.contains(&post.hashtags));
    assert!(post
        .content
        .contains(catalog::call_to_action(&Topic::ShishaHookah)));
    // One attempt, no retry.
    assert_eq!(generator.prompts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_generator_failure_on_unknown_topic_uses_generic_fallback() {
    let (composer, _) = composer(ScriptedGenerator::failing());

    let post = composer
        .compose(Some(Topic::from("deep_sea_diving")), None)
        .await;

    assert!(post.content.starts_with(catalog::GENERIC_FALLBACK));
    assert_eq!(
        post.hashtags,
        "#MCTOil #SawaCoco #CoconutBased #Thailand #Health"
    );
    assert!(post.content.contains(catalog::GENERIC_CTA));
}

#[tokio::test]
async fn test_blank_completion_counts_as_failure() {
    let (composer, _) = composer(ScriptedGenerator::replying("   \n"));

    let post = composer.compose(Some(Topic::Recipes), None).await;

    assert_eq!(post.source, ContentSource::Fallback);
    assert!(post.content.starts_with(catalog::GENERIC_FALLBACK));
}

#[tokio::test]
async fn test_random_choice_stays_in_catalog() {
    let (composer, _) = composer(ScriptedGenerator::replying("Hello"));

    for _ in 0..20 {
        let post = composer.compose(None, None).await;
        assert!(post.topic.is_recognized());
        assert!(PostType::ALL.contains(&post.post_type));
        assert!(post.hashtags.split(' ').count() <= catalog::MAX_HASHTAGS);
    }
}
