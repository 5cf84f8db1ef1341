//! Static content catalog: prompt templates, hashtags, calls to action and
//! pre-written fallback bodies, keyed by topic.

use crate::models::{PostType, Topic};

pub const BASE_HASHTAGS: [&str; 4] = ["#MCTOil", "#SawaCoco", "#CoconutBased", "#Thailand"];
pub const GENERIC_HASHTAG: &str = "#Health";
const GENERIC_HASHTAGS: &[&str] = &[GENERIC_HASHTAG];
pub const MAX_HASHTAGS: usize = 8;

pub const GENERIC_CTA: &str = "🌟 Discover premium coconut products! Contact us for B2B pricing!";

pub const GENERIC_FALLBACK: &str = "🥥 Discover Sawa Coco's premium coconut products from Thailand - MCT Oils, MCT Powders & Coconut Shell Charcoal! 💪";

pub const SYSTEM_ROLE: &str = "You are a health and wellness content creator specializing in MCT Oil products. Create engaging, informative social media posts.";

const PROMPT_GUIDANCE: &str = "Keep it engaging, informative, and under 250 words. Include emojis where appropriate. Mention that this is from Thailand's sustainable coconut farms when relevant.";

fn template(topic: &Topic) -> Option<&'static str> {
    let template = match topic {
        Topic::HealthBenefits => "Write a {} post about the health benefits of premium coconut-based MCT Oil. Focus on scientific benefits and practical applications.",
        Topic::UsageTips => "Create a {} post with practical tips on how to use MCT Oil effectively in daily routine for optimal results.",
        Topic::ScienceFacts => "Write a {} post sharing interesting scientific facts about MCT Oil and medium-chain triglycerides from coconut sources.",
        Topic::Recipes => "Create a {} post featuring a simple recipe that incorporates premium MCT Oil or MCT powder.",
        Topic::FitnessPerformance => "Write a {} post about how coconut-based MCT Oil can enhance athletic performance and workout results.",
        Topic::WeightManagement => "Create a {} post about MCT Oil's role in healthy weight management and metabolism support.",
        Topic::BrainHealth => "Write a {} post about MCT Oil's cognitive benefits and brain health support from pure coconut sources.",
        Topic::EnergyBoost => "Create a {} post about how premium MCT Oil provides clean, sustained energy throughout the day.",
        Topic::KetogenicDiet => "Write a {} post about MCT Oil's importance in ketogenic and low-carb diets, focusing on C8/C10 benefits.",
        Topic::ProductFeatures => "Create a {} post highlighting the quality and features of Sawa Coco's premium MCT Oil products (60/40 blend and C8/98).",
        Topic::CharcoalBenefits => "Write a {} post about the benefits of premium coconut shell charcoal over regular charcoal - clean burn, minimal ash, long-lasting.",
        Topic::CharcoalApplications => "Create a {} post about the various applications of coconut shell charcoal: shisha, BBQ, industrial uses.",
        Topic::CharcoalQuality => "Write a {} post about Sawa Coco's high-grade coconut shell charcoal quality standards and production process in Thailand.",
        Topic::BbqGrilling => "Create a {} post about using coconut shell charcoal for BBQ and grilling - superior heat, clean taste, eco-friendly.",
        Topic::ShishaHookah => "Write a {} post about premium coconut shell charcoal for shisha/hookah - minimal smoke, long burn time, pure flavor.",
        Topic::IndustrialUses => "Create a {} post about industrial applications of coconut shell charcoal and its export quality standards.",
        Topic::Sustainability => "Write a {} post about sustainable coconut sourcing and environmental responsibility across all Sawa Coco products.",
        Topic::PalmFreeBenefits => "Create a {} post about the benefits of 100% palm-free production and why coconut-based is superior.",
        Topic::CoconutSourcing => "Write a {} post about single-origin coconut sourcing from Thailand and clean farming practices.",
        Topic::B2bApplications => "Create a {} post about Sawa Coco's B2B applications for food brands, supplement manufacturers, and industrial clients.",
        Topic::CleanFarming => "Write a {} post about chemical-free, pesticide-free coconut farming and its impact on product purity.",
        Topic::ZeroWaste => "Write a {} post about Sawa Coco's zero-waste approach - using coconuts for MCT oil AND shells for premium charcoal.",
        Topic::Unrecognized(_) => return None,
    };
    Some(template)
}

/// Full user prompt for the generator: topic template (or the generic one)
/// with the post type filled in, followed by the style guidance.
pub fn build_prompt(topic: &Topic, post_type: PostType) -> String {
    let base = template(topic)
        .unwrap_or("Write a {} post about premium coconut-based MCT Oil.")
        .replacen("{}", post_type.as_str(), 1);
    format!("{} {}", base, PROMPT_GUIDANCE)
}

pub fn topic_hashtags(topic: &Topic) -> Option<&'static [&'static str]> {
    let tags: &'static [&'static str] = match topic {
        Topic::HealthBenefits => &["#HealthBenefits", "#NaturalHealth", "#Wellness"],
        Topic::UsageTips => &["#HealthTips", "#WellnessTips", "#MCTTips"],
        Topic::ScienceFacts => &["#HealthScience", "#MCTScience", "#Nutrition"],
        Topic::Recipes => &["#HealthyRecipes", "#MCTRecipes", "#Cooking"],
        Topic::FitnessPerformance => &["#Fitness", "#Performance", "#WorkoutFuel"],
        Topic::WeightManagement => &["#WeightLoss", "#Metabolism", "#HealthyWeight"],
        Topic::BrainHealth => &["#BrainHealth", "#Cognitive", "#MentalWellness"],
        Topic::EnergyBoost => &["#Energy", "#NaturalEnergy", "#CleanEnergy"],
        Topic::KetogenicDiet => &["#Keto", "#KetogenicDiet", "#LowCarb"],
        Topic::ProductFeatures => &["#PremiumMCT", "#QualityProducts", "#C8C10"],
        Topic::Sustainability => &["#Sustainable", "#EcoFriendly", "#ResponsibleSourcing"],
        Topic::PalmFreeBenefits => &["#PalmFree", "#CoconutOnly", "#CleanProducts"],
        Topic::CoconutSourcing => &["#SingleOrigin", "#ThailandCoconuts", "#QualitySourcing"],
        Topic::B2bApplications => &["#B2B", "#BulkSupplier", "#FoodIndustry"],
        Topic::CleanFarming => &["#CleanFarming", "#NoPesticides", "#OrganicFarming"],
        Topic::CharcoalBenefits => &["#CoconutCharcoal", "#PremiumCharcoal", "#CleanBurn"],
        Topic::CharcoalApplications => &["#Charcoal", "#BBQ", "#Shisha"],
        Topic::CharcoalQuality => &["#HighGrade", "#QualityControl", "#ExportQuality"],
        Topic::BbqGrilling => &["#BBQ", "#Grilling", "#EcoFriendly"],
        Topic::ShishaHookah => &["#Shisha", "#Hookah", "#MinimalSmoke"],
        Topic::IndustrialUses => &["#Industrial", "#Export", "#B2BCharcoal"],
        Topic::ZeroWaste => &["#ZeroWaste", "#Sustainable", "#CircularEconomy"],
        Topic::Unrecognized(_) => return None,
    };
    Some(tags)
}

/// Base tags first, then the topic's own, capped at `MAX_HASHTAGS`.
pub fn hashtags(topic: &Topic) -> String {
    let specific = topic_hashtags(topic).unwrap_or(GENERIC_HASHTAGS);
    BASE_HASHTAGS
        .iter()
        .chain(specific.iter())
        .take(MAX_HASHTAGS)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn call_to_action(topic: &Topic) -> &'static str {
    match topic {
        Topic::HealthBenefits => "💪 Ready to boost your energy? Contact us for bulk MCT oil pricing!",
        Topic::UsageTips => "☕ Want to try premium MCT oil? Get wholesale rates for your business!",
        Topic::ScienceFacts => "🧠 Interested in our C8/98 ultra-pure MCT oil? Request samples today!",
        Topic::Recipes => "👨‍🍳 Perfect for food brands! Get bulk MCT oil & powder pricing!",
        Topic::FitnessPerformance => "🏋️ Fuel your customers' performance! Wholesale MCT oil available!",
        Topic::WeightManagement => "⚖️ Help your clients succeed! Partner with us for premium MCT products!",
        Topic::BrainHealth => "🧠 Boost your product line! Contact us for MCT oil & powder solutions!",
        Topic::EnergyBoost => "⚡ Power up your brand! Get competitive bulk MCT oil rates!",
        Topic::KetogenicDiet => "🥑 Perfect for keto brands! Wholesale C8/C10 & C8/98 MCT oils available!",
        Topic::ProductFeatures => "✨ Ready to source premium MCT products? Contact our B2B team!",
        Topic::CharcoalBenefits => "🔥 Upgrade your charcoal supply! Export-quality coconut shell charcoal available!",
        Topic::CharcoalApplications => "🍖 Perfect for your business! Bulk coconut shell charcoal - contact us!",
        Topic::CharcoalQuality => "🏆 Need premium charcoal? Get Thailand export-quality pricing today!",
        Topic::BbqGrilling => "🔥 Stock the best! Wholesale coconut shell charcoal for retailers!",
        Topic::ShishaHookah => "💨 Premium shisha charcoal supplier! Contact us for bulk orders!",
        Topic::IndustrialUses => "🏭 Industrial charcoal needs? We supply export-quality coconut shell charcoal!",
        Topic::Sustainability => "🌱 Partner with sustainable suppliers! Contact Sawa Coco B2B team!",
        Topic::PalmFreeBenefits => "🌿 Go palm-free! Source 100% coconut-based products with us!",
        Topic::CoconutSourcing => "🥥 Direct from Thailand farms! Get premium coconut product pricing!",
        Topic::B2bApplications => "🤝 Ready to partner? Contact our B2B team for custom solutions!",
        Topic::CleanFarming => "🌾 Clean products for clean brands! Get wholesale pricing today!",
        Topic::ZeroWaste => "♻️ Complete coconut solutions! MCT oils + charcoal - contact us!",
        Topic::Unrecognized(_) => GENERIC_CTA,
    }
}

pub fn fallback_body(topic: &Topic) -> Option<&'static str> {
    let body = match topic {
        Topic::HealthBenefits => "🥥 Premium coconut-based MCT Oil from Thailand delivers rapid energy and metabolism support! Our sustainable sourcing ensures pure, clean nutrition for your wellness journey. ⚡",
        Topic::UsageTips => "💡 Pro tip: Start with 1 tsp of our premium MCT Oil in coffee or smoothies. Our 60/40 C8/C10 blend provides optimal absorption and sustained energy! ☕",
        Topic::ScienceFacts => "🧠 Science fact: Our C8/98 MCT Oil converts directly to ketones, bypassing normal digestion for immediate brain fuel! Pure coconut sourcing from Thailand's clean farms. 🔬",
        Topic::Sustainability => "🌍 100% palm-free, sustainably sourced from single-origin Thai coconut farms. Zero chemicals, zero pesticides - just pure, responsible products! 🥥",
        Topic::ProductFeatures => "✨ Sawa Coco offers premium MCT oils: 60/40 blend for versatility, C8/98 for performance. Plus MCT powder for easy mixing! All from Thailand's finest coconuts. 🏆",
        Topic::CharcoalBenefits => "🔥 Premium coconut shell charcoal burns cleaner, longer, and produces minimal ash compared to regular charcoal. Perfect for BBQ, shisha, and industrial use! 🥥",
        Topic::BbqGrilling => "🍖 Elevate your BBQ game with coconut shell charcoal! Superior heat retention, clean taste, and eco-friendly. Made from Thailand's finest coconut shells. 🔥",
        Topic::ShishaHookah => "💨 Premium coconut shell charcoal for the perfect shisha experience - minimal smoke, long burn time, pure flavor. Export quality from Thailand! 🥥",
        Topic::ZeroWaste => "♻️ From coconut to MCT oil to premium charcoal - Sawa Coco's zero-waste approach maximizes every part of Thailand's sustainable coconuts! 🌱",
        _ => return None,
    };
    Some(body)
}

/// Static body used when the generator is unavailable.
pub fn fallback_or_generic(topic: &Topic) -> &'static str {
    fallback_body(topic).unwrap_or(GENERIC_FALLBACK)
}
