use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductLine {
    OilPowder,
    Charcoal,
    General,
}

/// Subject of a post. Identifiers outside the catalog are kept as
/// `Unrecognized` so every lookup can fall back to generic content.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    HealthBenefits,
    UsageTips,
    ScienceFacts,
    Recipes,
    FitnessPerformance,
    WeightManagement,
    BrainHealth,
    EnergyBoost,
    KetogenicDiet,
    ProductFeatures,
    CharcoalBenefits,
    CharcoalApplications,
    CharcoalQuality,
    BbqGrilling,
    ShishaHookah,
    IndustrialUses,
    Sustainability,
    PalmFreeBenefits,
    CoconutSourcing,
    B2bApplications,
    CleanFarming,
    ZeroWaste,
    Unrecognized(String),
}

impl Topic {
    pub const CATALOG: &'static [Topic] = &[
        Topic::HealthBenefits,
        Topic::UsageTips,
        Topic::ScienceFacts,
        Topic::Recipes,
        Topic::FitnessPerformance,
        Topic::WeightManagement,
        Topic::BrainHealth,
        Topic::EnergyBoost,
        Topic::KetogenicDiet,
        Topic::ProductFeatures,
        Topic::CharcoalBenefits,
        Topic::CharcoalApplications,
        Topic::CharcoalQuality,
        Topic::BbqGrilling,
        Topic::ShishaHookah,
        Topic::IndustrialUses,
        Topic::Sustainability,
        Topic::PalmFreeBenefits,
        Topic::CoconutSourcing,
        Topic::B2bApplications,
        Topic::CleanFarming,
        Topic::ZeroWaste,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Topic::HealthBenefits => "health_benefits",
            Topic::UsageTips => "usage_tips",
            Topic::ScienceFacts => "science_facts",
            Topic::Recipes => "recipes",
            Topic::FitnessPerformance => "fitness_performance",
            Topic::WeightManagement => "weight_management",
            Topic::BrainHealth => "brain_health",
            Topic::EnergyBoost => "energy_boost",
            Topic::KetogenicDiet => "ketogenic_diet",
            Topic::ProductFeatures => "product_features",
            Topic::CharcoalBenefits => "charcoal_benefits",
            Topic::CharcoalApplications => "charcoal_applications",
            Topic::CharcoalQuality => "charcoal_quality",
            Topic::BbqGrilling => "bbq_grilling",
            Topic::ShishaHookah => "shisha_hookah",
            Topic::IndustrialUses => "industrial_uses",
            Topic::Sustainability => "sustainability",
            Topic::PalmFreeBenefits => "palm_free_benefits",
            Topic::CoconutSourcing => "coconut_sourcing",
            Topic::B2bApplications => "b2b_applications",
            Topic::CleanFarming => "clean_farming",
            Topic::ZeroWaste => "zero_waste",
            Topic::Unrecognized(id) => id,
        }
    }

    pub fn product_line(&self) -> ProductLine {
        match self {
            Topic::HealthBenefits
            | Topic::UsageTips
            | Topic::ScienceFacts
            | Topic::Recipes
            | Topic::FitnessPerformance
            | Topic::WeightManagement
            | Topic::BrainHealth
            | Topic::EnergyBoost
            | Topic::KetogenicDiet
            | Topic::ProductFeatures => ProductLine::OilPowder,
            Topic::CharcoalBenefits
            | Topic::CharcoalApplications
            | Topic::CharcoalQuality
            | Topic::BbqGrilling
            | Topic::ShishaHookah
            | Topic::IndustrialUses => ProductLine::Charcoal,
            _ => ProductLine::General,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Topic::Unrecognized(_))
    }
}

impl From<&str> for Topic {
    fn from(id: &str) -> Self {
        let id = id.trim();
        Topic::CATALOG
            .iter()
            .find(|topic| topic.as_str() == id)
            .cloned()
            .unwrap_or_else(|| Topic::Unrecognized(id.to_string()))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Topic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Educational,
    Testimonial,
    Tip,
    Fact,
    Recipe,
    Motivation,
    Comparison,
    HowTo,
}

impl PostType {
    pub const ALL: [PostType; 8] = [
        PostType::Educational,
        PostType::Testimonial,
        PostType::Tip,
        PostType::Fact,
        PostType::Recipe,
        PostType::Motivation,
        PostType::Comparison,
        PostType::HowTo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Educational => "educational",
            PostType::Testimonial => "testimonial",
            PostType::Tip => "tip",
            PostType::Fact => "fact",
            PostType::Recipe => "recipe",
            PostType::Motivation => "motivation",
            PostType::Comparison => "comparison",
            PostType::HowTo => "how_to",
        }
    }
}

impl FromStr for PostType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PostType::ALL
            .iter()
            .copied()
            .find(|post_type| post_type.as_str() == s)
            .ok_or_else(|| ParseError::PostType(s.to_string()))
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which path produced the body of a post.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Generated,
    Fallback,
}

#[derive(Serialize, Clone, Debug)]
pub struct Post {
    pub content: String,
    pub topic: Topic,
    pub post_type: PostType,
    pub hashtags: String,
    pub source: ContentSource,
}

/// Daily time-of-day at which one post goes out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduleSlot {
    time: NaiveTime,
}

impl ScheduleSlot {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| ScheduleSlot { time })
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

impl FromStr for ScheduleSlot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = || ParseError::Slot(raw.to_string());

        let (hour, minute) = raw.split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        ScheduleSlot::new(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for ScheduleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.time.hour(), self.time.minute())
    }
}

/// A slot together with the last day it fired on.
#[derive(Clone, Debug)]
pub struct SlotState {
    pub slot: ScheduleSlot,
    pub last_fired_date: Option<NaiveDate>,
}
