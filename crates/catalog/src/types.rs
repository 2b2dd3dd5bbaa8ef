//! Core domain types for the technique catalog.
//!
//! This module defines the data structures shared by every other crate:
//! techniques, the closed symptom and time-budget vocabularies, athlete
//! accounts, and the in-memory `TechniqueIndex`.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a technique in the catalog
pub type TechniqueId = u32;

/// Unique identifier for an athlete, issued by the identity provider
pub type AthleteId = Uuid;

// =============================================================================
// Technique
// =============================================================================

/// A single coping technique an athlete can run before competing.
///
/// `slug` is the join key used by the recommender's static tables; the rest
/// is display data apart from `duration_minutes`, which counts against the
/// athlete's time budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    pub id: TechniqueId,
    pub slug: String,
    pub name: String,
    pub category: Category,
    pub instruction: String,
    pub duration_minutes: u32,
}

/// Display grouping for techniques
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Breathing,
    Visualization,
    Affirmations,
    Focus,
    Grounding,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Breathing,
        Category::Visualization,
        Category::Affirmations,
        Category::Focus,
        Category::Grounding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breathing => "breathing",
            Category::Visualization => "visualization",
            Category::Affirmations => "affirmations",
            Category::Focus => "focus",
            Category::Grounding => "grounding",
        }
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "category".to_string(),
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Athlete Questionnaire Vocabulary
// =============================================================================

/// Anxiety symptoms an athlete can report during onboarding.
///
/// Closed set: anything else is rejected by `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnxietySymptom {
    Overthinking,
    PhysicalTension,
    LossOfFocus,
    SelfDoubt,
    Rushing,
    NegativityAfterErrors,
}

impl AnxietySymptom {
    pub const ALL: [AnxietySymptom; 6] = [
        AnxietySymptom::Overthinking,
        AnxietySymptom::PhysicalTension,
        AnxietySymptom::LossOfFocus,
        AnxietySymptom::SelfDoubt,
        AnxietySymptom::Rushing,
        AnxietySymptom::NegativityAfterErrors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnxietySymptom::Overthinking => "overthinking",
            AnxietySymptom::PhysicalTension => "physical_tension",
            AnxietySymptom::LossOfFocus => "loss_of_focus",
            AnxietySymptom::SelfDoubt => "self_doubt",
            AnxietySymptom::Rushing => "rushing",
            AnxietySymptom::NegativityAfterErrors => "negativity_after_errors",
        }
    }
}

impl FromStr for AnxietySymptom {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnxietySymptom::ALL
            .into_iter()
            .find(|symptom| symptom.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "anxiety_symptom".to_string(),
                value: s.to_string(),
            })
    }
}

impl fmt::Display for AnxietySymptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much time the athlete can spend on a routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePreference {
    #[serde(rename = "2min")]
    TwoMinutes,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "10min")]
    TenMinutes,
}

impl TimePreference {
    pub const ALL: [TimePreference; 3] = [
        TimePreference::TwoMinutes,
        TimePreference::FiveMinutes,
        TimePreference::TenMinutes,
    ];

    /// The integer minute budget for this preference
    pub fn ceiling_minutes(&self) -> u32 {
        match self {
            TimePreference::TwoMinutes => 2,
            TimePreference::FiveMinutes => 5,
            TimePreference::TenMinutes => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimePreference::TwoMinutes => "2min",
            TimePreference::FiveMinutes => "5min",
            TimePreference::TenMinutes => "10min",
        }
    }
}

impl FromStr for TimePreference {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimePreference::ALL
            .into_iter()
            .find(|pref| pref.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "time_preference".to_string(),
                value: s.to_string(),
            })
    }
}

impl fmt::Display for TimePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Competitive level reported during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitiveLevel {
    Recreational,
    College,
    SemiPro,
}

impl FromStr for CompetitiveLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recreational" => Ok(CompetitiveLevel::Recreational),
            "college" => Ok(CompetitiveLevel::College),
            "semi_pro" => Ok(CompetitiveLevel::SemiPro),
            _ => Err(CatalogError::InvalidValue {
                field: "competitive_level".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Accounts
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Athlete,
    Coach,
}

impl FromStr for Role {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "athlete" => Ok(Role::Athlete),
            "coach" => Ok(Role::Coach),
            _ => Err(CatalogError::InvalidValue {
                field: "role".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// A signed-in user as known to the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AthleteId,
    /// Bearer token that resolves to this account
    #[serde(skip_serializing, default)]
    pub token: String,
    pub display_name: String,
    pub role: Role,
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Aggregate numbers for one category of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub technique_count: u32,
    pub total_minutes: u32,
    pub shortest_minutes: u32,
}

// =============================================================================
// TechniqueIndex - In-Memory Catalog
// =============================================================================

/// Holds every technique plus the lookups other crates need.
///
/// Slug and category indices are rebuilt by `build_secondary_indices`.
#[derive(Debug, Clone)]
pub struct TechniqueIndex {
    pub(crate) techniques: HashMap<TechniqueId, Technique>,
    pub(crate) slug_index: HashMap<String, TechniqueId>,
    pub(crate) category_index: BTreeMap<Category, Vec<TechniqueId>>,
}

impl TechniqueIndex {
    /// Creates a new, empty index
    pub fn new() -> Self {
        Self {
            techniques: HashMap::new(),
            slug_index: HashMap::new(),
            category_index: BTreeMap::new(),
        }
    }

    /// Build an index from a list of techniques
    pub fn from_techniques(techniques: impl IntoIterator<Item = Technique>) -> Self {
        let mut index = Self::new();
        for technique in techniques {
            index.insert_technique(technique);
        }
        index.build_secondary_indices();
        index
    }

    pub fn get(&self, id: TechniqueId) -> Option<&Technique> {
        self.techniques.get(&id)
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&Technique> {
        self.slug_index
            .get(slug)
            .and_then(|id| self.techniques.get(id))
    }

    pub fn contains(&self, id: TechniqueId) -> bool {
        self.techniques.contains_key(&id)
    }

    /// Ids of all techniques in a category, ascending
    pub fn by_category(&self, category: Category) -> &[TechniqueId] {
        self.category_index
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All techniques ordered by category, then id
    pub fn techniques(&self) -> Vec<Technique> {
        self.category_index
            .values()
            .flatten()
            .filter_map(|id| self.techniques.get(id))
            .cloned()
            .collect()
    }

    /// Insert a technique; an existing technique with the same id is replaced
    pub fn insert_technique(&mut self, technique: Technique) {
        self.techniques.insert(technique.id, technique);
    }

    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }
}

impl Default for TechniqueIndex {
    fn default() -> Self {
        Self::new()
    }
}
