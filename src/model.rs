use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Recipe identifier. Search results use numeric ids, stored recipes use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Number(n) => write!(f, "{}", n),
            RecipeId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecipeId {
    fn from(n: i64) -> Self {
        RecipeId::Number(n)
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        s.parse::<i64>()
            .map(RecipeId::Number)
            .unwrap_or_else(|_| RecipeId::Text(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
}

/// A recipe as returned by the search endpoint. Never modified by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResult {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "readyInMinutes", default)]
    pub ready_in_minutes: u32,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(rename = "hasOnionGarlic", default)]
    pub has_onion_garlic: bool,
}

fn default_servings() -> u32 {
    1
}

impl RecipeResult {
    pub fn prep_tier(&self) -> PrepTier {
        PrepTier::for_minutes(self.ready_in_minutes)
    }

    pub fn onion_garlic(&self) -> OnionGarlic {
        if self.has_onion_garlic {
            OnionGarlic::With
        } else {
            OnionGarlic::Without
        }
    }
}

/// A favorite or custom recipe as returned by the collection endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipe {
    #[serde(flatten)]
    pub recipe: RecipeResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_token: Option<String>,
}

/// `{ "recipes": [...] }` wrapper used by the list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeList {
    #[serde(default)]
    pub recipes: Vec<SavedRecipe>,
}

/// Preparation time bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrepTier {
    /// Under 20 minutes
    Low,
    /// 20 to 45 minutes inclusive
    Medium,
    /// Over 45 minutes
    High,
}

impl PrepTier {
    pub const ALL: [PrepTier; 3] = [PrepTier::Low, PrepTier::Medium, PrepTier::High];

    pub fn for_minutes(minutes: u32) -> Self {
        match minutes {
            0..=19 => PrepTier::Low,
            20..=45 => PrepTier::Medium,
            _ => PrepTier::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrepTier::Low => "LOW",
            PrepTier::Medium => "MEDIUM",
            PrepTier::High => "HIGH",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PrepTier::Low => "Under 20 min",
            PrepTier::Medium => "20-45 min",
            PrepTier::High => "Over 45 min",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnionGarlic {
    With,
    Without,
}

impl OnionGarlic {
    pub const ALL: [OnionGarlic; 2] = [OnionGarlic::With, OnionGarlic::Without];

    pub fn label(&self) -> &'static str {
        match self {
            OnionGarlic::With => "With Onion-Garlic",
            OnionGarlic::Without => "Without Onion-Garlic",
        }
    }
}

/// The two onion-garlic buckets of one prep-time tier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierBuckets {
    #[serde(default)]
    pub with_onion_garlic: Vec<RecipeResult>,
    #[serde(default)]
    pub without_onion_garlic: Vec<RecipeResult>,
}

impl TierBuckets {
    pub fn get(&self, onion_garlic: OnionGarlic) -> &[RecipeResult] {
        match onion_garlic {
            OnionGarlic::With => &self.with_onion_garlic,
            OnionGarlic::Without => &self.without_onion_garlic,
        }
    }

    pub(crate) fn get_mut(&mut self, onion_garlic: OnionGarlic) -> &mut Vec<RecipeResult> {
        match onion_garlic {
            OnionGarlic::With => &mut self.with_onion_garlic,
            OnionGarlic::Without => &mut self.without_onion_garlic,
        }
    }

    pub fn len(&self) -> usize {
        self.with_onion_garlic.len() + self.without_onion_garlic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Search results, already partitioned by prep-time tier and onion-garlic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub low: TierBuckets,
    #[serde(default)]
    pub medium: TierBuckets,
    #[serde(default)]
    pub high: TierBuckets,
}

impl SearchResponse {
    pub fn tier(&self, tier: PrepTier) -> &TierBuckets {
        match tier {
            PrepTier::Low => &self.low,
            PrepTier::Medium => &self.medium,
            PrepTier::High => &self.high,
        }
    }

    pub(crate) fn tier_mut(&mut self, tier: PrepTier) -> &mut TierBuckets {
        match tier {
            PrepTier::Low => &mut self.low,
            PrepTier::Medium => &mut self.medium,
            PrepTier::High => &mut self.high,
        }
    }

    pub fn bucket(&self, tier: PrepTier, onion_garlic: OnionGarlic) -> &[RecipeResult] {
        self.tier(tier).get(onion_garlic)
    }

    /// Every bucket in display order: low, medium, high; with before without
    pub fn iter(&self) -> impl Iterator<Item = (PrepTier, OnionGarlic, &[RecipeResult])> {
        PrepTier::ALL.into_iter().flat_map(move |tier| {
            OnionGarlic::ALL
                .into_iter()
                .map(move |og| (tier, og, self.bucket(tier, og)))
        })
    }

    pub fn total(&self) -> usize {
        PrepTier::ALL.iter().map(|t| self.tier(*t).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Cuisine filter sent with a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cuisine {
    #[default]
    Any,
    American,
    Chinese,
    French,
    Greek,
    Indian,
    Italian,
    Japanese,
    Korean,
    Mediterranean,
    Mexican,
    MiddleEastern,
    Spanish,
    Thai,
    Vietnamese,
}

impl Cuisine {
    pub const ALL: [Cuisine; 15] = [
        Cuisine::Any,
        Cuisine::American,
        Cuisine::Chinese,
        Cuisine::French,
        Cuisine::Greek,
        Cuisine::Indian,
        Cuisine::Italian,
        Cuisine::Japanese,
        Cuisine::Korean,
        Cuisine::Mediterranean,
        Cuisine::Mexican,
        Cuisine::MiddleEastern,
        Cuisine::Spanish,
        Cuisine::Thai,
        Cuisine::Vietnamese,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Any => "any",
            Cuisine::American => "american",
            Cuisine::Chinese => "chinese",
            Cuisine::French => "french",
            Cuisine::Greek => "greek",
            Cuisine::Indian => "indian",
            Cuisine::Italian => "italian",
            Cuisine::Japanese => "japanese",
            Cuisine::Korean => "korean",
            Cuisine::Mediterranean => "mediterranean",
            Cuisine::Mexican => "mexican",
            Cuisine::MiddleEastern => "middle_eastern",
            Cuisine::Spanish => "spanish",
            Cuisine::Thai => "thai",
            Cuisine::Vietnamese => "vietnamese",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown cuisine: {0}")]
pub struct ParseCuisineError(pub String);

impl FromStr for Cuisine {
    type Err = ParseCuisineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        if normalized.is_empty() {
            return Ok(Cuisine::Any);
        }
        Cuisine::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ParseCuisineError(s.to_string()))
    }
}

/// A user-authored recipe ready to be sent to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCustomRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub servings: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
}

/// Body returned by login and register
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Macro nutrient bar fill levels, each 0-100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionBars {
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl NutritionBars {
    /// Bars scaled against the largest macro of the same recipe (search result cards)
    pub fn relative(n: &Nutrition) -> Self {
        let max = n.protein.max(n.carbs).max(n.fat).max(n.fiber);
        let pct = |v: f64| if max > 0.0 { v / max * 100.0 } else { 0.0 };
        Self {
            calories: n.calories.round() as i64,
            protein: pct(n.protein),
            carbs: pct(n.carbs),
            fat: pct(n.fat),
            fiber: pct(n.fiber),
        }
    }

    /// Bars scaled against fixed reference amounts in grams (saved recipe cards)
    pub fn daily(n: &Nutrition) -> Self {
        let pct = |v: f64, reference: f64| (v / reference * 100.0).clamp(0.0, 100.0);
        Self {
            calories: n.calories.round() as i64,
            protein: pct(n.protein, 50.0),
            carbs: pct(n.carbs, 80.0),
            fat: pct(n.fat, 30.0),
            fiber: pct(n.fiber, 25.0),
        }
    }
}
