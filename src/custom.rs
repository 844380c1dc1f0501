use crate::error::ValidationError;
use crate::model::NewCustomRecipe;
use crate::partition::contains_onion_garlic;

const DEFAULT_SERVINGS: u32 = 4;

/// A custom recipe being written by the user
#[derive(Debug, Clone, PartialEq)]
pub struct CustomRecipeDraft {
    pub title: String,
    pub servings: u32,
    ingredients: Vec<String>,
    instructions: Vec<String>,
}

impl Default for CustomRecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            servings: DEFAULT_SERVINGS,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }
}

impl CustomRecipeDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    /// Add an ingredient line. Blank input is ignored; returns whether it was added.
    pub fn add_ingredient(&mut self, ingredient: &str) -> bool {
        push_trimmed(&mut self.ingredients, ingredient)
    }

    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        (index < self.ingredients.len()).then(|| self.ingredients.remove(index))
    }

    pub fn add_instruction(&mut self, step: &str) -> bool {
        push_trimmed(&mut self.instructions, step)
    }

    pub fn remove_instruction(&mut self, index: usize) -> Option<String> {
        (index < self.instructions.len()).then(|| self.instructions.remove(index))
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn has_onion_garlic(&self) -> bool {
        contains_onion_garlic(&self.ingredients)
    }

    /// Check the draft and produce the request body
    pub fn validate(&self) -> Result<NewCustomRecipe, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.ingredients.len() < 2 {
            return Err(ValidationError::TooFewIngredients);
        }
        if self.instructions.is_empty() {
            return Err(ValidationError::MissingInstructions);
        }
        if self.servings == 0 {
            return Err(ValidationError::InvalidServings);
        }
        Ok(NewCustomRecipe {
            title: title.to_string(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            servings: self.servings,
        })
    }

    /// Start over, as after a successful submit
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn push_trimmed(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    list.push(value.to_string());
    true
}
