use serde::Serialize;

/// Best-effort result of the import pipeline. Fields the strategies could not
/// fill stay absent and are omitted from the serialized payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractedRecipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<f64>,
    #[serde(rename = "sourceUrl")]
    pub source_url: String,
}

impl ExtractedRecipe {
    /// True when no strategy produced anything worth returning. The pipeline
    /// reports not-found instead of an empty success payload.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.ingredients.is_none() && self.steps.is_none()
    }
}

/// An ingredient line split into amount and item, e.g. "2 dl" / "grädde".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub amount: String,
    pub item: String,
}

impl Ingredient {
    /// Split a free-text ingredient line at its first whitespace boundary.
    /// A line without whitespace becomes an item with an empty amount.
    pub fn from_line(line: &str) -> Self {
        let line = line.trim();
        match line.split_once(char::is_whitespace) {
            Some((amount, item)) => Ingredient {
                amount: amount.to_string(),
                item: item.trim_start().to_string(),
            },
            None => Ingredient {
                amount: String::new(),
                item: line.to_string(),
            },
        }
    }
}

/// A recipe as stored in the household collection.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
}

/// Recipe ids planned for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MealSlot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner: Option<String>,
}

/// Which meal of the day a slot entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingListItem {
    pub name: String,
    pub quantity: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HouseholdMember {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Household {
    pub id: String,
    pub name: String,
    pub members: Vec<HouseholdMember>,
}
