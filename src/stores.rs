//! In-memory household state: recipes, weekly meal plan, shopping list and
//! household members. Owned stores behind explicit interfaces; no
//! persistence, no sharing across sessions.

use std::collections::BTreeMap;

use crate::model::{
    ExtractedRecipe, Household, HouseholdMember, Ingredient, Meal, MealSlot, Recipe,
    ShoppingListItem,
};

/// Input for adding a recipe by hand.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub source_url: Option<String>,
    pub image_url: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
}

/// Owned collection of recipes, newest first.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    next_id: u64,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Add a recipe and return its assigned id.
    pub fn add(&mut self, data: NewRecipe) -> String {
        self.next_id += 1;
        let id = self.next_id.to_string();
        self.recipes.insert(
            0,
            Recipe {
                id: id.clone(),
                title: data.title,
                image_url: data.image_url,
                source_url: data.source_url,
                tags: Vec::new(),
                ingredients: data.ingredients,
                steps: data.steps,
            },
        );
        id
    }

    /// Add an imported recipe, mapping its free-text ingredient lines into
    /// amount/item pairs. Returns `None` when the import produced no title
    /// to file the recipe under.
    pub fn add_extracted(&mut self, extracted: ExtractedRecipe) -> Option<String> {
        let title = extracted.title?;
        let ingredients = extracted
            .ingredients
            .unwrap_or_default()
            .iter()
            .map(|line| Ingredient::from_line(line))
            .collect();

        Some(self.add(NewRecipe {
            title,
            source_url: Some(extracted.source_url),
            image_url: extracted.image,
            ingredients,
            steps: extracted.steps.unwrap_or_default(),
        }))
    }
}

/// The week's plan, day name to meal slots. Days keep insertion-independent
/// ordering via BTreeMap so listing is deterministic.
#[derive(Debug, Default)]
pub struct MealPlanStore {
    plan: BTreeMap<String, MealSlot>,
}

impl MealPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn week(&self) -> &BTreeMap<String, MealSlot> {
        &self.plan
    }

    pub fn day(&self, day: &str) -> Option<&MealSlot> {
        self.plan.get(day)
    }

    /// Point one meal of one day at a recipe id, creating the day on demand.
    pub fn set_meal(&mut self, day: &str, meal: Meal, recipe_id: &str) {
        let slot = self.plan.entry(day.to_string()).or_default();
        let target = match meal {
            Meal::Breakfast => &mut slot.breakfast,
            Meal::Lunch => &mut slot.lunch,
            Meal::Dinner => &mut slot.dinner,
        };
        *target = Some(recipe_id.to_string());
    }
}

/// The shopping list; items are keyed by name.
#[derive(Debug, Default)]
pub struct ShoppingListStore {
    items: Vec<ShoppingListItem>,
}

impl ShoppingListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn add(&mut self, name: impl Into<String>, quantity: impl Into<String>) {
        self.items.push(ShoppingListItem {
            name: name.into(),
            quantity: quantity.into(),
            checked: false,
        });
    }

    /// Flip the checked state of the named item. Unknown names are ignored.
    pub fn toggle(&mut self, name: &str) {
        for item in &mut self.items {
            if item.name == name {
                item.checked = !item.checked;
            }
        }
    }
}

impl Household {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Household {
            id: id.into(),
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn add_member(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.members.push(HouseholdMember {
            id: id.into(),
            name: name.into(),
        });
    }

    pub fn members(&self) -> &[HouseholdMember] {
        &self.members
    }
}
