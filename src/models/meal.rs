use std::collections::HashMap;

use serde::Deserialize;

use super::Ingredient;

/// The lookup API spreads ingredients over this many numbered slots.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Response envelope from the lookup API.
///
/// The API reports zero matches as a null `meals` array, so a missing
/// list is success with no results, not an error.
#[derive(Debug, Deserialize)]
pub struct MealResponse {
    pub meals: Option<Vec<Meal>>,
}

/// A meal as returned by the remote lookup API, not yet persisted.
///
/// Ingredients arrive as twenty numbered field pairs
/// (`strIngredient1`/`strMeasure1` ..). Those land in `slots` and are
/// reassembled by [`Meal::ingredients`].
#[derive(Debug, Clone, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub meal_id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
    #[serde(rename = "strArea")]
    pub origin: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: String,
    #[serde(rename = "strYoutube")]
    pub youtube_link: Option<String>,
    #[serde(flatten)]
    pub slots: HashMap<String, Option<String>>,
}

impl Meal {
    /// Reassemble the numbered ingredient slots into ordered pairs.
    ///
    /// Slots with a null or blank ingredient name are skipped. A null
    /// or missing measurement becomes the empty string.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|i| {
                let name = self.slot(&format!("strIngredient{i}"))?.trim();
                if name.is_empty() {
                    return None;
                }

                let measurement = self
                    .slot(&format!("strMeasure{i}"))
                    .unwrap_or_default()
                    .trim();

                Some(Ingredient {
                    name: name.to_string(),
                    measurement: measurement.to_string(),
                })
            })
            .collect()
    }

    fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key)?.as_deref()
    }
}
