mod favorite;
mod ingredient;
mod meal;

#[cfg(test)]
pub mod test_fixtures;

pub use favorite::FavoriteRecord;
pub use ingredient::{Ingredient, decode_ingredients, encode_ingredients};
pub use meal::{MAX_INGREDIENT_SLOTS, Meal, MealResponse};
