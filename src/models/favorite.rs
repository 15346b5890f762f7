use sqlx::prelude::FromRow;

use super::{Ingredient, Meal, decode_ingredients, encode_ingredients};

/// A durably stored favorite, keyed by the remote meal identifier.
///
/// Never mutated in place: re-adding the same meal id fully replaces
/// the stored row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FavoriteRecord {
    pub meal_id: String,
    pub name: String,
    pub thumbnail: String,
    pub origin: Option<String>,
    pub instructions: String,
    pub ingredients: String,
    pub youtube_link: Option<String>,
}

impl FavoriteRecord {
    /// Convert a transient meal into its persisted form, flattening
    /// the ingredient pairs into the delimited column encoding.
    pub fn from_meal(meal: &Meal) -> Self {
        Self {
            meal_id: meal.meal_id.clone(),
            name: meal.name.clone(),
            thumbnail: meal.thumbnail.clone(),
            origin: meal.origin.clone(),
            instructions: meal.instructions.clone(),
            ingredients: encode_ingredients(&meal.ingredients()),
            youtube_link: meal.youtube_link.clone(),
        }
    }

    /// Decode the stored ingredient column back into ordered pairs.
    pub fn ingredient_pairs(&self) -> Vec<Ingredient> {
        decode_ingredients(&self.ingredients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::test_db;
    use rstest::*;
    use serde_json::json;
    use sqlx::SqlitePool;

    #[test]
    fn test_from_meal_encodes_ingredients() {
        let meal: Meal = serde_json::from_value(json!({
            "idMeal": "52874",
            "strMeal": "Beef and Mustard Pie",
            "strMealThumb": "https://example.com/pie.jpg",
            "strArea": "British",
            "strInstructions": "Bake it",
            "strYoutube": null,
            "strIngredient1": "Egg",
            "strMeasure1": "2",
            "strIngredient2": "Flour",
            "strMeasure2": "1cup",
        }))
        .expect("Failed to deserialize meal");

        let record = FavoriteRecord::from_meal(&meal);

        assert_eq!(record.meal_id, "52874");
        assert_eq!(record.name, "Beef and Mustard Pie");
        assert_eq!(record.ingredients, "Egg:2;Flour:1cup");
        assert_eq!(record.youtube_link, None);

        // And the pairs come back out in order
        let pairs = record.ingredient_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].name, "Egg");
        assert_eq!(pairs[1].measurement, "1cup");
    }

    #[rstest]
    #[tokio::test]
    async fn test_favorite_model_compatibility(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        // Insert a favorite with every column populated
        sqlx::query(
            "INSERT INTO favorite_meals (meal_id, name, thumbnail, origin, instructions, ingredients, youtube_link) VALUES (?, ?, ?, ?, ?, ?, ?)"
        )
        .bind("52874")
        .bind("Beef and Mustard Pie")
        .bind("https://example.com/pie.jpg")
        .bind("British")
        .bind("Bake it")
        .bind("Egg:2;Flour:1cup")
        .bind("https://youtube.com/watch?v=abc")
        .execute(&pool)
        .await
        .expect("Failed to insert favorite");

        // Query and map to FavoriteRecord struct
        let record = sqlx::query_as::<_, FavoriteRecord>(
            "SELECT meal_id, name, thumbnail, origin, instructions, ingredients, youtube_link FROM favorite_meals WHERE meal_id = ?",
        )
        .bind("52874")
        .fetch_one(&pool)
        .await
        .expect("Failed to fetch favorite");

        assert_eq!(record.meal_id, "52874");
        assert_eq!(record.name, "Beef and Mustard Pie");
        assert_eq!(record.origin, Some("British".to_string()));
        assert_eq!(record.ingredients, "Egg:2;Flour:1cup");
        assert_eq!(
            record.youtube_link,
            Some("https://youtube.com/watch?v=abc".to_string())
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_favorite_model_compatibility_null_optionals(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        // Origin and youtube link are nullable
        sqlx::query(
            "INSERT INTO favorite_meals (meal_id, name, thumbnail, instructions, ingredients) VALUES (?, ?, ?, ?, ?)"
        )
        .bind("1")
        .bind("Mystery Meal")
        .bind("thumb")
        .bind("Cook it")
        .bind("")
        .execute(&pool)
        .await
        .expect("Failed to insert favorite");

        let record = sqlx::query_as::<_, FavoriteRecord>(
            "SELECT meal_id, name, thumbnail, origin, instructions, ingredients, youtube_link FROM favorite_meals WHERE meal_id = ?",
        )
        .bind("1")
        .fetch_one(&pool)
        .await
        .expect("Failed to fetch favorite");

        assert_eq!(record.origin, None);
        assert_eq!(record.youtube_link, None);
        assert_eq!(record.ingredient_pairs().len(), 0);
    }
}
