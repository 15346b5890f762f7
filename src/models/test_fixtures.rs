use rstest::*;
use serde_json::json;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use super::Meal;

/// Test fixture that creates an in-memory SQLite database with migrations applied
///
/// This fixture can be imported and used across all model tests to ensure
/// consistency in test database setup.
#[fixture]
pub async fn test_db() -> SqlitePool {
    // Create an in-memory SQLite database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Build a transient meal the way the lookup API would return it.
pub fn sample_meal(meal_id: &str, name: &str) -> Meal {
    serde_json::from_value(json!({
        "idMeal": meal_id,
        "strMeal": name,
        "strMealThumb": "https://example.com/thumb.jpg",
        "strArea": "British",
        "strInstructions": "Mix everything.\nBake until done.",
        "strYoutube": null,
        "strIngredient1": "Egg",
        "strMeasure1": "2",
        "strIngredient2": "Flour",
        "strMeasure2": "1cup",
    }))
    .expect("Failed to build sample meal")
}
