use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::FavoriteRecord;

/// Insert a favorite, fully replacing any existing record with the
/// same meal id. Duplicate ids are not an error - this is upsert
/// semantics, keyed by `meal_id`.
pub async fn add_favorite(pool: &SqlitePool, record: &FavoriteRecord) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO favorite_meals
            (meal_id, name, thumbnail, origin, instructions, ingredients, youtube_link)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(meal_id) DO UPDATE SET
            name = excluded.name,
            thumbnail = excluded.thumbnail,
            origin = excluded.origin,
            instructions = excluded.instructions,
            ingredients = excluded.ingredients,
            youtube_link = excluded.youtube_link
        "#,
    )
    .bind(&record.meal_id)
    .bind(&record.name)
    .bind(&record.thumbnail)
    .bind(&record.origin)
    .bind(&record.instructions)
    .bind(&record.ingredients)
    .bind(&record.youtube_link)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a favorite by meal id. Removing an id that is not present
/// is a no-op, not an error.
pub async fn remove_favorite(pool: &SqlitePool, meal_id: &str) -> Result<()> {
    sqlx::query("DELETE FROM favorite_meals WHERE meal_id = ?")
        .bind(meal_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Point lookup answering "is this meal favorited" without
/// materializing the full record.
pub async fn is_favorite(pool: &SqlitePool, meal_id: &str) -> Result<bool> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM favorite_meals WHERE meal_id = ?)")
            .bind(meal_id)
            .fetch_one(pool)
            .await?;

    Ok(exists)
}

/// Fetch all favorites, ordered by name
pub async fn get_all_favorites(pool: &SqlitePool) -> Result<Vec<FavoriteRecord>> {
    let favorites = sqlx::query_as::<_, FavoriteRecord>(
        "SELECT meal_id, name, thumbnail, origin, instructions, ingredients, youtube_link FROM favorite_meals ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(favorites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::{sample_meal, test_db};
    use rstest::*;

    fn sample_record(meal_id: &str, name: &str) -> FavoriteRecord {
        FavoriteRecord::from_meal(&sample_meal(meal_id, name))
    }

    #[rstest]
    #[tokio::test]
    async fn test_add_and_lookup_favorite(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        add_favorite(&pool, &sample_record("52874", "Beef and Mustard Pie"))
            .await
            .expect("Failed to add favorite");

        let favorited = is_favorite(&pool, "52874")
            .await
            .expect("Failed to check favorite");
        assert!(favorited);

        let all = get_all_favorites(&pool)
            .await
            .expect("Failed to list favorites");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].meal_id, "52874");
        assert_eq!(all[0].ingredients, "Egg:2;Flour:1cup");
    }

    #[rstest]
    #[tokio::test]
    async fn test_is_favorite_absent(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        let favorited = is_favorite(&pool, "999")
            .await
            .expect("Failed to check favorite");

        assert!(!favorited);
    }

    #[rstest]
    #[tokio::test]
    async fn test_add_replaces_existing_record(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        add_favorite(&pool, &sample_record("52874", "Old Name"))
            .await
            .expect("Failed to add favorite");

        // Second add with the same id but different fields
        let mut updated = sample_record("52874", "New Name");
        updated.ingredients = "Butter:100g".to_string();
        add_favorite(&pool, &updated)
            .await
            .expect("Failed to re-add favorite");

        // Exactly one row remains, carrying the second call's values
        let all = get_all_favorites(&pool)
            .await
            .expect("Failed to list favorites");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "New Name");
        assert_eq!(all[0].ingredients, "Butter:100g");
    }

    #[rstest]
    #[tokio::test]
    async fn test_remove_favorite(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        add_favorite(&pool, &sample_record("52874", "Beef and Mustard Pie"))
            .await
            .expect("Failed to add favorite");

        remove_favorite(&pool, "52874")
            .await
            .expect("Failed to remove favorite");

        let favorited = is_favorite(&pool, "52874")
            .await
            .expect("Failed to check favorite");
        assert!(!favorited);

        let all = get_all_favorites(&pool)
            .await
            .expect("Failed to list favorites");
        assert_eq!(all.len(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_remove_absent_favorite_is_noop(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        // Removing something that was never added succeeds
        remove_favorite(&pool, "999")
            .await
            .expect("Remove of absent favorite should not fail");
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_all_favorites_empty(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        let all = get_all_favorites(&pool)
            .await
            .expect("Failed to list favorites");

        assert_eq!(all.len(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_all_favorites_ordered_by_name(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        add_favorite(&pool, &sample_record("2", "Zucchini Bake"))
            .await
            .expect("Failed to add favorite");
        add_favorite(&pool, &sample_record("1", "Apple Crumble"))
            .await
            .expect("Failed to add favorite");

        let all = get_all_favorites(&pool)
            .await
            .expect("Failed to list favorites");

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Apple Crumble");
        assert_eq!(all[1].name, "Zucchini Bake");
    }
}
