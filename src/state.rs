use sqlx::SqlitePool;
use tokio::sync::watch;
use tracing::debug;

use crate::controllers::{add_favorite, get_all_favorites, is_favorite, remove_favorite};
use crate::error::Result;
use crate::models::{FavoriteRecord, Meal};

/// Shared favorites state.
///
/// Owns the one watch channel that republishes the favorites list
/// after every mutation. Screens subscribe for snapshots, so the store
/// is queried once per change no matter how many screens are showing
/// recipes. Mutations do not touch local state directly: the visible
/// toggle always follows the next republished snapshot.
#[derive(Clone)]
pub struct Favorites {
    pool: SqlitePool,
    tx: watch::Sender<Vec<FavoriteRecord>>,
}

impl Favorites {
    /// Load the current favorites and seed the channel.
    pub async fn new(pool: SqlitePool) -> Result<Self> {
        let current = get_all_favorites(&pool).await?;
        let (tx, _) = watch::channel(current);

        Ok(Self { pool, tx })
    }

    /// Subscribe to favorites snapshots. The receiver starts on the
    /// latest published list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<FavoriteRecord>> {
        self.tx.subscribe()
    }

    /// Persist a meal as a favorite and republish the list.
    ///
    /// Re-adding an already favorited meal replaces the stored record.
    /// Failures propagate unchanged; nothing is republished on error.
    pub async fn add(&self, meal: &Meal) -> Result<()> {
        let record = FavoriteRecord::from_meal(meal);
        add_favorite(&self.pool, &record).await?;
        debug!(meal_id = %record.meal_id, "favorite added");

        self.refresh().await
    }

    /// Delete a favorite by meal id and republish the list. Removing
    /// an id that is not favorited is a no-op.
    pub async fn remove(&self, meal_id: &str) -> Result<()> {
        remove_favorite(&self.pool, meal_id).await?;
        debug!(meal_id, "favorite removed");

        self.refresh().await
    }

    /// Point lookup against the store, bypassing the snapshot.
    pub async fn is_favorite(&self, meal_id: &str) -> Result<bool> {
        is_favorite(&self.pool, meal_id).await
    }

    async fn refresh(&self) -> Result<()> {
        let all = get_all_favorites(&self.pool).await?;
        self.tx.send_replace(all);

        Ok(())
    }
}

/// Membership check every screen applies to its latest snapshot to
/// derive the favorite indicator for a displayed meal.
pub fn contains_meal(snapshot: &[FavoriteRecord], meal_id: &str) -> bool {
    snapshot.iter().any(|f| f.meal_id == meal_id)
}
