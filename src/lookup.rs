use reqwest::Client;
use tracing::debug;

use crate::error::Result;
use crate::models::{Meal, MealResponse};

const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
const USER_AGENT: &str = concat!("mealdex/", env!("CARGO_PKG_VERSION"));

/// Client for the remote meal lookup API.
#[derive(Clone)]
pub struct MealApi {
    client: Client,
    base_url: String,
}

impl MealApi {
    /// Create a client against the public lookup API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a specific base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch one random meal. The API returns a single-element array;
    /// None means the API answered with an empty result set.
    pub async fn random_meal(&self) -> Result<Option<Meal>> {
        let url = format!("{}/random.php", self.base_url);
        let response: MealResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let meal = response.meals.unwrap_or_default().into_iter().next();
        debug!(found = meal.is_some(), "random meal fetched");

        Ok(meal)
    }

    /// Search meals by name. Zero matches is success with an empty
    /// list, not an error.
    pub async fn search_meals(&self, query: &str) -> Result<Vec<Meal>> {
        let url = format!("{}/search.php", self.base_url);
        let response: MealResponse = self
            .client
            .get(&url)
            .query(&[("s", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let meals = response.meals.unwrap_or_default();
        debug!(query, count = meals.len(), "meal search finished");

        Ok(meals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let api = MealApi::new();
        assert!(api.is_ok());
    }

    #[test]
    fn test_client_with_custom_base_url() {
        let api = MealApi::with_base_url("http://localhost:1234").expect("Failed to build client");
        assert_eq!(api.base_url, "http://localhost:1234");
    }

    #[tokio::test]
    async fn test_unreachable_host_surfaces_error() {
        let api = MealApi::with_base_url("http://invalid.invalid").expect("Failed to build client");

        let result = api.search_meals("chicken").await;

        assert!(result.is_err());
    }
}
