use std::time::Duration;

use async_trait::async_trait;
use mealgrid_mealplan::{PlanSink, RecipeSource, WeekPlan};
use mealgrid_shared::recipe::Recipe;
use reqwest::{Response, StatusCode};

use crate::{MealDto, MealRequest, RecipeDto};

const RECIPE_PATH: &str = "/api/v1/recipe";
const MEAL_PATH: &str = "/api/v1/meal";

/// Client for the recipe application REST backend.
#[derive(Clone, Debug)]
pub struct Backend {
    client: reqwest::Client,
    base_url: String,
}

impl Backend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> mealgrid_shared::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(anyhow::Error::from)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[tracing::instrument(skip(self))]
    pub async fn recipes(&self) -> mealgrid_shared::Result<Vec<RecipeDto>> {
        let resp = self
            .client
            .get(self.url(&format!("{RECIPE_PATH}/get-all")))
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(vec![]);
        }

        let resp = expect(resp, StatusCode::OK, "recipes").await?;

        Ok(resp.json().await.map_err(anyhow::Error::from)?)
    }

    /// Saved meal plans. An empty store answers 204.
    #[tracing::instrument(skip(self))]
    pub async fn meals(&self) -> mealgrid_shared::Result<Vec<MealDto>> {
        let resp = self
            .client
            .get(self.url(&format!("{MEAL_PATH}/getAll")))
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(vec![]);
        }

        let resp = expect(resp, StatusCode::OK, "meals").await?;

        Ok(resp.json().await.map_err(anyhow::Error::from)?)
    }

    #[tracing::instrument(skip(self, request), fields(start = %request.start_date))]
    pub async fn save_meal(&self, request: &MealRequest) -> mealgrid_shared::Result<MealDto> {
        let resp = self
            .client
            .post(self.url(&format!("{MEAL_PATH}/save")))
            .json(request)
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        let resp = expect(resp, StatusCode::CREATED, "meal").await?;

        Ok(resp.json().await.map_err(anyhow::Error::from)?)
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn update_meal(&self, id: i64, request: &MealRequest) -> mealgrid_shared::Result<()> {
        let resp = self
            .client
            .put(self.url(&format!("{MEAL_PATH}/update/{id}")))
            .json(request)
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        expect(resp, StatusCode::OK, &format!("meal {id}")).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_meal(&self, id: i64) -> mealgrid_shared::Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("{MEAL_PATH}/delete/{id}")))
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        expect(resp, StatusCode::OK, &format!("meal {id}")).await?;

        Ok(())
    }
}

async fn expect(
    resp: Response,
    status: StatusCode,
    what: &str,
) -> mealgrid_shared::Result<Response> {
    if resp.status() == status {
        return Ok(resp);
    }

    if resp.status() == StatusCode::NOT_FOUND {
        return Err(mealgrid_shared::Error::NotFound(what.to_owned()));
    }

    let code = resp.status();
    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(%code, body, "unexpected backend response");

    mealgrid_shared::bail!("backend answered {code} for {what}");
}

#[async_trait]
impl RecipeSource for Backend {
    async fn candidates(&self) -> mealgrid_shared::Result<Vec<Recipe>> {
        let recipes = self.recipes().await?;

        Ok(recipes.into_iter().map(Recipe::from).collect())
    }
}

#[async_trait]
impl PlanSink for Backend {
    async fn save(&self, plan: &WeekPlan) -> mealgrid_shared::Result<()> {
        let saved = self.save_meal(&MealRequest::from(plan)).await?;
        tracing::info!(id = saved.id, week = %plan.window, "week sent to backend");

        Ok(())
    }
}
