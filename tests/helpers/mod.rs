#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use mealgrid::AppState;
use mealgrid_mealplan::{DropConflict, FixedCatalog, PlannerState, SqlitePlanStore};
use serde_json::Value;
use time::Date;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: SqlitePlanStore,
}

pub async fn setup_test_app(
    path: PathBuf,
    reference: Date,
    policy: DropConflict,
) -> anyhow::Result<TestApp> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    mealgrid::db::ensure_database(&url).await?;
    let pool = mealgrid::db::create_pool(&url, 1).await?;
    mealgrid::db::run_migrations(&pool).await?;

    let store = SqlitePlanStore(pool);
    let planner = PlannerState::new(reference, FixedCatalog::default().into_recipes(), policy)?;
    let state = AppState::new(planner, Arc::new(store.clone()), "UTC");

    Ok(TestApp {
        router: mealgrid::create_app(state),
        store,
    })
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let body = match body {
            Some(value) => Body::from(serde_json::to_vec(&value)?),
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body)?,
            )
            .await?;

        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();

        Ok((status, serde_json::from_slice(&bytes)?))
    }

    pub async fn post(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.send(Method::POST, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        self.send(Method::POST, uri, Some(body)).await
    }
}

/// Cell of the planner view at `day` (0 = Monday) and `meal` (0 = breakfast).
pub fn cell(view: &Value, day: usize, meal: usize) -> &Value {
    &view["days"][day]["meals"][meal]
}
