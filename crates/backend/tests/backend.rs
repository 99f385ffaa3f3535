use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use mealgrid_backend::{Backend, MealDto};
use mealgrid_mealplan::{
    DropConflict, PlanDetails, PlanSink, PlannerState, RecipeSource, WeekWindow,
};
use mealgrid_shared::mealplan::{Day, MealType, SlotKey};
use serde_json::{Value, json};
use time::macros::date;

#[derive(Clone, Default)]
struct Mock {
    meals: Arc<Mutex<Vec<Value>>>,
}

async fn recipes() -> Json<Value> {
    Json(json!([
        {"id": 11, "title": "Banana Pancakes", "category": "Breakfast", "mediaUrl": "/img/11.png", "rating": 4.5},
        {"id": 12, "title": "Lentil Soup", "category": "Lunch", "ingredients": ["lentils"], "steps": []},
    ]))
}

async fn save(State(mock): State<Mock>, Json(mut body): Json<Value>) -> impl IntoResponse {
    let mut meals = mock.meals.lock().unwrap();
    body["id"] = json!(meals.len() as i64 + 1);
    meals.push(body.clone());

    (StatusCode::CREATED, Json(body))
}

async fn get_all(State(mock): State<Mock>) -> axum::response::Response {
    let meals = mock.meals.lock().unwrap();
    if meals.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    Json(Value::Array(meals.clone())).into_response()
}

async fn update(
    State(mock): State<Mock>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let mut meals = mock.meals.lock().unwrap();
    let Some(meal) = meals.iter_mut().find(|m| m["id"] == json!(id)) else {
        return (StatusCode::NOT_FOUND, format!("Could not find meal with id: {id}"));
    };
    meal["title"] = body["title"].clone();

    (StatusCode::OK, "Meal updated successfully".to_owned())
}

async fn remove(State(mock): State<Mock>, Path(id): Path<i64>) -> impl IntoResponse {
    let mut meals = mock.meals.lock().unwrap();
    let before = meals.len();
    meals.retain(|m| m["id"] != json!(id));
    if meals.len() == before {
        return (StatusCode::NOT_FOUND, format!("Could not find meal with id: {id}"));
    }

    (StatusCode::OK, "Meal deleted successfully".to_owned())
}

async fn spawn_mock() -> anyhow::Result<(Backend, Mock)> {
    let mock = Mock::default();
    let app = Router::new()
        .route("/api/v1/recipe/get-all", get(recipes))
        .route("/api/v1/meal/save", post(save))
        .route("/api/v1/meal/getAll", get(get_all))
        .route("/api/v1/meal/update/{id}", put(update))
        .route("/api/v1/meal/delete/{id}", delete(remove))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    let backend = Backend::new(format!("http://{addr}/"), Duration::from_secs(5))?;

    Ok((backend, mock))
}

#[tokio::test]
async fn test_candidates_from_backend() -> anyhow::Result<()> {
    let (backend, _) = spawn_mock().await?;

    let recipes = backend.candidates().await?;
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].title, "Banana Pancakes");
    assert_eq!(recipes[0].image_ref, "/img/11.png");
    assert_eq!(recipes[1].category, "Lunch");

    let mut planner = PlannerState::new(date!(2025 - 05 - 14), recipes, DropConflict::default())?;
    planner.open_slot(SlotKey::new(Day::Monday, MealType::Lunch));
    planner.search("lentil");
    planner.select_recipe(12)?;
    assert_eq!(planner.grid().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_meal_crud() -> anyhow::Result<()> {
    let (backend, mock) = spawn_mock().await?;

    assert_eq!(backend.meals().await?, Vec::<MealDto>::new());

    let mut planner = PlannerState::new(
        date!(2025 - 05 - 14),
        backend.candidates().await?,
        DropConflict::default(),
    )?;
    planner.open_slot(SlotKey::new(Day::Wednesday, MealType::Breakfast));
    planner.select_recipe(11)?;
    backend
        .save(&planner.to_plan(PlanDetails {
            title: "Pancake week".to_owned(),
            ..Default::default()
        }))
        .await?;

    {
        let meals = mock.meals.lock().unwrap();
        assert_eq!(meals[0]["startDate"], "2025-05-12");
        assert_eq!(meals[0]["meals"]["wednesday"]["breakfast"], 11);
    }

    let meals = backend.meals().await?;
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].title, "Pancake week");
    let week = WeekWindow::containing(date!(2025 - 05 - 14))?;
    assert_eq!(meals[0].start()?, Some(week.start()));

    let mut request = mealgrid_backend::MealRequest::from(&planner.to_plan(PlanDetails {
        title: "Renamed".to_owned(),
        ..Default::default()
    }));
    backend.update_meal(meals[0].id, &request).await?;
    assert_eq!(backend.meals().await?[0].title, "Renamed");

    request.title = "Ghost".to_owned();
    assert!(matches!(
        backend.update_meal(99, &request).await,
        Err(mealgrid_shared::Error::NotFound(_))
    ));

    backend.delete_meal(meals[0].id).await?;
    assert!(matches!(
        backend.delete_meal(meals[0].id).await,
        Err(mealgrid_shared::Error::NotFound(_))
    ));
    assert!(backend.meals().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_is_an_error() -> anyhow::Result<()> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let backend = Backend::new(format!("http://{addr}"), Duration::from_millis(500))?;
    assert!(backend.candidates().await.is_err());

    Ok(())
}
