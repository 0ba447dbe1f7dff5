use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_category_map, questions},
        Question,
    },
    server::{app::AppState, extract::IdPath},
};

use super::ApiResponse;

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: i64,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesBody>> {
    Ok(Json(CategoriesBody {
        success: true,
        categories: get_category_map(&pool).await?,
    }))
}

// unknown categories yield an empty list rather than 404
async fn get_category_questions(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath<i64>,
) -> ApiResponse<Json<CategoryQuestionsBody>> {
    let questions = questions::get_questions_for_category(&pool, id).await?;
    tracing::debug!(category = id, found = questions.len(), "Category questions");
    Ok(Json(CategoryQuestionsBody {
        success: true,
        questions,
        total_questions: questions::count_questions(&pool).await?,
        current_category: id,
    }))
}

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
}
