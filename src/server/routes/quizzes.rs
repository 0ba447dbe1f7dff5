use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::prelude::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions::get_all_questions, Question},
    quiz::draw_question,
    server::{app::AppState, error::ApiError, extract::JsonBody},
    telemetry::QUIZ_DRAW_CNTR,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizRequest {
    previous_questions: Option<Vec<i64>>,
    quiz_category: Option<QuizCategory>,
}

// clients send the category object they rendered, e.g. {"type": "Art", "id": "2"},
// or just its id
#[derive(Deserialize)]
#[serde(untagged)]
enum QuizCategory {
    Rendered {
        #[serde(deserialize_with = "deserialize_number_from_string")]
        id: i64,
    },
    Id(#[serde(deserialize_with = "deserialize_number_from_string")] i64),
}

impl QuizCategory {
    fn id(&self) -> i64 {
        match self {
            QuizCategory::Rendered { id } | QuizCategory::Id(id) => *id,
        }
    }
}

#[derive(Serialize)]
struct QuizBody {
    success: bool,
    question: Option<Question>,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    JsonBody(request): JsonBody<QuizRequest>,
) -> ApiResponse<Json<QuizBody>> {
    let (Some(previous), Some(category)) = (request.previous_questions, request.quiz_category)
    else {
        return Err(ApiError::BadRequest);
    };

    let category = category.id();

    let questions = get_all_questions(&pool).await?;
    let question =
        draw_question(&questions, category, &previous, &mut rand::thread_rng()).cloned();

    QUIZ_DRAW_CNTR
        .with_label_values(&[draw_label(question.as_ref()).as_str()])
        .inc();
    match &question {
        Some(q) => tracing::debug!(category, drawn = q.id, "Quiz question drawn"),
        None => tracing::debug!(category, "Quiz category exhausted"),
    }

    Ok(Json(QuizBody {
        success: true,
        question,
    }))
}

// labels come from stored rows, never from the request, so the series stay bounded
fn draw_label(question: Option<&Question>) -> String {
    match question {
        Some(q) => q.category.to_string(),
        None => "exhausted".to_owned(),
    }
}

pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
