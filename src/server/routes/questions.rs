use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_category_map, questions},
        Question,
    },
    pagination::paginate,
    search::search_questions,
    server::{
        app::AppState,
        deserializers::{deserialize_lenient_page, NumberOrText},
        error::ApiError,
        extract::{IdPath, JsonBody, QueryParams},
    },
    telemetry::QUESTION_CREATED_CNTR,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_lenient_page")]
    page: Option<i64>,
}

#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    category: Option<NumberOrText>,
    difficulty: Option<NumberOrText>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

/// Validated form of [`NewQuestion`].
#[derive(Debug, PartialEq, Eq)]
struct QuestionFields {
    question: String,
    answer: String,
    category: i64,
    difficulty: i64,
}

impl TryFrom<NewQuestion> for QuestionFields {
    type Error = ApiError;

    fn try_from(form: NewQuestion) -> Result<Self, Self::Error> {
        let (Some(question), Some(answer), Some(category), Some(difficulty)) =
            (form.question, form.answer, form.category, form.difficulty)
        else {
            return Err(ApiError::BadRequest);
        };
        if question.is_empty() || answer.is_empty() || category.is_blank() || difficulty.is_blank()
        {
            return Err(ApiError::BadRequest);
        }
        let (Some(category), Some(difficulty)) = (category.as_i64(), difficulty.as_i64()) else {
            return Err(ApiError::Unprocessable);
        };
        Ok(QuestionFields {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    QueryParams(PageQuery { page }): QueryParams<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let page = page.unwrap_or(1);
    let all = questions::get_all_questions(&pool).await?;
    let current = paginate(&all, page);
    if current.is_empty() {
        tracing::info!(page, "Requested page has no questions");
        return Err(ApiError::NotFound);
    }
    Ok(Json(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_questions: all.len(),
        categories: get_category_map(&pool).await?,
        current_category: None,
    }))
}

// matches are not paginated and total_questions counts the whole table
async fn search(
    State(pool): State<SqlitePool>,
    JsonBody(body): JsonBody<SearchBody>,
) -> ApiResponse<Json<SearchResults>> {
    let all = questions::get_all_questions(&pool).await?;
    let total_questions = all.len();
    let found = search_questions(all, &body.search_term);
    tracing::debug!(term = %body.search_term, found = found.len(), "Search");
    Ok(Json(SearchResults {
        success: true,
        questions: found,
        total_questions,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    JsonBody(form): JsonBody<NewQuestion>,
) -> ApiResponse<Json<Created>> {
    let fields = QuestionFields::try_from(form)?;
    let id = questions::create_question(
        &pool,
        &fields.question,
        &fields.answer,
        fields.category,
        fields.difficulty,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert question: {e}");
        ApiError::Unprocessable
    })?;
    QUESTION_CREATED_CNTR.inc();
    tracing::info!(id, category = fields.category, "Question created");

    Ok(Json(Created {
        success: true,
        created: id,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath<i64>,
) -> ApiResponse<Json<Deleted>> {
    questions::delete_question(&pool, id).await?;
    tracing::info!(id, "Question deleted");
    Ok(Json(Deleted {
        success: true,
        deleted: id,
    }))
}

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(search))
        .route("/questions/{id}", delete(delete_question))
        .route("/post_question", post(create_question))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(question: &str, answer: &str, category: &str, difficulty: &str) -> NewQuestion {
        NewQuestion {
            question: Some(question.to_owned()),
            answer: Some(answer.to_owned()),
            category: Some(NumberOrText::Text(category.to_owned())),
            difficulty: Some(NumberOrText::Text(difficulty.to_owned())),
        }
    }

    #[test]
    fn numeric_text_is_accepted() {
        let fields = QuestionFields::try_from(form("q", "a", "2", "5")).unwrap();
        assert_eq!(
            fields,
            QuestionFields {
                question: "q".to_owned(),
                answer: "a".to_owned(),
                category: 2,
                difficulty: 5,
            }
        );
    }

    #[test]
    fn any_empty_field_is_bad_request() {
        for blank in [
            form("", "a", "1", "1"),
            form("q", "", "1", "1"),
            form("q", "a", "", "1"),
            form("q", "a", "1", ""),
        ] {
            assert_eq!(QuestionFields::try_from(blank), Err(ApiError::BadRequest));
        }
    }

    #[test]
    fn missing_field_is_bad_request() {
        let mut missing = form("q", "a", "1", "1");
        missing.difficulty = None;
        assert_eq!(QuestionFields::try_from(missing), Err(ApiError::BadRequest));
    }

    #[test]
    fn non_numeric_is_unprocessable() {
        assert_eq!(
            QuestionFields::try_from(form("q", "a", "science", "1")),
            Err(ApiError::Unprocessable)
        );
        assert_eq!(
            QuestionFields::try_from(form("q", "a", "1", "hard")),
            Err(ApiError::Unprocessable)
        );
    }
}
