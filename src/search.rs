use crate::db::Question;

/// Questions whose text contains `term`, ignoring case. An empty term matches
/// every question.
pub fn search_questions(questions: Vec<Question>, term: &str) -> Vec<Question> {
    let term = term.to_lowercase();
    questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&term))
        .collect()
}
