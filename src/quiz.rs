use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

/// Category id the quiz clients send when playing across every category.
pub const ALL_CATEGORIES: i64 = 0;

/// Questions still playable in `category` once `previous` ids are excluded.
pub fn remaining_questions<'a>(
    questions: &'a [Question],
    category: i64,
    previous: &[i64],
) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| category == ALL_CATEGORIES || q.category == category)
        .filter(|q| !previous.contains(&q.id))
        .collect()
}

/// Picks one of the remaining questions uniformly at random, or `None` once
/// the client has seen all of them.
pub fn draw_question<'a, R: Rng + ?Sized>(
    questions: &'a [Question],
    category: i64,
    previous: &[i64],
    rng: &mut R,
) -> Option<&'a Question> {
    remaining_questions(questions, category, previous)
        .choose(rng)
        .copied()
}
