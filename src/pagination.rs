pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` of `items`, `QUESTIONS_PER_PAGE` at a time.
/// Pages before the first or past the last are empty.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let Some(skipped_pages) = page.checked_sub(1).and_then(|p| usize::try_from(p).ok()) else {
        return &[];
    };
    let begin = skipped_pages.saturating_mul(QUESTIONS_PER_PAGE);
    if begin >= items.len() {
        return &[];
    }
    let end = begin.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[begin..end]
}
