use bazaar_models::v0::PaginatedResult;

/// Cut one page out of an already-filtered collection.
///
/// `limit` is clamped to at least 1 and `page` into `[1, total_pages]`; the
/// result echoes the effective values. Concatenating pages `1..=total_pages`
/// reproduces the input exactly once, in order.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> PaginatedResult<T> {
    let limit = limit.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(limit).max(1);
    let page = page.clamp(1, total_pages);

    let items = items
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();

    PaginatedResult {
        items,
        total,
        page,
        total_pages,
        limit,
    }
}
