use crate::content::{CategoryFilter, Post};

/// Filter the post collection for display.
///
/// Two stages, composed by intersection: an exact category match (skipped for
/// `All`), then a case-insensitive substring match of the trimmed query
/// against title, summary, or content (skipped when the trimmed query is
/// empty). The relative order of retained posts is the authoring order; this
/// never re-sorts.
pub fn filter_posts<'a>(
    posts: &'a [Post],
    active_category: CategoryFilter,
    search_query: &str,
) -> Vec<&'a Post> {
    let query = search_query.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| match active_category {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => post.category == c,
        })
        .filter(|post| {
            if query.is_empty() {
                return true;
            }
            post.title.to_lowercase().contains(&query)
                || post.summary.to_lowercase().contains(&query)
                || post.content.to_lowercase().contains(&query)
        })
        .collect()
}
