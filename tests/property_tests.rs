use proptest::prelude::*;
use tui_blog_app::config::AppConfig;
use tui_blog_app::content::{Category, CategoryFilter, ContentStore};
use tui_blog_app::internal::filter::filter_posts;

fn any_category_filter() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        Just(CategoryFilter::Only(Category::JavaSe)),
        Just(CategoryFilter::Only(Category::DesignPatterns)),
        Just(CategoryFilter::Only(Category::SystemDesign)),
        Just(CategoryFilter::Only(Category::SpringBoot)),
    ]
}

proptest! {
    #[test]
    fn filter_never_panics(query in "\\PC*", category in any_category_filter()) {
        let store = ContentStore::load().unwrap();
        let _ = filter_posts(store.posts(), category, &query);
    }

    #[test]
    fn filter_result_is_an_ordered_subset(query in "\\PC*", category in any_category_filter()) {
        let store = ContentStore::load().unwrap();
        let result = filter_posts(store.posts(), category, &query);

        // Every retained post appears in the original, and in the same
        // relative order (subsequence check).
        let original: Vec<&str> = store.posts().iter().map(|p| p.id.as_str()).collect();
        let mut cursor = 0;
        for post in &result {
            let pos = original[cursor..]
                .iter()
                .position(|id| *id == post.id)
                .expect("filtered post missing from the original collection");
            cursor += pos + 1;
        }
    }

    #[test]
    fn filtering_is_idempotent(query in "[a-zA-Z ]{0,20}", category in any_category_filter()) {
        let store = ContentStore::load().unwrap();
        let once: Vec<_> = filter_posts(store.posts(), category, &query)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_posts(&once, category, &query);
        prop_assert_eq!(twice.len(), once.len());
        for (a, b) in twice.iter().zip(once.iter()) {
            prop_assert_eq!(&a.id, &b.id);
        }
    }

    #[test]
    fn search_narrows_never_widens(query in "\\PC*") {
        let store = ContentStore::load().unwrap();
        let unfiltered = filter_posts(store.posts(), CategoryFilter::All, "");
        let searched = filter_posts(store.posts(), CategoryFilter::All, &query);
        prop_assert!(searched.len() <= unfiltered.len());
    }

    #[test]
    fn config_parsing_resilience(s in "\\PC*") {
        // Fuzz the config loader with random strings
        // It should return an Err, but not panic
        let _ = ron::from_str::<AppConfig>(&s);
    }
}
