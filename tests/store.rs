use essayist::article::Article;
use essayist::store::ArticleStore;

fn article(headline: &str) -> Article {
    Article {
        headline: headline.to_string(),
        preview: String::new(),
        timestamp: "2024-01-01T00:00:00Z".to_string(),
        author: None,
        image: None,
        source: None,
        source_url: None,
        detail_page: "essays/test.html".to_string(),
    }
}

fn store_with(count: usize) -> ArticleStore {
    let mut store = ArticleStore::new();
    store.replace((0..count).map(|i| article(&format!("Essay {i}"))).collect());
    store
}

#[test]
fn test_count() {
    assert_eq!(store_with(0).count(), 0);
    assert_eq!(store_with(15).count(), 15);
    assert!(store_with(0).is_empty());
}

#[test]
fn test_slice_full_page() {
    let store = store_with(15);
    let page = store.slice(1, 10);
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].headline, "Essay 0");
    assert_eq!(page[9].headline, "Essay 9");
}

#[test]
fn test_slice_partial_last_page() {
    // Page 2 of 15 articles is exactly indices [10, 15)
    let store = store_with(15);
    let page = store.slice(2, 10);
    assert_eq!(page.len(), 5);
    assert_eq!(page[0].headline, "Essay 10");
    assert_eq!(page[4].headline, "Essay 14");
}

#[test]
fn test_slice_out_of_range_yields_empty() {
    // Out-of-range pages clamp to empty, never error
    let store = store_with(15);
    assert!(store.slice(3, 10).is_empty());
    assert!(store.slice(100, 10).is_empty());
}

#[test]
fn test_slice_of_empty_store() {
    let store = store_with(0);
    assert!(store.slice(1, 10).is_empty());
}

#[test]
fn test_replace_swaps_collection_wholesale() {
    let mut store = store_with(15);
    store.replace(vec![article("Only one")]);
    assert_eq!(store.count(), 1);
    assert_eq!(store.slice(1, 10)[0].headline, "Only one");
}
