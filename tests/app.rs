use async_trait::async_trait;
use essayist::article::Article;
use essayist::feed::{self, ArticleProvider, FeedDocument, LoadError};
use essayist::ui::{App, Command};

fn article(headline: &str, timestamp: &str) -> Article {
    Article {
        headline: headline.to_string(),
        preview: "A preview.".to_string(),
        timestamp: timestamp.to_string(),
        author: None,
        image: None,
        source: None,
        source_url: None,
        detail_page: "essays/test.html".to_string(),
    }
}

/// 25 articles dated one per day across February 2024, shuffled on arrival.
fn february_feed() -> Vec<Article> {
    let mut articles: Vec<_> = (1..=25)
        .map(|day| article(&format!("Essay {day}"), &format!("2024-02-{day:02}T08:00:00Z")))
        .collect();
    articles.swap(0, 24);
    articles.swap(3, 12);
    articles
}

struct StaticProvider {
    articles: Vec<Article>,
}

#[async_trait]
impl ArticleProvider for StaticProvider {
    async fn fetch(&self) -> Result<FeedDocument, LoadError> {
        Ok(FeedDocument {
            articles: self.articles.clone(),
        })
    }
}

#[test]
fn test_new_app_is_loading_at_page_one() {
    let app = App::new();
    assert!(app.loading);
    assert!(!app.load_failed);
    assert_eq!(app.paginator.current_page(), 1);
    assert_eq!(app.page_indicator(), "Page 1 of 1");
}

#[test]
fn test_feed_loaded_resets_pagination() {
    let mut app = App::new();
    app.scroll_offset = 7;

    let mut articles = february_feed();
    feed::sort_newest_first(&mut articles);
    app.feed_loaded(articles);

    assert!(!app.loading);
    assert_eq!(app.store.count(), 25);
    assert_eq!(app.paginator.total_pages(), 3);
    assert_eq!(app.paginator.current_page(), 1);
    assert_eq!(app.scroll_offset, 0);
}

#[test]
fn test_feed_failed_switches_to_error_state() {
    let mut app = App::new();
    app.feed_failed();

    assert!(!app.loading);
    assert!(app.load_failed);
    assert!(app.store.is_empty());
    // Degenerate state hides the pagination controls
    assert!(!app.paginator.controls_visible());
}

#[test]
fn test_page_transition_resets_scroll() {
    let mut app = App::new();
    let mut articles = february_feed();
    feed::sort_newest_first(&mut articles);
    app.feed_loaded(articles);

    app.dispatch(Command::ScrollDown);
    app.dispatch(Command::ScrollDown);
    assert_eq!(app.scroll_offset, 2);

    app.dispatch(Command::NextPage);
    assert_eq!(app.paginator.current_page(), 2);
    assert_eq!(app.scroll_offset, 0);
}

#[test]
fn test_boundary_noop_leaves_scroll_untouched() {
    let mut app = App::new();
    let mut articles = february_feed();
    feed::sort_newest_first(&mut articles);
    app.feed_loaded(articles);

    app.dispatch(Command::ScrollDown);
    app.dispatch(Command::PrevPage); // already at page 1
    assert_eq!(app.paginator.current_page(), 1);
    assert_eq!(app.scroll_offset, 1);
}

#[test]
fn test_quit_command() {
    let mut app = App::new();
    app.dispatch(Command::Quit);
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_end_to_end_pagination_over_25_articles() {
    let provider = StaticProvider {
        articles: february_feed(),
    };

    let mut app = App::new();
    app.feed_loaded(feed::load(&provider).await.unwrap());

    // Page 1 shows the 10 newest essays
    assert_eq!(app.page_indicator(), "Page 1 of 3");
    let first_page = app.current_slice();
    assert_eq!(first_page.len(), 10);
    assert_eq!(first_page[0].headline, "Essay 25");
    assert_eq!(first_page[9].headline, "Essay 16");

    // Clicking next three times lands on page 3 with the 5 oldest; the
    // third press is a boundary no-op
    app.dispatch(Command::NextPage);
    app.dispatch(Command::NextPage);
    app.dispatch(Command::NextPage);
    assert_eq!(app.page_indicator(), "Page 3 of 3");
    assert!(app.paginator.is_last_page());

    let last_page = app.current_slice();
    assert_eq!(last_page.len(), 5);
    assert_eq!(last_page[0].headline, "Essay 5");
    assert_eq!(last_page[4].headline, "Essay 1");
}
