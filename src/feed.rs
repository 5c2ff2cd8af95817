use crate::content::{Cursor, PostPage, PostSummary};
use crate::source::{ContentSource, SourceError};

/// Accumulated post list plus the cursor pointing at the next page.
/// The list only grows and the cursor only advances, until it runs out.
pub struct PostFeed {
    items: Vec<PostSummary>,
    cursor: Option<Cursor>,
}

impl PostFeed {
    pub fn new(first_page: PostPage) -> PostFeed {
        PostFeed {
            items: first_page.items,
            cursor: first_page.next_cursor,
        }
    }

    pub fn items(&self) -> &[PostSummary] {
        self.items.as_slice()
    }

    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    /// Appends a page that was fetched from `issued_at`. A page fetched from
    /// a cursor that is no longer current belongs to an older request and is
    /// ignored, so a late response cannot break arrival order.
    pub fn append_page(&mut self, issued_at: &Cursor, page: PostPage) -> bool {
        match self.cursor {
            Some(ref current) if current == issued_at => {}
            _ => return false,
        }

        self.items.extend(page.items);
        self.cursor = page.next_cursor;
        true
    }

    /// Fetches the page at the current cursor and appends it, returning the
    /// number of posts added. Without a cursor this is a no-op. On failure
    /// the error propagates and both items and cursor stay untouched.
    pub async fn load_more<S: ContentSource>(&mut self, source: &S) -> Result<usize, SourceError> {
        let cursor = match self.next_cursor() {
            Some(cursor) => cursor.clone(),
            None => return Ok(0),
        };

        let page = source.fetch_page_at(&cursor).await?;
        let added = page.items.len();
        self.append_page(&cursor, page);
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::content::{PostDocument, PostKey};

    use super::*;

    fn summary(key: &str) -> PostSummary {
        PostSummary {
            key: PostKey(key.to_string()),
            publication_date: None,
            title: format!("Post {}", key),
            subtitle: "".to_string(),
            author: "tester".to_string(),
        }
    }

    fn page(keys: &[&str], next_cursor: Option<&str>) -> PostPage {
        PostPage {
            items: keys.iter().map(|k| summary(k)).collect(),
            next_cursor: next_cursor.map(|c| Cursor(c.to_string())),
        }
    }

    fn keys(feed: &PostFeed) -> Vec<&str> {
        feed.items().iter().map(|item| item.key.0.as_str()).collect()
    }

    /// Hands out scripted responses, one per fetch_page_at call.
    struct ScriptedSource {
        pages: RefCell<VecDeque<Result<PostPage, SourceError>>>,
    }

    impl ScriptedSource {
        fn with(pages: Vec<Result<PostPage, SourceError>>) -> ScriptedSource {
            ScriptedSource {
                pages: RefCell::new(pages.into()),
            }
        }
    }

    impl ContentSource for ScriptedSource {
        async fn query_posts_page(&self, _page_size: u32) -> Result<PostPage, SourceError> {
            unreachable!("the feed never issues first-page queries");
        }

        async fn fetch_page_at(&self, _cursor: &Cursor) -> Result<PostPage, SourceError> {
            self.pages.borrow_mut().pop_front().expect("unexpected fetch")
        }

        async fn fetch_post_by_key(&self, _key: &PostKey) -> Result<PostDocument, SourceError> {
            unreachable!("the feed never fetches documents");
        }
    }

    #[ntex::test]
    async fn test_load_more_appends_and_exhausts() {
        let mut feed = PostFeed::new(page(&["a", "b"], Some("p2")));
        let source = ScriptedSource::with(vec![Ok(page(&["c"], None))]);

        let added = feed.load_more(&source).await.unwrap();
        assert_eq!(added, 1);
        assert_eq!(keys(&feed), vec!["a", "b", "c"]);
        assert!(feed.next_cursor().is_none());

        // Cursor ran out, so this must not touch the source at all.
        let added = feed.load_more(&source).await.unwrap();
        assert_eq!(added, 0);
        assert_eq!(keys(&feed), vec!["a", "b", "c"]);
    }

    #[ntex::test]
    async fn test_load_more_concatenates_in_call_order() {
        let mut feed = PostFeed::new(page(&["a"], Some("p2")));
        let source = ScriptedSource::with(vec![
            Ok(page(&["b", "c"], Some("p3"))),
            Ok(page(&["d"], Some("p4"))),
        ]);

        feed.load_more(&source).await.unwrap();
        feed.load_more(&source).await.unwrap();

        assert_eq!(keys(&feed), vec!["a", "b", "c", "d"]);
        assert_eq!(feed.next_cursor(), Some(&Cursor("p4".to_string())));
    }

    #[ntex::test]
    async fn test_failed_load_more_leaves_state_untouched() {
        let mut feed = PostFeed::new(page(&["a", "b"], Some("p2")));
        let source = ScriptedSource::with(vec![
            Err(SourceError::Malformed("missing results".to_string())),
            Ok(page(&["c"], None)),
        ]);

        let err = feed.load_more(&source).await.unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
        assert_eq!(keys(&feed), vec!["a", "b"]);
        assert_eq!(feed.next_cursor(), Some(&Cursor("p2".to_string())));

        // The cursor is unchanged, so a fresh user-triggered retry works.
        feed.load_more(&source).await.unwrap();
        assert_eq!(keys(&feed), vec!["a", "b", "c"]);
        assert!(!feed.has_more());
    }

    #[test]
    fn test_append_page_ignores_stale_cursor() {
        let mut feed = PostFeed::new(page(&["a"], Some("p2")));

        let applied = feed.append_page(&Cursor("p1".to_string()), page(&["x"], None));
        assert!(!applied);
        assert_eq!(keys(&feed), vec!["a"]);
        assert_eq!(feed.next_cursor(), Some(&Cursor("p2".to_string())));

        let applied = feed.append_page(&Cursor("p2".to_string()), page(&["b"], Some("p3")));
        assert!(applied);
        assert_eq!(keys(&feed), vec!["a", "b"]);

        // The old cursor was consumed; replaying it changes nothing.
        let applied = feed.append_page(&Cursor("p2".to_string()), page(&["b"], Some("p3")));
        assert!(!applied);
        assert_eq!(keys(&feed), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_first_page_without_cursor() {
        let feed = PostFeed::new(page(&[], None));
        assert!(feed.items().is_empty());
        assert!(!feed.has_more());
    }
}
