//! Query-string composition for the fixed endpoint catalog.
//!
//! The Danbooru 1.x API predates percent-encoding discipline: the sites
//! accept raw tag strings and existing consumers depend on the exact byte
//! shape of these URLs. Values are therefore written into the query
//! verbatim, in a fixed key order per resource.

use crate::{Error, Result};
use std::fmt::{self, Write as _};

/// A composed request: fixed resource path plus its query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiRequest {
    path: &'static str,
    query: String,
}

impl ApiRequest {
    fn new(path: &'static str, pairs: Pairs) -> Self {
        Self {
            path,
            query: pairs.0,
        }
    }

    /// Full request URL. The `?` is always present, even when the query is
    /// empty, matching the wire shape the sites expect.
    pub(crate) fn url(&self, base_url: &str) -> String {
        format!("{}{}?{}", base_url, self.path, self.query)
    }
}

/// `key=value&...` accumulator. Values go in verbatim.
#[derive(Default)]
struct Pairs(String);

impl Pairs {
    fn pair(mut self, key: &str, value: impl fmt::Display) -> Self {
        if !self.0.is_empty() {
            self.0.push('&');
        }
        let _ = write!(self.0, "{key}={value}");
        self
    }

    fn pair_opt(self, key: &str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.pair(key, value),
            None => self,
        }
    }
}

fn required<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(Error::MissingRequiredArgument { name })
}

/// Parameters for [`Client::posts`](crate::Client::posts).
#[derive(Debug, Clone)]
pub struct PostsQuery {
    /// Tag expression, passed through verbatim.
    pub tags: Option<String>,
    pub limit: u32,
    pub page: u32,
}

impl Default for PostsQuery {
    fn default() -> Self {
        Self {
            tags: None,
            limit: 10,
            page: 1,
        }
    }
}

impl PostsQuery {
    pub(crate) fn to_request(&self) -> ApiRequest {
        let pairs = Pairs::default()
            .pair("limit", self.limit)
            .pair("page", self.page)
            .pair_opt("tags", self.tags.as_deref());
        ApiRequest::new("/post/index.json", pairs)
    }
}

/// Parameters for [`Client::tags`](crate::Client::tags).
///
/// `id` wins over `name`; the paging block applies only when neither
/// selector is present.
#[derive(Debug, Clone)]
pub struct TagsQuery {
    pub name: Option<String>,
    pub id: Option<u64>,
    pub limit: u32,
    pub page: u32,
    pub order: String,
    pub after_id: u64,
}

impl Default for TagsQuery {
    fn default() -> Self {
        Self {
            name: None,
            id: None,
            limit: 100,
            page: 1,
            order: "name".to_owned(),
            after_id: 0,
        }
    }
}

impl TagsQuery {
    pub(crate) fn to_request(&self) -> ApiRequest {
        let pairs = if let Some(id) = self.id {
            Pairs::default().pair("id", id)
        } else if let Some(name) = &self.name {
            Pairs::default().pair("name", name)
        } else {
            Pairs::default()
                .pair("limit", self.limit)
                .pair("page", self.page)
                .pair("order", &self.order)
                .pair("after_id", self.after_id)
        };
        ApiRequest::new("/tag/index.json", pairs)
    }
}

/// Parameters for [`Client::artists`](crate::Client::artists).
///
/// A `name` filter is appended to the paging block; an `id` lookup replaces
/// it entirely.
#[derive(Debug, Clone)]
pub struct ArtistsQuery {
    pub name: Option<String>,
    pub id: Option<u64>,
    pub limit: u32,
    pub order: String,
    pub page: u32,
}

impl Default for ArtistsQuery {
    fn default() -> Self {
        Self {
            name: None,
            id: None,
            limit: 20,
            order: "name".to_owned(),
            page: 1,
        }
    }
}

impl ArtistsQuery {
    pub(crate) fn to_request(&self) -> ApiRequest {
        let paging = Pairs::default()
            .pair("limit", self.limit)
            .pair("page", self.page)
            .pair("order", &self.order);

        let pairs = if let Some(name) = &self.name {
            paging.pair("name", name)
        } else if let Some(id) = self.id {
            Pairs::default().pair("id", id)
        } else {
            paging
        };
        ApiRequest::new("/artist/index.json", pairs)
    }
}

/// Parameters for [`Client::comments`](crate::Client::comments).
#[derive(Debug, Clone, Default)]
pub struct CommentsQuery {
    /// Required.
    pub id: Option<u64>,
}

impl CommentsQuery {
    pub(crate) fn to_request(&self) -> Result<ApiRequest> {
        let id = required(self.id, "id")?;
        Ok(ApiRequest::new(
            "/comment/show.json",
            Pairs::default().pair("id", id),
        ))
    }
}

/// Parameters for [`Client::wiki`](crate::Client::wiki).
#[derive(Debug, Clone)]
pub struct WikiQuery {
    pub query: Option<String>,
    pub order: String,
    pub limit: u32,
    pub page: u32,
}

impl Default for WikiQuery {
    fn default() -> Self {
        Self {
            query: None,
            order: "title".to_owned(),
            limit: 20,
            page: 1,
        }
    }
}

impl WikiQuery {
    pub(crate) fn to_request(&self) -> ApiRequest {
        let pairs = Pairs::default()
            .pair("order", &self.order)
            .pair("limit", self.limit)
            .pair("page", self.page)
            .pair_opt("query", self.query.as_deref());
        ApiRequest::new("/wiki/index.json", pairs)
    }
}

/// Parameters for [`Client::wiki_history`](crate::Client::wiki_history).
#[derive(Debug, Clone, Default)]
pub struct WikiHistoryQuery {
    /// Required.
    pub title: Option<String>,
}

impl WikiHistoryQuery {
    pub(crate) fn to_request(&self) -> Result<ApiRequest> {
        let title = required(self.title.as_deref(), "title")?;
        Ok(ApiRequest::new(
            "/wiki/history.json",
            Pairs::default().pair("title", title),
        ))
    }
}

/// Parameters for [`Client::notes`](crate::Client::notes).
#[derive(Debug, Clone, Default)]
pub struct NotesQuery {
    pub post_id: Option<u64>,
}

impl NotesQuery {
    pub(crate) fn to_request(&self) -> ApiRequest {
        ApiRequest::new(
            "/note/index.json",
            Pairs::default().pair_opt("post_id", self.post_id),
        )
    }
}

/// Parameters for [`Client::search_notes`](crate::Client::search_notes).
#[derive(Debug, Clone, Default)]
pub struct SearchNotesQuery {
    /// Required.
    pub query: Option<String>,
}

impl SearchNotesQuery {
    pub(crate) fn to_request(&self) -> Result<ApiRequest> {
        let query = required(self.query.as_deref(), "query")?;
        Ok(ApiRequest::new(
            "/note/search.json",
            Pairs::default().pair("query", query),
        ))
    }
}

/// Parameters for [`Client::history_notes`](crate::Client::history_notes).
///
/// `post_id` wins over `id`; the paging block applies only when neither
/// selector is present.
#[derive(Debug, Clone)]
pub struct NoteHistoryQuery {
    pub post_id: Option<u64>,
    pub id: Option<u64>,
    pub limit: u32,
    pub page: u32,
}

impl Default for NoteHistoryQuery {
    fn default() -> Self {
        Self {
            post_id: None,
            id: None,
            limit: 10,
            page: 1,
        }
    }
}

impl NoteHistoryQuery {
    pub(crate) fn to_request(&self) -> ApiRequest {
        let pairs = if let Some(post_id) = self.post_id {
            Pairs::default().pair("post_id", post_id)
        } else if let Some(id) = self.id {
            Pairs::default().pair("id", id)
        } else {
            Pairs::default()
                .pair("limit", self.limit)
                .pair("page", self.page)
        };
        ApiRequest::new("/note/history.json", pairs)
    }
}

/// Parameters for [`Client::users`](crate::Client::users). `name` wins
/// over `id`; with neither, the endpoint lists all users.
#[derive(Debug, Clone, Default)]
pub struct UsersQuery {
    pub name: Option<String>,
    pub id: Option<u64>,
}

impl UsersQuery {
    pub(crate) fn to_request(&self) -> ApiRequest {
        let pairs = if let Some(name) = &self.name {
            Pairs::default().pair("name", name)
        } else {
            Pairs::default().pair_opt("id", self.id)
        };
        ApiRequest::new("/user/index.json", pairs)
    }
}

/// Parameters for [`Client::forum`](crate::Client::forum).
#[derive(Debug, Clone, Default)]
pub struct ForumQuery {
    pub parent_id: Option<u64>,
}

impl ForumQuery {
    pub(crate) fn to_request(&self) -> ApiRequest {
        ApiRequest::new(
            "/forum/index.json",
            Pairs::default().pair_opt("parent_id", self.parent_id),
        )
    }
}

/// Parameters for [`Client::pools`](crate::Client::pools). A text query
/// replaces paging entirely.
#[derive(Debug, Clone)]
pub struct PoolsQuery {
    pub query: Option<String>,
    pub page: u32,
}

impl Default for PoolsQuery {
    fn default() -> Self {
        Self {
            query: None,
            page: 1,
        }
    }
}

impl PoolsQuery {
    pub(crate) fn to_request(&self) -> ApiRequest {
        let pairs = if let Some(query) = &self.query {
            Pairs::default().pair("query", query)
        } else {
            Pairs::default().pair("page", self.page)
        };
        ApiRequest::new("/pool/index.json", pairs)
    }
}

/// Parameters for [`Client::pools_posts`](crate::Client::pools_posts).
#[derive(Debug, Clone)]
pub struct PoolPostsQuery {
    /// Required.
    pub id: Option<u64>,
    pub page: u32,
}

impl Default for PoolPostsQuery {
    fn default() -> Self {
        Self { id: None, page: 1 }
    }
}

impl PoolPostsQuery {
    pub(crate) fn to_request(&self) -> Result<ApiRequest> {
        let id = required(self.id, "id")?;
        Ok(ApiRequest::new(
            "/pool/show.json",
            Pairs::default().pair("id", id).pair("page", self.page),
        ))
    }
}

/// Parameters for [`Client::favorites`](crate::Client::favorites).
#[derive(Debug, Clone, Default)]
pub struct FavoritesQuery {
    /// Required.
    pub id: Option<u64>,
}

impl FavoritesQuery {
    pub(crate) fn to_request(&self) -> Result<ApiRequest> {
        let id = required(self.id, "id")?;
        Ok(ApiRequest::new(
            "/favorite/list_users.json",
            Pairs::default().pair("id", id),
        ))
    }
}

/// Parameters for [`Client::tag_history`](crate::Client::tag_history).
/// The first present selector wins, checked in field order.
#[derive(Debug, Clone, Default)]
pub struct TagHistoryQuery {
    pub post_id: Option<u64>,
    pub user_id: Option<u64>,
    pub user_name: Option<String>,
}

impl TagHistoryQuery {
    pub(crate) fn to_request(&self) -> ApiRequest {
        let pairs = if let Some(post_id) = self.post_id {
            Pairs::default().pair("post_id", post_id)
        } else if let Some(user_id) = self.user_id {
            Pairs::default().pair("user_id", user_id)
        } else {
            Pairs::default().pair_opt("user_name", self.user_name.as_deref())
        };
        ApiRequest::new("/post_tag_history/index.json", pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use expect_test::{expect, Expect};

    const BASE: &str = "http://danbooru.donmai.us";

    #[track_caller]
    fn assert_url(request: ApiRequest, expected: Expect) {
        expected.assert_eq(&request.url(BASE));
    }

    #[test]
    fn posts_defaults() {
        assert_url(
            PostsQuery::default().to_request(),
            expect!["http://danbooru.donmai.us/post/index.json?limit=10&page=1"],
        );
    }

    #[test]
    fn posts_with_tags() {
        let query = PostsQuery {
            tags: Some("touhou rating:safe".to_owned()),
            limit: 3,
            page: 2,
        };
        // Tags go through verbatim, spaces included.
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/post/index.json?limit=3&page=2&tags=touhou rating:safe"],
        );
    }

    #[test]
    fn tags_id_wins_over_name() {
        let query = TagsQuery {
            id: Some(5),
            name: Some("touhou".to_owned()),
            ..Default::default()
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/tag/index.json?id=5"],
        );
    }

    #[test]
    fn tags_by_name() {
        let query = TagsQuery {
            name: Some("touhou".to_owned()),
            ..Default::default()
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/tag/index.json?name=touhou"],
        );
    }

    #[test]
    fn tags_defaults() {
        assert_url(
            TagsQuery::default().to_request(),
            expect!["http://danbooru.donmai.us/tag/index.json?limit=100&page=1&order=name&after_id=0"],
        );
    }

    #[test]
    fn artists_by_name_keeps_paging() {
        let query = ArtistsQuery {
            name: Some("kantoku".to_owned()),
            ..Default::default()
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/artist/index.json?limit=20&page=1&order=name&name=kantoku"],
        );
    }

    #[test]
    fn artists_by_id_drops_paging() {
        let query = ArtistsQuery {
            id: Some(42),
            ..Default::default()
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/artist/index.json?id=42"],
        );
    }

    #[test]
    fn artists_defaults() {
        assert_url(
            ArtistsQuery::default().to_request(),
            expect!["http://danbooru.donmai.us/artist/index.json?limit=20&page=1&order=name"],
        );
    }

    #[test]
    fn comments_require_an_id() {
        assert_matches!(
            CommentsQuery::default().to_request(),
            Err(Error::MissingRequiredArgument { name: "id" })
        );

        assert_url(
            CommentsQuery { id: Some(7) }.to_request().unwrap(),
            expect!["http://danbooru.donmai.us/comment/show.json?id=7"],
        );
    }

    #[test]
    fn wiki_defaults_and_query() {
        assert_url(
            WikiQuery::default().to_request(),
            expect!["http://danbooru.donmai.us/wiki/index.json?order=title&limit=20&page=1"],
        );

        let query = WikiQuery {
            query: Some("school_uniform".to_owned()),
            ..Default::default()
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/wiki/index.json?order=title&limit=20&page=1&query=school_uniform"],
        );
    }

    #[test]
    fn wiki_history_requires_a_title() {
        assert_matches!(
            WikiHistoryQuery::default().to_request(),
            Err(Error::MissingRequiredArgument { name: "title" })
        );

        let query = WikiHistoryQuery {
            title: Some("help:home".to_owned()),
        };
        assert_url(
            query.to_request().unwrap(),
            expect!["http://danbooru.donmai.us/wiki/history.json?title=help:home"],
        );
    }

    #[test]
    fn notes_with_and_without_post() {
        assert_url(
            NotesQuery::default().to_request(),
            expect!["http://danbooru.donmai.us/note/index.json?"],
        );

        assert_url(
            NotesQuery { post_id: Some(99) }.to_request(),
            expect!["http://danbooru.donmai.us/note/index.json?post_id=99"],
        );
    }

    #[test]
    fn search_notes_requires_a_query() {
        assert_matches!(
            SearchNotesQuery::default().to_request(),
            Err(Error::MissingRequiredArgument { name: "query" })
        );

        let query = SearchNotesQuery {
            query: Some("translation".to_owned()),
        };
        assert_url(
            query.to_request().unwrap(),
            expect!["http://danbooru.donmai.us/note/search.json?query=translation"],
        );
    }

    #[test]
    fn note_history_selector_priority() {
        let query = NoteHistoryQuery {
            post_id: Some(1),
            id: Some(2),
            ..Default::default()
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/note/history.json?post_id=1"],
        );

        let query = NoteHistoryQuery {
            id: Some(2),
            ..Default::default()
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/note/history.json?id=2"],
        );

        assert_url(
            NoteHistoryQuery::default().to_request(),
            expect!["http://danbooru.donmai.us/note/history.json?limit=10&page=1"],
        );
    }

    #[test]
    fn users_selector_priority() {
        let query = UsersQuery {
            name: Some("albert".to_owned()),
            id: Some(1),
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/user/index.json?name=albert"],
        );

        let query = UsersQuery {
            id: Some(1),
            ..Default::default()
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/user/index.json?id=1"],
        );

        assert_url(
            UsersQuery::default().to_request(),
            expect!["http://danbooru.donmai.us/user/index.json?"],
        );
    }

    #[test]
    fn forum_threads() {
        assert_url(
            ForumQuery::default().to_request(),
            expect!["http://danbooru.donmai.us/forum/index.json?"],
        );

        assert_url(
            ForumQuery { parent_id: Some(3) }.to_request(),
            expect!["http://danbooru.donmai.us/forum/index.json?parent_id=3"],
        );
    }

    #[test]
    fn pools_query_replaces_paging() {
        assert_url(
            PoolsQuery::default().to_request(),
            expect!["http://danbooru.donmai.us/pool/index.json?page=1"],
        );

        let query = PoolsQuery {
            query: Some("artbook".to_owned()),
            page: 5,
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/pool/index.json?query=artbook"],
        );
    }

    #[test]
    fn pools_posts_require_an_id() {
        assert_matches!(
            PoolPostsQuery::default().to_request(),
            Err(Error::MissingRequiredArgument { name: "id" })
        );

        let query = PoolPostsQuery {
            id: Some(11),
            page: 2,
        };
        assert_url(
            query.to_request().unwrap(),
            expect!["http://danbooru.donmai.us/pool/show.json?id=11&page=2"],
        );
    }

    #[test]
    fn favorites_require_an_id() {
        assert_matches!(
            FavoritesQuery::default().to_request(),
            Err(Error::MissingRequiredArgument { name: "id" })
        );

        assert_url(
            FavoritesQuery { id: Some(21) }.to_request().unwrap(),
            expect!["http://danbooru.donmai.us/favorite/list_users.json?id=21"],
        );
    }

    #[test]
    fn tag_history_selector_priority() {
        let query = TagHistoryQuery {
            post_id: Some(1),
            user_id: Some(2),
            user_name: Some("albert".to_owned()),
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/post_tag_history/index.json?post_id=1"],
        );

        let query = TagHistoryQuery {
            user_id: Some(2),
            user_name: Some("albert".to_owned()),
            ..Default::default()
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/post_tag_history/index.json?user_id=2"],
        );

        let query = TagHistoryQuery {
            user_name: Some("albert".to_owned()),
            ..Default::default()
        };
        assert_url(
            query.to_request(),
            expect!["http://danbooru.donmai.us/post_tag_history/index.json?user_name=albert"],
        );

        assert_url(
            TagHistoryQuery::default().to_request(),
            expect!["http://danbooru.donmai.us/post_tag_history/index.json?"],
        );
    }

    #[test]
    fn composition_is_idempotent() {
        let query = PostsQuery {
            tags: Some("touhou".to_owned()),
            limit: 5,
            page: 3,
        };
        assert_eq!(
            query.to_request().url(BASE),
            query.to_request().url(BASE),
        );
    }
}
