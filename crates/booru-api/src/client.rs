use crate::query::{
    ApiRequest, ArtistsQuery, CommentsQuery, FavoritesQuery, ForumQuery, NoteHistoryQuery,
    NotesQuery, PoolPostsQuery, PoolsQuery, PostsQuery, SearchNotesQuery, TagHistoryQuery,
    TagsQuery, UsersQuery, WikiHistoryQuery, WikiQuery,
};
use crate::site::{self, Site};
use crate::{http, Error, Json, Result};
use serde::Deserialize;

/// Identifies the target installation: exactly one of `site` (a registry
/// key such as `danbooru`) or `site_url` (a raw URL) must be given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub site: Option<String>,
    pub site_url: Option<String>,
}

/// Client for one Danbooru-family installation.
///
/// Holds nothing but the resolved base URL and the HTTP client, so it is
/// immutable after construction, cheap to clone and safe to share. Each
/// resource method performs a single GET and returns the parsed JSON body
/// as-is.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(cfg: Config) -> Result<Self> {
        let base_url = if let Some(name) = &cfg.site {
            Site::resolve(name)?.base_url().to_owned()
        } else if let Some(raw) = &cfg.site_url {
            site::normalize_base_url(raw)
        } else {
            return Err(Error::MissingSiteIdentifier);
        };

        Ok(Self::with_base_url(base_url))
    }

    /// Client for a well-known site from the registry.
    pub fn for_site(site: Site) -> Self {
        Self::with_base_url(site.base_url().to_owned())
    }

    /// Client for an arbitrary installation, given its raw URL. The URL is
    /// lower-cased, its scheme forced to `http` unless it is already
    /// http(s), and a single trailing slash is stripped.
    pub fn from_url(raw_url: &str) -> Self {
        Self::with_base_url(site::normalize_base_url(raw_url))
    }

    fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: http::create_client(),
        }
    }

    /// The normalized base URL all requests go to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists posts: `/post/index.json`.
    pub async fn posts(&self, query: &PostsQuery) -> Result<Json> {
        self.dispatch(query.to_request()).await
    }

    /// Lists tags: `/tag/index.json`.
    pub async fn tags(&self, query: &TagsQuery) -> Result<Json> {
        self.dispatch(query.to_request()).await
    }

    /// Lists artists: `/artist/index.json`.
    pub async fn artists(&self, query: &ArtistsQuery) -> Result<Json> {
        self.dispatch(query.to_request()).await
    }

    /// Shows a single comment: `/comment/show.json`.
    pub async fn comments(&self, query: &CommentsQuery) -> Result<Json> {
        self.dispatch(query.to_request()?).await
    }

    /// Lists wiki pages: `/wiki/index.json`.
    pub async fn wiki(&self, query: &WikiQuery) -> Result<Json> {
        self.dispatch(query.to_request()).await
    }

    /// Lists the edit history of a wiki page: `/wiki/history.json`.
    pub async fn wiki_history(&self, query: &WikiHistoryQuery) -> Result<Json> {
        self.dispatch(query.to_request()?).await
    }

    /// Lists translation notes: `/note/index.json`.
    pub async fn notes(&self, query: &NotesQuery) -> Result<Json> {
        self.dispatch(query.to_request()).await
    }

    /// Searches translation notes: `/note/search.json`.
    pub async fn search_notes(&self, query: &SearchNotesQuery) -> Result<Json> {
        self.dispatch(query.to_request()?).await
    }

    /// Lists note edit history: `/note/history.json`.
    pub async fn history_notes(&self, query: &NoteHistoryQuery) -> Result<Json> {
        self.dispatch(query.to_request()).await
    }

    /// Lists users: `/user/index.json`.
    pub async fn users(&self, query: &UsersQuery) -> Result<Json> {
        self.dispatch(query.to_request()).await
    }

    /// Lists forum threads: `/forum/index.json`.
    pub async fn forum(&self, query: &ForumQuery) -> Result<Json> {
        self.dispatch(query.to_request()).await
    }

    /// Lists pools: `/pool/index.json`.
    pub async fn pools(&self, query: &PoolsQuery) -> Result<Json> {
        self.dispatch(query.to_request()).await
    }

    /// Shows a pool with its posts: `/pool/show.json`.
    pub async fn pools_posts(&self, query: &PoolPostsQuery) -> Result<Json> {
        self.dispatch(query.to_request()?).await
    }

    /// Lists users who favorited a post: `/favorite/list_users.json`.
    pub async fn favorites(&self, query: &FavoritesQuery) -> Result<Json> {
        self.dispatch(query.to_request()?).await
    }

    /// Lists tag edit history: `/post_tag_history/index.json`.
    pub async fn tag_history(&self, query: &TagHistoryQuery) -> Result<Json> {
        self.dispatch(query.to_request()).await
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Json> {
        http::fetch_json(&self.http, &request.url(&self.base_url)).await
    }
}
