//! Client for the read-only JSON API of Danbooru-family image boards
//! (Danbooru 1.x / Moebooru: Danbooru, Konachan, Yande.re and similar
//! installations).
//!
//! ```no_run
//! # async fn run() -> booru_api::Result<()> {
//! use booru_api::{Client, PostsQuery, Site};
//!
//! let client = Client::for_site(Site::Danbooru);
//!
//! let posts = client
//!     .posts(&PostsQuery {
//!         tags: Some("touhou".to_owned()),
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod http;
mod query;
mod site;
mod status;

pub use client::*;
pub use error::*;
pub use query::*;
pub use site::Site;

/// Raw JSON payload returned by a site, passed through without schema
/// validation: object, array or scalar, exactly as the API responded.
pub type Json = serde_json::Value;
