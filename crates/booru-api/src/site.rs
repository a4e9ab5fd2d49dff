use crate::{Error, Result};

/// Well-known Danbooru-family installations.
///
/// The string form of each variant is the registry key accepted by
/// [`Config::site`](crate::Config): `danbooru`, `yandere`, `chan-sankaku`, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Site {
    Konachan,
    Danbooru,
    Yandere,
    ChanSankaku,
    IdolSankaku,
    #[strum(serialize = "3dbooru")]
    Behoimi,
    Nekobooru,
}

impl Site {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Konachan => "http://konachan.com",
            Self::Danbooru => "http://danbooru.donmai.us",
            Self::Yandere => "https://yande.re",
            Self::ChanSankaku => "http://chan.sankakucomplex.com",
            Self::IdolSankaku => "http://idol.sankakucomplex.com",
            Self::Behoimi => "http://behoimi.org",
            Self::Nekobooru => "http://nekobooru.net",
        }
    }

    /// Registry lookup by name, case-insensitive.
    pub(crate) fn resolve(name: &str) -> Result<Self> {
        name.to_lowercase()
            .parse()
            .map_err(|_| Error::InvalidSiteName {
                name: name.to_owned(),
            })
    }
}

/// Normalizes a raw site URL into a base URL: all lower-case, scheme forced
/// to `http` when it is neither `http` nor `https`, at most one trailing
/// slash stripped.
///
/// Garbage input produces a garbage base URL rather than an error here;
/// the transport reports unusable URLs when the first request is made.
pub(crate) fn normalize_base_url(raw: &str) -> String {
    let raw = raw.to_lowercase();

    let mut base = match url::Url::parse(&raw) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => raw,
        // Unknown scheme: downgrade to plain http, keeping host and path.
        Ok(_) => match raw.split_once("://") {
            Some((_, rest)) => format!("http://{rest}"),
            None => format!("http://{raw}"),
        },
        // No scheme at all, e.g. `konachan.com/post`.
        Err(_) => format!("http://{raw}"),
    };

    if base.ends_with('/') {
        base.pop();
    }

    base
}
