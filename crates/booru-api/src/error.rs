use crate::status;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The given site name is not one of the well-known [`Site`](crate::Site)s.
    #[error("site name is not in the registry: `{name}`")]
    InvalidSiteName { name: String },

    /// Neither a site name nor a site URL was given at construction.
    #[error("either a site name or a site URL must be given")]
    MissingSiteIdentifier,

    /// A resource method was called without an argument the endpoint requires.
    /// Raised before any network activity happens.
    #[error("required argument `{name}` was not given")]
    MissingRequiredArgument { name: &'static str },

    /// The request itself failed: connection error, error HTTP status,
    /// or a body that does not parse as JSON.
    #[error("{}", request_failed_message(.message, *.status, .url))]
    RequestFailed {
        message: String,
        status: Option<u16>,
        url: String,
    },
}

impl Error {
    pub(crate) fn request_failed(
        message: impl Into<String>,
        status: Option<u16>,
        url: impl Into<String>,
    ) -> Self {
        Self::RequestFailed {
            message: message.into(),
            status,
            url: url.into(),
        }
    }
}

/// When the status code is one the sites document, the message carries the
/// code, its reason phrase and description, the original message and the
/// request URL. Otherwise the original message passes through unchanged.
fn request_failed_message(message: &str, status: Option<u16>, url: &str) -> String {
    let described = status.and_then(|code| {
        status::describe(code).map(|(reason, description)| (code, reason, description))
    });

    let Some((code, reason, description)) = described else {
        return message.to_owned();
    };

    format!("{code}: {reason}, {description} -- {message} -- URL: {url}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn known_status_is_described() {
        let err = Error::request_failed(
            "request returned an error status",
            Some(404),
            "http://danbooru.donmai.us/post/index.json?limit=10&page=1",
        );

        expect![[r#"404: Not Found, Not found -- request returned an error status -- URL: http://danbooru.donmai.us/post/index.json?limit=10&page=1"#]]
            .assert_eq(&err.to_string());
    }

    #[test]
    fn unknown_status_passes_the_message_through() {
        let err = Error::request_failed("connection reset", Some(418), "http://konachan.com/x");
        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn absent_status_passes_the_message_through() {
        let err = Error::request_failed("dns failure", None, "http://konachan.com/x");
        assert_eq!(err.to_string(), "dns failure");
    }
}
