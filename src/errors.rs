//! Error handling for the gh-forks crate.
use std::{error::Error as StdError, fmt};

/// Error type for the gh-forks crate.
#[derive(Debug)]
pub struct GhForksError {
    /// Inner error.
    inner: Box<Inner>,
}

impl GhForksError {
    /// Create a new error.
    pub(crate) fn new(kind: GhForksErrorKind) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                param: None,
                source: None,
            }),
        }
    }

    /// Create a new error from a message and a source error.
    pub(crate) fn new_with_source<E>(text: &str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        let source = source.into();
        Self {
            inner: Box::new(Inner {
                kind: GhForksErrorKind::Config,
                param: None,
                source: Some(Box::new(std::io::Error::other(format!("{text}: {source}")))),
            }),
        }
    }

    /// Create a validation error for the named parameter.
    pub(crate) fn invalid_argument(param: &'static str) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GhForksErrorKind::InvalidArgument,
                param: Some(param),
                source: None,
            }),
        }
    }

    /// Attach a response or message text as the error source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text)));
        self
    }

    /// Whether this is an argument-validation error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.inner.kind, GhForksErrorKind::InvalidArgument)
    }

    /// Name of the rejected parameter, for argument-validation errors.
    pub fn param(&self) -> Option<&'static str> {
        self.inner.param
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the gh-forks crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: GhForksErrorKind,

    /// Rejected parameter, for validation errors.
    param: Option<&'static str>,

    /// Source error.
    source: Option<BoxError>,
}

/// Error kinds of the gh-forks crate.
#[derive(Debug)]
pub(crate) enum GhForksErrorKind {
    /// A required string parameter was empty.
    InvalidArgument,

    /// The API answered with a non-success status.
    Api,

    /// Error related to the reqwest crate.
    Reqwest,

    /// Error related to serde.
    Serde,

    /// Error related to URL parsing.
    Url,

    /// Error related to the configuration.
    Config,

    /// Error related to an io operation.
    Io,
}

impl fmt::Display for GhForksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.param {
            Some(param) => write!(f, "{:?} ({param})", self.inner.kind)?,
            None => write!(f, "{:?}", self.inner.kind)?,
        }
        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for GhForksError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<reqwest::Error> for GhForksError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GhForksErrorKind::Reqwest,
                param: None,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<serde_json::Error> for GhForksError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GhForksErrorKind::Serde,
                param: None,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<url::ParseError> for GhForksError {
    fn from(e: url::ParseError) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GhForksErrorKind::Url,
                param: None,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<toml::de::Error> for GhForksError {
    fn from(e: toml::de::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GhForksErrorKind::Config,
                param: None,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<std::io::Error> for GhForksError {
    fn from(e: std::io::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GhForksErrorKind::Io,
                param: None,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<&str> for GhForksError {
    fn from(text: &str) -> Self {
        Self::new(GhForksErrorKind::Config).with_text(text)
    }
}

impl From<String> for GhForksError {
    fn from(text: String) -> Self {
        Self::new(GhForksErrorKind::Config).with_text(&text)
    }
}

/// Validate that a required string parameter is non-empty.
pub(crate) fn ensure_non_empty(value: &str, param: &'static str) -> Result<(), GhForksError> {
    if value.is_empty() {
        return Err(GhForksError::invalid_argument(param));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_carries_param() {
        let error = GhForksError::invalid_argument("owner");
        assert!(error.is_invalid_argument());
        assert_eq!(error.param(), Some("owner"));
        assert_eq!(error.to_string(), "InvalidArgument (owner)");
    }

    #[test]
    fn ensure_non_empty_accepts_non_empty() {
        assert!(ensure_non_empty("octocat", "owner").is_ok());
    }

    #[test]
    fn ensure_non_empty_rejects_empty() {
        match ensure_non_empty("", "name") {
            Ok(()) => panic!("empty value must be rejected"),
            Err(error) => assert_eq!(error.param(), Some("name")),
        }
    }

    #[test]
    fn api_error_shows_response_text() {
        let error = GhForksError::new(GhForksErrorKind::Api).with_text("404 Not Found");
        assert!(!error.is_invalid_argument());
        assert_eq!(error.to_string(), "Api: 404 Not Found");
    }

    #[test]
    fn string_conversion_keeps_text() {
        let error: GhForksError = "no command provided".into();
        assert_eq!(error.to_string(), "Config: no command provided");
    }
}
