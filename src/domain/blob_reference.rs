use std::fmt;

use url::Url;

/// Scheme prefix that marks a caller-supplied path as a full blob URL
/// rather than `container/name` shorthand.
const URL_PREFIX: &str = "https://";

/// Resolved identity of a stored blob, built once per request.
///
/// Accepts three input shapes: a pre-signed (SAS) URL, a full
/// `https://account.../container/path` URL, or `container/name` shorthand.
/// Path separators inside the blob name are preserved, so nested
/// "folder" paths survive resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobReference {
    pub container: String,
    pub name: String,
    pub raw_input: String,
    /// Query string of a pre-signed URL; credentials for the blob-client
    /// construction step. `None` for account-key access.
    pub sas_token: Option<String>,
}

impl BlobReference {
    pub fn resolve(raw: &str) -> Result<Self, InvalidReference> {
        if raw.starts_with(URL_PREFIX) {
            Self::from_url(raw)
        } else {
            Self::from_shorthand(raw)
        }
    }

    fn from_url(raw: &str) -> Result<Self, InvalidReference> {
        let url = Url::parse(raw).map_err(|_| InvalidReference::MalformedUrl)?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        // First segment after the host is the container, the rest is the
        // blob name. A URL without both is rejected rather than silently
        // truncated.
        if segments.len() < 2 {
            return Err(InvalidReference::TooFewSegments);
        }

        Ok(Self {
            container: segments[0].to_string(),
            name: segments[1..].join("/"),
            raw_input: raw.to_string(),
            sas_token: url.query().map(String::from),
        })
    }

    fn from_shorthand(raw: &str) -> Result<Self, InvalidReference> {
        let (container, name) = raw
            .split_once('/')
            .ok_or(InvalidReference::TooFewSegments)?;

        if container.is_empty() || name.is_empty() {
            return Err(InvalidReference::TooFewSegments);
        }

        Ok(Self {
            container: container.to_string(),
            name: name.to_string(),
            raw_input: raw.to_string(),
            sas_token: None,
        })
    }

    pub fn is_presigned(&self) -> bool {
        self.sas_token.is_some()
    }
}

impl fmt::Display for BlobReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.container, self.name)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidReference {
    #[error("expected a container and a blob name")]
    TooFewSegments,
    #[error("malformed blob URL")]
    MalformedUrl,
}
