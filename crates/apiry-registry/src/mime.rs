//! Declared content types for registry resources.

use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

/// Declared MIME type of a stored resource.
///
/// The value is carried verbatim. Whether it implies a compressed wire
/// encoding (the `+gzip` suffix convention) is decided by the content layer,
/// not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[derive(Deref, Display, From)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct MimeType(String);

impl MimeType {
    /// Creates a MIME type from its string value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the declared type as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MimeType {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for MimeType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_carried_verbatim() {
        let mime = MimeType::from("text/plain+gzip");
        assert_eq!(mime.as_str(), "text/plain+gzip");
        assert_eq!(mime.to_string(), "text/plain+gzip");
    }

    #[test]
    fn test_serde_transparent() {
        let mime = MimeType::from("application/x.openapi+gzip;version=3");
        let json = serde_json::to_string(&mime).unwrap();
        assert_eq!(json, "\"application/x.openapi+gzip;version=3\"");

        let back: MimeType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mime);
    }
}
