//! Hierarchical resource names.
//!
//! The registry owns the full name grammar; this layer only needs names to be
//! opaque, non-empty identifiers, and to split an artifact's full name into
//! its parent resource and artifact id.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// Path segment separating an artifact from its parent resource.
const ARTIFACT_SEGMENT: &str = "/artifacts/";

/// Name of a primary registry resource (a spec).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecName(String);

impl SpecName {
    /// Creates a spec name from its full hierarchical form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_name(name, "spec name is empty"));
        }
        Ok(Self(name))
    }

    /// Returns the full resource name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the artifact with the given id attached to this spec.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the artifact id is empty or contains `/`.
    pub fn artifact(&self, artifact_id: impl Into<String>) -> Result<ArtifactName> {
        ArtifactName::new(self.0.clone(), artifact_id)
    }
}

impl fmt::Display for SpecName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SpecName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Name of an artifact attached to a parent resource.
///
/// Canonical form is `<parent>/artifacts/<artifact_id>`. The parent is kept
/// opaque; only the trailing artifact segment is decomposed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName {
    parent: String,
    artifact_id: String,
}

impl ArtifactName {
    /// Creates an artifact name from its parent resource and artifact id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if either part is empty or the artifact
    /// id contains `/`.
    pub fn new(parent: impl Into<String>, artifact_id: impl Into<String>) -> Result<Self> {
        let parent = parent.into();
        let artifact_id = artifact_id.into();
        if parent.is_empty() {
            return Err(Error::invalid_name(artifact_id, "parent resource name is empty"));
        }
        if artifact_id.is_empty() {
            return Err(Error::invalid_name(parent, "artifact id is empty"));
        }
        if artifact_id.contains('/') {
            return Err(Error::invalid_name(artifact_id, "artifact id contains '/'"));
        }
        Ok(Self {
            parent,
            artifact_id,
        })
    }

    /// The parent resource's full name.
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// The artifact's leaf id.
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.parent, ARTIFACT_SEGMENT, self.artifact_id)
    }
}

impl FromStr for ArtifactName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (parent, artifact_id) = s
            .rsplit_once(ARTIFACT_SEGMENT)
            .ok_or_else(|| Error::invalid_name(s, "missing '/artifacts/' segment"))?;
        Self::new(parent, artifact_id)
    }
}

impl Serialize for ArtifactName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ArtifactName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_name_roundtrip() {
        let name = SpecName::new("projects/p/locations/global/apis/a/versions/v/specs/s").unwrap();
        let s = name.to_string();
        let parsed: SpecName = s.parse().unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn test_spec_name_empty() {
        assert!(SpecName::new("").is_err());
    }

    #[test]
    fn test_artifact_name_roundtrip() {
        let name = ArtifactName::new("projects/p/apis/a/versions/v/specs/s", "lint").unwrap();
        assert_eq!(
            name.to_string(),
            "projects/p/apis/a/versions/v/specs/s/artifacts/lint"
        );
        let parsed: ArtifactName = name.to_string().parse().unwrap();
        assert_eq!(name, parsed);
        assert_eq!(parsed.parent(), "projects/p/apis/a/versions/v/specs/s");
        assert_eq!(parsed.artifact_id(), "lint");
    }

    #[test]
    fn test_artifact_name_splits_last_segment() {
        // A parent may itself contain an artifacts collection.
        let parsed: ArtifactName = "projects/p/artifacts/outer/artifacts/inner".parse().unwrap();
        assert_eq!(parsed.parent(), "projects/p/artifacts/outer");
        assert_eq!(parsed.artifact_id(), "inner");
    }

    #[test]
    fn test_artifact_name_invalid() {
        assert!(ArtifactName::new("", "x").is_err());
        assert!(ArtifactName::new("projects/p", "").is_err());
        assert!(ArtifactName::new("projects/p", "a/b").is_err());
        assert!("projects/p/specs/s".parse::<ArtifactName>().is_err());
    }

    #[test]
    fn test_spec_artifact_constructor() {
        let spec = SpecName::new("projects/p/apis/a/versions/v/specs/s").unwrap();
        let artifact = spec.artifact("complexity").unwrap();
        assert_eq!(
            artifact.to_string(),
            "projects/p/apis/a/versions/v/specs/s/artifacts/complexity"
        );
    }

    #[test]
    fn test_serde_canonical_string() {
        let artifact = ArtifactName::new("projects/p/specs/s", "lint").unwrap();
        let json = serde_json::to_string(&artifact).unwrap();
        assert_eq!(json, "\"projects/p/specs/s/artifacts/lint\"");

        let back: ArtifactName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, artifact);
    }
}
