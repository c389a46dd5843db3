use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A file name that is safe to join onto the store directory.
///
/// Names are a single path component: never empty, never `.` or `..`, and
/// free of `/`, `\` and NUL. Anything else (spaces, unicode, leading dots) is
/// accepted as-is.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileName(String);

impl FileName {
    /// Validate and wrap a name.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(TypeError::InvalidFileName(name))
        }
    }

    /// Returns `true` if `name` would be accepted by [`FileName::new`].
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\', '\0'])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileName({:?})", self.0)
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for FileName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FileName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FileName> for String {
    fn from(name: FileName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        for name in ["a.txt", "notes", ".hidden", "with space.md", "ünïcode"] {
            assert!(FileName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_traversal_and_separators() {
        for name in ["", ".", "..", "../etc/passwd", "a/b", "a\\b", "nul\0byte"] {
            assert_eq!(
                FileName::new(name),
                Err(TypeError::InvalidFileName(name.to_string()))
            );
        }
    }

    #[test]
    fn display_is_raw_name() {
        let name = FileName::new("report.txt").unwrap();
        assert_eq!(name.to_string(), "report.txt");
        assert_eq!(name.as_str(), "report.txt");
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let ok: FileName = serde_json::from_str("\"a.txt\"").unwrap();
        assert_eq!(ok.as_str(), "a.txt");
        assert!(serde_json::from_str::<FileName>("\"../x\"").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"a.txt\"");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn single_components_are_valid(name in "[a-zA-Z0-9 _.-]{1,32}") {
                prop_assume!(name != "." && name != "..");
                prop_assert!(FileName::new(name).is_ok());
            }

            #[test]
            fn anything_with_a_slash_is_rejected(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
                let joined = format!("{a}/{b}");
                prop_assert!(FileName::new(joined).is_err());
            }
        }
    }
}
