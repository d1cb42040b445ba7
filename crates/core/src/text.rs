//! Validated text used for record keys.

use crate::{ClinicError, ClinicResult};

/// The name of a doctor or patient.
///
/// Names are the only field the clinic checks for presence: surrounding
/// whitespace is trimmed and an empty result is rejected. Comparison is exact
/// and case-sensitive, so `"dr. lee"` and `"Dr. Lee"` are different records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordName(String);

impl RecordName {
    /// Builds a name from what was typed at a prompt or read from a CSV cell.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::EmptyName`] when nothing but whitespace is left.
    /// On load this makes the row malformed; at a prompt the shell asks again.
    pub fn new(input: impl AsRef<str>) -> ClinicResult<Self> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ClinicError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RecordName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl serde::Serialize for RecordName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for RecordName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordName::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let name = RecordName::new("  Dr. Lee \t").expect("valid name");
        assert_eq!(name.as_str(), "Dr. Lee");
    }

    #[test]
    fn rejects_blank_names() {
        assert!(matches!(RecordName::new(""), Err(ClinicError::EmptyName)));
        assert!(matches!(RecordName::new("   "), Err(ClinicError::EmptyName)));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let name = RecordName::new("Alice").expect("valid name");
        assert!(name == *"Alice");
        assert!(name != *"alice");
    }
}
