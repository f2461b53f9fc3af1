//! Environment labels a schedule can be submitted under

use crate::error::{Result, SessionError};

/// Labels every organization has
pub const BUILTIN_ENVIRONMENTS: [&str; 3] = ["development", "staging", "production"];

/// Built-in labels plus the organization's custom environment types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentCatalog {
    custom: Vec<String>,
}

impl EnvironmentCatalog {
    /// Build a catalog from custom environment types
    ///
    /// Labels are trimmed and lowercased; blanks, duplicates and names that
    /// shadow a built-in are dropped.
    pub fn new<I, S>(custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut labels: Vec<String> = Vec::new();
        for label in custom {
            let label = normalize(label.as_ref());
            if label.is_empty()
                || BUILTIN_ENVIRONMENTS.contains(&label.as_str())
                || labels.contains(&label)
            {
                continue;
            }
            labels.push(label);
        }
        Self { custom: labels }
    }

    /// All allowed labels, built-ins first
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        BUILTIN_ENVIRONMENTS
            .iter()
            .copied()
            .chain(self.custom.iter().map(String::as_str))
    }

    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    pub fn contains(&self, label: &str) -> bool {
        let label = normalize(label);
        self.labels().any(|known| known == label)
    }

    /// Canonical form of `label`, or an error listing what is allowed
    pub fn resolve(&self, label: &str) -> Result<String> {
        let normalized = normalize(label);
        if self.labels().any(|known| known == normalized) {
            Ok(normalized)
        } else {
            Err(SessionError::UnknownLabel {
                label: label.to_string(),
                allowed: self.labels().collect::<Vec<_>>().join(", "),
            })
        }
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}
