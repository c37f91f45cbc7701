//! Optional identification of the person who took the assessment.

use serde::{Deserialize, Serialize};

/// Client name and email attached to a submission.
///
/// Blank strings are normalized to `None` so storage never holds `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    email: Option<String>,
    name: Option<String>,
}

impl ClientDetails {
    pub fn new(email: Option<String>, name: Option<String>) -> Self {
        Self {
            email: normalize(email),
            name: normalize(name),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_become_none() {
        let client = ClientDetails::new(Some("  ".into()), Some(String::new()));
        assert_eq!(client, ClientDetails::anonymous());
    }

    #[test]
    fn values_are_trimmed() {
        let client = ClientDetails::new(Some(" a@b.c ".into()), Some("Ada".into()));
        assert_eq!(client.email(), Some("a@b.c"));
        assert_eq!(client.name(), Some("Ada"));
    }
}
