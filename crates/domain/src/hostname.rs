use crate::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// Fully-qualified, dot-terminated domain name.
///
/// Always normalized on construction; a CNAME or NS target produces a new
/// value rather than mutating an existing one. Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(Arc<str>);

impl Hostname {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidHostname(
                "hostname cannot be empty".to_string(),
            ));
        }

        if trimmed == "." {
            return Ok(Self::root());
        }

        let relative = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if relative.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidHostname(format!(
                "'{}' exceeds {} characters",
                trimmed, MAX_NAME_LEN
            )));
        }

        for label in relative.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidHostname(format!(
                    "'{}' contains an empty label",
                    trimmed
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidHostname(format!(
                    "label '{}' exceeds {} characters",
                    label, MAX_LABEL_LEN
                )));
            }
        }

        Ok(Self(format!("{}.", relative).into()))
    }

    pub fn root() -> Self {
        Self(Arc::from("."))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == "."
    }

    /// Name without the trailing dot, as users usually type it.
    pub fn without_trailing_dot(&self) -> &str {
        if self.is_root() {
            return &self.0;
        }
        self.0.strip_suffix('.').unwrap_or(&self.0)
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Hostname {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
