//! What happens to an in-flight reply when a newer request starts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supersession policy for stale streaming tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupersessionPolicy {
    /// Stale task stops at its next fragment; the remote call is left alone
    #[default]
    Ignore,
    /// Stale task is cancelled at once and drops its connection
    Abort,
}

impl SupersessionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupersessionPolicy::Ignore => "ignore",
            SupersessionPolicy::Abort => "abort",
        }
    }

    pub fn cancels_stale_tasks(&self) -> bool {
        matches!(self, SupersessionPolicy::Abort)
    }
}

impl fmt::Display for SupersessionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupersessionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(SupersessionPolicy::Ignore),
            "abort" => Ok(SupersessionPolicy::Abort),
            other => Err(format!(
                "unknown supersession policy '{}' (expected 'ignore' or 'abort')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("abort".parse(), Ok(SupersessionPolicy::Abort));
        assert_eq!(" Ignore ".parse(), Ok(SupersessionPolicy::Ignore));
        assert!("drop".parse::<SupersessionPolicy>().is_err());
    }

    #[test]
    fn test_default_is_ignore() {
        assert_eq!(SupersessionPolicy::default(), SupersessionPolicy::Ignore);
        assert!(!SupersessionPolicy::Ignore.cancels_stale_tasks());
        assert!(SupersessionPolicy::Abort.cancels_stale_tasks());
    }
}
