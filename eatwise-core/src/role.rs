use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role. Every role-specific decision in the app dispatches on
/// this enum rather than comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    #[serde(rename = "user")]
    EndUser,
    Partner,
    #[serde(rename = "policymaker")]
    PolicyMaker,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EndUser => "user",
            Self::Partner => "partner",
            Self::PolicyMaker => "policymaker",
        }
    }

    /// Human-readable label for role pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EndUser => "User",
            Self::Partner => "Partner",
            Self::PolicyMaker => "Policy maker",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::EndUser, Self::Partner, Self::PolicyMaker]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::EndUser),
            "partner" => Ok(Self::Partner),
            "policymaker" => Ok(Self::PolicyMaker),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Role;
    use std::str::FromStr;

    #[test]
    fn role_round_trips_through_str() {
        for role in Role::all() {
            assert_eq!(Role::from_str(role.as_str()), Ok(role));
        }
        assert!(Role::from_str("admin").is_err());
    }

    #[test]
    fn role_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Role::PolicyMaker).unwrap();
        assert_eq!(json, "\"policymaker\"");
        let back: Role = serde_json::from_str("\"partner\"").unwrap();
        assert_eq!(back, Role::Partner);
    }
}
