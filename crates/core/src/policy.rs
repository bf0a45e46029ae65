//! Delete policy for items with dependent rows.
//!
//! Deleting an item leaves the question of what happens to its child items
//! and comments. The policy is a deployment choice, loaded from the
//! `ITEM_DELETE_POLICY` environment variable by the API server config.

use std::str::FromStr;

/// What to do with an item's children and comments when the item is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemDeletePolicy {
    /// Delete only the item; children and comments keep their dangling
    /// references. Matches the original board behaviour.
    #[default]
    Orphan,
    /// Delete the item's direct children and its comments in the same
    /// transaction.
    Cascade,
    /// Refuse the delete with a conflict while children or comments exist.
    Reject,
}

impl ItemDeletePolicy {
    pub const ORPHAN: &'static str = "orphan";
    pub const CASCADE: &'static str = "cascade";
    pub const REJECT: &'static str = "reject";

    /// All accepted configuration values.
    pub const VALID_POLICIES: &'static [&'static str] =
        &[Self::ORPHAN, Self::CASCADE, Self::REJECT];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemDeletePolicy::Orphan => Self::ORPHAN,
            ItemDeletePolicy::Cascade => Self::CASCADE,
            ItemDeletePolicy::Reject => Self::REJECT,
        }
    }
}

impl FromStr for ItemDeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ORPHAN => Ok(ItemDeletePolicy::Orphan),
            Self::CASCADE => Ok(ItemDeletePolicy::Cascade),
            Self::REJECT => Ok(ItemDeletePolicy::Reject),
            other => Err(format!(
                "Invalid item delete policy '{other}'. Must be one of: {}",
                Self::VALID_POLICIES.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_policies_parse() {
        assert_eq!("orphan".parse(), Ok(ItemDeletePolicy::Orphan));
        assert_eq!("cascade".parse(), Ok(ItemDeletePolicy::Cascade));
        assert_eq!("reject".parse(), Ok(ItemDeletePolicy::Reject));
    }

    #[test]
    fn invalid_policy_rejected() {
        let result = ItemDeletePolicy::from_str("drop");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid item delete policy"));
    }

    #[test]
    fn default_is_orphan() {
        assert_eq!(ItemDeletePolicy::default(), ItemDeletePolicy::Orphan);
    }

    #[test]
    fn round_trips_through_as_str() {
        for policy in [
            ItemDeletePolicy::Orphan,
            ItemDeletePolicy::Cascade,
            ItemDeletePolicy::Reject,
        ] {
            assert_eq!(policy.as_str().parse(), Ok(policy));
        }
    }
}
