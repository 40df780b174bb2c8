use std::str::FromStr;

mod action_enum;
mod dispatch;

pub use action_enum::*;

/// Returned when a string names no known action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.config_name() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
