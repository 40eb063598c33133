use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LayoutError;

/// The three mutually exclusive states of a [`crate::LazyLayout`].
///
/// Config files may spell a state by name (`"loading"`) or by its integer
/// tag (`0`); see [`State::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "StateRepr")]
pub enum State {
    Error,
    #[default]
    Loading,
    Success,
}

impl State {
    pub const ERROR_TAG: i32 = -1;
    pub const LOADING_TAG: i32 = 0;
    pub const SUCCESS_TAG: i32 = 1;

    pub fn tag(self) -> i32 {
        match self {
            State::Error => Self::ERROR_TAG,
            State::Loading => Self::LOADING_TAG,
            State::Success => Self::SUCCESS_TAG,
        }
    }

    pub fn from_tag(tag: i32) -> Result<Self, LayoutError> {
        match tag {
            Self::ERROR_TAG => Ok(State::Error),
            Self::LOADING_TAG => Ok(State::Loading),
            Self::SUCCESS_TAG => Ok(State::Success),
            other => Err(LayoutError::InvalidStateTag { tag: other }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            State::Error => "error",
            State::Loading => "loading",
            State::Success => "success",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StateRepr {
    Tag(i32),
    Name(String),
}

impl TryFrom<StateRepr> for State {
    type Error = String;

    fn try_from(repr: StateRepr) -> Result<Self, String> {
        match repr {
            StateRepr::Tag(tag) => State::from_tag(tag).map_err(|e| e.to_string()),
            StateRepr::Name(name) => match name.to_ascii_lowercase().as_str() {
                "error" => Ok(State::Error),
                "loading" => Ok(State::Loading),
                "success" => Ok(State::Success),
                _ => Err(format!(
                    "unknown state '{}', expected one of: error, loading, success",
                    name
                )),
            },
        }
    }
}
