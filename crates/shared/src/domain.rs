use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DRINK_NAME: &str = "Coffee";
pub const DEFAULT_DRINK_SIZE: &str = "Medium";
pub const DEFAULT_SHOT_COUNT: u32 = 1;
/// Upper bound for the shot stepper unless a screen is configured otherwise.
pub const MAX_SHOT_COUNT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Hot,
    Iced,
}

impl Temperature {
    pub fn from_iced(is_iced: bool) -> Self {
        if is_iced {
            Self::Iced
        } else {
            Self::Hot
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Iced => "iced",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The drink currently being edited on an order screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub shot_count: u32,
    pub is_iced: bool,
    pub drink_name: String,
    pub drink_size: String,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            shot_count: DEFAULT_SHOT_COUNT,
            is_iced: false,
            drink_name: DEFAULT_DRINK_NAME.into(),
            drink_size: DEFAULT_DRINK_SIZE.into(),
        }
    }
}

impl Order {
    /// Blank names and sizes fall back to the defaults.
    pub fn new(
        shot_count: u32,
        is_iced: bool,
        drink_name: impl Into<String>,
        drink_size: impl Into<String>,
    ) -> Self {
        Self {
            shot_count,
            is_iced,
            drink_name: text_or_default(drink_name.into(), DEFAULT_DRINK_NAME),
            drink_size: text_or_default(drink_size.into(), DEFAULT_DRINK_SIZE),
        }
    }

    pub fn temperature(&self) -> Temperature {
        Temperature::from_iced(self.is_iced)
    }
}

/// Trims `value`, returning `None` when nothing is left.
pub fn non_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn text_or_default(value: String, default: &str) -> String {
    match non_blank(&value) {
        Some(trimmed) => trimmed.to_string(),
        None => default.to_string(),
    }
}
