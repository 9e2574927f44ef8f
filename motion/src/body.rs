use std::fmt;
use std::str::FromStr;

use crate::LineErrors;

/// A celestial body whose motion can be plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Moon,
    Earth,
}

/// Labels accepted in motion files. Anything else aborts the run.
pub const RECOGNIZED_BODIES: [Body; 2] = [Body::Moon, Body::Earth];

impl Body {
    pub fn as_str(&self) -> &'static str {
        match self {
            Body::Moon => "moon",
            Body::Earth => "earth",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Body {
    type Err = LineErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RECOGNIZED_BODIES
            .iter()
            .find(|body| body.as_str() == s)
            .copied()
            .ok_or_else(|| LineErrors::UnknownBody(s.to_string()))
    }
}
