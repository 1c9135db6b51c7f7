use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which query feeds the profile screen's list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// The user's own listings (canonical mode after a refresh)
    #[default]
    Posts,
    /// Listings the user has liked
    Likes,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Posts => "posts",
            ViewMode::Likes => "likes",
        }
    }

    /// Tab label shown on the segmented control.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Posts => "Your Posts",
            ViewMode::Likes => "Your Likes",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posts" => Ok(ViewMode::Posts),
            "likes" => Ok(ViewMode::Likes),
            other => Err(format!("unknown view mode '{}'", other)),
        }
    }
}
