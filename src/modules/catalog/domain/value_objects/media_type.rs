use serde::{Deserialize, Serialize};
use std::fmt;

/// Media type derived from the episode count of a catalog item.
/// It is never stored upstream; one playable URL means a film, anything else a series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MediaType {
    #[serde(rename = "movie")]
    Movie,
    #[serde(rename = "tv")]
    Tv,
}

impl MediaType {
    pub fn from_episode_count(count: usize) -> Self {
        if count == 1 {
            MediaType::Movie
        } else {
            MediaType::Tv
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_episode_count() {
        assert_eq!(MediaType::from_episode_count(1), MediaType::Movie);
        assert_eq!(MediaType::from_episode_count(0), MediaType::Tv);
        assert_eq!(MediaType::from_episode_count(24), MediaType::Tv);
    }

    #[test]
    fn test_display() {
        assert_eq!(MediaType::Movie.to_string(), "movie");
        assert_eq!(MediaType::Tv.to_string(), "tv");
    }
}
