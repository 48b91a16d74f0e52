use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error for term label strings that do not parse into (season, 4-digit year).
///
/// Fatal for the request that carried the label; never produced for labels
/// constructed through [`TermLabel::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid term format '{0}': expected '<Fall|Spring>-<4-digit year>'")]
pub struct InvalidTermFormat(pub String);

/// Academic enrollment season. Two-term years only; summer sessions are not
/// modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Fall,
    Spring,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Fall => "Fall",
            Season::Spring => "Spring",
        }
    }

    /// Rank within a calendar year: Spring precedes Fall chronologically.
    fn calendar_rank(&self) -> u8 {
        match self {
            Season::Spring => 0,
            Season::Fall => 1,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One academic term, identified by season and a 4-digit calendar year.
///
/// The label format is `<season>-<year>`, e.g. `Fall-2025`. Ordering is
/// chronological: `Fall-2025 < Spring-2026 < Fall-2026`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermLabel {
    season: Season,
    year: u16,
}

impl TermLabel {
    pub fn new(season: Season, year: u16) -> Self {
        Self { season, year }
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// The term that directly follows this one.
    ///
    /// Fall of year Y is followed by Spring of Y+1; Spring of year Y is
    /// followed by Fall of the same calendar year.
    pub fn next(&self) -> Self {
        match self.season {
            Season::Fall => Self::new(Season::Spring, self.year + 1),
            Season::Spring => Self::new(Season::Fall, self.year),
        }
    }
}

impl PartialOrd for TermLabel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TermLabel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.season.calendar_rank()).cmp(&(other.year, other.season.calendar_rank()))
    }
}

impl fmt::Display for TermLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.season, self.year)
    }
}

impl FromStr for TermLabel {
    type Err = InvalidTermFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (season_str, year_str) = s
            .split_once('-')
            .ok_or_else(|| InvalidTermFormat(s.to_string()))?;

        let season = match season_str {
            "Fall" => Season::Fall,
            "Spring" => Season::Spring,
            _ => return Err(InvalidTermFormat(s.to_string())),
        };

        // Exactly four digits; "25" or "02025" are not valid years.
        if year_str.len() != 4 || !year_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidTermFormat(s.to_string()));
        }
        let year: u16 = year_str
            .parse()
            .map_err(|_| InvalidTermFormat(s.to_string()))?;

        Ok(Self::new(season, year))
    }
}

impl Serialize for TermLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TermLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
