use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The product category a day's sales are booked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
}

impl Category {
    /// Every category, in draw order. The generator indexes into this slice.
    pub const ALL: [Category; 3] = [Category::A, Category::B, Category::C];

    pub fn label(&self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(Category::A),
            "B" => Ok(Category::B),
            "C" => Ok(Category::C),
            other => Err(CoreError::UnknownLabel {
                kind: "category",
                label: other.to_string(),
            }),
        }
    }
}

/// The sales region a day's sales are attributed to.
///
/// The dashboard was first deployed with Japanese city labels; those are kept
/// as localized aliases so either spelling selects the same region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    East,
    West,
    Central,
}

impl Region {
    /// Every region, in draw order. The generator indexes into this slice.
    pub const ALL: [Region; 3] = [Region::East, Region::West, Region::Central];

    pub fn label(&self) -> &'static str {
        match self {
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
        }
    }

    /// The label shown by the localized (Japanese) dashboard.
    pub fn localized_label(&self) -> &'static str {
        match self {
            Region::East => "東京",
            Region::West => "大阪",
            Region::Central => "名古屋",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.label() == s || r.localized_label() == s)
            .ok_or_else(|| CoreError::UnknownLabel {
                kind: "region",
                label: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
        assert!("D".parse::<Category>().is_err());
        assert!("a".parse::<Category>().is_err());
    }

    #[test]
    fn region_accepts_english_and_localized_labels() {
        assert_eq!("East".parse::<Region>(), Ok(Region::East));
        assert_eq!("大阪".parse::<Region>(), Ok(Region::West));
        assert_eq!(" 名古屋 ".parse::<Region>(), Ok(Region::Central));
    }

    #[test]
    fn unknown_region_reports_the_label() {
        let err = "North".parse::<Region>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown region label: 'North'");
    }

    #[test]
    fn ordering_follows_declaration() {
        let mut regions = vec![Region::Central, Region::East, Region::West];
        regions.sort();
        assert_eq!(regions, Region::ALL.to_vec());
    }
}
