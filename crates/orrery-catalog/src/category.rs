//! Leaderboard categories
//!
//! Each category resolves to a [`RankSpec`]: where the sort key comes from,
//! which way to sort, and whether Earth is left out.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::coerce::to_number;
use crate::normalize;
use crate::record::{PlanetRecord, fields, present};

/// A leaderboard category requested by tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    MostHabitable,
    /// Tagged `most_hot` or `most_temperature`
    Hottest,
    Coldest,
    MostMass,
    LargestRadius,
    MostDense,
    HighestGravity,
    LowestGravity,
    LongestOrbitalPeriod,
    ShortestOrbitalPeriod,
    /// Any tag not listed above; no filtering and catalog order
    Unranked,
}

/// Sort direction for a ranked category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Compare two keys in this direction
    ///
    /// Keys are finite, so `-0.0` and `0.0` compare equal and keep their
    /// catalog order under a stable sort.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Where a category reads its sort key from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Normalized habitability percentage
    HabitabilityPercent,
    /// Normalized average temperature (Celsius, with Kelvin fallback)
    AvgTempC,
    /// First present field in the list, coerced to a number
    Fields(&'static [&'static str]),
}

impl KeySource {
    /// Extract the numeric key, or `None` if the record has no usable value
    pub fn extract(self, record: &PlanetRecord) -> Option<f64> {
        match self {
            KeySource::HabitabilityPercent => normalize::habitability_percent(record),
            KeySource::AvgTempC => normalize::avg_temp_c(record),
            KeySource::Fields(names) => {
                let value = names.iter().find_map(|name| present(record, name))?;
                to_number(Some(value))
            }
        }
    }
}

/// How a category is ranked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankSpec {
    pub key: KeySource,
    pub direction: Direction,
    pub exclude_earth: bool,
}

impl RankSpec {
    const fn new(key: KeySource, direction: Direction) -> Self {
        Self {
            key,
            direction,
            exclude_earth: false,
        }
    }
}

const MASS_FIELDS: &[&str] = &[fields::MASS, fields::PL_BMASSE, fields::BMASSE];
const RADIUS_FIELDS: &[&str] = &[fields::RADIUS, fields::PL_RADE];
const DENSITY_FIELDS: &[&str] = &[fields::DENSITY_REL, fields::DENSITY];
const GRAVITY_FIELDS: &[&str] = &[fields::SURFACE_GRAVITY];
const ORBIT_FIELDS: &[&str] = &[fields::ORBITAL_PERIOD_DAYS];

impl Category {
    /// Every category, in leaderboard display order
    pub const ALL: [Category; 11] = [
        Category::MostHabitable,
        Category::Hottest,
        Category::Coldest,
        Category::MostMass,
        Category::LargestRadius,
        Category::MostDense,
        Category::HighestGravity,
        Category::LowestGravity,
        Category::LongestOrbitalPeriod,
        Category::ShortestOrbitalPeriod,
        Category::Unranked,
    ];

    /// Resolve a request tag; unknown tags become [`Category::Unranked`]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "most_habitable" => Category::MostHabitable,
            "most_hot" | "most_temperature" => Category::Hottest,
            "coldest" => Category::Coldest,
            "most_mass" => Category::MostMass,
            "largest_radius" => Category::LargestRadius,
            "most_dense" => Category::MostDense,
            "highest_gravity" => Category::HighestGravity,
            "lowest_gravity" => Category::LowestGravity,
            "longest_orbital_period" => Category::LongestOrbitalPeriod,
            "shortest_orbital_period" => Category::ShortestOrbitalPeriod,
            _ => Category::Unranked,
        }
    }

    /// Canonical tag for this category
    pub fn tag(self) -> &'static str {
        match self {
            Category::MostHabitable => "most_habitable",
            Category::Hottest => "most_hot",
            Category::Coldest => "coldest",
            Category::MostMass => "most_mass",
            Category::LargestRadius => "largest_radius",
            Category::MostDense => "most_dense",
            Category::HighestGravity => "highest_gravity",
            Category::LowestGravity => "lowest_gravity",
            Category::LongestOrbitalPeriod => "longest_orbital_period",
            Category::ShortestOrbitalPeriod => "shortest_orbital_period",
            Category::Unranked => "unranked",
        }
    }

    /// Ranking table entry, or `None` for [`Category::Unranked`]
    pub fn rank_spec(self) -> Option<RankSpec> {
        use Direction::*;

        let spec = match self {
            Category::MostHabitable => RankSpec {
                exclude_earth: true,
                ..RankSpec::new(KeySource::HabitabilityPercent, Descending)
            },
            Category::Hottest => RankSpec::new(KeySource::AvgTempC, Descending),
            Category::Coldest => RankSpec::new(KeySource::AvgTempC, Ascending),
            Category::MostMass => RankSpec::new(KeySource::Fields(MASS_FIELDS), Descending),
            Category::LargestRadius => RankSpec::new(KeySource::Fields(RADIUS_FIELDS), Descending),
            Category::MostDense => RankSpec::new(KeySource::Fields(DENSITY_FIELDS), Descending),
            Category::HighestGravity => {
                RankSpec::new(KeySource::Fields(GRAVITY_FIELDS), Descending)
            }
            Category::LowestGravity => RankSpec::new(KeySource::Fields(GRAVITY_FIELDS), Ascending),
            Category::LongestOrbitalPeriod => {
                RankSpec::new(KeySource::Fields(ORBIT_FIELDS), Descending)
            }
            Category::ShortestOrbitalPeriod => {
                RankSpec::new(KeySource::Fields(ORBIT_FIELDS), Ascending)
            }
            Category::Unranked => return None,
        };
        Some(spec)
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from_tag(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
