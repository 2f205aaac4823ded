//! Client-side filtering over an already-fetched venue list.

use serde::{Deserialize, Serialize};

use crate::responses::Venue;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CapacityBucket {
    /// Up to 50 people.
    Small,
    /// 51 to 200 people.
    Medium,
    /// More than 200 people.
    Large,
}

impl CapacityBucket {
    pub const ALL: [CapacityBucket; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn for_capacity(capacity: i32) -> Self {
        match capacity {
            ..=50 => Self::Small,
            51..=200 => Self::Medium,
            _ => Self::Large,
        }
    }

    pub fn contains(&self, capacity: i32) -> bool {
        Self::for_capacity(capacity) == *self
    }

    /// Value used in form controls and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small (up to 50)",
            Self::Medium => "Medium (51-200)",
            Self::Large => "Large (200+)",
        }
    }

    /// Parse a form value; empty or unknown values mean "any capacity".
    pub fn from_form_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VenueFilter {
    pub search: String,
    pub capacity: Option<CapacityBucket>,
}

impl VenueFilter {
    /// A venue is shown only when both the name search and the capacity
    /// bucket match. Unset filters match everything.
    pub fn matches(&self, venue: &Venue) -> bool {
        self.matches_name(&venue.name) && self.matches_capacity(venue.capacity)
    }

    fn matches_name(&self, name: &str) -> bool {
        self.search.is_empty()
            || name.to_lowercase().contains(&self.search.to_lowercase())
    }

    fn matches_capacity(&self, capacity: i32) -> bool {
        self.capacity.is_none_or(|bucket| bucket.contains(capacity))
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.capacity.is_none()
    }

    pub fn apply<'a>(&self, venues: &'a [Venue]) -> Vec<&'a Venue> {
        venues.iter().filter(|venue| self.matches(venue)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VenueId;
    use rust_decimal::dec;

    fn venue(id: i64, name: &str, capacity: i32) -> Venue {
        Venue {
            id: VenueId(id),
            name: name.into(),
            location: "Somewhere".into(),
            capacity,
            price_per_day: dec!(100),
            description: String::new(),
            amenities: String::new(),
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert!(CapacityBucket::Small.contains(1));
        assert!(CapacityBucket::Small.contains(50));
        assert!(!CapacityBucket::Small.contains(51));

        assert!(!CapacityBucket::Medium.contains(50));
        assert!(CapacityBucket::Medium.contains(51));
        assert!(CapacityBucket::Medium.contains(100));
        assert!(CapacityBucket::Medium.contains(200));
        assert!(!CapacityBucket::Medium.contains(201));

        assert!(!CapacityBucket::Large.contains(200));
        assert!(CapacityBucket::Large.contains(201));
    }

    #[test]
    fn medium_filter_example() {
        let venues = [
            venue(1, "Cozy Loft", 50),
            venue(2, "Conference Room", 100),
            venue(3, "Arena", 201),
        ];
        let filter = VenueFilter {
            search: String::new(),
            capacity: Some(CapacityBucket::Medium),
        };
        let shown: Vec<_> =
            filter.apply(&venues).iter().map(|v| v.id).collect();
        assert_eq!(shown, vec![VenueId(2)]);
    }

    #[test]
    fn name_search_is_case_insensitive_substring() {
        let hall = venue(1, "Grand Hall", 300);
        let search = |s: &str| VenueFilter {
            search: s.into(),
            capacity: None,
        };
        assert!(search("hall").matches(&hall));
        assert!(search("GRAND").matches(&hall));
        assert!(search("d h").matches(&hall));
        assert!(!search("loft").matches(&hall));
    }

    #[test]
    fn both_predicates_must_pass() {
        let hall = venue(1, "Grand Hall", 300);
        let filter = VenueFilter {
            search: "hall".into(),
            capacity: Some(CapacityBucket::Small),
        };
        assert!(!filter.matches(&hall));

        let filter = VenueFilter {
            search: "hall".into(),
            capacity: Some(CapacityBucket::Large),
        };
        assert!(filter.matches(&hall));
    }

    #[test]
    fn empty_filter_shows_everything() {
        let filter = VenueFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&venue(1, "Anything", 1)));
        assert!(filter.matches(&venue(2, "", 10_000)));
    }

    #[test]
    fn form_values() {
        assert_eq!(
            CapacityBucket::from_form_value("medium"),
            Some(CapacityBucket::Medium)
        );
        assert_eq!(CapacityBucket::from_form_value(""), None);
        assert_eq!(CapacityBucket::from_form_value("huge"), None);
    }
}
