use crate::VenueId;
use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const VENUE_NAME_MAX_LEN: usize = 100;
pub const DEFAULT_BLOCK_REASON: &str = "Owner blocked";

/// Validation result for new venues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VenueValidation {
    Valid,
    MissingName,
    NameTooLong,
    MissingLocation,
    CapacityNotPositive,
    NegativePrice,
}

impl VenueValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::MissingName => Some("Venue name is required"),
            Self::NameTooLong => {
                Some("Venue name must be at most 100 characters")
            }
            Self::MissingLocation => Some("Location is required"),
            Self::CapacityNotPositive => {
                Some("Capacity must be greater than zero")
            }
            Self::NegativePrice => Some("Price per day cannot be negative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub price_per_day: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: String,
}

impl CreateVenue {
    /// Rules:
    /// - name is 1-100 characters after trimming
    /// - location is non-empty after trimming
    /// - capacity is positive
    /// - price is zero or more
    pub fn validate(&self) -> VenueValidation {
        let name = self.name.trim();
        if name.is_empty() {
            return VenueValidation::MissingName;
        }
        if name.chars().count() > VENUE_NAME_MAX_LEN {
            return VenueValidation::NameTooLong;
        }
        if self.location.trim().is_empty() {
            return VenueValidation::MissingLocation;
        }
        if self.capacity <= 0 {
            return VenueValidation::CapacityNotPositive;
        }
        if self.price_per_day < Decimal::ZERO {
            return VenueValidation::NegativePrice;
        }
        VenueValidation::Valid
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBooking {
    pub venue_id: VenueId,
    pub booking_date: Date,
    pub user_name: String,
    pub user_email: String,
}

/// Validation result for booking requests as checked by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingValidation {
    Valid,
    MissingName,
    InvalidEmail,
}

impl BookingValidation {
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::MissingName => Some("Name is required"),
            Self::InvalidEmail => Some("A valid email address is required"),
        }
    }
}

impl CreateBooking {
    pub fn validate(&self) -> BookingValidation {
        if self.user_name.trim().is_empty() {
            return BookingValidation::MissingName;
        }
        if !is_plausible_email(&self.user_email) {
            return BookingValidation::InvalidEmail;
        }
        BookingValidation::Valid
    }
}

/// Accepts `local@domain.tld`: exactly one `@`, a non-empty local part, and
/// a domain with a dot that has text on both sides of it.
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && !tld.is_empty() && !domain.starts_with('.')
        }
        None => false,
    }
}

fn default_block_reason() -> String {
    DEFAULT_BLOCK_REASON.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDate {
    pub venue_id: VenueId,
    pub blocked_date: Date,
    #[serde(default = "default_block_reason")]
    pub reason: String,
}

impl BlockDate {
    /// Build a block request, falling back to the default reason when the
    /// admin left it blank.
    pub fn new(venue_id: VenueId, blocked_date: Date, reason: &str) -> Self {
        let reason = reason.trim();
        Self {
            venue_id,
            blocked_date,
            reason: if reason.is_empty() {
                default_block_reason()
            } else {
                reason.to_string()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use rust_decimal::dec;

    fn venue() -> CreateVenue {
        CreateVenue {
            name: "Grand Hall".into(),
            location: "Downtown".into(),
            capacity: 120,
            price_per_day: dec!(450.00),
            description: String::new(),
            amenities: String::new(),
        }
    }

    #[test]
    fn venue_validation() {
        assert!(venue().validate().is_valid());

        let free = CreateVenue {
            price_per_day: dec!(0),
            ..venue()
        };
        assert!(free.validate().is_valid());

        let cases = [
            (
                CreateVenue {
                    name: "  ".into(),
                    ..venue()
                },
                VenueValidation::MissingName,
            ),
            (
                CreateVenue {
                    name: "X".repeat(101),
                    ..venue()
                },
                VenueValidation::NameTooLong,
            ),
            (
                CreateVenue {
                    location: "".into(),
                    ..venue()
                },
                VenueValidation::MissingLocation,
            ),
            (
                CreateVenue {
                    capacity: 0,
                    ..venue()
                },
                VenueValidation::CapacityNotPositive,
            ),
            (
                CreateVenue {
                    price_per_day: dec!(-1),
                    ..venue()
                },
                VenueValidation::NegativePrice,
            ),
        ];
        for (body, expected) in cases {
            assert_eq!(body.validate(), expected);
            assert!(expected.error_message().is_some());
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_plausible_email("alice@example.com"));
        assert!(is_plausible_email("a.b@mail.example.org"));
        assert!(!is_plausible_email("alice"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("alice@example"));
        assert!(!is_plausible_email("alice@example."));
        // A trailing dot leaves an empty top-level label.
        assert!(!is_plausible_email("a@b.c."));
        assert!(!is_plausible_email("alice@.com"));
        assert!(!is_plausible_email("a@b@c.com"));
    }

    #[test]
    fn block_date_reason_defaults() {
        let request = BlockDate::new(VenueId(1), date(2024, 6, 1), "   ");
        assert_eq!(request.reason, DEFAULT_BLOCK_REASON);

        let request = BlockDate::new(VenueId(1), date(2024, 6, 1), "Repairs");
        assert_eq!(request.reason, "Repairs");

        let parsed: BlockDate = serde_json::from_str(
            r#"{"venue_id": 3, "blocked_date": "2024-06-01"}"#,
        )
        .unwrap();
        assert_eq!(parsed.reason, DEFAULT_BLOCK_REASON);
        assert_eq!(parsed.venue_id, VenueId(3));
    }
}
