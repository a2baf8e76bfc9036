use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            #[must_use]
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the underlying u64 value
            #[must_use]
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| ParseIdError {
                        raw: s.to_owned(),
                    })
            }
        }
    };
}

/// Error returned when an id cannot be parsed from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid id: {raw:?}")]
pub struct ParseIdError {
    pub raw: String,
}

numeric_id!(
    /// Identifier of a registered user.
    UserId
);
numeric_id!(
    /// Identifier of an exercise (content unit).
    ExerciseId
);
numeric_id!(
    /// Identifier of a learning-plan entry.
    PlanId
);
numeric_id!(SubmissionId);
numeric_id!(QuestionId);
numeric_id!(OptionId);
numeric_id!(MaterialId);
numeric_id!(BadgeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_from_strings() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId::new(42));
        assert_eq!(" 7 ".parse::<ExerciseId>().unwrap().value(), 7);
        assert!("abc".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }

    #[test]
    fn ids_are_transparent_on_the_wire() {
        let json = serde_json::to_string(&PlanId::new(3)).unwrap();
        assert_eq!(json, "3");
        let id: ExerciseId = serde_json::from_str("11").unwrap();
        assert_eq!(id, ExerciseId::new(11));
    }

    #[test]
    fn debug_and_display_formats() {
        assert_eq!(format!("{:?}", UserId::new(5)), "UserId(5)");
        assert_eq!(UserId::new(5).to_string(), "5");
    }
}
