use crate::error::ModelError;

/// Ordered parental-rating ladder.
///
/// Derived `Ord` follows declaration order, so "is this item within the
/// user's maximum permitted rating" is a plain `<=` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ParentalRating {
    G,
    Pg,
    Pg13,
    R,
    Nc17,
}

impl ParentalRating {
    /// Parse a rating from its display label (e.g. `"PG-13"`).
    pub fn parse(label: &str) -> Result<Self, ModelError> {
        match label {
            "G" => Ok(Self::G),
            "PG" => Ok(Self::Pg),
            "PG-13" => Ok(Self::Pg13),
            "R" => Ok(Self::R),
            "NC-17" => Ok(Self::Nc17),
            other => Err(ModelError::InvalidRating(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::G => "G",
            Self::Pg => "PG",
            Self::Pg13 => "PG-13",
            Self::R => "R",
            Self::Nc17 => "NC-17",
        }
    }
}

impl std::fmt::Display for ParentalRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
