//! Editorial categories shared by the classifier and the recommender.
//!
//! The set is closed: classification never produces anything outside
//! [`Category::ALL`], and the recommender's affinity table is keyed on the
//! same variants. Stored article rows may still carry labels that do not
//! parse; callers treat those as unknown rather than failing.
//!
//! # Examples
//! ```
//! use ryv_core::Category;
//!
//! assert_eq!(Category::MentalHealth.as_str(), "Mental Health");
//! assert_eq!("Dicas de Saúde".parse::<Category>(), Ok(Category::HealthTips));
//! ```

use thiserror::Error;

/// A blog category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    /// Anxiety, stress, therapy and emotional wellbeing.
    MentalHealth,
    /// Eyewear, lenses and frames.
    Optics,
    /// Eye examinations and vision conditions.
    Optometry,
    /// General health advice; the catch-all category.
    #[default]
    HealthTips,
}

/// Raised when a label matches none of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{label}'")]
pub struct UnknownCategory {
    /// The label that failed to parse.
    pub label: String,
}

impl Category {
    /// Every category in the fixed order used for tie-sensitive comparisons.
    pub const ALL: [Self; 4] = [
        Self::MentalHealth,
        Self::Optics,
        Self::Optometry,
        Self::HealthTips,
    ];

    /// Category assigned when nothing better is known.
    pub const DEFAULT: Self = Self::HealthTips;

    /// Return the canonical label.
    ///
    /// # Examples
    /// ```
    /// use ryv_core::Category;
    ///
    /// assert_eq!(Category::Optometry.as_str(), "Optometry");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MentalHealth => "Mental Health",
            Self::Optics => "Optics",
            Self::Optometry => "Optometry",
            Self::HealthTips => "Health Tips",
        }
    }

    /// Return the Portuguese label used by the blog's stored rows.
    #[must_use]
    pub const fn localized(self) -> &'static str {
        match self {
            Self::MentalHealth => "Saúde Mental",
            Self::Optics => "Ótica",
            Self::Optometry => "Optometria",
            Self::HealthTips => "Dicas de Saúde",
        }
    }

    /// Parse a stored label, returning `None` for anything unknown.
    ///
    /// # Examples
    /// ```
    /// use ryv_core::Category;
    ///
    /// assert_eq!(Category::from_label("optics"), Some(Category::Optics));
    /// assert_eq!(Category::from_label("Notícias Relacionadas"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|category| {
            category.as_str().to_lowercase() == wanted
                || category.localized().to_lowercase() == wanted
        })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownCategory {
            label: s.to_owned(),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Category::Optics.to_string(), Category::Optics.as_str());
    }

    #[rstest]
    #[case("Mental Health", Category::MentalHealth)]
    #[case("saúde mental", Category::MentalHealth)]
    #[case("Ótica", Category::Optics)]
    #[case("OPTOMETRIA", Category::Optometry)]
    #[case("  Health Tips ", Category::HealthTips)]
    #[case("Dicas de Saúde", Category::HealthTips)]
    fn parses_known_labels(#[case] label: &str, #[case] expected: Category) {
        assert_eq!(Category::from_str(label), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Category::from_str("Notícias Relacionadas").unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }

    #[rstest]
    fn default_is_health_tips() {
        assert_eq!(Category::default(), Category::DEFAULT);
        assert_eq!(Category::DEFAULT, Category::HealthTips);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serde_uses_canonical_labels() {
        let json = serde_json::to_string(&Category::MentalHealth).unwrap();
        assert_eq!(json, "\"Mental Health\"");
        let parsed: Category = serde_json::from_str("\"Ótica\"").unwrap();
        assert_eq!(parsed, Category::Optics);
    }
}
