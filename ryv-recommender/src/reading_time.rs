//! Coarse reading-time labels.

use std::fmt;

const CHARS_PER_WORD: usize = 5;
const WORDS_PER_MINUTE: usize = 200;

/// Reading-time bucket shown next to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingTime {
    /// At most one minute.
    OneMinute,
    /// Two to four minutes.
    TwoToThree,
    /// Five to nine minutes.
    FiveToSeven,
    /// Ten minutes or more.
    TenPlus,
}

impl ReadingTime {
    /// Estimate the bucket for `content`.
    ///
    /// Words are approximated as one per five characters, read at two
    /// hundred per minute.
    ///
    /// # Examples
    /// ```
    /// use ryv_recommender::ReadingTime;
    ///
    /// assert_eq!(ReadingTime::estimate(&"a".repeat(1000)), ReadingTime::OneMinute);
    /// assert_eq!(ReadingTime::estimate(&"a".repeat(6000)).label(), "5-7 min");
    /// ```
    #[expect(
        clippy::integer_division,
        reason = "word and minute counts are deliberately truncated"
    )]
    #[must_use]
    pub fn estimate(content: &str) -> Self {
        let words = content.chars().count() / CHARS_PER_WORD;
        Self::from_minutes(words / WORDS_PER_MINUTE)
    }

    /// Bucket for a whole number of minutes.
    ///
    /// A single whole minute still reads as "1 min", so bodies of up to 1999
    /// characters land in [`ReadingTime::OneMinute`] rather than "2-3 min".
    #[must_use]
    pub const fn from_minutes(minutes: usize) -> Self {
        match minutes {
            0 | 1 => Self::OneMinute,
            2..=4 => Self::TwoToThree,
            5..=9 => Self::FiveToSeven,
            _ => Self::TenPlus,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneMinute => "1 min",
            Self::TwoToThree => "2-3 min",
            Self::FiveToSeven => "5-7 min",
            Self::TenPlus => "10+ min",
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl serde::Serialize for ReadingTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
