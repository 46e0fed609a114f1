//! Tunable weights and lexicons for daily selection.
#![forbid(unsafe_code)]

use ryv_core::Category;

/// Every constant the selection score is built from.
///
/// The `Default` carries the blog's production figures. Tables are ordered
/// lists rather than maps so lookups and comparisons never depend on hash
/// iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionWeights {
    /// Affinity multiplier per category; absent categories contribute zero.
    pub affinity: Vec<(Category, f64)>,
    /// Words that make a title intriguing.
    pub curiosity_words: Vec<String>,
    /// Bonus per curiosity word contained in the title.
    pub curiosity_bonus: f64,
    /// Words that carry emotional pull.
    pub emotional_words: Vec<String>,
    /// Bonus per emotional word contained in the title or excerpt.
    pub emotional_bonus: f64,
    /// Age in days below which an article counts as from this week.
    pub week_days: f64,
    /// Bonus for articles from this week.
    pub week_bonus: f64,
    /// Age in days below which an article counts as from this month.
    pub month_days: f64,
    /// Bonus for articles from this month but not this week.
    pub month_bonus: f64,
    /// Bonus per recorded view.
    pub view_bonus: f64,
    /// Upper bound (exclusive) of the seeded jitter.
    pub jitter_span: f64,
}

impl SelectionWeights {
    /// Affinity for a parsed category; unknown labels get `0.0`.
    #[must_use]
    pub fn affinity(&self, category: Option<Category>) -> f64 {
        category
            .and_then(|wanted| {
                self.affinity
                    .iter()
                    .find(|(candidate, _)| *candidate == wanted)
                    .map(|(_, weight)| *weight)
            })
            .unwrap_or(0.0_f64)
    }
}

impl Default for SelectionWeights {
    fn default() -> Self {
        Self {
            affinity: vec![
                (Category::MentalHealth, 1.5_f64),
                (Category::Optics, 1.2_f64),
                (Category::Optometry, 1.3_f64),
                (Category::HealthTips, 1.4_f64),
            ],
            curiosity_words: words(&["como", "por que", "quando", "descubra", "revele", "secreto"]),
            curiosity_bonus: 0.3_f64,
            emotional_words: words(&[
                "transformar",
                "conectar",
                "bem-estar",
                "saúde",
                "vida",
                "felicidade",
            ]),
            emotional_bonus: 0.2_f64,
            week_days: 7.0_f64,
            week_bonus: 0.5_f64,
            month_days: 30.0_f64,
            month_bonus: 0.3_f64,
            view_bonus: 0.01_f64,
            jitter_span: 0.5_f64,
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|word| (*word).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(Category::MentalHealth), 1.5_f64)]
    #[case(Some(Category::Optics), 1.2_f64)]
    #[case(Some(Category::Optometry), 1.3_f64)]
    #[case(Some(Category::HealthTips), 1.4_f64)]
    #[case(None, 0.0_f64)]
    fn default_affinities(#[case] category: Option<Category>, #[case] expected: f64) {
        assert_eq!(SelectionWeights::default().affinity(category), expected);
    }

    #[rstest]
    fn missing_table_entries_score_zero() {
        let weights = SelectionWeights {
            affinity: vec![(Category::Optics, 2.0_f64)],
            ..SelectionWeights::default()
        };
        assert_eq!(weights.affinity(Some(Category::MentalHealth)), 0.0_f64);
        assert_eq!(weights.affinity(Some(Category::Optics)), 2.0_f64);
    }
}
