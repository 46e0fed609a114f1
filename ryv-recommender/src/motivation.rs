//! Motivational captions shown with the daily pick.

use rand::Rng;
use rand::seq::SliceRandom;
use ryv_core::Category;

/// Caption used when the article's category label is not recognised.
pub const DEFAULT_MOTIVATION: &str = "🌟 Descubra insights valiosos para sua vida";

const CAPTIONS: [(Category, &[&str]); 4] = [
    (
        Category::MentalHealth,
        &[
            "💡 Desbloqueie insights poderosos sobre sua mente",
            "🧠 Conecte-se com seu bem-estar emocional",
            "🌟 Transforme sua perspectiva sobre saúde mental",
            "❤️ Cuide da sua mente como cuida do seu corpo",
        ],
    ),
    (
        Category::Optics,
        &[
            "👁️ Descubra como cuidar da sua visão",
            "🔍 Veja o mundo com novos olhos",
            "✨ Tecnologia que transforma sua experiência visual",
            "🌍 Enxergue a vida com mais clareza",
        ],
    ),
    (
        Category::Optometry,
        &[
            "🔬 Ciência avançada para sua saúde ocular",
            "📊 Dados que revelam a verdade sobre sua visão",
            "🎯 Soluções precisas para problemas visuais",
            "⚡ Conhecimento que ilumina seu caminho",
        ],
    ),
    (
        Category::HealthTips,
        &[
            "💪 Pequenas mudanças, grandes resultados",
            "🌱 Cultive hábitos que transformam sua vida",
            "⚡ Energia e vitalidade ao seu alcance",
            "🚀 Acelere seu potencial de bem-estar",
        ],
    ),
];

/// Captions available for `category`.
#[must_use]
pub fn captions(category: Category) -> &'static [&'static str] {
    CAPTIONS
        .iter()
        .find(|(candidate, _)| *candidate == category)
        .map(|(_, list)| *list)
        .unwrap_or_default()
}

/// Pick a caption for `category`, drawing from `rng` only when the category
/// is known.
#[must_use]
pub fn pick_motivation<R: Rng + ?Sized>(category: Option<Category>, rng: &mut R) -> &'static str {
    category
        .and_then(|known| captions(known).choose(rng))
        .copied()
        .unwrap_or(DEFAULT_MOTIVATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily_rng;
    use chrono::NaiveDate;
    use rand::RngCore;
    use rstest::rstest;

    fn rng() -> rand_chacha::ChaCha8Rng {
        daily_rng(NaiveDate::from_ymd_opt(2025, 2, 2).unwrap())
    }

    #[rstest]
    fn every_category_has_captions() {
        for category in Category::ALL {
            assert_eq!(captions(category).len(), 4, "{category}");
        }
    }

    #[rstest]
    #[case(Category::MentalHealth)]
    #[case(Category::Optics)]
    #[case(Category::Optometry)]
    #[case(Category::HealthTips)]
    fn known_categories_pick_from_their_list(#[case] category: Category) {
        let caption = pick_motivation(Some(category), &mut rng());
        assert!(captions(category).contains(&caption));
    }

    #[rstest]
    fn unknown_category_uses_default_without_drawing() {
        let mut used = rng();
        let caption = pick_motivation(None, &mut used);
        assert_eq!(caption, DEFAULT_MOTIVATION);
        assert_eq!(used.next_u64(), rng().next_u64());
    }
}
