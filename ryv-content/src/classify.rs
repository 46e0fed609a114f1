//! Keyword voting over the fixed category set.
//!
//! Each category scores one point per keyword contained anywhere in the
//! lowercased `title + " " + body`. Matching is plain substring containment,
//! so "olhos" also matches "piolhos". The table is an ordered list, which
//! keeps tie handling independent of any map iteration order.

use ryv_core::Category;

/// Ordered `(category, keywords)` pairs used for classification.
///
/// # Examples
/// ```
/// use ryv_content::KeywordTable;
/// use ryv_core::Category;
///
/// let table = KeywordTable::default();
/// assert_eq!(
///     table.classify("Tratamento para ansiedade e estresse", "..."),
///     Category::MentalHealth
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<(Category, Vec<String>)>,
}

impl KeywordTable {
    /// Create a table with no keywords; everything classifies as the default.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Replace the keyword list for `category`, appending it if absent.
    ///
    /// Keywords are lowercased so they line up with the lowercased text.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, category: Category, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = keywords
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        match self.entries.iter_mut().find(|(existing, _)| *existing == category) {
            Some((_, slot)) => *slot = words,
            None => self.entries.push((category, words)),
        }
        self
    }

    /// Keywords configured for `category`.
    #[must_use]
    pub fn keywords(&self, category: Category) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == category)
            .map(|(_, words)| words.as_slice())
    }

    /// Count matching keywords per category, in table order.
    #[must_use]
    pub fn tally(&self, title: &str, body: &str) -> Vec<(Category, usize)> {
        let text = format!("{title} {body}").to_lowercase();
        self.entries
            .iter()
            .map(|(category, words)| {
                let hits = words
                    .iter()
                    .filter(|word| text.contains(word.as_str()))
                    .count();
                (*category, hits)
            })
            .collect()
    }

    /// Pick the category with the strictly highest count.
    ///
    /// Any tie for the top count, including nothing matching at all, yields
    /// [`Category::DEFAULT`].
    #[must_use]
    pub fn classify(&self, title: &str, body: &str) -> Category {
        let tally = self.tally(title, body);
        let best = tally.iter().map(|(_, hits)| *hits).max().unwrap_or(0);
        let mut leaders = tally.iter().filter(|(_, hits)| *hits == best);
        match (leaders.next(), leaders.next()) {
            (Some((category, hits)), None) if *hits > 0 => *category,
            _ => Category::DEFAULT,
        }
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::empty()
            .with_keywords(
                Category::MentalHealth,
                [
                    "ansiedade",
                    "depressão",
                    "estresse",
                    "bem-estar",
                    "psicologia",
                    "terapia",
                    "meditação",
                    "mindfulness",
                    "saúde mental",
                    "emocional",
                ],
            )
            .with_keywords(
                Category::Optics,
                [
                    "óculos",
                    "lentes",
                    "visão",
                    "olhos",
                    "óptica",
                    "armação",
                    "proteção uv",
                    "óculos de sol",
                    "lentes progressivas",
                ],
            )
            .with_keywords(
                Category::Optometry,
                [
                    "optometria",
                    "exame ocular",
                    "oftalmologia",
                    "presbiopia",
                    "miopia",
                    "astigmatismo",
                    "catarata",
                    "glaucoma",
                ],
            )
            .with_keywords(
                Category::HealthTips,
                [
                    "saúde",
                    "bem-estar",
                    "qualidade de vida",
                    "hábitos saudáveis",
                    "prevenção",
                    "cuidados",
                    "dicas",
                    "conselhos",
                ],
            )
    }
}
