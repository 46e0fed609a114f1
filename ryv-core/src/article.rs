use chrono::{DateTime, Utc};

use crate::Category;

/// Read-only snapshot of a published article.
///
/// The persistence layer owns these rows; the recommender only borrows them.
/// `category` keeps the stored label text so rows written under older or
/// foreign labels still load. Use [`ArticleSummary::category`] for the parsed
/// form.
///
/// # Examples
/// ```
/// use ryv_core::{ArticleSummary, Category};
///
/// let article = ArticleSummary::new(7, "Como reduzir o estresse")
///     .with_category(Category::MentalHealth)
///     .with_view_count(40);
/// assert_eq!(article.category(), Some(Category::MentalHealth));
/// assert_eq!(article.view_count, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArticleSummary {
    /// Persistent identifier.
    pub id: u64,
    /// Headline.
    pub title: String,
    /// Short teaser shown in listings.
    pub excerpt: String,
    /// Stored category label.
    pub category: String,
    /// URL slug.
    pub slug: String,
    /// Cover image reference.
    pub image_url: String,
    /// Full body text.
    pub content: String,
    /// Publication time, when the row has one.
    pub published_at: Option<DateTime<Utc>>,
    /// Number of recorded views.
    pub view_count: u64,
}

impl ArticleSummary {
    /// Construct a summary with an identifier and title; other fields are empty.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Parse the stored label into a [`Category`], if it is a known one.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }

    /// Set the category using its canonical label.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        category.as_str().clone_into(&mut self.category);
        self
    }

    /// Set a raw category label, known or not.
    #[must_use]
    pub fn with_category_label(mut self, label: impl Into<String>) -> Self {
        self.category = label.into();
        self
    }

    /// Set the excerpt.
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Set the slug.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Set the cover image reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Set the body text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the publication time.
    #[must_use]
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Set the view count.
    #[must_use]
    pub fn with_view_count(mut self, view_count: u64) -> Self {
        self.view_count = view_count;
        self
    }
}
