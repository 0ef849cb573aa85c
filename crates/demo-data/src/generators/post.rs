//! Blog post generation with translated titles.

use backoffice::models::{TranslatedText, slugify};
use fake::{
    Fake,
    faker::lorem::en::{Paragraph, Words},
};
use rand::Rng;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Fixed prefix of every generated English title.
pub const ENGLISH_TITLE_PREFIX: &str = "ENGLISCH ";

/// Placeholder used for the Spanish title variant of every generated post.
pub const SPANISH_TITLE_PLACEHOLDER: &str = "Spanish";

/// Generated blog post ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub id: Uuid,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub title: TranslatedText,
    pub slug: String,
    pub content: String,
    pub published_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

/// Configuration for post generation.
#[derive(Debug, Clone)]
pub struct PostGenConfig {
    /// Number of random words in the English title.
    pub title_word_count: usize,
    /// Probability that a post is published.
    pub published_rate: f64,
}

impl Default for PostGenConfig {
    fn default() -> Self {
        Self {
            title_word_count: 30,
            published_rate: 0.8,
        }
    }
}

/// Generates blog posts.
pub struct PostGenerator {
    config: PostGenConfig,
}

impl PostGenerator {
    /// Creates a new post generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: PostGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: PostGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single post for `author_id`.
    ///
    /// The category is picked uniformly at random from `category_ids`, the
    /// explicit collection of already-created category ids.
    ///
    /// # Panics
    ///
    /// Panics if `category_ids` is empty; callers guard against that.
    pub fn generate(
        &self,
        author_id: Uuid,
        category_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> GeneratedPost {
        let category_id = category_ids[rng.gen_range(0..category_ids.len())];

        let word_count = self.config.title_word_count;
        let words: Vec<String> = Words(word_count..word_count + 1).fake_with_rng(rng);
        let english_title = format!("{ENGLISH_TITLE_PREFIX}{}", words.join(" "));

        // The Spanish variant stays a literal placeholder on purpose
        let title = TranslatedText::new(english_title, SPANISH_TITLE_PLACEHOLDER);

        // Long lorem titles make unwieldy slugs; the first few words suffice
        let slug_base: String = words
            .iter()
            .take(6)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        let slug = format!("{}-{}", slugify(&slug_base), rng.gen_range(100..1000));

        let published_at = if rng.gen_bool(self.config.published_rate) {
            Some(OffsetDateTime::now_utc() - Duration::days(rng.gen_range(0..365)))
        } else {
            None
        };

        GeneratedPost {
            id: Uuid::new_v4(),
            author_id,
            category_id,
            title,
            slug,
            content: Paragraph(3..6).fake_with_rng(rng),
            published_at,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Generates multiple posts for one author.
    pub fn generate_batch(
        &self,
        author_id: Uuid,
        category_ids: &[Uuid],
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedPost> {
        (0..count)
            .map(|_| self.generate(author_id, category_ids, rng))
            .collect()
    }
}

impl Default for PostGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice::models::Locale;

    #[test]
    fn test_title_variants() {
        let post_gen = PostGenerator::new();
        let mut rng = rand::thread_rng();
        let categories = vec![Uuid::new_v4()];

        let post = post_gen.generate(Uuid::new_v4(), &categories, &mut rng);

        let english = post.title.variant(Locale::En);
        assert!(english.starts_with(ENGLISH_TITLE_PREFIX));
        assert_eq!(
            english.trim_start_matches(ENGLISH_TITLE_PREFIX).split(' ').count(),
            30
        );
        assert_eq!(post.title.variant(Locale::Es), SPANISH_TITLE_PLACEHOLDER);
    }

    #[test]
    fn test_category_picked_from_provided_ids() {
        let post_gen = PostGenerator::new();
        let mut rng = rand::thread_rng();
        let categories: Vec<Uuid> = (0..20).map(|_| Uuid::new_v4()).collect();
        let author_id = Uuid::new_v4();

        let posts = post_gen.generate_batch(author_id, &categories, 25, &mut rng);

        assert_eq!(posts.len(), 25);
        for post in &posts {
            assert!(categories.contains(&post.category_id));
            assert_eq!(post.author_id, author_id);
        }
    }
}
