//! Blog category generation.

use backoffice::models::slugify;
use fake::{Fake, faker::lorem::en::{Sentence, Words}};
use rand::Rng;
use time::OffsetDateTime;
use uuid::Uuid;

/// Generated blog category ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedCategory {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Generates blog categories.
pub struct CategoryGenerator;

impl CategoryGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single category.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedCategory {
        let words: Vec<String> = Words(1..3).fake_with_rng(rng);
        let mut name = words.join(" ");
        if let Some(first) = name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }

        // Lorem words repeat; a numeric suffix keeps slugs distinct
        let slug = format!("{}-{}", slugify(&name), rng.gen_range(100..1000));

        let description = if rng.gen_bool(0.7) {
            Some(Sentence(5..12).fake_with_rng(rng))
        } else {
            None
        };

        GeneratedCategory {
            id: Uuid::new_v4(),
            name,
            slug,
            description,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Generates multiple categories.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedCategory> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for CategoryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_batch() {
        let category_gen = CategoryGenerator::new();
        let mut rng = rand::thread_rng();
        let categories = category_gen.generate_batch(20, &mut rng);

        assert_eq!(categories.len(), 20);
        for category in &categories {
            assert!(!category.name.is_empty());
            assert!(!category.slug.is_empty());
            assert!(!category.slug.contains(' '));
        }
    }
}
