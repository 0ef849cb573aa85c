//! Blog author generation with nested posts.

use fake::{Fake, faker::lorem::en::Sentence, faker::name::en::Name};
use rand::Rng;
use time::OffsetDateTime;
use uuid::Uuid;

use super::customer::generate_email;
use super::post::{GeneratedPost, PostGenerator};

/// Generated blog author with its posts.
#[derive(Debug, Clone)]
pub struct GeneratedAuthor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub created_at: OffsetDateTime,
    pub posts: Vec<GeneratedPost>,
}

/// Generates blog authors, each carrying a fixed number of posts.
pub struct AuthorGenerator {
    post_gen: PostGenerator,
    posts_per_author: usize,
}

impl AuthorGenerator {
    pub fn new(post_gen: PostGenerator, posts_per_author: usize) -> Self {
        Self {
            post_gen,
            posts_per_author,
        }
    }

    /// Generates a single author with posts whose categories are picked
    /// from `category_ids`.
    pub fn generate(&self, category_ids: &[Uuid], rng: &mut impl Rng) -> GeneratedAuthor {
        let id = Uuid::new_v4();
        let name: String = Name().fake_with_rng(rng);
        let email = generate_email(&name, rng);

        let bio = if rng.gen_bool(0.6) {
            Some(Sentence(8..20).fake_with_rng(rng))
        } else {
            None
        };

        let posts = self
            .post_gen
            .generate_batch(id, category_ids, self.posts_per_author, rng);

        GeneratedAuthor {
            id,
            name,
            email,
            bio,
            created_at: OffsetDateTime::now_utc(),
            posts,
        }
    }

    /// Generates multiple authors.
    pub fn generate_batch(
        &self,
        count: usize,
        category_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedAuthor> {
        (0..count).map(|_| self.generate(category_ids, rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_author_gets_five_posts() {
        let author_gen = AuthorGenerator::new(PostGenerator::new(), 5);
        let mut rng = rand::thread_rng();
        let categories: Vec<Uuid> = (0..20).map(|_| Uuid::new_v4()).collect();

        let authors = author_gen.generate_batch(20, &categories, &mut rng);

        assert_eq!(authors.len(), 20);
        for author in &authors {
            assert_eq!(author.posts.len(), 5);
            for post in &author.posts {
                assert_eq!(post.author_id, author.id);
            }
        }
    }
}
