pub mod seeder;

pub use seeder::{SeedError, Seeder};
