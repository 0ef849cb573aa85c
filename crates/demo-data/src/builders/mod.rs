pub mod scenario;

pub use scenario::{DemoDataBuilder, DemoDataResult};
