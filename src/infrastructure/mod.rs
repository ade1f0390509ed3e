// src/infrastructure/mod.rs
pub mod cursor;
pub mod memory;
pub mod time;

pub use memory::InMemoryArticleService;
pub use time::SystemClock;
