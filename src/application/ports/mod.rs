// src/application/ports/mod.rs
pub mod articles;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ArticleServicePort = dyn articles::ArticleService;
pub type ClockPort = dyn time::Clock;
