pub mod config;
pub mod fixture;
pub mod parser;
pub mod rank;
pub mod report;
pub mod scraper;
pub mod value;
