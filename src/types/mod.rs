pub mod config;
pub mod context;
pub mod issue;
pub mod scoring;
