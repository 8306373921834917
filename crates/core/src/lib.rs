pub mod config;
pub mod detector;
pub mod finding;
pub mod project;
pub mod report;
pub mod scoring;
