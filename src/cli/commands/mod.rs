pub mod batch;
pub mod config;
pub mod demo;
pub mod report;
