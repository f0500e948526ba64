//! Swatchbook Library
//!
//! This library provides core functionality for the Swatchbook application:
//! style guide data models, WCAG accessibility scoring, export format
//! generation, and record search.

// Module declarations
pub mod accessibility;
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
