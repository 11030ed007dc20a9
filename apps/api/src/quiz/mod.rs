//! Quiz surface: question catalogs, profile resolution, and prose.

pub mod descriptions;
pub mod handlers;
pub mod models;
pub mod professional;
pub mod questions;
pub mod resolver;
