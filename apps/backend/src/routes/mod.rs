//! HTTP route handlers

pub mod grade;
pub mod quiz;
pub mod settings;
