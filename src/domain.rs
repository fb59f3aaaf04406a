//! Domain logic
//!
//! This module contains the form's business rules:
//! - The cellar record and its closed country set
//! - Cost parsing and minor-unit conversion
//! - Whole-record validation with per-field outcomes
//! - Text helpers shared by widgets

pub mod cost;
pub mod country;
pub mod form;
pub mod text;
pub mod ui;
pub mod validation;
