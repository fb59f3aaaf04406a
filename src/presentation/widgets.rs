//! Reusable UI widgets

pub mod field;
