//! Wheel of Life - life-satisfaction self-assessment
//!
//! A step-by-step rating wizard over a fixed set of life categories, radar
//! chart rendering with PNG/SVG/PDF exports, and a small submission service
//! that stores results and emails a PDF report to the coach.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
