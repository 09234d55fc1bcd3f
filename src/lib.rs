//! Deep Narrative Analysis - Incremental narrative profiling engine
//!
//! Scores transcribed answers to a fixed battery of reflection questions
//! against Big Five traits, Schwartz values and primary motivators, tracks
//! life-domain coverage and narrative metrics, and renders a final report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
