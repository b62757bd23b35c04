//! incidence-graph - small in-memory graphs backed by an incidence matrix
//!
//! This crate models oriented and unoriented graphs, keeps an incidence
//! matrix consistent with their node and edge lists, and provides structural
//! queries, connectivity analysis and depth-first algorithms.

pub mod algo;
pub mod export;
pub mod graph;
