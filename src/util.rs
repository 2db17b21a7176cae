//! Shared utility modules used across antimat components.

pub mod levenshtein;
