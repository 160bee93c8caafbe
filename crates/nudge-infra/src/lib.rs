//! # nudge-infra
//!
//! Infrastructure adapters for Nudge: the real preference store backing the
//! `PreferenceStorePort`, plus an in-memory fake for tests.

pub mod preferences;

pub use preferences::{FilePreferenceStore, MemoryPreferenceStore};
