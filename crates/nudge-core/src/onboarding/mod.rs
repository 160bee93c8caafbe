//! Onboarding domain models
//!
//! This module defines the core domain models for the onboarding flow:
//! the form collected by the three-step wizard and the static catalogs
//! backing its option lists.

pub mod catalog;
pub mod form;

pub use catalog::{AppCatalogEntry, MotivationOption, APP_CATALOG, MOTIVATION_OPTIONS};
pub use form::{
    AppChoice, IntervalUnit, Motivation, MotivationKey, Motivations, NudgeFrequency,
    OnboardingForm,
};
