//! # classify
//!
//! Keyword-based heuristics over incoming messages: emotional mood, knowledge
//! domain, and identity-question interception. All three read from the single
//! data-driven table module in [`keywords`], so the lists cannot drift apart
//! between classifiers.

pub mod identity;
pub mod keywords;
mod domain;
mod mood;

pub use domain::{DomainClassifier, GENERAL_CONFIDENCE, MIN_DOMAIN_CONFIDENCE};
pub use identity::IdentityInterceptor;
pub use mood::MoodClassifier;
