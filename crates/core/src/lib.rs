//! Pure domain logic for the PrivacyGuard compliance platform.
//!
//! Everything in this crate is side-effect free: the scoring engine, the
//! legal-document templater, request-lifecycle derivations, and the alert
//! severity policy all take their inputs (including "today") as arguments
//! and return plain values. Storage and delivery live in the `db` and
//! `events` crates.

pub mod alerts;
pub mod error;
pub mod policy;
pub mod requests;
pub mod scoring;
pub mod types;
