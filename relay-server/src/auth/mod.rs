//! Security machinery for the relay: webhook signature verification,
//! RS256 assertion signing, and the token provider seam.
//!
//! Nothing in this module logs or persists secret material. Verification is
//! pure; signing reads key material decoded once at startup.

pub mod assertion;
pub mod signature;
pub mod token;
