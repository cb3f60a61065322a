//! Test utilities for wallet-link.
//!
//! Deterministic keys and claim sets shared by unit tests and by downstream
//! integration tests (behind the `test-utils` feature).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wallet_link::test_utils::{test_keypair, TestFixtures};
//!
//! let keypair = test_keypair();
//! let claims = TestFixtures::claims(&keypair);
//! let token = wallet_link::sign_token(claims, &keypair).await?;
//! ```

mod fixtures;

pub use fixtures::{sample_claims, test_keypair, TestFixtures};
