//! # Bit-width fixtures
//!
//! Random test data for code that handles wide integers of varying width.
//! Each fixture is a bit-width in `0..=256` and a 256-bit value stored as four `u64` words, least significant first, with no bits set above the width.
//! Fixtures are printed as initializers that can be pasted into an array literal in another codebase.
//!
//! The `gen-fixtures` binary writes a run of fixtures to standard output.
//! The library exposes the same functionality with an injectable random number generator:
//!
//! ```
//! use bitwidth_fixtures::emit;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let mut out: Vec<u8> = Vec::new();
//! emit::write_fixtures(&mut out, &mut rng, emit::DEFAULT_COUNT).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 256);
//! ```

pub mod bits;
pub mod emit;
pub mod fixture;
