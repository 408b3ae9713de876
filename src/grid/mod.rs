//! Grid evaluation
//!
//! Samples the pricing engine over evenly spaced spot and volatility ranges to
//! produce call/put price surfaces, and over a spot range to produce a sweep of
//! a single Greek. Every function here is pure and single-threaded; range
//! validity is the caller's responsibility (see [`GridSpec::validate`]).

pub mod sampling;
pub mod surface;
pub mod sweep;
pub mod types;

pub use sampling::*;
pub use surface::*;
pub use sweep::*;
pub use types::*;
