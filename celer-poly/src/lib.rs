//! Closed-form approximations: no table behind them.
//!
//! The forward functions trade a little more error than the table lookups
//! for zero memory traffic, which can win when the caller is already
//! fighting for cache lines. The inverse functions (asin, acos, atan and
//! the atan2 family) only exist in closed form here; they are minimax
//! polynomial fits evaluated on a bounded domain after range reduction.
//!
//! Everything is a pure function of its arguments. Out-of-domain inputs to
//! asin/acos are deliberately not rejected; see those functions for the
//! exact contract.

extern crate celer_base;


pub mod single;
pub mod double;
