//! # Dualstack Core
//!
//! The address translation and subnet enumeration engine.
//!
//! * **[`translator`]**: Maps one IPv4 address onto its `2002::/16` IPv6 counterpart.
//! * **[`expander`]**: Enumerates a subnet's hosts and translates each of them.
//! * **[`validator`]**: Boolean checks for subnet and IPv6 address input.
//! * **[`readiness`]**: Count-based readiness summary of an expanded subnet.
//! * **[`simulator`]**: Walks the (IPv4, IPv6) pairs of a subnet and simulates traffic.
//! * **[`exhaustion`]**: Projects the year the IPv4 pool runs dry.
//! * **[`random`]**: Random IPv4 addresses for ad-hoc translation.
//!
//! Nothing in here performs I/O. Every call computes from its own inputs.

pub mod exhaustion;
pub mod expander;
pub mod random;
pub mod readiness;
pub mod simulator;
pub mod translator;
pub mod validator;

pub use dualstack_common::error::{Result, TranslateError};
