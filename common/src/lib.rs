//! # Dualstack Common
//!
//! Value types and parsing shared by the translation engine and the CLI.
//!
//! * **[`network`]**: IPv4 ranges, CIDR subnets and address parsing.
//! * **[`error`]**: The error taxonomy returned by every fallible operation.
//! * **[`config`]**: Runtime options collected from the command line.

pub mod config;
pub mod error;
pub mod network;
