//! Cross-crate tests for the dualstack workspace.

#[cfg(test)]
mod pipeline;
#[cfg(test)]
mod utils;
