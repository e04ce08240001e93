//! Visitor pass: module-level statements into an [`Accumulator`].
//!
//! The dispatcher maps each top-level statement to a closed [`NodeKind`]
//! and runs exactly one processor for it. Processors share the type
//! extractor ([`prop_types`]) and the signature builder ([`signatures`]).
//!
//! [`Accumulator`]: crate::accumulator::Accumulator
//! [`NodeKind`]: dispatcher::NodeKind

pub mod dispatcher;
pub mod helpers;
pub mod literals;
pub mod processors;
pub mod prop_types;
pub mod signatures;
pub mod usage;

pub use dispatcher::{NodeKind, visit_program};

#[cfg(test)]
mod tests;
