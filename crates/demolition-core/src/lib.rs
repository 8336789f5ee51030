//! Core types and definitions for the demolition simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, events, state snapshots, configuration, the
//! stats ledger, structure layouts, and the error taxonomy.
//! It has no dependency on the physics backend or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod layout;
pub mod ledger;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
