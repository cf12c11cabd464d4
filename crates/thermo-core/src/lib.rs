//! Core types and definitions for the THERMO exchange simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity components, input definitions, commands, state snapshots,
//! events, constants and model errors.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod definitions;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
