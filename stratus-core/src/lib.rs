//! Stratus Core
//!
//! Core types for the Stratus asynchronous-task API.
//!
//! This crate contains:
//! - Domain types: Core business entities (Task, TaskStatus)
//! - DTOs: Wire-level response envelope and error entries

pub mod domain;
pub mod dto;
