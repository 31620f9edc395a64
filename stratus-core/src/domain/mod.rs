//! Core domain types
//!
//! This module contains the domain structures shared across the Stratus
//! client. These types represent remote entities as the API reports them.

pub mod task;
