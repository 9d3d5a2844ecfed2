//! Request handlers for the inference API.
//!
//! Each submodule provides async handler functions for one route group.
//! Handlers delegate to the inference pipeline in `medbot_core` and map
//! failures via [`crate::error::AppError`].

pub mod predict;
