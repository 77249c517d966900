//! Integration test suite for kanso.
//!
//! These tests drive the public API the way a planner would: parsing
//! documents produced by a model, wiring tasks into a registry, advancing
//! their contexts, and rendering prompts.
//!
//! # Test Categories
//!
//! - `task_lifecycle`: Task/context construction and in-place progress
//! - `prompt_rendering`: Prompt documents and their string form
//! - `registry_links`: Parent resolution and priority ordering
//! - `config_files`: Loading and saving configuration

mod fixtures;

mod prompt_rendering;
mod registry_links;
mod task_lifecycle;
