//! Integration tests for Layer 1: Storage
//!
//! Tests for the entity registry, component stores, query dispatch, and
//! whole-world scenarios.

mod components;
mod entities;
