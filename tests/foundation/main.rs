//! Integration tests for Layer 0: Foundation
//!
//! Tests for entity handles, component masks, and error types.

mod masks;
