//! Comprehensive test suite for the layout engine
//!
//! This module organizes tests into logical groups to help understand
//! different aspects of the engine.

#[cfg(test)]
mod codec_tests;
