//! Consolidated test utilities for the SolarEdge to MongoDB aggregator.
//!
//! This module provides mock implementations and test data builders used
//! throughout the test suite.

#![cfg(test)]

pub mod fixtures;
pub mod mocks;
