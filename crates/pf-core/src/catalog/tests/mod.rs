//! Shared fixtures and scenario tests for the catalog engine.
