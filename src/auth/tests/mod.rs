//! Unit tests for the mock authentication flow.
