//! Error types and error handling for the lexer.
//!
//! This module defines the errors a tokenize call can fail with. It includes:
//!
//! - Error structures with source position information
//! - One error variant per rejected transition, plus truncated input
//! - Helpful error messages and suggestions

pub mod errors;
