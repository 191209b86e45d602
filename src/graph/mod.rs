//! Graph construction and representation
//!
//! This module builds the sentence similarity matrix and its sparse CSR view
//! for the rank iteration.

pub mod csr;
pub mod similarity;
