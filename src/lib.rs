// File: src/lib.rs
//
// Library interface for bubblesort.
// Exposes the sorting core and the run modes for integration testing.

pub mod errors;
pub mod input;
pub mod interactive;
pub mod modes;
pub mod sorting;
