// fixtures/tables/mod.rs
//
// This module contains definitions for the dealership tables.
// Each table set is a struct that implements the TestTable trait.

pub mod boats;

pub use boats::BoatsTable;
