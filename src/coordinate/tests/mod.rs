//! Unit tests for the coordinate module

mod antipode_tests;
mod hemisphere_tests;
mod parser_tests;
