//! Shared pieces of the exactsum command-line tools

pub mod common;
