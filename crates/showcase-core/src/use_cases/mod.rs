//! Use cases.

pub mod projects;
