//! State management for initialization runs.

pub mod run;
