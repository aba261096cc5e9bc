#![allow(clippy::needless_return)]

pub mod cli;

pub use cli::{Args, Command, PathOverrides, run};
