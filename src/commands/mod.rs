//! Command implementations for the jobpath CLI

pub mod completions;
pub mod create;
pub mod helpers;
pub mod ls;
pub mod path;
pub mod recent;
pub mod version;
