//! Command implementations for graphwalk

pub mod dispatch;
pub mod run;
pub mod show;
pub mod source;
pub mod stats;
