//! Helper functions shared by the rendering layer

mod date;

pub use date::*;
