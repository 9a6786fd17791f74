//! 应用层

pub mod fruits;
