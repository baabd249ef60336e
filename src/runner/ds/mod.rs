//! Data structures: values, classes, behavior tables and instances.

pub mod behavior_table;
pub mod class;
pub mod error;
pub mod instance;
pub mod value;
