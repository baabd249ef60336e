//! Classes, their behavior tables, and the injector that enhances them.

pub mod ds;
pub mod enhance;
pub mod plugin;
