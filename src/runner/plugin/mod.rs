//! Method definitions and the class registry.
//!
//! ## Method Definitions
//!
//! A [`Method`] is what gets stored in a behavior table. It is either a plain
//! function pointer ([`NativeFn`]) or a shared closure. Both receive the
//! receiving instance and the call arguments:
//!
//! ```text
//! fn(this: &Instance, args: Vec<Value>) -> Result<Value, CallError>
//! ```
//!
//! ## Class Registry
//!
//! [`ClassRegistry`] maps class names to classes so setup code can enhance a
//! class without holding a reference to it:
//!
//! ```
//! use enhance::runner::plugin::registry::ClassRegistry;
//! use enhance::runner::plugin::types::Method;
//! use enhance::runner::ds::value::Value;
//!
//! let registry = ClassRegistry::new();
//! let animal = registry.define_class("Animal").unwrap();
//! registry
//!     .inject("Animal", "legs", Method::closure(|_this, _args| Ok(Value::from(4i64))))
//!     .unwrap();
//!
//! let rex = animal.instantiate();
//! assert_eq!(rex.call("legs", vec![]).unwrap(), Value::from(4i64));
//! ```
//!
//! A single process-wide registry is available through
//! [`ClassRegistry::global`].

pub mod registry;
pub mod types;

pub use registry::ClassRegistry;
pub use types::{Method, NativeFn};
