//! # enhance - define-once method injection
//!
//! Adds methods to a class after the class has been declared, without ever
//! silently replacing a method that is already there.
//!
//! - Classes with a shared, lock-protected behavior table
//! - Single-inheritance lookup through the parent chain
//! - Instances that consult the live table on every call
//! - A name-based class registry, including a process-wide one
//!
//! ## Quick Start
//!
//! ```
//! use enhance::runner::ds::class::Class;
//! use enhance::runner::ds::error::{CallError, EnhanceError};
//! use enhance::runner::ds::instance::Instance;
//! use enhance::runner::ds::value::Value;
//! use enhance::runner::enhance::inject;
//! use enhance::runner::plugin::types::Method;
//!
//! fn speak(this: &Instance, _args: Vec<Value>) -> Result<Value, CallError> {
//!     Ok(Value::from(format!("{} makes a sound", this.get("name"))))
//! }
//!
//! fn growl(_this: &Instance, _args: Vec<Value>) -> Result<Value, CallError> {
//!     Ok(Value::from("grr"))
//! }
//!
//! let animal = Class::new("Animal");
//! let rex = animal.instantiate();
//! rex.set("name", "Rex");
//!
//! // Instances created before the injection see the new method.
//! inject(&animal, "speak", Method::native(speak)).unwrap();
//! assert_eq!(rex.call("speak", vec![]).unwrap(), Value::from("Rex makes a sound"));
//!
//! // A second definition under the same name is refused.
//! match inject(&animal, "speak", Method::native(growl)) {
//!     Err(EnhanceError::DuplicateMethod { name, class, .. }) => {
//!         assert_eq!(name, "speak");
//!         assert_eq!(class, "Animal");
//!     }
//!     other => panic!("expected a duplicate, got {:?}", other),
//! }
//! assert_eq!(rex.call("speak", vec![]).unwrap(), Value::from("Rex makes a sound"));
//! ```
//!
//! ## Presence
//!
//! A name counts as defined when its key exists in the table of the target
//! class or of any ancestor, the same way a prototype property lookup walks
//! the chain. A subclass therefore cannot shadow an inherited method through
//! [`runner::enhance::inject`]. [`runner::enhance::PresenceCheck::OwnTable`]
//! checks only the target class's own table and allows shadowing.
//!
//! ## Concurrency
//!
//! [`runner::ds::class::ClassRef`] is `Send + Sync`. The injector holds the
//! table's write lock across the check and the insert, so two threads racing
//! to define the same name get exactly one success.
//!
//! ## Architecture
//!
//! - **[`runner::ds`]** - Values, classes, behavior tables, instances, errors
//! - **[`runner::enhance`]** - The injector
//! - **[`runner::plugin`]** - Method definitions and the class registry

#[macro_use]
extern crate lazy_static;

pub mod runner;
