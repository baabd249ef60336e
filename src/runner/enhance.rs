//! Define-once method injection.
//!
//! [`inject`] binds a method into a class's behavior table after the class has
//! been created. A name that is already bound, on the class itself or on any
//! ancestor, is never overwritten or shadowed: the call fails with
//! [`EnhanceError::DuplicateMethod`] and the table is left as it was.
//!
//! ```
//! use enhance::runner::ds::class::Class;
//! use enhance::runner::ds::error::CallError;
//! use enhance::runner::ds::instance::Instance;
//! use enhance::runner::ds::value::Value;
//! use enhance::runner::enhance::inject;
//! use enhance::runner::plugin::types::Method;
//!
//! fn speak(_this: &Instance, _args: Vec<Value>) -> Result<Value, CallError> {
//!     Ok(Value::from("..."))
//! }
//!
//! let animal = Class::new("Animal");
//! inject(&animal, "speak", Method::native(speak)).unwrap();
//!
//! let err = inject(&animal, "speak", Method::native(speak)).unwrap_err();
//! assert!(err.is_duplicate());
//! ```

use crate::runner::ds::class::{Class, ClassRef};
use crate::runner::ds::error::EnhanceError;
use crate::runner::plugin::types::Method;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Where to look when deciding whether a name is already defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceCheck {
    /// The target class and every ancestor, like a prototype property
    /// lookup. A subclass cannot shadow an inherited method.
    Chain,
    /// Only the target class's own table. A subclass may define a name its
    /// parent already has.
    OwnTable,
}

impl Default for PresenceCheck {
    fn default() -> Self {
        PresenceCheck::Chain
    }
}

#[derive(Debug, Clone, Default)]
pub struct InjectOptions {
    pub presence: PresenceCheck,
}

impl InjectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_presence(mut self, presence: PresenceCheck) -> Self {
        self.presence = presence;
        self
    }
}

/// Bind `definition` to `name` on `class` unless `name` is already defined
/// on the class or inherited from one of its ancestors.
///
/// Empty names are rejected with [`EnhanceError::InvalidMethodName`].
pub fn inject(
    class: &ClassRef,
    name: &str,
    definition: impl Into<Method>,
) -> Result<(), EnhanceError> {
    inject_with(class, name, definition, &InjectOptions::default())
}

pub fn inject_with(
    class: &ClassRef,
    name: &str,
    definition: impl Into<Method>,
    options: &InjectOptions,
) -> Result<(), EnhanceError> {
    validate_name(name)?;

    // Held across check-then-set so concurrent injectors cannot both succeed.
    let mut table = class.behavior().write();
    if table.contains(name) || inherited(class, name, options) {
        warn!("Rejected redefinition of {}.{}", class.name(), name);
        return Err(duplicate(class, name));
    }

    table.insert_if_absent(name, definition.into());
    debug!("Injected {}.{}", class.name(), name);
    Ok(())
}

/// Install a batch of methods all-or-nothing.
///
/// Every name is checked before anything is inserted; the first name that is
/// empty, already bound, or repeated within the batch is reported and the
/// table is not modified.
pub fn inject_all<I, N, M>(class: &ClassRef, definitions: I) -> Result<(), EnhanceError>
where
    I: IntoIterator<Item = (N, M)>,
    N: Into<String>,
    M: Into<Method>,
{
    inject_all_with(class, definitions, &InjectOptions::default())
}

pub fn inject_all_with<I, N, M>(
    class: &ClassRef,
    definitions: I,
    options: &InjectOptions,
) -> Result<(), EnhanceError>
where
    I: IntoIterator<Item = (N, M)>,
    N: Into<String>,
    M: Into<Method>,
{
    let definitions: Vec<(String, Method)> = definitions
        .into_iter()
        .map(|(name, method)| (name.into(), method.into()))
        .collect();

    let mut table = class.behavior().write();
    let mut seen = HashSet::new();
    for (name, _) in &definitions {
        validate_name(name)?;
        let taken = table.contains(name) || inherited(class, name, options);
        if taken || !seen.insert(name.as_str()) {
            warn!("Rejected redefinition of {}.{}", class.name(), name);
            return Err(duplicate(class, name));
        }
    }

    for (name, method) in definitions {
        table.insert_if_absent(&name, method);
        debug!("Injected {}.{}", class.name(), name);
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), EnhanceError> {
    if name.is_empty() {
        return Err(EnhanceError::InvalidMethodName(name.to_string()));
    }
    Ok(())
}

// Only reads parent tables; the caller holds the write lock of `class` itself.
fn inherited(class: &Class, name: &str, options: &InjectOptions) -> bool {
    options.presence == PresenceCheck::Chain
        && class
            .ancestry()
            .skip(1)
            .any(|ancestor| ancestor.has_own_method(name))
}

fn duplicate(class: &Class, name: &str) -> EnhanceError {
    EnhanceError::DuplicateMethod {
        name: name.to_string(),
        class: class.name().to_string(),
        class_id: class.id(),
    }
}
