//! Class descriptors and their shared behavior tables.
//!
//! A [`Class`] owns one [`BehaviorTable`] behind a lock. Instances hold a
//! [`ClassRef`] and consult the live table on every call, so a method added to
//! a class after instances were created is visible to those instances too.
//! Lookups walk the parent chain; a subclass sees every method of its parents
//! that it does not define itself.

use crate::runner::ds::behavior_table::BehaviorTable;
use crate::runner::ds::instance::Instance;
use crate::runner::plugin::types::Method;
use parking_lot::RwLock;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use uuid::Uuid;

pub type ClassRef = Arc<Class>;

/// Name plus a unique id. Two classes may share a name but never an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassIdentity {
    pub name: String,
    pub id: Uuid,
}

impl Display for ClassIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub struct Class {
    identity: ClassIdentity,
    parent: Option<ClassRef>,
    behavior: RwLock<BehaviorTable>,
}

impl Class {
    /// Create a root class with an empty behavior table.
    pub fn new(name: impl Into<String>) -> ClassRef {
        Arc::new(Class::create(name.into(), None))
    }

    /// Create a subclass of `parent` with an empty behavior table.
    pub fn extend(name: impl Into<String>, parent: &ClassRef) -> ClassRef {
        Arc::new(Class::create(name.into(), Some(parent.clone())))
    }

    fn create(name: String, parent: Option<ClassRef>) -> Self {
        Class {
            identity: ClassIdentity {
                name,
                id: Uuid::new_v4(),
            },
            parent,
            behavior: RwLock::new(BehaviorTable::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn id(&self) -> Uuid {
        self.identity.id
    }

    pub fn identity(&self) -> &ClassIdentity {
        &self.identity
    }

    pub fn parent(&self) -> Option<&ClassRef> {
        self.parent.as_ref()
    }

    pub(crate) fn behavior(&self) -> &RwLock<BehaviorTable> {
        &self.behavior
    }

    pub fn has_own_method(&self, name: &str) -> bool {
        self.behavior.read().contains(name)
    }

    pub fn own_method(&self, name: &str) -> Option<Method> {
        self.behavior.read().get(name).cloned()
    }

    pub fn method_names(&self) -> Vec<String> {
        self.behavior.read().names()
    }

    /// Find `name` in this class or the nearest ancestor that defines it.
    pub fn resolve_method(&self, name: &str) -> Option<Method> {
        let mut current = Some(self);
        while let Some(class) = current {
            if let Some(method) = class.own_method(name) {
                return Some(method);
            }
            current = class.parent.as_deref();
        }
        None
    }

    pub fn defines_in_chain(&self, name: &str) -> bool {
        self.ancestry().any(|class| class.has_own_method(name))
    }

    /// This class followed by each parent up to the root.
    pub fn ancestry(&self) -> impl Iterator<Item = &Class> {
        std::iter::successors(Some(self), |class| class.parent.as_deref())
    }

    pub fn instantiate(self: &Arc<Self>) -> Instance {
        Instance::new(self.clone())
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identity)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.identity.name)
            .field("id", &self.identity.id)
            .field("parent", &self.parent.as_ref().map(|p| p.name().to_string()))
            .field("methods", &self.method_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ds::error::CallError;
    use crate::runner::ds::value::Value;

    fn noop(_this: &Instance, _args: Vec<Value>) -> Result<Value, CallError> {
        Ok(Value::Undefined)
    }

    #[test]
    fn test_same_name_distinct_identity() {
        let a = Class::new("Animal");
        let b = Class::new("Animal");
        assert_eq!(a.name(), b.name());
        assert_ne!(a.id(), b.id());
        assert!(*a != *b);
    }

    #[test]
    fn test_resolve_walks_parent_chain() {
        let animal = Class::new("Animal");
        let dog = Class::extend("Dog", &animal);
        animal
            .behavior()
            .write()
            .insert_if_absent("eat", Method::native(noop));

        assert!(!dog.has_own_method("eat"));
        assert!(dog.defines_in_chain("eat"));
        assert!(dog.resolve_method("eat").is_some());
        assert!(animal.resolve_method("bark").is_none());
    }

    #[test]
    fn test_ancestry() {
        let animal = Class::new("Animal");
        let dog = Class::extend("Dog", &animal);
        let puppy = Class::extend("Puppy", &dog);

        let names: Vec<&str> = puppy.ancestry().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Puppy", "Dog", "Animal"]);
        assert_eq!(puppy.parent().unwrap().name(), "Dog");
    }
}
