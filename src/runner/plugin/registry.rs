//! Class registry for looking up and enhancing classes by name.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use super::types::Method;
use crate::runner::ds::class::{Class, ClassRef};
use crate::runner::ds::error::EnhanceError;
use crate::runner::enhance::inject;

lazy_static! {
    static ref GLOBAL_REGISTRY: ClassRegistry = ClassRegistry::new();
}

/// Registry for named classes.
/// Class names are unique within one registry.
pub struct ClassRegistry {
    classes: RwLock<HashMap<String, ClassRef>>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ClassRegistry {
            classes: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static ClassRegistry {
        &GLOBAL_REGISTRY
    }

    /// Create and register a root class.
    pub fn define_class(&self, name: &str) -> Result<ClassRef, EnhanceError> {
        let mut classes = self.classes.write();
        if classes.contains_key(name) {
            return Err(EnhanceError::DuplicateClass(name.to_string()));
        }
        let class = Class::new(name);
        classes.insert(name.to_string(), class.clone());
        debug!("Registered class {}", name);
        Ok(class)
    }

    /// Create and register a subclass of the registered class `parent_name`.
    pub fn define_subclass(&self, name: &str, parent_name: &str) -> Result<ClassRef, EnhanceError> {
        let mut classes = self.classes.write();
        if classes.contains_key(name) {
            return Err(EnhanceError::DuplicateClass(name.to_string()));
        }
        let parent = classes
            .get(parent_name)
            .ok_or_else(|| EnhanceError::ClassNotFound(parent_name.to_string()))?;
        let class = Class::extend(name, parent);
        classes.insert(name.to_string(), class.clone());
        debug!("Registered class {} extending {}", name, parent_name);
        Ok(class)
    }

    /// Get a registered class by name.
    pub fn get(&self, name: &str) -> Option<ClassRef> {
        self.classes.read().get(name).cloned()
    }

    /// Check if a class exists in the registry.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.read().contains_key(name)
    }

    /// Get all registered class names, sorted.
    pub fn class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.classes.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Enhance the registered class `class_name` with a new method.
    pub fn inject(
        &self,
        class_name: &str,
        method: &str,
        definition: impl Into<Method>,
    ) -> Result<(), EnhanceError> {
        let class = self
            .get(class_name)
            .ok_or_else(|| EnhanceError::ClassNotFound(class_name.to_string()))?;
        inject(&class, method, definition)
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}
