use crate::runner::ds::class::ClassRef;
use crate::runner::ds::error::CallError;
use crate::runner::ds::value::Value;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;

/// An object produced by a class. Holds its own fields; methods always come
/// from the class's behavior table at call time.
pub struct Instance {
    class: ClassRef,
    fields: RwLock<HashMap<String, Value>>,
}

impl Instance {
    pub fn new(class: ClassRef) -> Self {
        Instance {
            class,
            fields: RwLock::new(HashMap::new()),
        }
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    /// Read a field. Missing fields read as `Value::Undefined`.
    pub fn get(&self, field: &str) -> Value {
        self.fields
            .read()
            .get(field)
            .cloned()
            .unwrap_or(Value::Undefined)
    }

    pub fn set(&self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.write().insert(field.into(), value.into());
    }

    pub fn responds_to(&self, name: &str) -> bool {
        self.class.defines_in_chain(name)
    }

    /// Call `name` with `self` as the receiver.
    ///
    /// The method is cloned out of the table before it runs, so its body may
    /// enhance its own class.
    pub fn call(&self, name: &str, args: Vec<Value>) -> Result<Value, CallError> {
        let method = self
            .class
            .resolve_method(name)
            .ok_or_else(|| CallError::MethodNotFound {
                class: self.class.name().to_string(),
                name: name.to_string(),
            })?;
        method.call(self, args)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.class.name())
            .field("fields", &*self.fields.read())
            .finish()
    }
}
