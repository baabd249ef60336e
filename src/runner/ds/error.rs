use thiserror::Error;
use uuid::Uuid;

/// Errors raised while enhancing classes or registering them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnhanceError {
    /// The name is already bound in the class's behavior table. Nothing was changed.
    #[error("Method '{name}' has already been defined on class {class}")]
    DuplicateMethod {
        name: String,
        class: String,
        class_id: Uuid,
    },

    #[error("Invalid method name {0:?}: method names must not be empty")]
    InvalidMethodName(String),

    #[error("Class '{0}' is already registered")]
    DuplicateClass(String),

    #[error("Class '{0}' not found")]
    ClassNotFound(String),
}

impl EnhanceError {
    /// True when the failure only means "already defined", which callers may
    /// choose to skip instead of aborting setup.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, EnhanceError::DuplicateMethod { .. })
    }

    pub fn method_name(&self) -> Option<&str> {
        match self {
            EnhanceError::DuplicateMethod { name, .. } => Some(name),
            EnhanceError::InvalidMethodName(name) => Some(name),
            _ => None,
        }
    }
}

/// Errors raised while calling a method on an instance.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallError {
    #[error("Uncaught type error: {class}.{name} is not a function")]
    MethodNotFound { class: String, name: String },

    #[error("Uncaught type error: {0}")]
    TypeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_method_and_class() {
        let err = EnhanceError::DuplicateMethod {
            name: "speak".to_string(),
            class: "Animal".to_string(),
            class_id: Uuid::nil(),
        };
        assert_eq!(
            err.to_string(),
            "Method 'speak' has already been defined on class Animal"
        );
        assert!(err.is_duplicate());
        assert_eq!(err.method_name(), Some("speak"));
    }

    #[test]
    fn test_other_errors_are_not_duplicates() {
        assert!(!EnhanceError::InvalidMethodName(String::new()).is_duplicate());
        assert!(!EnhanceError::ClassNotFound("Animal".to_string()).is_duplicate());
        assert_eq!(EnhanceError::ClassNotFound("Animal".to_string()).method_name(), None);
    }
}
