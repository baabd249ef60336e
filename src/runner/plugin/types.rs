//! Callable method definitions stored in behavior tables.

use crate::runner::ds::error::CallError;
use crate::runner::ds::instance::Instance;
use crate::runner::ds::value::Value;
use std::fmt;
use std::sync::Arc;

/// Function signature for methods.
/// Methods receive the receiving instance (`this`) and the call arguments.
pub type NativeFn = fn(this: &Instance, args: Vec<Value>) -> Result<Value, CallError>;

/// Boxed closure form of [`NativeFn`].
pub type ClosureFn = dyn Fn(&Instance, Vec<Value>) -> Result<Value, CallError> + Send + Sync;

/// A method definition. Opaque to the injector; cheap to clone.
#[derive(Clone)]
pub enum Method {
    /// Direct function pointer.
    Native(NativeFn),

    /// Closure capturing its own state.
    Closure(Arc<ClosureFn>),
}

impl Method {
    pub fn native(func: NativeFn) -> Self {
        Method::Native(func)
    }

    pub fn closure<F>(func: F) -> Self
    where
        F: Fn(&Instance, Vec<Value>) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Method::Closure(Arc::new(func))
    }

    /// Execute this method against `this`.
    pub fn call(&self, this: &Instance, args: Vec<Value>) -> Result<Value, CallError> {
        match self {
            Method::Native(f) => f(this, args),
            Method::Closure(f) => f(this, args),
        }
    }

    /// Identity comparison by function pointer address or by shared closure.
    ///
    /// Function pointer addresses are not guaranteed unique or stable: the
    /// compiler may merge identical functions or emit one function in several
    /// codegen units. Closures compare by `Arc` and are exact.
    pub fn same_definition(&self, other: &Method) -> bool {
        match (self, other) {
            (Method::Native(a), Method::Native(b)) => *a as usize == *b as usize,
            (Method::Closure(a), Method::Closure(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<NativeFn> for Method {
    fn from(func: NativeFn) -> Self {
        Method::Native(func)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Native(func) => write!(f, "Method::Native({:#x})", *func as usize),
            Method::Closure(_) => write!(f, "Method::Closure(...)"),
        }
    }
}
