//! Dynamic script-engine values.

use std::fmt;
use std::rc::Rc;

/// A callable value owned by the scripting engine.
///
/// The bridge never inspects a function beyond invoking it; the return value
/// of an invocation is ignored. Implementations are engine adapters (or test
/// fakes) and are held behind `Rc` because all bridge work for a renderer
/// happens on the engine's single thread.
pub trait ScriptFunction {
    /// Invoke the callable with already-converted arguments.
    fn invoke(&self, args: &[ScriptValue]);
}

/// A value produced or consumed by the scripting engine.
///
/// Arrays are ordered, fixed-length once created, and may nest. The
/// [`Function`](Self::Function) variant carries an engine callable so the
/// dispatcher can recognize callback arguments; functions have no portable
/// representation and are dropped by the converter.
#[derive(Clone)]
pub enum ScriptValue {
    /// The engine's null/undefined.
    Null,
    /// A boolean.
    Bool(bool),
    /// A 32-bit integer.
    Int(i32),
    /// A double-precision float.
    Double(f64),
    /// A string.
    String(String),
    /// An ordered array of nested values.
    Array(Vec<ScriptValue>),
    /// An engine callable. Not transmissible across the process boundary.
    Function(Rc<dyn ScriptFunction>),
}

impl ScriptValue {
    /// Whether this value is an engine callable.
    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// The underlying callable, if this value is one.
    #[must_use]
    pub fn as_function(&self) -> Option<&Rc<dyn ScriptFunction>> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }
}

impl fmt::Debug for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
            Self::String(v) => f.debug_tuple("String").field(v).finish(),
            Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl PartialEq for ScriptValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            // Bitwise comparison so round-tripped doubles (including NaN)
            // compare equal to themselves.
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            // Functions are engine handles; identity is the only meaningful
            // equality.
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ScriptValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<ScriptValue>> for ScriptValue {
    fn from(value: Vec<ScriptValue>) -> Self {
        Self::Array(value)
    }
}
