use crate::{
    Convert, ConvertError, JsString, Object, ObjectKind, Shared, TypeInfo, TypeOf, ARRAY_TYPE,
    BOOL_TYPE, FUNCTION_TYPE, NULL_TYPE, NUMBER_TYPE, OBJECT_TYPE, STRING_TYPE, UNDEFINED_TYPE,
};
use std::fmt;

/// A dynamic value of the host runtime.
///
/// Cloning a value only clones the handle of an object, never the object
/// itself.
#[derive(Default, Clone)]
pub enum Value {
    /// The `undefined` value.
    #[default]
    Undefined,
    /// The `null` value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(JsString),
    /// An object, which includes arrays and functions.
    Object(Shared<Object>),
}

impl Value {
    /// Construct an object value.
    pub fn object(object: Object) -> Self {
        Self::Object(Shared::new(object))
    }

    /// Construct an array value.
    pub fn array<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::object(Object::array(elements))
    }

    /// Test if the value is `undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Test if the value is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Test if the value is `null` or `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Test if the value is an object.
    ///
    /// Arrays and functions are objects, `null` is not.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Access the value as an object, if it is one.
    pub fn as_object(&self) -> Option<&Shared<Object>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Try to coerce value into an object.
    #[inline]
    pub fn into_object(self) -> Result<Shared<Object>, ConvertError> {
        match self {
            Self::Object(object) => Ok(object),
            actual => Err(ConvertError::expected::<Object>(actual.type_info()?)),
        }
    }

    /// Try to coerce value into a boolean.
    #[inline]
    pub fn as_bool(&self) -> Result<bool, ConvertError> {
        match self {
            Self::Bool(b) => Ok(*b),
            actual => Err(ConvertError::expected::<bool>(actual.type_info()?)),
        }
    }

    /// Try to coerce value into a number.
    #[inline]
    pub fn as_number(&self) -> Result<f64, ConvertError> {
        match self {
            Self::Number(n) => Ok(*n),
            actual => Err(ConvertError::expected::<f64>(actual.type_info()?)),
        }
    }

    /// Try to coerce value into a string.
    #[inline]
    pub fn as_js_string(&self) -> Result<&JsString, ConvertError> {
        match self {
            Self::String(s) => Ok(s),
            actual => Err(ConvertError::expected::<JsString>(actual.type_info()?)),
        }
    }

    /// Get the type information for the current value.
    pub fn type_info(&self) -> Result<TypeInfo, ConvertError> {
        Ok(match self {
            Self::Undefined => TypeInfo::StaticType(UNDEFINED_TYPE),
            Self::Null => TypeInfo::StaticType(NULL_TYPE),
            Self::Bool(..) => TypeInfo::StaticType(BOOL_TYPE),
            Self::Number(..) => TypeInfo::StaticType(NUMBER_TYPE),
            Self::String(..) => TypeInfo::StaticType(STRING_TYPE),
            Self::Object(object) => match object.borrow_ref()?.kind() {
                ObjectKind::Plain | ObjectKind::NullPrototype => {
                    TypeInfo::StaticType(OBJECT_TYPE)
                }
                ObjectKind::Array => TypeInfo::StaticType(ARRAY_TYPE),
                ObjectKind::Function { .. } => TypeInfo::StaticType(FUNCTION_TYPE),
                ObjectKind::Instance { class } => TypeInfo::Class(class.clone()),
                ObjectKind::Host { name } => TypeInfo::Host(name.clone()),
            },
        })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(fmt, "undefined"),
            Self::Null => write!(fmt, "null"),
            Self::Bool(b) => write!(fmt, "{:?}", b),
            Self::Number(n) => write!(fmt, "{:?}", n),
            Self::String(s) => write!(fmt, "{:?}", s),
            Self::Object(object) => write!(fmt, "{:?}", object),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<JsString> for Value {
    fn from(s: JsString) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(JsString::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(JsString::from(s))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::object(object)
    }
}

impl From<Shared<Object>> for Value {
    fn from(object: Shared<Object>) -> Self {
        Self::Object(object)
    }
}

impl TypeOf for Value {
    fn type_info() -> TypeInfo {
        TypeInfo::Any
    }
}

impl Convert for Value {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Ok(value)
    }

    fn to_value(&self) -> Result<Value, ConvertError> {
        Ok(self.clone())
    }

    fn can_convert(_: &Value) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_info() {
        assert!(Value::Null.type_info().unwrap().is(NULL_TYPE));
        assert!(Value::array([]).type_info().unwrap().is(ARRAY_TYPE));
        assert!(!Value::Null.is_object());
        assert!(Value::array([]).is_object());

        let instance = Value::object(Object::with_kind(ObjectKind::Instance {
            class: "Date".into(),
        }));

        assert_eq!(
            instance.type_info().unwrap(),
            TypeInfo::Class("Date".into())
        );
    }

    #[test]
    fn test_into_object_mismatch() {
        let error = Value::from(1.0).into_object().unwrap_err();
        assert_eq!(error.to_string(), "expected `object` but found `number`");
    }
}
