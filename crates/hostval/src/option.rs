use crate::{Convert, ConvertError, TypeInfo, TypeOf, Value};

impl<T> TypeOf for Option<T>
where
    T: TypeOf,
{
    fn type_info() -> TypeInfo {
        TypeInfo::Optional(Box::new(T::type_info()))
    }
}

/// `null` and `undefined` both convert into `None`, which converts back into
/// `undefined`.
impl<T> Convert for Option<T>
where
    T: Convert,
{
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        if value.is_nullish() {
            return Ok(None);
        }

        Ok(Some(T::from_value(value)?))
    }

    fn to_value(&self) -> Result<Value, ConvertError> {
        match self {
            Some(some) => some.to_value(),
            None => Ok(Value::Undefined),
        }
    }

    fn can_convert(value: &Value) -> bool {
        value.is_nullish() || T::can_convert(value)
    }
}
