use crate::{
    Convert, ConvertError, ConvertErrorKind, TypeInfo, TypeOf, Value, BOOL_TYPE, NUMBER_TYPE,
};

/// The largest integer magnitude a number holds without loss of precision.
const MAX_SAFE_INTEGER: u128 = (1 << 53) - 1;

impl TypeOf for bool {
    fn type_info() -> TypeInfo {
        TypeInfo::StaticType(BOOL_TYPE)
    }
}

impl Convert for bool {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        value.as_bool()
    }

    fn to_value(&self) -> Result<Value, ConvertError> {
        Ok(Value::Bool(*self))
    }

    fn can_convert(value: &Value) -> bool {
        matches!(value, Value::Bool(..))
    }
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TypeOf for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::StaticType(NUMBER_TYPE)
                }
            }

            impl Convert for $ty {
                fn from_value(value: Value) -> Result<Self, ConvertError> {
                    Ok(value.as_number()? as $ty)
                }

                fn to_value(&self) -> Result<Value, ConvertError> {
                    Ok(Value::Number(*self as f64))
                }

                fn can_convert(value: &Value) -> bool {
                    matches!(value, Value::Number(..))
                }
            }
        )*
    };
}

impl_float!(f32, f64);

/// Get the integral value of a number, if it has one.
fn integral(number: f64) -> Option<i128> {
    if number.is_finite() && number.fract() == 0.0 && number.abs() < i128::MAX as f64 {
        Some(number as i128)
    } else {
        None
    }
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TypeOf for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::StaticType(NUMBER_TYPE)
                }
            }

            impl Convert for $ty {
                fn from_value(value: Value) -> Result<Self, ConvertError> {
                    let number = value.as_number()?;

                    match integral(number).and_then(|n| <$ty>::try_from(n).ok()) {
                        Some(integer) => Ok(integer),
                        None => Err(ConvertError::from(
                            ConvertErrorKind::ValueToIntegerCoercion {
                                from: number,
                                to: std::any::type_name::<Self>(),
                            },
                        )),
                    }
                }

                fn to_value(&self) -> Result<Value, ConvertError> {
                    let integer = *self as i128;

                    if integer.unsigned_abs() > MAX_SAFE_INTEGER {
                        return Err(ConvertError::from(
                            ConvertErrorKind::IntegerToValueCoercion { from: integer },
                        ));
                    }

                    Ok(Value::Number(integer as f64))
                }

                fn can_convert(value: &Value) -> bool {
                    match value {
                        Value::Number(number) => integral(*number)
                            .and_then(|n| <$ty>::try_from(n).ok())
                            .is_some(),
                        _ => false,
                    }
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
