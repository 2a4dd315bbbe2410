use crate::{Convert, ConvertError, ConvertErrorKind, TypeInfo, TypeOf, Value};

/// A value which is one of two alternatives.
///
/// Converting from a host value picks the first alternative whose
/// [can_convert][Convert::can_convert] accepts the value, so the order of the
/// alternatives matters when both accept it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<L, R> {
    /// The first alternative.
    Left(L),
    /// The second alternative.
    Right(R),
}

impl<L, R> TypeOf for Either<L, R>
where
    L: TypeOf,
    R: TypeOf,
{
    fn type_info() -> TypeInfo {
        TypeInfo::Union(vec![L::type_info(), R::type_info()])
    }
}

impl<L, R> Convert for Either<L, R>
where
    L: Convert,
    R: Convert,
{
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        if L::can_convert(&value) {
            log::trace!("selected `{}` for `{}`", L::type_info(), Self::type_info());
            return Ok(Self::Left(L::from_value(value)?));
        }

        if R::can_convert(&value) {
            log::trace!("selected `{}` for `{}`", R::type_info(), Self::type_info());
            return Ok(Self::Right(R::from_value(value)?));
        }

        Err(ConvertError::from(ConvertErrorKind::TypeMismatch {
            expected: Self::type_info(),
            actual: value.type_info()?,
        }))
    }

    fn to_value(&self) -> Result<Value, ConvertError> {
        match self {
            Self::Left(left) => left.to_value(),
            Self::Right(right) => right.to_value(),
        }
    }

    fn can_convert(value: &Value) -> bool {
        L::can_convert(value) || R::can_convert(value)
    }
}
