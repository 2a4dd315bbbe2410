use crate::{ConvertError, TypeOf, Value};

/// Trait for types which can be converted from and to host values.
///
/// Conversion and probing deliberately differ in how they fail:
/// [from_value][Convert::from_value] and [to_value][Convert::to_value] report
/// why they failed, while [can_convert][Convert::can_convert] never fails and
/// answers `false` instead. Callers resolving an overloaded call site probe
/// every candidate with `can_convert` and only convert with the one that
/// matched.
///
/// If `can_convert` returns `true` for a value, `from_value` must succeed
/// for the same value.
pub trait Convert: TypeOf + Sized {
    /// Convert from the given host value.
    fn from_value(value: Value) -> Result<Self, ConvertError>;

    /// Convert into a fresh host value.
    fn to_value(&self) -> Result<Value, ConvertError>;

    /// Test if the given host value can be converted.
    fn can_convert(value: &Value) -> bool;
}

/// Run a fallible compatibility probe, treating any failure as the value not
/// being convertible.
pub(crate) fn probe<T, F>(f: F) -> bool
where
    T: TypeOf,
    F: FnOnce() -> Result<bool, ConvertError>,
{
    match f() {
        Ok(outcome) => outcome,
        Err(error) => {
            log::trace!("value is not convertible to `{}`: {}", T::type_info(), error);
            false
        }
    }
}
