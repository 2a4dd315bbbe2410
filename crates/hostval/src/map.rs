//! Conversions between plain host objects and string-keyed maps.
//!
//! Every own property of the object becomes one entry of the map and the
//! other way around. The value of each entry is converted through the
//! [Convert] implementation of the map's value type, which might be another
//! map.

use crate::convert::probe;
use crate::{Convert, ConvertError, ConvertErrorKind, JsString, Object, TypeOf, Value};
use std::hash::BuildHasher;

/// Decode a property name into a map key.
fn decode_key(name: &JsString) -> Result<String, ConvertError> {
    match name.to_std_string() {
        Ok(key) => Ok(key),
        Err(error) => Err(ConvertError::from(ConvertErrorKind::KeyDecodingFailed {
            error,
        })),
    }
}

/// Convert every own property of the object in `value` into an entry of a
/// map constructed through `new`.
///
/// The map under construction is only returned once every entry has been
/// converted.
fn from_object<M, T>(
    value: Value,
    new: impl FnOnce(usize) -> M,
    mut insert: impl FnMut(&mut M, String, T),
) -> Result<M, ConvertError>
where
    T: Convert,
{
    let object = value.into_object()?;
    let object = object.borrow_ref()?;
    let names = object.own_property_names();

    let mut output = new(names.len());

    for name in names {
        let key = decode_key(name)?;
        let value = object.get(name)?;

        match T::from_value(value) {
            Ok(value) => insert(&mut output, key, value),
            Err(error) => return Err(ConvertError::element(key, error)),
        }
    }

    Ok(output)
}

/// Convert map entries into the properties of a fresh plain object.
fn to_object<'a, T, I>(len: usize, entries: I) -> Result<Value, ConvertError>
where
    T: 'a + Convert,
    I: IntoIterator<Item = (&'a String, &'a T)>,
{
    let mut object = Object::with_capacity(len);

    for (key, value) in entries {
        match value.to_value() {
            Ok(value) => object.set(key, value),
            Err(error) => return Err(ConvertError::element(key.as_str(), error)),
        }
    }

    Ok(Value::object(object))
}

/// Test if `value` is a plain object whose every property value is
/// convertible to `T`.
///
/// Stops at the first property which isn't.
fn can_convert_object<M, T>(value: &Value) -> bool
where
    M: TypeOf,
    T: Convert,
{
    probe::<M, _>(|| {
        let Value::Object(object) = value else {
            return Ok(false);
        };

        let object = object.borrow_ref()?;

        if !object.is_plain() {
            return Ok(false);
        }

        for name in object.own_property_names() {
            decode_key(name)?;

            if !T::can_convert(&object.get(name)?) {
                return Ok(false);
            }
        }

        Ok(true)
    })
}

macro_rules! impl_map {
    ([$($generics:tt)*] $ty:ty where [$($bounds:tt)*], |$cap:ident| $new:expr) => {
        impl<$($generics)*> $crate::TypeOf for $ty {
            fn type_info() -> $crate::TypeInfo {
                $crate::TypeInfo::StaticType($crate::OBJECT_TYPE)
            }
        }

        impl<$($generics)*> $crate::Convert for $ty
        where
            T: $crate::Convert,
            $($bounds)*
        {
            fn from_value(value: Value) -> Result<Self, ConvertError> {
                from_object(value, |$cap| $new, |map: &mut Self, key, value: T| {
                    map.insert(key, value);
                })
            }

            fn to_value(&self) -> Result<Value, ConvertError> {
                to_object(self.len(), self.iter())
            }

            fn can_convert(value: &Value) -> bool {
                can_convert_object::<Self, T>(value)
            }
        }
    };
}

impl_map!(
    [T, S] std::collections::HashMap<String, T, S> where [S: BuildHasher + Default],
    |cap| std::collections::HashMap::with_capacity_and_hasher(cap, S::default())
);

impl_map!(
    [T, S] hashbrown::HashMap<String, T, S> where [S: BuildHasher + Default],
    |cap| hashbrown::HashMap::with_capacity_and_hasher(cap, S::default())
);

impl_map!(
    [T] std::collections::BTreeMap<String, T> where [],
    |_cap| std::collections::BTreeMap::new()
);

#[cfg(test)]
mod tests {
    use super::decode_key;
    use crate::{ConvertErrorKind, JsString};

    #[test]
    fn test_decode_key() {
        assert_eq!(decode_key(&JsString::from("κλειδί")).unwrap(), "κλειδί");

        let error = decode_key(&JsString::from_utf16(vec![0xd800, 0x61])).unwrap_err();
        assert!(matches!(error.kind(), ConvertErrorKind::KeyDecodingFailed { .. }));
    }
}
