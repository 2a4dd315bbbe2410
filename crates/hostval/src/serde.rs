use crate::{JsString, ObjectKind, Property, Value};
use serde::ser;

/// Serialize implementation for host values.
///
/// Objects serialize as maps of their data properties in enumeration order,
/// and arrays as sequences. Accessor properties are skipped, since reading
/// them would run their getters. Functions serialize as unit.
impl ser::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        use serde::ser::SerializeMap as _;
        use serde::ser::SerializeSeq as _;

        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(string) => ser::Serialize::serialize(string, serializer),
            Value::Object(object) => {
                let object = object.borrow_ref().map_err(ser::Error::custom)?;

                let data = object.iter().filter_map(|(name, property)| match property {
                    Property::Data(value) => Some((name, value)),
                    Property::Accessor(..) => None,
                });

                match object.kind() {
                    ObjectKind::Function { .. } => serializer.serialize_unit(),
                    ObjectKind::Array => {
                        let mut serializer = serializer.serialize_seq(None)?;

                        for (_, value) in data {
                            serializer.serialize_element(value)?;
                        }

                        serializer.end()
                    }
                    _ => {
                        let mut serializer = serializer.serialize_map(None)?;

                        for (name, value) in data {
                            serializer.serialize_entry(name, value)?;
                        }

                        serializer.end()
                    }
                }
            }
        }
    }
}

impl ser::Serialize for JsString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_std_string_lossy())
    }
}
