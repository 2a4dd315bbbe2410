use crate::convert::probe;
use crate::{Convert, ConvertError, TypeInfo, TypeOf, Value, ARRAY_TYPE};

impl<T> TypeOf for Vec<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::StaticType(ARRAY_TYPE)
    }
}

impl<T> Convert for Vec<T>
where
    T: Convert,
{
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        let Value::Object(object) = &value else {
            return Err(ConvertError::expected::<Self>(value.type_info()?));
        };

        let object = object.borrow_ref()?;

        if !object.is_array() {
            return Err(ConvertError::expected::<Self>(value.type_info()?));
        }

        let mut output = Vec::with_capacity(object.len());

        for name in object.own_property_names() {
            let element = object.get(name)?;

            match T::from_value(element) {
                Ok(element) => output.push(element),
                Err(error) => {
                    return Err(ConvertError::element(name.to_std_string_lossy(), error));
                }
            }
        }

        Ok(output)
    }

    fn to_value(&self) -> Result<Value, ConvertError> {
        let mut elements = Vec::with_capacity(self.len());

        for (index, element) in self.iter().enumerate() {
            match element.to_value() {
                Ok(element) => elements.push(element),
                Err(error) => return Err(ConvertError::element(index.to_string(), error)),
            }
        }

        Ok(Value::array(elements))
    }

    fn can_convert(value: &Value) -> bool {
        probe::<Self, _>(|| {
            let Value::Object(object) = value else {
                return Ok(false);
            };

            let object = object.borrow_ref()?;

            if !object.is_array() {
                return Ok(false);
            }

            for name in object.own_property_names() {
                if !T::can_convert(&object.get(name)?) {
                    return Ok(false);
                }
            }

            Ok(true)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Convert, ConvertErrorKind, Object, Value};

    #[test]
    fn test_vec() {
        let value = vec![1.0f64, 2.0, 3.0].to_value().unwrap();
        assert!(Vec::<u32>::can_convert(&value));
        assert_eq!(Vec::<u32>::from_value(value).unwrap(), [1, 2, 3]);

        let plain = Value::object(Object::new());
        assert!(!Vec::<u32>::can_convert(&plain));

        let error = Vec::<u32>::from_value(plain).unwrap_err();
        assert!(matches!(error.kind(), ConvertErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn test_element_index() {
        let value = Value::array([Value::from(1.0), Value::from("two")]);
        assert!(!Vec::<f64>::can_convert(&value));

        let error = Vec::<f64>::from_value(value).unwrap_err();
        assert_eq!(error.path(), ["1"]);
    }
}
