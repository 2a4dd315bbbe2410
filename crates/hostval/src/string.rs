use crate::{
    Convert, ConvertError, ConvertErrorKind, JsString, TypeInfo, TypeOf, Value, STRING_TYPE,
};

impl TypeOf for JsString {
    fn type_info() -> TypeInfo {
        TypeInfo::StaticType(STRING_TYPE)
    }
}

impl Convert for JsString {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::String(string) => Ok(string),
            actual => Err(ConvertError::expected::<Self>(actual.type_info()?)),
        }
    }

    fn to_value(&self) -> Result<Value, ConvertError> {
        Ok(Value::String(self.clone()))
    }

    fn can_convert(value: &Value) -> bool {
        matches!(value, Value::String(..))
    }
}

impl TypeOf for String {
    fn type_info() -> TypeInfo {
        TypeInfo::StaticType(STRING_TYPE)
    }
}

impl Convert for String {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        let string = value.as_js_string()?;

        match string.to_std_string() {
            Ok(string) => Ok(string),
            Err(error) => Err(ConvertError::from(ConvertErrorKind::InvalidString { error })),
        }
    }

    fn to_value(&self) -> Result<Value, ConvertError> {
        Ok(Value::String(JsString::from(self.as_str())))
    }

    fn can_convert(value: &Value) -> bool {
        match value {
            Value::String(string) => string.to_std_string().is_ok(),
            _ => false,
        }
    }
}

impl TypeOf for Box<str> {
    fn type_info() -> TypeInfo {
        TypeInfo::StaticType(STRING_TYPE)
    }
}

impl Convert for Box<str> {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Ok(String::from_value(value)?.into_boxed_str())
    }

    fn to_value(&self) -> Result<Value, ConvertError> {
        Ok(Value::String(JsString::from(&**self)))
    }

    fn can_convert(value: &Value) -> bool {
        String::can_convert(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Convert, ConvertErrorKind, JsString, Value};

    #[test]
    fn test_invalid_string() {
        let value = Value::String(JsString::from_utf16(vec![0xdc00]));

        assert!(!String::can_convert(&value));
        assert!(JsString::can_convert(&value));

        let error = String::from_value(value).unwrap_err();
        assert!(matches!(error.kind(), ConvertErrorKind::InvalidString { .. }));
    }
}
