use crate::{AccessError, TypeInfo, TypeOf};
use std::string::FromUtf16Error;
use thiserror::Error;

/// An error raised while converting between host values and Rust types.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ConvertError {
    kind: Box<ConvertErrorKind>,
}

impl<E> From<E> for ConvertError
where
    ConvertErrorKind: From<E>,
{
    fn from(err: E) -> Self {
        Self {
            kind: Box::new(ConvertErrorKind::from(err)),
        }
    }
}

impl ConvertError {
    /// Construct an expected error.
    pub fn expected<T>(actual: TypeInfo) -> Self
    where
        T: ?Sized + TypeOf,
    {
        Self::from(ConvertErrorKind::TypeMismatch {
            expected: T::type_info(),
            actual,
        })
    }

    /// Wrap an error raised while converting the value at the given key.
    pub fn element<K>(key: K, error: ConvertError) -> Self
    where
        K: Into<String>,
    {
        Self::from(ConvertErrorKind::ElementConversionFailed {
            key: key.into(),
            error,
        })
    }

    /// Access the underlying error kind.
    pub fn kind(&self) -> &ConvertErrorKind {
        &self.kind
    }

    /// Convert into the underlying error kind.
    pub fn into_kind(self) -> ConvertErrorKind {
        *self.kind
    }

    /// The innermost error kind, looking through element errors.
    pub fn root(&self) -> &ConvertErrorKind {
        let mut current = self;

        while let ConvertErrorKind::ElementConversionFailed { error, .. } = &*current.kind {
            current = error;
        }

        &current.kind
    }

    /// The keys leading up to the innermost error, outermost first.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;

        while let ConvertErrorKind::ElementConversionFailed { key, error } = &*current.kind {
            path.push(key.as_str());
            current = error;
        }

        path
    }
}

/// The kind of error encountered.
#[derive(Debug, Error)]
pub enum ConvertErrorKind {
    /// The value was not of the expected type.
    #[error("expected `{expected}` but found `{actual}`")]
    TypeMismatch {
        /// The expected type.
        expected: TypeInfo,
        /// The actual type observed instead.
        actual: TypeInfo,
    },
    /// Converting a nested value failed.
    #[error("at `{key}`: {error}")]
    ElementConversionFailed {
        /// The key or index of the nested value.
        key: String,
        /// The source error.
        #[source]
        error: ConvertError,
    },
    /// A property name could not be decoded into a string key.
    #[error("failed to decode property name: {error}")]
    KeyDecodingFailed {
        /// The source error.
        #[source]
        error: FromUtf16Error,
    },
    /// A string value could not be decoded.
    #[error("failed to decode string: {error}")]
    InvalidString {
        /// The source error.
        #[source]
        error: FromUtf16Error,
    },
    /// Failure to convert a number into an integer.
    #[error("failed to convert number `{from}` to integer `{to}`")]
    ValueToIntegerCoercion {
        /// Number we tried to convert from.
        from: f64,
        /// Integer type we tried to convert to.
        to: &'static str,
    },
    /// Failure to convert an integer into a number.
    #[error("failed to convert integer `{from}` to a number without loss of precision")]
    IntegerToValueCoercion {
        /// Integer we tried to convert from.
        from: i128,
    },
    /// The getter of an accessor property failed.
    #[error("getter for `{key}` failed: {error}")]
    Getter {
        /// The name of the property.
        key: String,
        /// The error raised by the getter.
        #[source]
        error: anyhow::Error,
    },
    /// A host value could not be accessed.
    #[error("failed to access value: {error}")]
    Access {
        /// Source error.
        #[from]
        error: AccessError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NUMBER_TYPE, STRING_TYPE};

    #[test]
    fn test_path_and_root() {
        let inner = ConvertError::from(ConvertErrorKind::TypeMismatch {
            expected: TypeInfo::from(NUMBER_TYPE),
            actual: TypeInfo::from(STRING_TYPE),
        });

        let error = ConvertError::element("a", ConvertError::element("x", inner));

        assert_eq!(error.path(), ["a", "x"]);
        assert!(matches!(error.root(), ConvertErrorKind::TypeMismatch { .. }));
        assert_eq!(
            error.to_string(),
            "at `a`: at `x`: expected `number` but found `string`"
        );
    }
}
