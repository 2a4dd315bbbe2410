use std::fmt;

/// Static type information.
#[derive(Debug, PartialEq, Eq)]
pub struct StaticType {
    /// The name of the static type.
    pub name: &'static str,
}

/// The specialized type information for `undefined`.
pub static UNDEFINED_TYPE: &StaticType = &StaticType { name: "undefined" };

/// The specialized type information for `null`.
pub static NULL_TYPE: &StaticType = &StaticType { name: "null" };

/// The specialized type information for a boolean.
pub static BOOL_TYPE: &StaticType = &StaticType { name: "boolean" };

/// The specialized type information for a number.
pub static NUMBER_TYPE: &StaticType = &StaticType { name: "number" };

/// The specialized type information for a string.
pub static STRING_TYPE: &StaticType = &StaticType { name: "string" };

/// The specialized type information for an object.
pub static OBJECT_TYPE: &StaticType = &StaticType { name: "object" };

/// The specialized type information for an array.
pub static ARRAY_TYPE: &StaticType = &StaticType { name: "array" };

/// The specialized type information for a function.
pub static FUNCTION_TYPE: &StaticType = &StaticType { name: "function" };

/// Type information about a value, that can be printed for human consumption
/// through its [Display][fmt::Display] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeInfo {
    /// The static type of a value.
    StaticType(&'static StaticType),
    /// An instance of the named class.
    Class(Box<str>),
    /// An object provided by the host with the given name.
    Host(Box<str>),
    /// A value which may also be `null` or `undefined`.
    Optional(Box<TypeInfo>),
    /// One of several alternatives.
    Union(Vec<TypeInfo>),
    /// Any dynamic value.
    Any,
}

impl TypeInfo {
    /// Test if the type info is the given static type.
    pub fn is(&self, ty: &'static StaticType) -> bool {
        matches!(self, Self::StaticType(this) if *this == ty)
    }
}

impl From<&'static StaticType> for TypeInfo {
    fn from(ty: &'static StaticType) -> Self {
        Self::StaticType(ty)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticType(ty) => {
                write!(fmt, "{}", ty.name)?;
            }
            Self::Class(class) => {
                write!(fmt, "class {}", class)?;
            }
            Self::Host(name) => {
                write!(fmt, "host object {}", name)?;
            }
            Self::Optional(inner) => {
                write!(fmt, "{}?", inner)?;
            }
            Self::Union(alternatives) => {
                let mut it = alternatives.iter();

                if let Some(first) = it.next() {
                    write!(fmt, "{}", first)?;
                }

                for alternative in it {
                    write!(fmt, " | {}", alternative)?;
                }
            }
            Self::Any => {
                write!(fmt, "any")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TypeInfo::from(NUMBER_TYPE).to_string(), "number");
        assert_eq!(TypeInfo::Class("Point".into()).to_string(), "class Point");

        let union = TypeInfo::Union(vec![
            TypeInfo::from(STRING_TYPE),
            TypeInfo::Optional(Box::new(TypeInfo::from(NUMBER_TYPE))),
        ]);

        assert_eq!(union.to_string(), "string | number?");
    }
}
