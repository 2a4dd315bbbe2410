use crate::TypeInfo;

/// Trait used for Rust types for which we can describe the expected host
/// type.
pub trait TypeOf {
    /// Access diagnostical information on the expected host type.
    fn type_info() -> TypeInfo;
}

/// Blanket implementation for references.
impl<T: ?Sized> TypeOf for &T
where
    T: TypeOf,
{
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}
