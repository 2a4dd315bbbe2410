//! Conversions between the objects of a dynamic host runtime and typed Rust
//! containers.
//!
//! Every convertible type implements [Convert], which provides three
//! operations:
//!
//! * [Convert::from_value] converts a dynamic [Value] into the Rust type.
//! * [Convert::to_value] converts the Rust type back into a fresh [Value].
//! * [Convert::can_convert] is a cheap, non-failing probe used to pick
//!   between competing converters, like the alternatives of an [Either].
//!
//! String-keyed maps are converted from and to plain host objects, and since
//! a map is itself [Convert] they nest to any depth.
//!
//! ```
//! use hostval::{Convert, Object, Value};
//! use std::collections::HashMap;
//!
//! let mut object = Object::new();
//! object.set("a", Value::from(1.0));
//! object.set("b", Value::from(2.0));
//! let value = Value::object(object);
//!
//! assert!(HashMap::<String, f64>::can_convert(&value));
//! assert!(!HashMap::<String, String>::can_convert(&value));
//!
//! let map = HashMap::<String, f64>::from_value(value)?;
//! assert_eq!(map.get("b"), Some(&2.0));
//! # Ok::<_, hostval::ConvertError>(())
//! ```

#![deny(missing_docs)]

mod convert;
mod either;
mod error;
mod js_string;
mod map;
mod object;
mod option;
mod primitive;
#[cfg(feature = "serde")]
mod serde;
mod shared;
mod string;
mod type_info;
mod type_of;
mod value;
mod vec;

pub use self::convert::Convert;
pub use self::either::Either;
pub use self::error::{ConvertError, ConvertErrorKind};
pub use self::js_string::JsString;
pub use self::object::{Getter, Object, ObjectKind, Property};
pub use self::shared::{AccessError, Shared};
pub use self::type_info::{
    StaticType, TypeInfo, ARRAY_TYPE, BOOL_TYPE, FUNCTION_TYPE, NULL_TYPE, NUMBER_TYPE,
    OBJECT_TYPE, STRING_TYPE, UNDEFINED_TYPE,
};
pub use self::type_of::TypeOf;
pub use self::value::Value;

mod collections {
    pub use hashbrown::HashMap;
}
