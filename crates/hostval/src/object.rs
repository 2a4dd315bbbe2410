use crate::collections::HashMap;
use crate::{ConvertError, ConvertErrorKind, JsString, TypeInfo, TypeOf, Value, OBJECT_TYPE};
use std::fmt;
use std::rc::Rc;

/// A getter backing an accessor property.
///
/// The getter runs every time the property is read.
pub type Getter = Rc<dyn Fn() -> anyhow::Result<Value>>;

/// What kind of object the host considers an [Object] to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    /// A plain key-value object whose prototype is the object prototype.
    Plain,
    /// An object without a prototype.
    NullPrototype,
    /// An array, whose own properties are its indexes.
    Array,
    /// A function object.
    Function {
        /// The name of the function.
        name: Box<str>,
    },
    /// An instance of a class.
    Instance {
        /// The name of the class.
        class: Box<str>,
    },
    /// An object implemented by the host.
    Host {
        /// The name of the host object.
        name: Box<str>,
    },
}

/// An own property of an object.
#[derive(Clone)]
pub enum Property {
    /// A property storing a value.
    Data(Value),
    /// A property computed by a getter.
    Accessor(Getter),
}

impl fmt::Debug for Property {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(value) => fmt::Debug::fmt(value, fmt),
            Self::Accessor(..) => write!(fmt, "<getter>"),
        }
    }
}

/// An object of the host runtime.
///
/// Own properties are enumerated in insertion order. Overwriting a property
/// keeps its original position.
#[derive(Clone)]
pub struct Object {
    kind: ObjectKind,
    names: Vec<JsString>,
    properties: HashMap<JsString, Property>,
}

impl Object {
    /// Construct a new plain object.
    pub fn new() -> Self {
        Self::with_kind(ObjectKind::Plain)
    }

    /// Construct a new plain object with room for `cap` properties.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            kind: ObjectKind::Plain,
            names: Vec::with_capacity(cap),
            properties: HashMap::with_capacity(cap),
        }
    }

    /// Construct a new empty object of the given kind.
    pub fn with_kind(kind: ObjectKind) -> Self {
        Self {
            kind,
            names: Vec::new(),
            properties: HashMap::new(),
        }
    }

    /// Construct an array object from the given elements.
    pub fn array<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut object = Self::with_kind(ObjectKind::Array);

        for (index, value) in elements.into_iter().enumerate() {
            object.set(index.to_string(), value);
        }

        object
    }

    /// Get the kind of the object.
    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    /// Test if this is a plain key-value object.
    ///
    /// Arrays, functions, class instances, host objects and objects without a
    /// prototype are not plain.
    pub fn is_plain(&self) -> bool {
        matches!(self.kind, ObjectKind::Plain)
    }

    /// Test if the object is an array.
    pub fn is_array(&self) -> bool {
        matches!(self.kind, ObjectKind::Array)
    }

    /// The number of own properties.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Test if the object has no own properties.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The names of the object's own properties in enumeration order.
    pub fn own_property_names(&self) -> &[JsString] {
        &self.names
    }

    /// Test if the object has an own property with the given name.
    pub fn contains_key(&self, name: &JsString) -> bool {
        self.properties.contains_key(name)
    }

    /// Read the property with the given name.
    ///
    /// Missing properties read as `undefined`. Reading an accessor property
    /// runs its getter, which might fail.
    pub fn get(&self, name: &JsString) -> Result<Value, ConvertError> {
        match self.properties.get(name) {
            Some(Property::Data(value)) => Ok(value.clone()),
            Some(Property::Accessor(getter)) => match getter() {
                Ok(value) => Ok(value),
                Err(error) => Err(ConvertError::from(ConvertErrorKind::Getter {
                    key: name.to_std_string_lossy(),
                    error,
                })),
            },
            None => Ok(Value::Undefined),
        }
    }

    /// Set a data property, replacing any existing property with the same
    /// name.
    pub fn set<K>(&mut self, name: K, value: Value)
    where
        K: Into<JsString>,
    {
        self.insert(name.into(), Property::Data(value));
    }

    /// Define an accessor property backed by the given getter.
    pub fn define_getter<K, F>(&mut self, name: K, getter: F)
    where
        K: Into<JsString>,
        F: 'static + Fn() -> anyhow::Result<Value>,
    {
        self.insert(name.into(), Property::Accessor(Rc::new(getter)));
    }

    /// Iterate over the own properties in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&JsString, &Property)> + '_ {
        self.names
            .iter()
            .filter_map(move |name| Some((name, self.properties.get(name)?)))
    }

    fn insert(&mut self, name: JsString, property: Property) {
        if self.properties.insert(name.clone(), property).is_none() {
            self.names.push(name);
        }
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeOf for Object {
    fn type_info() -> TypeInfo {
        TypeInfo::StaticType(OBJECT_TYPE)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ObjectKind::Array => fmt
                .debug_list()
                .entries(self.iter().map(|(_, p)| p))
                .finish(),
            _ => fmt.debug_map().entries(self.iter()).finish(),
        }
    }
}
