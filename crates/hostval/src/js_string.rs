use std::fmt;
use std::string::FromUtf16Error;

/// A string in the representation of the host runtime: a sequence of UTF-16
/// code units which is not guaranteed to be well-formed.
#[derive(Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsString {
    units: Box<[u16]>,
}

impl JsString {
    /// Construct a string from raw UTF-16 code units.
    pub fn from_utf16<U>(units: U) -> Self
    where
        U: Into<Vec<u16>>,
    {
        Self {
            units: units.into().into_boxed_slice(),
        }
    }

    /// Access the raw code units of the string.
    pub fn as_utf16(&self) -> &[u16] {
        &self.units
    }

    /// The number of code units in the string.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Test if the string is empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Decode into a UTF-8 string.
    ///
    /// Fails if the string contains an unpaired surrogate.
    pub fn to_std_string(&self) -> Result<String, FromUtf16Error> {
        String::from_utf16(&self.units)
    }

    /// Decode into a UTF-8 string, replacing unpaired surrogates with
    /// `U+FFFD`.
    pub fn to_std_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl From<&str> for JsString {
    fn from(string: &str) -> Self {
        Self::from_utf16(string.encode_utf16().collect::<Vec<_>>())
    }
}

impl From<String> for JsString {
    fn from(string: String) -> Self {
        Self::from(string.as_str())
    }
}

impl From<&String> for JsString {
    fn from(string: &String) -> Self {
        Self::from(string.as_str())
    }
}

impl PartialEq<str> for JsString {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for JsString {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.units.iter().copied()) {
            write!(fmt, "{}", c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }

        Ok(())
    }
}

impl fmt::Debug for JsString {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{:?}", self.to_std_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::JsString;

    #[test]
    fn test_decode() {
        let s = JsString::from("héllo 🦀");
        assert_eq!(s.to_std_string().unwrap(), "héllo 🦀");
        assert_eq!(s, "héllo 🦀");
        assert_eq!(s.to_string(), "héllo 🦀");

        // an unpaired high surrogate.
        let s = JsString::from_utf16(vec![0x61, 0xd83e]);
        assert!(s.to_std_string().is_err());
        assert_eq!(s.to_std_string_lossy(), "a\u{fffd}");
    }
}
