use std::fmt;

/// Value of an attribute.
///
/// Ordinary attributes hold text. The `standalone` key of a document prolog
/// holds a boolean, which writers render as `yes` / `no`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrValue {
    Text(String),
    Bool(bool),
}

impl AttrValue {
    /// Returns the text if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text),
            AttrValue::Bool(_) => None,
        }
    }

    /// Returns the flag if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            AttrValue::Text(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(text) => f.write_str(text),
            AttrValue::Bool(true) => f.write_str("yes"),
            AttrValue::Bool(false) => f.write_str("no"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> AttrValue {
        AttrValue::Text(text.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> AttrValue {
        AttrValue::Text(text)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> AttrValue {
        AttrValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::AttrValue;

    #[test]
    fn test_accessors() {
        let text = AttrValue::from("1.0");
        assert_eq!(text.as_str(), Some("1.0"));
        assert_eq!(text.as_bool(), None);

        let flag = AttrValue::from(false);
        assert_eq!(flag.as_bool(), Some(false));
        assert_eq!(flag.as_str(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(AttrValue::from("UTF-8").to_string(), "UTF-8");
        assert_eq!(AttrValue::from(true).to_string(), "yes");
        assert_eq!(AttrValue::from(false).to_string(), "no");
    }
}
