use crate::error::{Error, Result};
use crate::value::AttrValue;
use encoding_rs::Encoding;
use indexmap::IndexMap;
use quick_xml::events::BytesDecl;

/// Attribute key of the declared XML version.
pub const VERSION_KEY: &str = "version";
/// Attribute key of the declared character encoding.
pub const ENCODING_KEY: &str = "encoding";
/// Attribute key of the standalone document declaration.
pub const STANDALONE_KEY: &str = "standalone";

/// Version written in a declaration when the prolog sets other fields but not `version`.
pub const DEFAULT_VERSION: &str = "1.0";

/// Prolog metadata used to construct a [`Document`](crate::Document).
///
/// Fields left as `None` are omitted from the document attributes entirely.
///
/// ```
/// use xml_doc_tree::{Document, Prolog};
///
/// let doc = Document::new(Prolog::new().version("1.0").standalone(true));
/// assert_eq!(doc.attributes().len(), 2);
/// assert!(doc.attribute("encoding").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prolog {
    /// Typically `"1.0"` or `"1.1"`.
    pub version: Option<String>,
    /// Recorded as declared. Nothing in this crate transcodes according to it.
    pub encoding: Option<String>,
    pub standalone: Option<bool>,
}

impl Prolog {
    /// Prolog with no fields set.
    pub fn new() -> Prolog {
        Prolog::default()
    }

    pub fn version<S: Into<String>>(mut self, version: S) -> Prolog {
        self.version = Some(version.into());
        self
    }

    pub fn encoding<S: Into<String>>(mut self, encoding: S) -> Prolog {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn standalone(mut self, standalone: bool) -> Prolog {
        self.standalone = Some(standalone);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.version.is_none() && self.encoding.is_none() && self.standalone.is_none()
    }

    /// Attributes of a document node built from this prolog.
    ///
    /// Keys are ordered `version`, `encoding`, `standalone`, as in an XML declaration.
    pub fn into_attributes(self) -> IndexMap<String, AttrValue> {
        let mut attributes = IndexMap::new();
        if let Some(version) = self.version {
            attributes.insert(VERSION_KEY.to_string(), AttrValue::Text(version));
        }
        if let Some(encoding) = self.encoding {
            attributes.insert(ENCODING_KEY.to_string(), AttrValue::Text(encoding));
        }
        if let Some(standalone) = self.standalone {
            attributes.insert(STANDALONE_KEY.to_string(), AttrValue::Bool(standalone));
        }
        attributes
    }

    /// Reads the reserved prolog keys out of an attribute mapping.
    ///
    /// `standalone` may also be given as the text `yes` or `no`.
    /// Values of an unexpected type are treated as absent, other keys are ignored.
    pub fn from_attributes(attributes: &IndexMap<String, AttrValue>) -> Prolog {
        let text = |key: &str| {
            attributes
                .get(key)
                .and_then(AttrValue::as_str)
                .map(str::to_string)
        };
        let standalone = match attributes.get(STANDALONE_KEY) {
            Some(AttrValue::Bool(b)) => Some(*b),
            Some(AttrValue::Text(text)) => parse_yes_no(text),
            None => None,
        };
        Prolog {
            version: text(VERSION_KEY),
            encoding: text(ENCODING_KEY),
            standalone,
        }
    }

    /// Builds a prolog from a declaration read by a quick-xml reader.
    ///
    /// # Errors
    ///
    /// - [`Error::CannotDecode`]: A declared value is not valid UTF-8.
    /// - [`Error::MalformedXML`]: The version is missing, or `standalone` is neither `yes` nor `no`.
    ///
    /// The `standalone` value is compared ignoring case, so `YES` is accepted
    /// although the XML grammar only allows lowercase.
    pub fn from_decl(decl: &BytesDecl) -> Result<Prolog> {
        let version = String::from_utf8(decl.version()?.to_vec())?;
        let encoding = match decl.encoding() {
            Some(res) => Some(String::from_utf8(res?.to_vec())?),
            None => None,
        };
        let standalone = match decl.standalone() {
            Some(res) => {
                let val = res?;
                let b = parse_yes_no(std::str::from_utf8(&val)?).ok_or_else(|| {
                    Error::MalformedXML(
                        "Standalone Document Declaration has non boolean value".to_string(),
                    )
                })?;
                Some(b)
            }
            None => None,
        };
        Ok(Prolog {
            version: Some(version),
            encoding,
            standalone,
        })
    }

    /// Declaration event for a quick-xml writer.
    ///
    /// Returns `None` when no field is set, meaning no declaration should be written.
    /// A missing version is filled with [`DEFAULT_VERSION`].
    pub fn to_decl(&self) -> Option<BytesDecl<'static>> {
        declaration(&self.clone().into_attributes())
    }

    /// Resolves the declared encoding label, e.g. `"utf-16"` or `"Shift_JIS"`.
    ///
    /// Returns `None` if no encoding is declared or the label is unknown.
    pub fn encoding_scheme(&self) -> Option<&'static Encoding> {
        self.encoding
            .as_ref()
            .and_then(|label| Encoding::for_label(label.as_bytes()))
    }
}

/// Declaration built from the reserved keys of an attribute mapping, values
/// rendered with their `Display` form. `None` when none of the keys is present.
pub(crate) fn declaration(attributes: &IndexMap<String, AttrValue>) -> Option<BytesDecl<'static>> {
    let text = |key: &str| attributes.get(key).map(AttrValue::to_string);
    let version = text(VERSION_KEY);
    let encoding = text(ENCODING_KEY);
    let standalone = text(STANDALONE_KEY);
    if version.is_none() && encoding.is_none() && standalone.is_none() {
        return None;
    }
    Some(BytesDecl::new(
        version.as_deref().unwrap_or(DEFAULT_VERSION).as_bytes(),
        encoding.as_ref().map(|s| s.as_bytes()),
        standalone.as_ref().map(|s| s.as_bytes()),
    ))
}

fn parse_yes_no(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}
