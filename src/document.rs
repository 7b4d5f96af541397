use crate::element::{Element, ElementData};
use crate::error::Result;
use crate::prolog::{self, Prolog};
use crate::value::AttrValue;
use indexmap::IndexMap;
use quick_xml::events::BytesDecl;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::trace;

static NEXT_DOCUMENT_ID: AtomicUsize = AtomicUsize::new(0);

/// A child slot of an element or of the document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    CData(String),
    PI(String),
    DocType(String),
}

impl Node {
    pub fn as_element(&self) -> Option<Element> {
        match self {
            Self::Element(elem) => Some(*elem),
            _ => None,
        }
    }

    /// Returns content if node is `Text` or `CData`.
    /// If node is `Element`, return [`Element::text_content()`].
    pub fn text_content(&self, document: &Document) -> String {
        let mut buf = String::new();
        match self {
            Node::Element(elem) => elem.build_text_content(document, &mut buf),
            Node::Text(text) | Node::CData(text) => buf.push_str(text),
            _ => {}
        }
        buf
    }
}

/// Represents an XML document.
///
/// The document owns every element of its tree. Its root is the document node,
/// an element without a name whose attributes are the prolog fields
/// (`version`, `encoding`, `standalone`) that were supplied.
///
/// # Examples
/// ```
/// use xml_doc_tree::{AttrValue, Document, Element, Node, Prolog};
///
/// let mut doc = Document::new(Prolog::new().version("1.0").encoding("UTF-8"));
/// let package = Element::new(&mut doc, "package").unwrap();
/// doc.push_child(Node::Element(package)).unwrap();
///
/// assert_eq!(doc.attribute("version"), Some(&AttrValue::from("1.0")));
/// assert_eq!(doc.root_element(), Some(package));
/// ```
#[derive(Debug)]
pub struct Document {
    pub(crate) store: Vec<ElementData>,
    container: Element,
}

impl Document {
    /// Create a new document. Only the fields set in `prolog` become attributes.
    pub fn new(prolog: Prolog) -> Document {
        let attributes = prolog.into_attributes();
        let doc = NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed);
        trace!(doc, prolog_keys = attributes.len(), "created document");
        Document {
            store: vec![ElementData::document(attributes)], // document node is id 0
            container: Element::document_node(doc),
        }
    }

    pub(crate) fn id(&self) -> usize {
        self.container.doc()
    }

    /// The document node. Every [`Element`] method works on it.
    pub fn root(&self) -> Element {
        self.container
    }

    /// Get first element of document.
    pub fn root_element(&self) -> Option<Element> {
        self.container.child_elements(self).get(0).copied()
    }

    /// Typed view of the prolog fields currently set on the document node.
    ///
    /// A reserved key holding a value of the wrong type reads as `None` here.
    /// Use [`Document::declaration()`] or [`Document::attributes()`] to see it as stored.
    pub fn prolog(&self) -> Prolog {
        Prolog::from_attributes(self.attributes())
    }

    /// XML declaration a quick-xml writer should emit before the content,
    /// or `None` if no prolog key is set.
    ///
    /// Values are written as stored, through their `Display` form, whatever their type.
    pub fn declaration(&self) -> Option<BytesDecl<'static>> {
        prolog::declaration(self.attributes())
    }
}

// Shorthands for the document node
impl Document {
    pub fn attributes(&self) -> &IndexMap<String, AttrValue> {
        self.container.attributes(self)
    }

    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.container.attribute(self, key)
    }

    pub fn set_attribute<K, V>(&mut self, key: K, value: V) -> Option<AttrValue>
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let container = self.container;
        container.set_attribute(self, key, value)
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<AttrValue> {
        let container = self.container;
        container.remove_attribute(self, key)
    }

    pub fn children(&self) -> &[Node] {
        self.container.children(self)
    }

    /// Push a node to the end of the document content.
    ///
    /// # Errors
    ///
    /// See [`Element::push_child()`].
    pub fn push_child(&mut self, node: Node) -> Result<()> {
        let container = self.container;
        container.push_child(self, node)
    }
}

impl Default for Document {
    fn default() -> Document {
        Document::new(Prolog::default())
    }
}
