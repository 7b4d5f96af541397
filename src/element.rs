use crate::document::{Document, Node};
use crate::error::{Error, Result};
use crate::value::AttrValue;
use indexmap::IndexMap;
use tracing::{debug, trace};

/// What an element is: the document node, or an ordinary named element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Document,
    Named(String),
}

#[derive(Debug)]
pub(crate) struct ElementData {
    kind: ElementKind,
    attributes: IndexMap<String, AttrValue>, // insertion order is kept for writers
    parent: Option<Element>,
    children: Vec<Node>,
}

impl ElementData {
    pub(crate) fn document(attributes: IndexMap<String, AttrValue>) -> ElementData {
        ElementData {
            kind: ElementKind::Document,
            attributes,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Represents an XML element, or the document node itself.
///
/// This struct only contains usize ids and implements trait `Copy`.
/// So you do not need to bother with having a reference.
///
/// Because the actual data of the element is stored in [`Document`],
/// most methods take `&Document` or `&mut Document` as their first argument.
/// The element remembers which document it was created in. Fallible methods
/// return [`Error::ForeignElement`] when given another document, the others panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    doc: usize,
    id: usize,
}

impl Element {
    /// Create a new empty element with name. It has no parent until pushed somewhere.
    ///
    /// The element data lives in `document` until the document is dropped,
    /// even if the element is never attached or is removed later.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidName`]: `name` is empty.
    pub fn new<S: Into<String>>(document: &mut Document, name: S) -> Result<Element> {
        let name = name.into();
        if name.is_empty() {
            debug!("rejected element with empty name");
            return Err(Error::InvalidName);
        }
        let elem = Element {
            doc: document.id(),
            id: document.store.len(),
        };
        document.store.push(ElementData {
            kind: ElementKind::Named(name),
            attributes: IndexMap::new(),
            parent: None,
            children: Vec::new(),
        });
        trace!(id = elem.id, "created element");
        Ok(elem)
    }

    /// Start building an element. See [`ElementBuilder`].
    pub fn build<S: Into<String>>(name: S) -> ElementBuilder {
        ElementBuilder::new(name)
    }

    pub(crate) fn document_node(doc: usize) -> Element {
        Element { doc, id: 0 }
    }

    pub(crate) fn doc(&self) -> usize {
        self.doc
    }

    /// Whether this is the document node of its tree.
    pub fn is_document(&self) -> bool {
        self.id == 0
    }

    /// Whether this element was created in `document`.
    pub fn belongs_to(&self, document: &Document) -> bool {
        self.doc == document.id()
    }

    pub(crate) fn check_owner(&self, document: &Document) -> Result<()> {
        if self.belongs_to(document) {
            Ok(())
        } else {
            debug!(id = self.id, "rejected element of another document");
            Err(Error::ForeignElement)
        }
    }
}

impl Element {
    fn data<'a>(&self, document: &'a Document) -> &'a ElementData {
        assert!(self.belongs_to(document), "element used with another document");
        &document.store[self.id]
    }

    fn mut_data<'a>(&self, document: &'a mut Document) -> &'a mut ElementData {
        assert!(self.belongs_to(document), "element used with another document");
        &mut document.store[self.id]
    }

    pub fn kind<'a>(&self, document: &'a Document) -> &'a ElementKind {
        &self.data(document).kind
    }

    /// Name of the element. `None` for the document node.
    pub fn name<'a>(&self, document: &'a Document) -> Option<&'a str> {
        match &self.data(document).kind {
            ElementKind::Named(name) => Some(name),
            ElementKind::Document => None,
        }
    }

    /// # Errors
    ///
    /// - [`Error::ForeignElement`]: The element belongs to another document.
    /// - [`Error::DocumentHasNoName`]: Called on the document node.
    /// - [`Error::InvalidName`]: `name` is empty.
    pub fn set_name<S: Into<String>>(&self, document: &mut Document, name: S) -> Result<()> {
        self.check_owner(document)?;
        if self.is_document() {
            return Err(Error::DocumentHasNoName);
        }
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidName);
        }
        self.mut_data(document).kind = ElementKind::Named(name);
        Ok(())
    }

    /// Get attributes of element, in insertion order.
    pub fn attributes<'a>(&self, document: &'a Document) -> &'a IndexMap<String, AttrValue> {
        &self.data(document).attributes
    }

    pub fn attribute<'a>(&self, document: &'a Document, key: &str) -> Option<&'a AttrValue> {
        self.attributes(document).get(key)
    }

    /// Inserts or overwrites an attribute, returning the previous value.
    ///
    /// An overwritten key keeps its position.
    pub fn set_attribute<K, V>(&self, document: &mut Document, key: K, value: V) -> Option<AttrValue>
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let key = key.into();
        trace!(id = self.id, key = %key, "set attribute");
        self.mut_data(document).attributes.insert(key, value.into())
    }

    /// Removes an attribute, returning its value. Does nothing if it is absent.
    pub fn remove_attribute(&self, document: &mut Document, key: &str) -> Option<AttrValue> {
        self.mut_data(document).attributes.shift_remove(key)
    }

    pub fn parent(&self, document: &Document) -> Option<Element> {
        self.data(document).parent
    }

    /// ```ignore
    /// self.parent(document).is_some()
    /// ```
    pub fn has_parent(&self, document: &Document) -> bool {
        self.parent(document).is_some()
    }

    pub fn children<'a>(&self, document: &'a Document) -> &'a [Node] {
        &self.data(document).children
    }

    /// ```ignore
    /// !self.children(document).is_empty()
    /// ```
    pub fn has_children(&self, document: &Document) -> bool {
        !self.children(document).is_empty()
    }

    pub fn child_elements(&self, document: &Document) -> Vec<Element> {
        self.children(document)
            .iter()
            .filter_map(Node::as_element)
            .collect()
    }

    /// Find first direct child element with name `name`.
    pub fn find(&self, document: &Document, name: &str) -> Option<Element> {
        self.children(document)
            .iter()
            .filter_map(Node::as_element)
            .find(|e| e.name(document) == Some(name))
    }

    /// Whether `self` is `other` or one of its ancestors.
    fn is_ancestor_or_self(&self, document: &Document, other: Element) -> bool {
        let mut current = Some(other);
        while let Some(elem) = current {
            if elem == *self {
                return true;
            }
            current = elem.parent(document);
        }
        false
    }

    /// Equivalent to `vec.push()`.
    ///
    /// # Errors
    ///
    /// - [`Error::ForeignElement`]: `self` or the pushed element belongs to another document.
    /// - [`Error::DocumentCannotMove`]: The document node cannot have a parent.
    /// - [`Error::CyclicAppend`]: `node` is `self` or one of its ancestors.
    /// - [`Error::HasAParent`]: If node is an element, it must not have a parent.
    /// Call `elem.detach()` before.
    pub fn push_child(&self, document: &mut Document, node: Node) -> Result<()> {
        self.check_owner(document)?;
        if let Node::Element(elem) = node {
            elem.check_owner(document)?;
            if elem.is_document() {
                debug!("rejected moving the document node");
                return Err(Error::DocumentCannotMove);
            }
            // A childless element cannot be an ancestor of anything else.
            if elem == *self
                || (elem.has_children(document) && elem.is_ancestor_or_self(document, *self))
            {
                debug!(parent = self.id, child = elem.id, "rejected cyclic append");
                return Err(Error::CyclicAppend);
            }
            let data = elem.mut_data(document);
            if data.parent.is_some() {
                return Err(Error::HasAParent);
            }
            data.parent = Some(*self);
        }
        trace!(parent = self.id, "push child");
        self.mut_data(document).children.push(node);
        Ok(())
    }

    /// Removes the child at `index`. A removed element no longer has a parent
    /// and can be pushed elsewhere.
    ///
    /// Returns `None` if `index` is out of bounds. The removed element keeps
    /// its data in the document, so it can be pushed back later.
    pub fn remove_child(&self, document: &mut Document, index: usize) -> Option<Node> {
        let children = &mut self.mut_data(document).children;
        if index >= children.len() {
            return None;
        }
        let node = children.remove(index);
        if let Node::Element(elem) = &node {
            elem.mut_data(document).parent = None;
        }
        Some(node)
    }

    /// Remove element from its parent. Does nothing if it has none.
    ///
    /// # Errors
    ///
    /// - [`Error::ForeignElement`]: The element belongs to another document.
    /// - [`Error::DocumentCannotMove`]: Called on the document node.
    pub fn detach(&self, document: &mut Document) -> Result<()> {
        self.check_owner(document)?;
        if self.is_document() {
            return Err(Error::DocumentCannotMove);
        }
        let parent = match self.parent(document) {
            Some(parent) => parent,
            None => return Ok(()),
        };
        let pos = parent
            .children(document)
            .iter()
            .position(|n| n.as_element() == Some(*self));
        if let Some(pos) = pos {
            parent.mut_data(document).children.remove(pos);
        }
        self.mut_data(document).parent = None;
        Ok(())
    }

    // Iterative so that deep trees do not exhaust the call stack.
    pub(crate) fn build_text_content(&self, document: &Document, buf: &mut String) {
        let mut stack = vec![self.children(document).iter()];
        while let Some(iter) = stack.last_mut() {
            match iter.next() {
                Some(Node::Element(elem)) => stack.push(elem.children(document).iter()),
                Some(Node::Text(text)) | Some(Node::CData(text)) => buf.push_str(text),
                Some(_) => {}
                None => {
                    stack.pop();
                }
            }
        }
    }

    /// Concatenated text and CDATA content of all descendants, in document order.
    ///
    /// Implementation of [Node.textContent](https://developer.mozilla.org/en-US/docs/Web/API/Node/textContent)
    pub fn text_content(&self, document: &Document) -> String {
        let mut buf = String::new();
        self.build_text_content(document, &mut buf);
        buf
    }
}

/// Builds an element with attributes and text in one expression.
///
/// ```
/// use xml_doc_tree::{Document, Element, Prolog};
///
/// let mut doc = Document::new(Prolog::new().version("1.0"));
/// let root = doc.root();
/// let package = Element::build("package")
///     .attribute("unique-identifier", "id")
///     .push_to(&mut doc, root)
///     .unwrap();
/// Element::build("title")
///     .text("Alice")
///     .push_to(&mut doc, package)
///     .unwrap();
/// assert_eq!(package.text_content(&doc), "Alice");
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    name: String,
    attributes: Vec<(String, AttrValue)>,
    children: Vec<Node>,
}

impl ElementBuilder {
    fn new<S: Into<String>>(name: S) -> ElementBuilder {
        ElementBuilder {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Appends a text node.
    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Create the element in `document` without a parent.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidName`]: The name is empty.
    pub fn finish(self, document: &mut Document) -> Result<Element> {
        let elem = Element::new(document, self.name)?;
        let data = elem.mut_data(document);
        data.attributes.extend(self.attributes);
        data.children.extend(self.children);
        Ok(elem)
    }

    /// Create the element and push it to `parent`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidName`]: The name is empty.
    /// - [`Error::ForeignElement`]: `parent` belongs to another document.
    pub fn push_to(self, document: &mut Document, parent: Element) -> Result<Element> {
        parent.check_owner(document)?;
        let elem = self.finish(document)?;
        parent.push_child(document, Node::Element(elem))?;
        Ok(elem)
    }
}
