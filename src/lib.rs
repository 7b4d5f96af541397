//! In-memory XML document tree.
//!
//! A [`Document`] owns a tree of [`Element`]s. Its root is the document node,
//! which has no name and carries the prolog (`version`, `encoding`, `standalone`)
//! as attributes instead. Parsing and writing markup is left to other crates;
//! [`Prolog::from_decl`] and [`Document::declaration`] connect the prolog to the
//! declaration events of `quick-xml`.
//!
//! ```
//! use xml_doc_tree::{Document, Element, Node, Prolog};
//!
//! let mut doc = Document::new(Prolog::new().version("1.0").standalone(true));
//! let root = Element::new(&mut doc, "root").unwrap();
//! doc.push_child(Node::Element(root)).unwrap();
//! root.set_attribute(&mut doc, "id", "main");
//!
//! assert_eq!(doc.prolog().encoding, None);
//! assert_eq!(root.name(&doc), Some("root"));
//! ```

mod document;
mod element;
mod error;
mod prolog;
mod value;

pub use crate::document::{Document, Node};
pub use crate::element::{Element, ElementBuilder, ElementKind};
pub use crate::error::{Error, Result};
pub use crate::prolog::{Prolog, DEFAULT_VERSION, ENCODING_KEY, STANDALONE_KEY, VERSION_KEY};
pub use crate::value::AttrValue;
pub use indexmap::IndexMap;
