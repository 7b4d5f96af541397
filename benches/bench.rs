use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xml_doc_tree::{Document, Element, Node, Prolog};

macro_rules! bench {
    ($size:literal, $name:ident, $func:path) => {
        fn $name(c: &mut Criterion) {
            c.bench_function(stringify!($name), |b| b.iter(|| $func($size)));
        }
    };
}

// Every element hangs directly off the root element.
fn build_wide(size: usize) {
    let mut doc = Document::new(Prolog::new().version("1.0").encoding("UTF-8"));
    let root = doc.root();
    let parent = Element::build("items").push_to(&mut doc, root).unwrap();
    for i in 0..size {
        Element::build("item")
            .attribute("id", i.to_string())
            .text("value")
            .push_to(&mut doc, parent)
            .unwrap();
    }
    black_box(doc);
}
bench!(100, tiny_wide, build_wide);
bench!(10_000, large_wide, build_wide);

// A single chain of nested elements, read back with text_content.
fn build_deep(size: usize) {
    let mut doc = Document::default();
    let mut parent = doc.root();
    for _ in 0..size {
        let elem = Element::new(&mut doc, "level").unwrap();
        parent.push_child(&mut doc, Node::Element(elem)).unwrap();
        parent = elem;
    }
    black_box(doc.root().text_content(&doc));
}
bench!(100, tiny_deep, build_deep);
bench!(1_000, medium_deep, build_deep);

criterion_group!(wide, tiny_wide, large_wide);
criterion_group!(deep, tiny_deep, medium_deep);
criterion_main!(wide, deep);
