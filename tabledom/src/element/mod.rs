mod content;
mod node;

pub use content::Content;
pub use node::{Element, GENERATED_ID_PREFIX};

use crate::types::Tag;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// First descendant (depth-first, document order) with the given tag.
pub fn query_tag(root: &Element, tag: Tag) -> Option<&Element> {
    for child in root.child_elements() {
        if child.tag == tag {
            return Some(child);
        }
        if let Some(found) = query_tag(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`query_tag`].
pub fn query_tag_mut(root: &mut Element, tag: Tag) -> Option<&mut Element> {
    for child in root.child_elements_mut() {
        if child.tag == tag {
            return Some(child);
        }
        if let Some(found) = query_tag_mut(child, tag) {
            return Some(found);
        }
    }
    None
}

/// All descendants with the given tag, in document order.
pub fn query_all_tag(root: &Element, tag: Tag) -> Vec<&Element> {
    let mut found = Vec::new();
    collect_tag(root, tag, &mut found);
    found
}

fn collect_tag<'a>(element: &'a Element, tag: Tag, found: &mut Vec<&'a Element>) {
    for child in element.child_elements() {
        if child.tag == tag {
            found.push(child);
        }
        collect_tag(child, tag, found);
    }
}
