//! Point-to-element resolution over a computed layout.

use crate::element::Element;
use crate::layout::LayoutResult;
use crate::types::Tag;

/// Elements whose boxes contain the point, outermost first.
///
/// Among siblings the later one wins, matching paint order. Elements without
/// a box (text nodes, glyph spans) end the descent.
fn path_at<'a>(layout: &LayoutResult, root: &'a Element, x: u16, y: u16) -> Vec<&'a Element> {
    let mut path = Vec::new();
    let mut current = Some(root);
    while let Some(element) = current {
        if !layout.get(&element.id).is_some_and(|rect| rect.contains(x, y)) {
            break;
        }
        path.push(element);
        current = element
            .child_elements()
            .iter()
            .rev()
            .filter(|child| child.tag != Tag::Text)
            .find(|child| layout.get(&child.id).is_some_and(|rect| rect.contains(x, y)));
    }
    path
}

/// Id of the innermost clickable element at `(x, y)`.
///
/// A click on a non-clickable cell or span resolves to the nearest clickable
/// ancestor, the way a DOM click bubbles to the element holding the listener.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    path_at(layout, root, x, y)
        .into_iter()
        .rev()
        .find(|element| element.clickable)
        .map(|element| element.id.clone())
}

/// Id of the innermost element at `(x, y)`, clickable or not.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    path_at(layout, root, x, y)
        .last()
        .map(|element| element.id.clone())
}
