//! Document root, lookups and event dispatch.

use crate::element::{Element, find_element, find_element_mut};
use crate::error::DomError;
use crate::event::{Event, MouseButton};
use crate::hit::hit_test;
use crate::layout::{self, LayoutResult, Rect};
use crate::types::Tag;

/// Owns an element tree and the boxes from its last render.
///
/// Mutating the tree through [`Document::root_mut`] or
/// [`Document::get_element_by_id_mut`] leaves the layout stale until the next
/// [`Document::render`]. Click dispatch always renders first.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    layout: LayoutResult,
}

impl Document {
    pub fn new(root: Element) -> Self {
        let layout = layout::layout(&root);
        Self { root, layout }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// Look up an element and check its tag.
    pub fn element_with_tag(&self, id: &str, tag: Tag) -> Result<&Element, DomError> {
        let element = self
            .get_element_by_id(id)
            .ok_or_else(|| DomError::not_found(id))?;
        if element.tag != tag {
            return Err(DomError::WrongTag {
                id: id.to_string(),
                expected: tag,
                actual: element.tag,
            });
        }
        Ok(element)
    }

    /// Recompute boxes for the whole tree.
    pub fn render(&mut self) -> &LayoutResult {
        self.layout = layout::layout(&self.root);
        &self.layout
    }

    /// Boxes from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.layout.get(id).copied()
    }

    /// Render, then resolve a pointer click to its deepest clickable target.
    pub fn dispatch_click(&mut self, x: u16, y: u16, button: MouseButton) -> Event {
        self.render();
        let target = hit_test(&self.layout, &self.root, x, y);
        log::trace!("[document] click at ({x}, {y}) hit {target:?}");
        Event::Click {
            target,
            x,
            y,
            button,
        }
    }

    /// Left-click the center of an element's box.
    pub fn click_element(&mut self, id: &str) -> Result<Event, DomError> {
        if self.get_element_by_id(id).is_none() {
            return Err(DomError::not_found(id));
        }
        self.render();
        let rect = self
            .rect(id)
            .filter(|rect| !rect.is_empty())
            .ok_or_else(|| DomError::NotRendered { id: id.to_string() })?;
        let (x, y) = rect.center();
        Ok(self.dispatch_click(x, y, MouseButton::Left))
    }
}
