use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Style, TableLayout, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Prefix of ids assigned by the document rather than the author.
pub const GENERATED_ID_PREFIX: &str = "__";

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{GENERATED_ID_PREFIX}{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Presentation
    pub classes: Vec<String>,
    pub style: Style,

    // Interaction
    pub clickable: bool,

    // Custom data storage (`data-*` attributes)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            content: Content::None,
            classes: Vec::new(),
            style: Style::default(),
            clickable: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    fn with_tag(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.name().trim_start_matches('#')),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::with_tag(Tag::Div)
    }

    pub fn table() -> Self {
        Self::with_tag(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::with_tag(Tag::THead)
    }

    pub fn tbody() -> Self {
        Self::with_tag(Tag::TBody)
    }

    pub fn tr() -> Self {
        Self::with_tag(Tag::Tr)
    }

    pub fn th(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::with_tag(Tag::Th)
        }
    }

    pub fn td(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::with_tag(Tag::Td)
        }
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::with_tag(Tag::Span)
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::with_tag(Tag::Text)
        }
    }

    /// Whether the id was assigned by the author rather than generated.
    pub fn has_explicit_id(&self) -> bool {
        !self.id.starts_with(GENERATED_ID_PREFIX)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Presentation
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn width(mut self, px: u16) -> Self {
        self.style.width = Some(px);
        self
    }

    pub fn table_layout(mut self, layout: TableLayout) -> Self {
        self.style.table_layout = layout;
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.append_child(child);
        }
        self
    }

    // ------------------------------------------------------------------
    // In-place mutation
    // ------------------------------------------------------------------

    /// Append a child, turning existing text content into a text node first.
    pub fn append_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(text) => {
                let text = std::mem::take(text);
                self.content = Content::Children(vec![Element::text(text), child]);
            }
        }
    }

    /// Remove every descendant carrying `class`. Returns how many were removed.
    pub fn remove_descendants_with_class(&mut self, class: &str) -> usize {
        let Content::Children(children) = &mut self.content else {
            return 0;
        };
        let before = children.len();
        children.retain(|child| !child.has_class(class));
        let mut removed = before - children.len();
        for child in children.iter_mut() {
            removed += child.remove_descendants_with_class(class);
        }
        removed
    }

    /// Take ownership of all children, leaving the element empty.
    pub fn take_children(&mut self) -> Vec<Element> {
        match std::mem::take(&mut self.content) {
            Content::Children(children) => children,
            other => {
                self.content = other;
                Vec::new()
            }
        }
    }

    /// Replace all children in one step.
    pub fn set_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    // ------------------------------------------------------------------
    // Classes
    // ------------------------------------------------------------------

    /// Add a class if not already present, like `classList.add`.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    /// Remove a class if present, like `classList.remove`.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        before != self.classes.len()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::None => {}
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
