use super::TableLayout;

/// Inline style properties the document understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    /// Explicit width in pixels (`style.width = "120px"`).
    pub width: Option<u16>,
    /// Only meaningful on `Tag::Table`.
    pub table_layout: TableLayout,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, px: u16) -> Self {
        self.width = Some(px);
        self
    }

    pub fn table_layout(mut self, layout: TableLayout) -> Self {
        self.table_layout = layout;
        self
    }

    /// Render as an inline `style` attribute value, or `None` when empty.
    pub fn to_css(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(width) = self.width {
            parts.push(format!("width: {width}px"));
        }
        if self.table_layout != TableLayout::Auto {
            parts.push(format!("table-layout: {}", self.table_layout.as_css()));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}
