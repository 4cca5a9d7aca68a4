/// Element kinds understood by the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    /// Generic container, used as a document root holding several tables.
    #[default]
    Div,
    Table,
    THead,
    TBody,
    Tr,
    Th,
    Td,
    Span,
    /// Bare text node.
    Text,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Table => "table",
            Tag::THead => "thead",
            Tag::TBody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
            Tag::Span => "span",
            Tag::Text => "#text",
        }
    }

    /// Whether this tag is a table cell (header or data).
    pub fn is_cell(&self) -> bool {
        matches!(self, Tag::Th | Tag::Td)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// CSS `table-layout` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    /// Column widths follow content.
    #[default]
    Auto,
    /// Column widths follow the explicit header widths.
    Fixed,
}

impl TableLayout {
    pub fn as_css(&self) -> &'static str {
        match self {
            TableLayout::Auto => "auto",
            TableLayout::Fixed => "fixed",
        }
    }
}
