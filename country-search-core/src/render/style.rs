//! Inline style lookup

/// Element kinds the renderer styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    ListContainer,
    ListItem,
    Image,
    Paragraph,
    Heading,
    LabelSpan,
}

impl ElementKind {
    pub const ALL: [Self; 6] = [
        Self::ListContainer,
        Self::ListItem,
        Self::Image,
        Self::Paragraph,
        Self::Heading,
        Self::LabelSpan,
    ];
}

/// CSS declaration string for an element kind.
///
/// Declarations are `property:value` pairs joined by `;`, ready for a
/// `style` attribute.
pub const fn style_for(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::ListContainer => "display:flex;flex-direction:column;gap:10px;padding:0",
        ElementKind::ListItem => "list-style:none;display:inline-flex;gap:10px;cursor:pointer",
        ElementKind::Image => "width:35px",
        ElementKind::Paragraph => "margin:0",
        ElementKind::Heading => "font-size:30px;font-weight:bold;margin:0",
        ElementKind::LabelSpan => "font-weight:bold",
    }
}
