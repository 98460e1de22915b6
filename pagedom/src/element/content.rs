/// What an element contains.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// A single-line form control.
    Input {
        kind: InputKind,
        value: String,
        checked: bool,
    },
    /// A multi-line form control.
    TextArea { value: String },
    /// A fixed-choice form control. An empty value means nothing is chosen.
    Select { value: String, options: Vec<String> },
}

impl Content {
    /// Whether this content is a user-editable control.
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            Content::Input { .. } | Content::TextArea { .. } | Content::Select { .. }
        )
    }
}

/// Declared kind of an input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Tel,
    Checkbox,
}
