use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, InputKind};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the document tree.
///
/// Identity, classes and attributes mirror what page behaviors key off:
/// handlers locate elements by id, match them by class, and read declarative
/// wiring (`data-*`, `href`, `role`) from attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,

    // Matching surface
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,

    // Content
    pub content: Content,

    // Control state
    pub required: bool,
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            classes: Vec::new(),
            attrs: HashMap::new(),
            content: Content::None,
            required: false,
            disabled: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create a single-line input control.
    pub fn input(kind: InputKind) -> Self {
        Self {
            id: generate_id("input"),
            content: Content::Input {
                kind,
                value: String::new(),
                checked: false,
            },
            ..Default::default()
        }
    }

    pub fn checkbox() -> Self {
        Self::input(InputKind::Checkbox)
    }

    pub fn text_area() -> Self {
        Self {
            id: generate_id("textarea"),
            content: Content::TextArea {
                value: String::new(),
            },
            ..Default::default()
        }
    }

    pub fn select(options: Vec<String>) -> Self {
        Self {
            id: generate_id("select"),
            content: Content::Select {
                value: String::new(),
                options,
            },
            ..Default::default()
        }
    }

    /// Create a button with a text label.
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            content: Content::Text(label.into()),
            ..Default::default()
        }
    }

    /// Create a link with an `href` attribute.
    pub fn anchor(href: impl Into<String>) -> Self {
        let mut attrs = HashMap::new();
        attrs.insert("href".to_string(), href.into());
        Self {
            id: generate_id("a"),
            attrs,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Matching surface
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    // Control state
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.set_checked(checked);
        self
    }

    // Tree construction
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        for child in children {
            self.push_child(child);
        }
        self
    }

    /// Append a child, converting non-container content if needed.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            other => {
                log::debug!("push_child replacing {other:?} on #{}", self.id);
                self.content = Content::Children(vec![child]);
            }
        }
    }

    /// Remove a direct child by id. Returns whether anything was removed.
    pub fn remove_child(&mut self, id: &str) -> bool {
        if let Content::Children(children) = &mut self.content {
            let before = children.len();
            children.retain(|c| c.id != id);
            return children.len() != before;
        }
        false
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    // Class list
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    // Attributes
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }

    // Content access
    /// Text content, if this element carries text.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Replace this element's content with text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// Current value of a form control.
    pub fn control_value(&self) -> Option<&str> {
        match &self.content {
            Content::Input { value, .. }
            | Content::TextArea { value }
            | Content::Select { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Set the value of a form control. Ignored on non-controls.
    pub fn set_value(&mut self, value: impl Into<String>) {
        match &mut self.content {
            Content::Input { value: v, .. }
            | Content::TextArea { value: v }
            | Content::Select { value: v, .. } => *v = value.into(),
            other => log::debug!("set_value on non-control {other:?} (#{})", self.id),
        }
    }

    /// Checked state of a checkbox. False for anything else.
    pub fn is_checked(&self) -> bool {
        matches!(self.content, Content::Input { checked: true, .. })
    }

    pub fn set_checked(&mut self, checked: bool) {
        if let Content::Input { checked: c, .. } = &mut self.content {
            *c = checked;
        }
    }

    /// Whether this element is a user-editable control.
    pub fn is_control(&self) -> bool {
        self.content.is_control()
    }

    /// The input kind, for input controls.
    pub fn input_kind(&self) -> Option<InputKind> {
        match self.content {
            Content::Input { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
