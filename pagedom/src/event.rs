/// High-level page events with element targeting.
///
/// Targets are element ids; `None` means the event landed outside any
/// tracked element (e.g. a click on bare page background).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer activation of an element.
    Click { target: Option<String> },
    /// A form control's value changed.
    Input { target: Option<String> },
    /// A form control lost focus.
    Blur { target: Option<String> },
    /// A form's submit affordance was activated.
    Submit { target: Option<String> },
    /// Key press, page-wide.
    KeyDown { key: Key },
    /// Viewport width changed.
    Resize { width: u32 },
    /// Vertical scroll position changed.
    Scroll { y: u32 },
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
}
