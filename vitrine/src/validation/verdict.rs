/// Outcome of validating a single field.
///
/// Produced fresh on every validation call; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Verdict {
    /// The field's current value passes its rule.
    #[default]
    Valid,
    /// The field fails, with a user-facing message.
    Invalid(String),
}

impl Verdict {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}
