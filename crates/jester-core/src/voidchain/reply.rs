//! Wish classification.

use std::fmt;

/// The void's answer to a wish, chosen by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoidReply {
    /// The wish mentions "lys" (light).
    Light,
    /// The wish mentions "kaffe" (coffee).
    Coffee,
    /// Neither keyword matched.
    Drift,
}

impl VoidReply {
    /// Classify a raw wish, case-insensitively. "lys" wins over "kaffe".
    pub fn classify(wish: &str) -> Self {
        let lower = wish.to_lowercase();
        if lower.contains("lys") {
            Self::Light
        } else if lower.contains("kaffe") {
            Self::Coffee
        } else {
            Self::Drift
        }
    }

    /// The line printed for this reply.
    pub fn text(self) -> &'static str {
        match self {
            Self::Light => "✨ Voidens svar: Du ER lyset.",
            Self::Coffee => "☕ Voidens svar: Kaffen er allerede drukket. Av deg. Forrige gang.",
            Self::Drift => "🌀 Voidens svar: Det du søkte, er allerede på vei mot deg.",
        }
    }
}

impl fmt::Display for VoidReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
