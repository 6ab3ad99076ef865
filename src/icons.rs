//! Icon service for managing different icon themes
//!
//! Chunk cards, the list header and dialogs pull their glyphs from here so a
//! single config switch moves the whole UI between emoji, Unicode, and ASCII.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Checkbox glyphs for selection state
#[derive(Debug, Clone)]
pub struct CheckboxIcons {
    pub checked: &'static str,
    pub unchecked: &'static str,
    /// Some but not all records selected
    pub partial: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub chunks_title: &'static str,
    pub file: &'static str,
    pub questions: &'static str,
    pub model: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub loading: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub checkbox: CheckboxIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                checked: "✅",
                unchecked: "🔳",
                partial: "➖",
            },
            ui: UiIcons {
                chunks_title: "📄",
                file: "📁",
                questions: "❓",
                model: "🤖",
                error: "❌",
                warning: "⚠️",
                loading: "🔄",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                checked: "☑",
                unchecked: "☐",
                partial: "◩",
            },
            ui: UiIcons {
                chunks_title: "▤",
                file: "◆",
                questions: "?",
                model: "◎",
                error: "✗",
                warning: "⚠",
                loading: "⟳",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                checked: "[x]",
                unchecked: "[ ]",
                partial: "[-]",
            },
            ui: UiIcons {
                chunks_title: "=",
                file: "#",
                questions: "Q",
                model: "M",
                error: "X",
                warning: "!",
                loading: "...",
            },
        }
    }

    #[must_use]
    pub fn checkbox(&self, checked: bool) -> &'static str {
        let icons = self.icons().checkbox;
        if checked {
            icons.checked
        } else {
            icons.unchecked
        }
    }

    #[must_use]
    pub fn checkbox_partial(&self) -> &'static str {
        self.icons().checkbox.partial
    }

    #[must_use]
    pub fn chunks_title(&self) -> &'static str {
        self.icons().ui.chunks_title
    }

    #[must_use]
    pub fn file(&self) -> &'static str {
        self.icons().ui.file
    }

    #[must_use]
    pub fn questions(&self) -> &'static str {
        self.icons().ui.questions
    }

    #[must_use]
    pub fn model(&self) -> &'static str {
        self.icons().ui.model
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn loading(&self) -> &'static str {
        self.icons().ui.loading
    }
}
