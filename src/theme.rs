//! Host-supplied class names and inline styles.
//!
//! Pure pass-through: nothing here affects evaluation or validation.

use std::collections::BTreeMap;

/// Sub-elements that accept an inline style override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleSlot {
    Input,
    PasswordInputWrapper,
    ConfirmPasswordWrapper,
    IconContainer,
    /// Icons shown while the input text is visible.
    SmallIconVisible,
    LargeIconVisible,
    /// Icons shown while the input text is masked.
    SmallIconHidden,
    LargeIconHidden,
    StrengthText,
    StrengthWeak,
    StrengthMedium,
    StrengthStrong,
    ErrorMessagePassword,
    ErrorMessageText,
}

/// CSS declarations, property to value.
pub type Style = BTreeMap<String, String>;

/// Extra class names and inline styles for each sub-element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTheme {
    pub wrapper_class: String,
    pub input_class: String,
    pub icon_container_class: String,
    pub strength_text_class: String,
    pub error_message_class: String,
    pub password_input_wrapper_class: String,
    pub confirm_password_wrapper_class: String,
    styles: BTreeMap<StyleSlot, Style>,
}

impl FieldTheme {
    pub fn with_style(mut self, slot: StyleSlot, style: Style) -> Self {
        self.styles.insert(slot, style);
        self
    }

    /// Adds one declaration to `slot`, keeping any already set.
    pub fn with_declaration(
        mut self,
        slot: StyleSlot,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.styles
            .entry(slot)
            .or_default()
            .insert(property.into(), value.into());
        self
    }

    pub fn style(&self, slot: StyleSlot) -> Option<&Style> {
        self.styles.get(&slot)
    }

    /// Inline `style` attribute text for `slot`, e.g. `color: red; margin: 0`.
    pub fn inline_style(&self, slot: StyleSlot) -> Option<String> {
        let style = self.style(slot)?;
        let text = style
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        Some(text)
    }
}

/// Joins class tokens, skipping empty ones.
pub fn class_list<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    tokens
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
