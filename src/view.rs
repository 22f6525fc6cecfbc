//! Render snapshot of a field.
//!
//! Everything a renderer needs to draw the field, derived from the controller
//! state and the host theme. Computing a view never changes that state.

use crate::field::{FieldKind, PasswordField};
use crate::theme::{class_list, FieldTheme, StyleSlot};
use crate::types::{Strength, MISMATCH_MESSAGE, MISSING_PASSWORD_MESSAGE};

/// Visibility toggle icon of one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityIcon {
    /// Text is masked; clicking reveals it.
    Show,
    /// Text is visible; clicking masks it.
    Hide,
}

impl VisibilityIcon {
    /// Inline style slots for the small and large variants.
    pub fn style_slots(&self) -> (StyleSlot, StyleSlot) {
        match self {
            VisibilityIcon::Show => (StyleSlot::SmallIconHidden, StyleSlot::LargeIconHidden),
            VisibilityIcon::Hide => (StyleSlot::SmallIconVisible, StyleSlot::LargeIconVisible),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    /// `"text"` or `"password"`.
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub wrapper_class: String,
    pub input_class: String,
    pub icon_container_class: String,
    pub icon: VisibilityIcon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthView {
    pub label: &'static str,
    pub text_class: String,
    pub color_class: &'static str,
    pub color_slot: StyleSlot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub wrapper_class: String,
    pub password: InputView,
    pub strength: Option<StrengthView>,
    pub hint: Option<String>,
    pub hint_class: String,
    pub missing_password_message: Option<&'static str>,
    pub confirm: InputView,
    pub mismatch_message: Option<&'static str>,
    pub error_text_class: String,
}

impl FieldView {
    pub fn render(field: &PasswordField) -> Self {
        let theme = field.theme();
        let verdict = field.verdict();

        Self {
            wrapper_class: class_list([theme.wrapper_class.as_str()]),
            password: input_view(
                field,
                FieldKind::Password,
                verdict.missing_password,
                "Password",
                &["password-input-wrapper"],
                &theme.password_input_wrapper_class,
            ),
            strength: strength_view(field.strength(), theme),
            hint: field.hint(),
            hint_class: class_list(["error-message-password", theme.error_message_class.as_str()]),
            missing_password_message: verdict.missing_password.then_some(MISSING_PASSWORD_MESSAGE),
            confirm: input_view(
                field,
                FieldKind::Confirm,
                verdict.mismatch,
                "Confirm Password",
                &["confirm-password", "password-input-wrapper"],
                &theme.confirm_password_wrapper_class,
            ),
            mismatch_message: verdict.mismatch.then_some(MISMATCH_MESSAGE),
            error_text_class: class_list(["input-errors-text", theme.error_message_class.as_str()]),
        }
    }
}

fn input_view(
    field: &PasswordField,
    kind: FieldKind,
    flagged: bool,
    placeholder: &'static str,
    base_classes: &[&str],
    host_wrapper_class: &str,
) -> InputView {
    let theme = field.theme();
    let visible = field.is_visible(kind);
    let state_class = if flagged { "no-password" } else { "" };

    let wrapper_class = class_list(
        base_classes
            .iter()
            .copied()
            .chain([state_class, host_wrapper_class]),
    );

    InputView {
        input_type: if visible { "text" } else { "password" },
        placeholder,
        wrapper_class,
        input_class: class_list(["input-style", theme.input_class.as_str()]),
        icon_container_class: class_list(["icon-container", theme.icon_container_class.as_str()]),
        icon: if visible {
            VisibilityIcon::Hide
        } else {
            VisibilityIcon::Show
        },
    }
}

fn strength_view(strength: Strength, theme: &FieldTheme) -> Option<StrengthView> {
    let (color_class, color_slot) = match strength {
        Strength::NotEvaluated => return None,
        Strength::Weak => ("strength-color-1", StyleSlot::StrengthWeak),
        Strength::Medium => ("strength-color-2", StyleSlot::StrengthMedium),
        Strength::Strong => ("strength-color-3", StyleSlot::StrengthStrong),
    };

    Some(StrengthView {
        label: strength.label(),
        text_class: class_list(["strength-text-common", theme.strength_text_class.as_str()]),
        color_class,
        color_slot,
    })
}
