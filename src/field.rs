//! Password + confirmation field controller.

use secrecy::{ExposeSecret, SecretString};

use crate::config::PolicyConfig;
use crate::policy::{PasswordPolicy, PolicyError};
use crate::theme::FieldTheme;
use crate::types::{Assessment, FieldValues, Requirement, Strength, Verdict};
use crate::view::FieldView;

/// The two inputs of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Password,
    Confirm,
}

/// Operations a host may call on a mounted field.
pub trait PasswordFieldHandle {
    /// Recomputes and stores the verdict; `true` if the field is valid.
    fn validate(&mut self) -> bool;

    /// Current values, exactly as stored.
    fn values(&self) -> FieldValues;
}

/// State of one password field instance.
///
/// Input events (`on_*_change`, `toggle_visibility`) update the state
/// synchronously; the host re-renders from [`PasswordField::view`].
#[derive(Debug)]
pub struct PasswordField {
    policy: PasswordPolicy,
    theme: FieldTheme,
    password: SecretString,
    confirm_password: SecretString,
    password_visible: bool,
    confirm_visible: bool,
    assessment: Assessment,
    verdict: Verdict,
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new(PasswordPolicy::default())
    }
}

impl PasswordField {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self {
            policy,
            theme: FieldTheme::default(),
            password: SecretString::new(String::new().into()),
            confirm_password: SecretString::new(String::new().into()),
            password_visible: false,
            confirm_visible: false,
            assessment: Assessment::default(),
            verdict: Verdict::default(),
        }
    }

    pub fn with_config(config: PolicyConfig) -> Result<Self, PolicyError> {
        Ok(Self::new(PasswordPolicy::new(config)?))
    }

    pub fn with_theme(mut self, theme: FieldTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Stores `raw` without any whitespace and re-evaluates it.
    pub fn on_password_change(&mut self, raw: &str) {
        let stripped: String = raw.chars().filter(|&c| !is_input_whitespace(c)).collect();
        self.password = SecretString::new(stripped.into());

        if self.password.expose_secret().is_empty() {
            self.assessment = Assessment::default();
        } else {
            self.verdict.missing_password = false;
            self.assessment = self.policy.evaluate(&self.password);
        }
    }

    /// Stores `raw` verbatim; whitespace is kept.
    pub fn on_confirm_change(&mut self, raw: &str) {
        self.confirm_password = SecretString::new(raw.to_owned().into());
    }

    /// Flips between masked and plain text for one input.
    pub fn toggle_visibility(&mut self, field: FieldKind) {
        match field {
            FieldKind::Password => self.password_visible = !self.password_visible,
            FieldKind::Confirm => self.confirm_visible = !self.confirm_visible,
        }
    }

    /// Whether the input's text is shown unmasked.
    pub fn is_visible(&self, field: FieldKind) -> bool {
        match field {
            FieldKind::Password => self.password_visible,
            FieldKind::Confirm => self.confirm_visible,
        }
    }

    /// Assessment computed at the last password change.
    pub fn assessment(&self) -> Assessment {
        self.assessment
    }

    /// Current strength classification.
    pub fn strength(&self) -> Strength {
        self.assessment.strength
    }

    /// First unmet threshold, in `Requirement` priority order.
    pub fn unmet(&self) -> Option<Requirement> {
        self.assessment.unmet
    }

    /// Message for the current unmet requirement, if any.
    pub fn hint(&self) -> Option<String> {
        self.assessment
            .unmet
            .map(|requirement| requirement.message(self.policy.config()))
    }

    /// Verdict of the last `validate()` call.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Policy the password is evaluated against.
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Host classes and styles, passed through to the view.
    pub fn theme(&self) -> &FieldTheme {
        &self.theme
    }

    /// Render snapshot of the current state.
    pub fn view(&self) -> FieldView {
        FieldView::render(self)
    }
}

/// Whitespace removed from the password: the ECMAScript `\s` set.
///
/// Unlike `char::is_whitespace` this includes U+FEFF and excludes U+0085.
fn is_input_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

impl PasswordFieldHandle for PasswordField {
    fn validate(&mut self) -> bool {
        let password = self.password.expose_secret();
        let verdict = Verdict {
            missing_password: password.is_empty(),
            mismatch: password != self.confirm_password.expose_secret(),
            below_strength: !self.assessment.strength.is_strong(),
        };
        self.verdict = verdict;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            valid = verdict.is_valid(),
            missing_password = verdict.missing_password,
            mismatch = verdict.mismatch,
            below_strength = verdict.below_strength,
            "password field validated"
        );

        verdict.is_valid()
    }

    fn values(&self) -> FieldValues {
        FieldValues {
            password: SecretString::new(self.password.expose_secret().into()),
            confirm_password: SecretString::new(self.confirm_password.expose_secret().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(password: &str, confirm: &str) -> PasswordField {
        let mut field = PasswordField::default();
        field.on_password_change(password);
        field.on_confirm_change(confirm);
        field
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = PasswordField::default();
        assert_eq!(field.strength(), Strength::NotEvaluated);
        assert_eq!(field.unmet(), None);
        assert_eq!(field.verdict(), Verdict::default());
        assert!(!field.is_visible(FieldKind::Password));
        assert!(!field.is_visible(FieldKind::Confirm));

        let values = field.values();
        assert_eq!(values.password.expose_secret(), "");
        assert_eq!(values.confirm_password.expose_secret(), "");
    }

    #[test]
    fn test_password_whitespace_is_stripped_confirm_is_not() {
        let field = filled("P a s s 1 !", "P a s s 1 !");
        let values = field.values();
        assert_eq!(values.password.expose_secret(), "Pass1!");
        assert_eq!(values.confirm_password.expose_secret(), "P a s s 1 !");
    }

    #[test]
    fn test_password_strips_tabs_and_newlines() {
        let field = filled("\tPass\nword1!\r\n ", "");
        assert_eq!(field.values().password.expose_secret(), "Password1!");
        assert_eq!(field.strength(), Strength::Strong);
    }

    #[test]
    fn test_password_strips_byte_order_mark_keeps_next_line() {
        let field = filled("Password1!\u{FEFF}", "");
        assert_eq!(field.values().password.expose_secret(), "Password1!");

        let field = filled("Pass\u{85}word1!\u{3000}\u{A0}", "");
        assert_eq!(field.values().password.expose_secret(), "Pass\u{85}word1!");
    }

    #[test]
    fn test_password_with_emoji_counts_utf16_length() {
        let mut field = PasswordField::default();
        field.on_password_change("Aa1! \u{1F600}\u{1F600}");
        assert_eq!(field.values().password.expose_secret(), "Aa1!\u{1F600}\u{1F600}");
        assert_eq!(field.strength(), Strength::Strong);
        assert_eq!(field.unmet(), None);
    }

    #[test]
    fn test_whitespace_only_password_resets_assessment() {
        let mut field = PasswordField::default();
        field.on_password_change("abc");
        assert_eq!(field.strength(), Strength::Weak);

        field.on_password_change("   ");
        assert_eq!(field.strength(), Strength::NotEvaluated);
        assert_eq!(field.unmet(), None);
        assert_eq!(field.values().password.expose_secret(), "");
    }

    #[test]
    fn test_strength_is_recomputed_not_monotonic() {
        let mut field = PasswordField::default();
        field.on_password_change("Password1!");
        assert_eq!(field.strength(), Strength::Strong);

        field.on_password_change("Password1");
        assert_eq!(field.strength(), Strength::Medium);

        field.on_password_change("Pass");
        assert_eq!(field.strength(), Strength::Weak);

        field.on_password_change("Pass1!word");
        assert_eq!(field.strength(), Strength::Strong);
    }

    #[test]
    fn test_confirm_change_does_not_reevaluate() {
        let mut field = PasswordField::default();
        field.on_password_change("abc");
        let before = field.assessment();
        field.on_confirm_change("Password1!");
        assert_eq!(field.assessment(), before);
    }

    #[test]
    fn test_hint_follows_unmet_requirement() {
        let mut field = PasswordField::default();
        field.on_password_change("password");
        assert_eq!(
            field.hint().as_deref(),
            Some("Password must contain at least 1 uppercase letter")
        );

        field.on_password_change("Password1!");
        assert_eq!(field.hint(), None);
    }

    #[test]
    fn test_toggle_visibility_is_per_input() {
        let mut field = PasswordField::default();
        field.toggle_visibility(FieldKind::Password);
        assert!(field.is_visible(FieldKind::Password));
        assert!(!field.is_visible(FieldKind::Confirm));

        field.toggle_visibility(FieldKind::Confirm);
        field.toggle_visibility(FieldKind::Password);
        assert!(!field.is_visible(FieldKind::Password));
        assert!(field.is_visible(FieldKind::Confirm));
    }

    #[test]
    fn test_validate_empty_field() {
        let mut field = PasswordField::default();
        assert!(!field.validate());
        assert_eq!(
            field.verdict(),
            Verdict {
                missing_password: true,
                mismatch: false,
                below_strength: true,
            }
        );
    }

    #[test]
    fn test_validate_strong_matching_password() {
        let mut field = filled("Password1!", "Password1!");
        assert!(field.validate());
        assert!(field.verdict().is_valid());
    }

    #[test]
    fn test_validate_mismatch_of_strong_passwords() {
        let mut field = filled("X1!aaaaa", "Y1!aaaaa");
        assert!(!field.validate());
        assert_eq!(
            field.verdict(),
            Verdict {
                missing_password: false,
                mismatch: true,
                below_strength: false,
            }
        );
    }

    #[test]
    fn test_validate_confirm_with_spaces_mismatches() {
        let mut field = filled("Pass word1!", "Pass word1!");
        assert!(!field.validate());
        assert!(field.verdict().mismatch);
        assert!(!field.verdict().below_strength);
    }

    #[test]
    fn test_validate_below_strength() {
        let mut field = filled("password", "password");
        assert!(!field.validate());
        assert_eq!(
            field.verdict(),
            Verdict {
                missing_password: false,
                mismatch: false,
                below_strength: true,
            }
        );
    }

    #[test]
    fn test_validate_is_repeatable_and_overwrites() {
        let mut field = filled("password", "password");
        assert!(!field.validate());
        assert!(!field.validate());
        assert!(field.verdict().below_strength);

        field.on_password_change("Password1!");
        field.on_confirm_change("Password1!");
        // Verdict is only recomputed on validate()
        assert!(field.verdict().below_strength);
        assert!(field.validate());
        assert_eq!(field.verdict(), Verdict::default());
    }

    #[test]
    fn test_typing_clears_missing_password_flag() {
        let mut field = PasswordField::default();
        field.validate();
        assert!(field.verdict().missing_password);

        field.on_password_change("a");
        assert!(!field.verdict().missing_password);
        assert!(field.verdict().below_strength);
    }

    #[test]
    fn test_clearing_password_keeps_verdict() {
        let mut field = filled("abc", "abc");
        field.validate();
        field.on_password_change("");
        assert!(!field.verdict().missing_password);
        assert!(field.verdict().below_strength);
    }

    #[test]
    fn test_values_available_before_validate() {
        let field = filled("Secret1!x", "other value");
        let values = field.values();
        assert_eq!(values.password.expose_secret(), "Secret1!x");
        assert_eq!(values.confirm_password.expose_secret(), "other value");
    }

    #[test]
    fn test_values_debug_is_redacted() {
        let field = filled("Secret1!x", "Secret1!x");
        let debug = format!("{:?}", field.values());
        assert!(!debug.contains("Secret1!x"));
    }

    #[test]
    fn test_with_config_applies_thresholds() {
        let config = PolicyConfig::default().with_min_length(4);
        let mut field = PasswordField::with_config(config).expect("policy compiles");
        field.on_password_change("Ab1!");
        field.on_confirm_change("Ab1!");
        assert_eq!(field.strength(), Strength::Strong);
        assert!(field.validate());
    }

    #[test]
    fn test_with_config_propagates_policy_error() {
        let config = PolicyConfig::default().with_min_length(1_000_000);
        assert!(matches!(
            PasswordField::with_config(config),
            Err(PolicyError::Pattern(_))
        ));
    }

    #[test]
    fn test_handle_as_trait_object() {
        let mut field = filled("Password1!", "Password1!");
        let handle: &mut dyn PasswordFieldHandle = &mut field;
        assert!(handle.validate());
        assert_eq!(handle.values().password.expose_secret(), "Password1!");
    }
}
