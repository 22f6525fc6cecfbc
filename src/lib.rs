//! Password field with confirmation and live strength classification
//!
//! This library provides the state and validation policy behind a
//! password + confirm-password input pair.
//!
//! # Features
//!
//! - `serde`: Enables (de)serialization of [`PolicyConfig`] and result types
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_strength_field::{PasswordField, PasswordFieldHandle, PolicyConfig, Strength};
//! use secrecy::ExposeSecret;
//!
//! let mut field = PasswordField::with_config(PolicyConfig::default())
//!     .expect("Failed to compile policy");
//!
//! // Wire these to the input events
//! field.on_password_change("MyP@ssw0rd!");
//! field.on_confirm_change("MyP@ssw0rd!");
//! assert_eq!(field.strength(), Strength::Strong);
//!
//! // On submit
//! if field.validate() {
//!     let values = field.values();
//!     assert_eq!(values.password.expose_secret(), "MyP@ssw0rd!");
//! }
//! ```

// Internal modules
mod config;
mod evaluator;
mod field;
mod policy;
mod sections;
mod theme;
mod types;
mod view;

// Public API
pub use config::PolicyConfig;
pub use evaluator::evaluate_password;
pub use field::{FieldKind, PasswordField, PasswordFieldHandle};
pub use policy::{PasswordPolicy, PolicyError};
pub use sections::{CharCounts, NARROW_SPECIALS, WIDE_SPECIALS};
pub use theme::{class_list, FieldTheme, Style, StyleSlot};
pub use types::{
    Assessment, FieldValues, Requirement, Strength, Verdict, MISMATCH_MESSAGE,
    MISSING_PASSWORD_MESSAGE,
};
pub use view::{FieldView, InputView, StrengthView, VisibilityIcon};
