//! Property-based tests for form validation
//!
//! Uses proptest to verify the validation rules over generated input
//! rather than a handful of fixtures.

use proptest::prelude::*;

use dailygoals_core::dates::parse_date_input;
use dailygoals_core::validate::{GoalForm, LoginForm, RegisterForm};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Addresses the email pattern must accept: local@domain.tld with no
/// whitespace and a dot-separated suffix
fn plausible_email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9._%+-]{1,12}@[a-z0-9-]{1,12}\\.[a-z]{2,6}")
        .expect("valid regex")
}

/// Strings with no `@` at all; never a valid address
fn no_at_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9.]{1,20}").expect("valid regex")
}

/// `local@domain` with no dot after the `@`; never a valid address
fn no_tld_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,10}@[a-z0-9]{1,10}").expect("valid regex")
}

/// Passwords that satisfy the registration minimum
fn valid_password_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{6,20}").expect("valid regex")
}

/// Usernames that satisfy the registration minimum
fn valid_username_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{3,16}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every plausible address passes the email check
    #[test]
    fn plausible_emails_pass(email in plausible_email_strategy()) {
        let form = LoginForm { email, password: "123456".to_string() };
        prop_assert_eq!(form.validate().email, None);
    }

    /// Strings without an @ are always flagged
    #[test]
    fn emails_without_at_fail(email in no_at_strategy()) {
        let form = LoginForm { email, password: "123456".to_string() };
        let error = form.validate().email;
        prop_assert!(error.is_some());
    }

    /// Addresses without a dot after the @ are always flagged
    #[test]
    fn emails_without_tld_fail(email in no_tld_strategy()) {
        let form = LoginForm { email, password: "123456".to_string() };
        let errors = form.validate();
        prop_assert_eq!(errors.email.as_deref(), Some("Please enter a valid email"));
    }

    /// Login never length-checks the password; any non-empty value passes
    #[test]
    fn login_accepts_any_nonempty_password(password in "[a-zA-Z0-9]{1,30}") {
        let form = LoginForm { email: "a@b.co".to_string(), password };
        prop_assert_eq!(form.validate().password, None);
    }

    /// A confirm mismatch flags exactly the confirm field: the other
    /// three fields validate identically to the matching form
    #[test]
    fn confirm_mismatch_differs_only_in_confirm_field(
        username in valid_username_strategy(),
        email in plausible_email_strategy(),
        password in valid_password_strategy(),
        suffix in "[a-z]{1,4}",
    ) {
        let matching = RegisterForm {
            username: username.clone(),
            email: email.clone(),
            password: password.clone(),
            confirm_password: password.clone(),
        };
        let mismatched = RegisterForm {
            confirm_password: format!("{password}{suffix}"),
            ..matching.clone()
        };

        let ok = matching.validate();
        let bad = mismatched.validate();

        prop_assert!(ok.is_empty());
        prop_assert_eq!(bad.confirm_password.as_deref(), Some("Passwords do not match"));
        prop_assert_eq!(bad.username, ok.username);
        prop_assert_eq!(bad.email, ok.email);
        prop_assert_eq!(bad.password, ok.password);
    }

    /// Whitespace-only titles always read as missing
    #[test]
    fn whitespace_titles_are_required(title in "[ \t]{0,10}") {
        let form = GoalForm {
            title,
            deadline: parse_date_input("2026-09-01"),
            ..Default::default()
        };
        let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let errors = form.validate(today);
        prop_assert_eq!(errors.title.as_deref(), Some("Title is required"));
    }

    /// Validation is deterministic: same form, same errors
    #[test]
    fn validation_is_deterministic(
        username in ".{0,12}",
        email in ".{0,12}",
        password in ".{0,12}",
        confirm in ".{0,12}",
    ) {
        let form = RegisterForm {
            username,
            email,
            password,
            confirm_password: confirm,
        };
        prop_assert_eq!(form.validate(), form.validate());
    }
}

// ============================================================================
// Standard Tests (non-property-based)
// ============================================================================

#[test]
fn test_documented_example_a_at_b() {
    // "a@b" with a six-character password: the password is fine, the
    // address has no dot and must be flagged
    let form = LoginForm {
        email: "a@b".to_string(),
        password: "123456".to_string(),
    };
    let errors = form.validate();
    assert_eq!(errors.email.as_deref(), Some("Please enter a valid email"));
    assert_eq!(errors.password, None);
}

#[test]
fn test_plus_addressing_passes() {
    let form = LoginForm {
        email: "user+tag@example.co.uk".to_string(),
        password: "123456".to_string(),
    };
    assert_eq!(form.validate().email, None);
}

#[test]
fn test_double_at_fails() {
    let form = LoginForm {
        email: "a@@b.co".to_string(),
        password: "123456".to_string(),
    };
    // the local and domain parts must themselves be @-free
    assert!(form.validate().email.is_some());
}
