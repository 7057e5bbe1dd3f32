use super::*;

#[test]
fn login_input_is_trimmed() {
    let req = validate_login_input("  ada@example.com ", "hunter22", true).expect("valid");
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.password, "hunter22");
    assert!(req.remember);
}

#[test]
fn login_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw", false).err(), Some("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.com", "", false).err(), Some("Enter your email and password."));
}

#[test]
fn login_rejects_malformed_email() {
    assert_eq!(validate_login_input("ada", "pw", false).err(), Some("Enter a valid email address."));
    assert_eq!(validate_login_input("@example.com", "pw", false).err(), Some("Enter a valid email address."));
    assert_eq!(validate_login_input("ada@example.", "pw", false).err(), Some("Enter a valid email address."));
}

#[test]
fn register_input_is_trimmed() {
    let req = validate_register_input(" Ada ", " ada@example.com ", "correct horse", "correct horse").expect("valid");
    assert_eq!(req.name, "Ada");
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.password_confirmation, "correct horse");
}

#[test]
fn register_requires_every_field() {
    assert_eq!(
        validate_register_input("  ", "ada@example.com", "longenough", "longenough").err(),
        Some("Fill in every field.")
    );
}

#[test]
fn register_enforces_minimum_password_length() {
    assert_eq!(
        validate_register_input("Ada", "ada@example.com", "short", "short").err(),
        Some("Password must be at least 8 characters.")
    );
}

#[test]
fn register_requires_matching_confirmation() {
    assert_eq!(
        validate_register_input("Ada", "ada@example.com", "longenough", "longenougH").err(),
        Some("Passwords do not match.")
    );
}

#[test]
fn escape_dismisses_other_keys_do_not() {
    assert!(is_dismiss_key("Escape"));
    assert!(is_dismiss_key("Esc"));
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key("e"));
}
