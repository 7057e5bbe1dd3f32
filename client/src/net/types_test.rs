use super::*;

#[test]
fn product_without_image_deserializes() {
    let product: Product =
        serde_json::from_str(r#"{"id": 7, "name": "Linen Shirt", "price": "49.00"}"#).expect("product");
    assert_eq!(product.image, None);
    assert_eq!(product.price, "49.00");
}

#[test]
fn register_request_uses_backend_field_names() {
    let body = serde_json::to_value(RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret-pass".to_owned(),
        password_confirmation: "secret-pass".to_owned(),
    })
    .expect("serialize");
    assert_eq!(body["password_confirmation"], "secret-pass");
}

#[test]
fn validation_prefers_field_message() {
    let errors = ValidationErrors::from_body(
        r#"{"message": "The email has already been taken.", "errors": {"email": ["The email has already been taken."], "password": ["Too short."]}}"#,
    );
    assert_eq!(errors.field("password"), Some("Too short."));
    assert_eq!(errors.first_message(), "The email has already been taken.");
}

#[test]
fn validation_falls_back_to_top_level_message() {
    let errors = ValidationErrors::from_body(r#"{"message": "These credentials do not match our records."}"#);
    assert_eq!(errors.first_message(), "These credentials do not match our records.");
}

#[test]
fn validation_tolerates_garbage_body() {
    let errors = ValidationErrors::from_body("<html>oops</html>");
    assert_eq!(errors, ValidationErrors::default());
    assert_eq!(errors.first_message(), "The given data was invalid.");
}

#[test]
fn validation_first_message_follows_backend_field_order() {
    let errors = ValidationErrors::from_body(
        r#"{"message": "Invalid.", "errors": {"password": ["Too short."], "email": ["Taken."]}}"#,
    );
    assert_eq!(errors.first_message(), "Too short.");
    assert_eq!(errors.errors.keys().collect::<Vec<_>>(), ["password", "email"]);
}
