//! Create user use case tests.

mod support;

use std::sync::Arc;

use domain::{DomainError, MockUserGateway, StoreError, USER_GATEWAY_ERROR};
use user_service_lib::application::{CreateUser, CreateUserInput, DefaultCreateUser};

use support::{encoder, user, InMemoryUserGateway, PlainEncoder};

fn notification_of(err: DomainError) -> domain::Notification {
    match err {
        DomainError::Notification(n) => n,
        other => panic!("expected notification error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_user_success() {
    let gateway = Arc::new(InMemoryUserGateway::default());
    let use_case = DefaultCreateUser::new(gateway.clone(), encoder());

    let output = use_case
        .execute(CreateUserInput::new("test@mail.com", "test12"))
        .await
        .unwrap();

    let id = domain::Identifier::with(Some(output.id.as_str())).unwrap();
    let stored = gateway.get(&id).unwrap();
    assert_eq!(stored.email().address(), "test@mail.com");
    assert_ne!(stored.password().value(), "test12");
    assert!(stored.password().matches("test12", &PlainEncoder));
    assert_eq!(stored.created_at(), stored.updated_at());
}

#[tokio::test]
async fn test_create_user_trims_email() {
    let gateway = Arc::new(InMemoryUserGateway::default());
    let use_case = DefaultCreateUser::new(gateway.clone(), encoder());

    let output = use_case
        .execute(CreateUserInput::new("  test@mail.com  ", "test12"))
        .await
        .unwrap();

    let id = domain::Identifier::with(Some(output.id.as_str())).unwrap();
    assert_eq!(gateway.get(&id).unwrap().email().address(), "test@mail.com");
}

#[tokio::test]
async fn test_create_user_twice_with_same_email_fails_second_time() {
    let gateway = Arc::new(InMemoryUserGateway::default());
    let use_case = DefaultCreateUser::new(gateway.clone(), encoder());

    use_case
        .execute(CreateUserInput::new("test@mail.com", "test12"))
        .await
        .unwrap();
    let err = use_case
        .execute(CreateUserInput::new("test@mail.com", "other123"))
        .await
        .unwrap_err();

    let notification = notification_of(err);
    assert_eq!(notification.messages("email"), vec!["email already used"]);
    assert_eq!(notification.fields().count(), 1);
    assert_eq!(gateway.len(), 1);
}

#[tokio::test]
async fn test_create_user_with_null_data_reports_both_fields() {
    let mut gateway = MockUserGateway::new();
    gateway.expect_find_by_email().times(0);
    gateway.expect_save().times(0);

    let use_case = DefaultCreateUser::new(Arc::new(gateway), encoder());
    let err = use_case
        .execute(CreateUserInput::default())
        .await
        .unwrap_err();

    let notification = notification_of(err);
    assert_eq!(notification.messages("email"), vec!["email must not be null"]);
    assert_eq!(notification.messages("password"), vec!["password must not be null"]);
}

#[tokio::test]
async fn test_create_user_with_empty_data_reports_both_fields() {
    let mut gateway = MockUserGateway::new();
    gateway.expect_find_by_email().times(0);
    gateway.expect_save().times(0);

    let use_case = DefaultCreateUser::new(Arc::new(gateway), encoder());
    let err = use_case
        .execute(CreateUserInput::new("", ""))
        .await
        .unwrap_err();

    let notification = notification_of(err);
    assert_eq!(notification.messages("email"), vec!["email must not be empty"]);
    assert_eq!(notification.messages("password"), vec!["password must not be empty"]);
}

#[tokio::test]
async fn test_create_user_with_one_invalid_field_skips_gateway() {
    let mut gateway = MockUserGateway::new();
    gateway.expect_find_by_email().times(0);
    gateway.expect_save().times(0);

    let use_case = DefaultCreateUser::new(Arc::new(gateway), encoder());
    let err = use_case
        .execute(CreateUserInput::new("test@mailcom", "test12"))
        .await
        .unwrap_err();

    let notification = notification_of(err);
    assert_eq!(notification.messages("email"), vec!["email is invalid"]);
    assert!(notification.get("password").is_none());
}

#[tokio::test]
async fn test_create_user_lookup_failure_is_gateway_error() {
    let mut gateway = MockUserGateway::new();
    gateway
        .expect_find_by_email()
        .times(1)
        .returning(|_| Err(StoreError::new("connection reset")));
    gateway.expect_save().times(0);

    let use_case = DefaultCreateUser::new(Arc::new(gateway), encoder());
    let err = use_case
        .execute(CreateUserInput::new("test@mail.com", "test12"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Gateway(_)));
    assert_eq!(err.to_string(), USER_GATEWAY_ERROR);
}

#[tokio::test]
async fn test_create_user_save_failure_is_gateway_error() {
    let mut gateway = MockUserGateway::new();
    gateway.expect_find_by_email().returning(|_| Ok(None));
    gateway
        .expect_save()
        .times(1)
        .returning(|_| Err(StoreError::new("disk full")));

    let use_case = DefaultCreateUser::new(Arc::new(gateway), encoder());
    let err = use_case
        .execute(CreateUserInput::new("test@mail.com", "test12"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Gateway(_)));
    assert_eq!(err.to_string(), "user gateway error");
}

#[tokio::test]
async fn test_concurrent_duplicate_rejected_by_store_is_gateway_error() {
    // The advisory lookup misses the concurrent writer; the store's unique
    // constraint rejects the save.
    let mut gateway = MockUserGateway::new();
    gateway.expect_find_by_email().returning(|_| Ok(None));
    gateway
        .expect_save()
        .times(1)
        .withf(|user| user.email().address() == "test@mail.com")
        .returning(|_| {
            Err(StoreError::new(
                "duplicate key value violates unique constraint",
            ))
        });

    let use_case = DefaultCreateUser::new(Arc::new(gateway), encoder());
    let err = use_case
        .execute(CreateUserInput::new("test@mail.com", "test12"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Gateway(_)));
    assert!(err.notification().is_none());
}

#[tokio::test]
async fn test_create_user_with_existing_user_in_store() {
    let gateway = Arc::new(InMemoryUserGateway::with_users([user("test@mail.com", "test12")]));
    let use_case = DefaultCreateUser::new(gateway.clone(), encoder());

    let err = use_case
        .execute(CreateUserInput::new("test@mail.com", "another1"))
        .await
        .unwrap_err();

    assert_eq!(
        err.notification().unwrap().messages("email"),
        vec!["email already used"]
    );
    assert_eq!(gateway.len(), 1);
}
