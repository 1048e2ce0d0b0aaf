//! Tests for the phone verification workflow

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::profile::Profile;
use crate::errors::DomainError;
use crate::repositories::{
    MockProfileRepository, MockVerificationRecordRepository, ProfileRepository,
    VerificationRecordRepository,
};
use crate::services::verification::{
    PhoneVerificationConfig, PhoneVerificationService, CODE_LENGTH,
};

use super::mocks::RecordingSmsQueue;

const SITE_DOMAIN: &str = "staynest.example";
const NEW_PHONE: &str = "+14155552671";

struct Fixture {
    profiles: Arc<MockProfileRepository>,
    records: Arc<MockVerificationRecordRepository>,
    sms_queue: Arc<RecordingSmsQueue>,
    service: PhoneVerificationService<
        MockProfileRepository,
        MockVerificationRecordRepository,
        RecordingSmsQueue,
    >,
    profile_id: Uuid,
}

async fn fixture() -> Fixture {
    let profiles = Arc::new(MockProfileRepository::new());
    let records = Arc::new(MockVerificationRecordRepository::new());
    let sms_queue = Arc::new(RecordingSmsQueue::new());

    let profile = Profile::new("guest@example.com".to_string());
    let profile_id = profile.id;
    profiles.create(profile).await.unwrap();

    let service = PhoneVerificationService::new(
        Arc::clone(&profiles),
        Arc::clone(&records),
        Arc::clone(&sms_queue),
        PhoneVerificationConfig::new("+15005550006"),
    );

    Fixture {
        profiles,
        records,
        sms_queue,
        service,
        profile_id,
    }
}

fn to_digits(code: &str) -> Vec<String> {
    code.chars().map(|c| c.to_string()).collect()
}

#[tokio::test]
async fn test_phone_change_stores_code_and_queues_sms() {
    let f = fixture().await;

    f.service
        .request_phone_number_change(f.profile_id, SITE_DOMAIN, NEW_PHONE)
        .await
        .unwrap();

    let code = f.service.stored_code(f.profile_id).await.unwrap();
    assert_eq!(code.len(), CODE_LENGTH);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    let messages = f.sms_queue.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0].body,
        format!("Your {} verification code is: {}", SITE_DOMAIN, code)
    );
    assert_eq!(messages[0].sms_from, "+15005550006");
    assert_eq!(messages[0].sms_to, NEW_PHONE);
}

#[tokio::test]
async fn test_phone_change_resets_confirmation() {
    let f = fixture().await;

    // Confirm first, then request a change: the flag must drop back to false.
    f.service
        .set_phone_confirmation_status(f.profile_id, true)
        .await
        .unwrap();

    f.service
        .request_phone_number_change(f.profile_id, SITE_DOMAIN, NEW_PHONE)
        .await
        .unwrap();

    let profile = f.profiles.find_by_id(f.profile_id).await.unwrap().unwrap();
    assert!(!profile.is_phone_number_confirmed);
    assert_eq!(profile.phone_number.as_deref(), Some(NEW_PHONE));
}

#[tokio::test]
async fn test_phone_change_overwrites_previous_code() {
    let f = fixture().await;

    f.records.set_code(f.profile_id, "0000").await.unwrap();

    f.service
        .request_phone_number_change(f.profile_id, SITE_DOMAIN, NEW_PHONE)
        .await
        .unwrap();

    let messages = f.sms_queue.messages();
    let code = f.service.stored_code(f.profile_id).await.unwrap();
    // Only the newest code is retrievable and it is the one that was queued.
    assert!(messages[0].body.ends_with(&code));
}

#[tokio::test]
async fn test_phone_change_rejects_invalid_number() {
    let f = fixture().await;

    let result = f
        .service
        .request_phone_number_change(f.profile_id, SITE_DOMAIN, "not-a-number")
        .await;

    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert!(f.sms_queue.messages().is_empty());
}

#[tokio::test]
async fn test_phone_change_unknown_profile() {
    let f = fixture().await;

    let result = f
        .service
        .request_phone_number_change(Uuid::new_v4(), SITE_DOMAIN, NEW_PHONE)
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_stored_code_without_request_is_not_found() {
    let f = fixture().await;

    let result = f.service.stored_code(f.profile_id).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_is_verification_code_valid() {
    let f = fixture().await;
    f.records.set_code(f.profile_id, "1234").await.unwrap();

    assert!(f
        .service
        .is_verification_code_valid(f.profile_id, "1234")
        .await
        .unwrap());
    assert!(!f
        .service
        .is_verification_code_valid(f.profile_id, "1235")
        .await
        .unwrap());
    // Length mismatch is an unequal comparison, not an error.
    assert!(!f
        .service
        .is_verification_code_valid(f.profile_id, "12345")
        .await
        .unwrap());
}

#[tokio::test]
async fn test_checker_has_no_side_effects() {
    let f = fixture().await;
    f.records.set_code(f.profile_id, "1234").await.unwrap();

    f.service
        .is_verification_code_valid(f.profile_id, "1234")
        .await
        .unwrap();

    // Record still present, confirmation untouched.
    let record = f.records.find_by_profile(f.profile_id).await.unwrap();
    assert!(record.is_some());
    let profile = f.profiles.find_by_id(f.profile_id).await.unwrap().unwrap();
    assert!(!profile.is_phone_number_confirmed);
}

#[tokio::test]
async fn test_checker_propagates_not_found() {
    let f = fixture().await;

    let result = f
        .service
        .is_verification_code_valid(f.profile_id, "1234")
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_confirm_phone_number_success() {
    let f = fixture().await;
    f.records.set_code(f.profile_id, "1234").await.unwrap();

    let confirmed = f
        .service
        .confirm_phone_number(f.profile_id, &to_digits("1234"))
        .await
        .unwrap();
    assert!(confirmed);

    let profile = f.profiles.find_by_id(f.profile_id).await.unwrap().unwrap();
    assert!(profile.is_phone_number_confirmed);

    // The code is retired after first successful use.
    assert!(f
        .records
        .find_by_profile(f.profile_id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_confirm_phone_number_wrong_code() {
    let f = fixture().await;
    f.records.set_code(f.profile_id, "1234").await.unwrap();

    let confirmed = f
        .service
        .confirm_phone_number(f.profile_id, &to_digits("1235"))
        .await
        .unwrap();
    assert!(!confirmed);

    let profile = f.profiles.find_by_id(f.profile_id).await.unwrap().unwrap();
    assert!(!profile.is_phone_number_confirmed);

    // A failed check does not consume the record.
    assert!(f
        .records
        .find_by_profile(f.profile_id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_confirm_rejects_malformed_digits() {
    let f = fixture().await;
    f.records.set_code(f.profile_id, "1234").await.unwrap();

    let result = f
        .service
        .confirm_phone_number(f.profile_id, &to_digits("12x4"))
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    let result = f
        .service
        .confirm_phone_number(f.profile_id, &to_digits("123"))
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_set_confirmation_status_is_unconditional() {
    let f = fixture().await;

    f.service
        .set_phone_confirmation_status(f.profile_id, true)
        .await
        .unwrap();
    let profile = f.profiles.find_by_id(f.profile_id).await.unwrap().unwrap();
    assert!(profile.is_phone_number_confirmed);

    f.service
        .set_phone_confirmation_status(f.profile_id, false)
        .await
        .unwrap();
    let profile = f.profiles.find_by_id(f.profile_id).await.unwrap().unwrap();
    assert!(!profile.is_phone_number_confirmed);
}
