//! Integration tests for SMS gateway and delivery adapter

use sn_infra::sms::{create_sms_gateway, deliver_sms, MockSmsGateway, SmsGateway};
use sn_shared::config::SmsConfig;

#[tokio::test]
async fn test_delivery_adapter_success() {
    let gateway = MockSmsGateway::new();

    let result = deliver_sms(
        &gateway,
        "Your staynest.example verification code is: 1234",
        "+15005550006",
        "+14155552671",
    )
    .await;

    assert!(result.is_delivered());
    let sid = result.sid.expect("delivered result carries a SID");
    assert!(sid.starts_with("mock_"));

    let sent = gateway.sent_messages();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains("verification code is: 1234"));
    assert_eq!(sent[0].sms_from, "+15005550006");
    assert_eq!(sent[0].sms_to, "+14155552671");
}

#[tokio::test]
async fn test_delivery_adapter_absorbs_provider_failure() {
    let gateway = MockSmsGateway::failing();

    let result = deliver_sms(&gateway, "Test SMS", "+15005550006", "+123456").await;

    // The failure is converted into a result, never raised.
    assert!(!result.is_delivered());
    assert!(result.sid.is_none());
    assert_eq!(gateway.message_count(), 0);
}

#[tokio::test]
async fn test_factory_defaults_to_mock() {
    let config = SmsConfig::default();
    let gateway = create_sms_gateway(&config);
    assert_eq!(gateway.provider_name(), "Mock");

    let config = SmsConfig {
        provider: "carrier-pigeon".to_string(),
        ..SmsConfig::default()
    };
    let gateway = create_sms_gateway(&config);
    assert_eq!(gateway.provider_name(), "Mock");
}

#[tokio::test]
async fn test_factory_twilio_without_credentials_falls_back() {
    let config = SmsConfig {
        provider: "twilio".to_string(),
        ..SmsConfig::default()
    };

    // Empty credentials fail Twilio construction; factory degrades to mock.
    let gateway = create_sms_gateway(&config);
    assert_eq!(gateway.provider_name(), "Mock");
}

#[tokio::test]
async fn test_gateway_sends_are_independent() {
    let gateway = MockSmsGateway::new();

    for i in 1..=3u64 {
        gateway
            .send_sms("Test", "+15005550006", "+14155552671")
            .await
            .unwrap();
        assert_eq!(gateway.message_count(), i);
    }
}
