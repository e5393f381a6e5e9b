//! Command handlers against a mock API, with config and credentials in a temp dir.

use storefront_cli::cli::{
    AddressArgs, AddressesCommand, Commands, CouponCommand, NotificationsCommand,
};
use storefront_cli::commands;
use storefront_cli::context::CliContext;
use storefront_cli::error::CliError;
use storefront_cli::load_config;

use client_core::capabilities::CredentialStorage;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "cli-token-123";

struct Setup {
    server: MockServer,
    dir: TempDir,
}

impl Setup {
    async fn start() -> Self {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            json!({"api": {"base_url": format!("{}/api/v1/", server.uri())}}).to_string(),
        )
        .unwrap();
        Self { server, dir }
    }

    fn context(&self) -> CliContext {
        let config = client_core::config::AppConfig::load(self.dir.path()).unwrap();
        CliContext::new(config, self.dir.path()).unwrap()
    }

    async fn signed_in(&self) -> CliContext {
        let ctx = self.context();
        commands::run(
            Commands::Login {
                token: TOKEN.to_string(),
            },
            &ctx,
            false,
        )
        .await
        .unwrap();
        // A fresh context picks the token up from disk.
        self.context()
    }
}

#[tokio::test]
async fn given_login_when_context_rebuilt_then_token_persisted() {
    let setup = Setup::start().await;

    let ctx = setup.signed_in().await;

    assert!(ctx.is_authenticated());
    assert_eq!(
        ctx.credentials.get_item("access_token").unwrap().as_deref(),
        Some(TOKEN)
    );

    let output = commands::run(Commands::Logout, &ctx, false).await.unwrap();
    assert_eq!(output, "Signed out.");
    assert!(!setup.context().is_authenticated());
}

#[tokio::test]
async fn given_blank_token_when_logging_in_then_validation_error() {
    let setup = Setup::start().await;
    let ctx = setup.context();

    let result = commands::run(
        Commands::Login {
            token: "   ".to_string(),
        },
        &ctx,
        false,
    )
    .await;

    assert!(matches!(result, Err(CliError::Validation { .. })));
}

#[tokio::test]
async fn given_no_session_when_listing_then_no_request_sent() {
    let setup = Setup::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&setup.server)
        .await;

    let result = commands::run(
        Commands::Notifications(NotificationsCommand::List),
        &setup.context(),
        false,
    )
    .await;

    assert!(result.unwrap_err().message().contains("Not signed in"));
}

#[tokio::test]
async fn given_unread_notifications_when_read_all_then_only_unread_ids_patched() {
    // GIVEN
    let setup = Setup::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .and(header("authorization", format!("Bearer {TOKEN}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"content": {"results": [
                {"id": 1, "title": "One", "type": "brief", "status": "unread",
                 "createdAt": "2024-05-01T09:00:00Z", "updatedAt": "2024-05-01T09:00:00Z"},
                {"id": 2, "title": "Two", "type": "brief", "status": "read",
                 "createdAt": "2024-05-01T09:00:00Z", "updatedAt": "2024-05-01T09:00:00Z"},
                {"id": 3, "title": "Three", "type": "brief", "status": "unread",
                 "createdAt": "2024-05-01T09:00:00Z", "updatedAt": "2024-05-01T09:00:00Z"}
            ]}}
        })))
        .mount(&setup.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/notifications/status"))
        .and(body_json(json!({"ids": [1, 3]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&setup.server)
        .await;
    let ctx = setup.signed_in().await;

    // WHEN
    let output = commands::run(
        Commands::Notifications(NotificationsCommand::Read { ids: vec![] }),
        &ctx,
        false,
    )
    .await
    .unwrap();

    // THEN
    assert_eq!(output, "Marked 2 notification(s) as read.");
}

/// **VALUE**: An expired session is reported and the stored token is gone.
#[tokio::test]
async fn given_expired_session_when_listing_addresses_then_session_expired_error() {
    let setup = Setup::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/delivery-addresses"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&setup.server)
        .await;
    let ctx = setup.signed_in().await;

    let result = commands::run(Commands::Addresses(AddressesCommand::List), &ctx, false).await;

    assert!(result.unwrap_err().message().starts_with("Session expired"));
    assert!(!setup.context().is_authenticated());
}

/// **VALUE**: A resolved residual error still fails the command.
///
/// **BUG THIS CATCHES**: Would catch "Address saved." being printed for a 409, because
/// residual errors resolve instead of rejecting.
#[tokio::test]
async fn given_residual_error_on_add_when_run_then_server_message_returned() {
    let setup = Setup::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/delivery-addresses"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Address limit reached"})),
        )
        .mount(&setup.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/delivery-addresses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&setup.server)
        .await;
    let ctx = setup.signed_in().await;

    let result = commands::run(
        Commands::Addresses(AddressesCommand::Add(AddressArgs {
            street_name: "Main Street".to_string(),
            house_number: "42".to_string(),
            ap_suite: String::new(),
            city: "Springfield".to_string(),
            postal_code: "62704".to_string(),
            state: "IL".to_string(),
            default: false,
        })),
        &ctx,
        false,
    )
    .await;

    let error = result.unwrap_err();
    assert!(matches!(error, CliError::Core { .. }));
    assert_eq!(error.message(), "Address limit reached");
}

#[tokio::test]
async fn given_server_field_errors_on_add_when_run_then_validation_error_listed() {
    // GIVEN: The API rejects the address with a field error
    let setup = Setup::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/delivery-addresses"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": {"postal_code": ["ZIP does not match state"]}
        })))
        .expect(1)
        .mount(&setup.server)
        .await;
    let ctx = setup.signed_in().await;

    // WHEN
    let result = commands::run(
        Commands::Addresses(AddressesCommand::Add(AddressArgs {
            street_name: "Main Street".to_string(),
            house_number: "42".to_string(),
            ap_suite: String::new(),
            city: "Springfield".to_string(),
            postal_code: "62704".to_string(),
            state: "IL".to_string(),
            default: false,
        })),
        &ctx,
        false,
    )
    .await;

    // THEN
    let error = result.unwrap_err();
    assert!(matches!(error, CliError::Validation { .. }));
    assert_eq!(error.message(), "postal_code: ZIP does not match state");
}

#[tokio::test]
async fn given_invalid_address_when_added_then_field_errors_listed() {
    let setup = Setup::start().await;
    let ctx = setup.signed_in().await;

    let result = commands::run(
        Commands::Addresses(AddressesCommand::Add(AddressArgs {
            street_name: "Main Street".to_string(),
            house_number: "42".to_string(),
            ap_suite: String::new(),
            city: "Springfield".to_string(),
            postal_code: "ABCDE".to_string(),
            state: "ZZ".to_string(),
            default: false,
        })),
        &ctx,
        false,
    )
    .await;

    let error = result.unwrap_err();
    assert!(matches!(error, CliError::Validation { .. }));
    assert!(error.message().contains("postal_code: Invalid postal code: ABCDE"));
    assert!(error.message().contains("state: Unknown state: ZZ"));
}

#[tokio::test]
async fn given_applied_coupon_when_applying_again_then_rejected_without_post() {
    let setup = Setup::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/briefs/cart/b-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"briefId": "b-9", "additional": {}, "couponCode": "WELCOME5"}
        })))
        .mount(&setup.server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&setup.server)
        .await;
    let ctx = setup.signed_in().await;

    let result = commands::run(
        Commands::Coupon(CouponCommand::Apply {
            brief_id: "b-9".to_string(),
            code: "FRIEND5".to_string(),
        }),
        &ctx,
        false,
    )
    .await;

    assert!(
        result
            .unwrap_err()
            .message()
            .contains("WELCOME5 is already applied")
    );
}

#[tokio::test]
async fn given_coupons_when_listed_as_json_then_raw_list_printed() {
    let setup = Setup::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/referral/coupons"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [{"couponCode": "WELCOME5"}]})),
        )
        .mount(&setup.server)
        .await;
    let ctx = setup.signed_in().await;

    let output = commands::run(Commands::Coupon(CouponCommand::List), &ctx, true)
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, json!([{"couponCode": "WELCOME5"}]));
}

#[test]
fn given_config_dir_without_file_when_loading_then_defaults_validate() {
    let dir = TempDir::new().unwrap();

    let config = load_config(dir.path());

    assert!(config.is_ok());
}
