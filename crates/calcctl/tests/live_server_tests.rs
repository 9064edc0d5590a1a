//! calcctl pages against a real calcd on an ephemeral port

use approx::assert_relative_eq;
use calc_common::{Config, GstResult, Outcome, CONNECTION_ERROR};
use calcctl::client::{interpret, HttpTransport, Transport};
use calcctl::pages::{AgeForm, CalculatorPage, CgpaForm, EmiForm, GstForm, SubmitStatus};
use calcd::server::{serve, AppState};
use chrono::NaiveDate;
use tokio::net::TcpListener;

/// Start calcd in the background and return its base URL
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let state = AppState::with_fixed_date(Config::default(), today);
    tokio::spawn(serve(listener, state, std::future::pending()));
    format!("http://{}", addr)
}

/// A port nothing listens on
async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_gst_round_trip() {
    let transport = HttpTransport::new(&spawn_server().await).unwrap();
    let mut page = CalculatorPage::new(GstForm {
        amount: "1000".to_string(),
        rate: "18".to_string(),
    });

    assert_eq!(page.submit(&transport).await.unwrap(), SubmitStatus::Success);

    let result = page.state().result().unwrap();
    assert_relative_eq!(result.gst_amount, 180.0);
    assert_relative_eq!(result.total, 1180.0);
}

#[tokio::test]
async fn test_cgpa_round_trip() {
    let transport = HttpTransport::new(&spawn_server().await).unwrap();
    let mut page = CalculatorPage::new(CgpaForm {
        cgpa: "8.5".to_string(),
        university: "VTU".to_string(),
    });

    page.submit(&transport).await.unwrap();

    let result = page.state().result().unwrap();
    assert_relative_eq!(result.percentage, 85.0);
    assert_eq!(result.university, "VTU");
}

#[tokio::test]
async fn test_age_uses_server_date() {
    let transport = HttpTransport::new(&spawn_server().await).unwrap();
    let mut page = CalculatorPage::new(AgeForm {
        dob: "2000-01-15".to_string(),
    });

    page.submit(&transport).await.unwrap();

    let result = page.state().result().unwrap();
    assert_eq!((result.years, result.months, result.days), (26, 9, 1));
}

#[tokio::test]
async fn test_emi_round_trip() {
    let transport = HttpTransport::new(&spawn_server().await).unwrap();
    let mut page = CalculatorPage::new(EmiForm {
        principal: "1000000".to_string(),
        annual_rate: "7".to_string(),
        tenure_months: "240".to_string(),
    });

    page.submit(&transport).await.unwrap();

    let result = page.state().result().unwrap();
    assert_relative_eq!(result.emi, 7752.99, epsilon = 1e-6);
    assert_eq!(result.tenure_months, 240);
}

#[tokio::test]
async fn test_service_rejection_is_shown_verbatim() {
    let transport = HttpTransport::new(&spawn_server().await).unwrap();
    let mut page = CalculatorPage::new(CgpaForm {
        cgpa: "11".to_string(),
        ..CgpaForm::default()
    });

    let status = page.submit(&transport).await.unwrap();

    assert!(matches!(status, SubmitStatus::Rejected(_)));
    assert_eq!(page.state().error(), Some("CGPA must be between 0 and 10"));
}

#[tokio::test]
async fn test_health_reports_endpoints() {
    let transport = HttpTransport::new(&spawn_server().await).unwrap();

    let health = transport.health().await.unwrap();

    assert_eq!(health.status, "healthy");
    assert!(health.endpoints.iter().any(|e| e == "/api/emi"));
}

#[tokio::test]
async fn test_unreachable_server() {
    let transport = HttpTransport::new(&closed_port_url().await).unwrap();
    let mut page = CalculatorPage::new(GstForm {
        amount: "100".to_string(),
        ..GstForm::default()
    });

    let status = page.submit(&transport).await.unwrap();

    assert!(matches!(status, SubmitStatus::Unreachable(_)));
    assert_eq!(page.state().error(), Some(CONNECTION_ERROR));
    assert!(transport.health().await.is_err());
}

#[tokio::test]
async fn test_wrong_method_is_a_service_error() {
    let transport = HttpTransport::new(&spawn_server().await).unwrap();

    let raw = transport
        .post_json("/api/health", &serde_json::json!({}))
        .await
        .unwrap();

    assert_eq!(raw.status, 405);
    assert_eq!(
        interpret::<GstResult>(raw),
        Outcome::Rejected("Method not allowed".to_string())
    );
}
