//! Calculator page behaviour against a scripted transport
//!
//! The fake counts calls so the tests can prove that a form failing local
//! validation never touches the network.

use calc_common::{FormError, CONNECTION_ERROR};
use calcctl::client::{ClientError, RawResponse, Transport};
use calcctl::pages::{AgeForm, CalculatorPage, CgpaForm, EmiForm, GstForm, SubmitStatus};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Replays canned responses in order and records every request
struct FakeTransport {
    calls: AtomicUsize,
    responses: Mutex<VecDeque<Result<RawResponse, ClientError>>>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl FakeTransport {
    fn new(responses: Vec<Result<RawResponse, ClientError>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> (String, Value) {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl Transport for FakeTransport {
    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((path.to_string(), serde_json::to_value(body).unwrap()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no canned response".to_string())))
    }
}

fn ok(body: Value) -> Result<RawResponse, ClientError> {
    Ok(RawResponse { status: 200, body })
}

fn rejected(message: &str) -> Result<RawResponse, ClientError> {
    Ok(RawResponse {
        status: 400,
        body: json!({ "error": message }),
    })
}

fn gst_body(amount: f64, gst: f64, rate: f64, total: f64) -> Value {
    json!({"original": amount, "gst_amount": gst, "gst_rate": rate, "total": total})
}

#[tokio::test]
async fn test_empty_amount_makes_no_call() {
    let transport = FakeTransport::new(vec![]);
    let mut page = CalculatorPage::new(GstForm::default());

    let err = page.submit(&transport).await.unwrap_err();

    assert_eq!(err, FormError::MissingField("Amount"));
    assert_eq!(transport.calls(), 0);
    assert!(page.state().result().is_none());
    assert!(page.state().error().is_none());
    assert!(!page.state().is_loading());
}

#[tokio::test]
async fn test_every_form_blocks_missing_fields() {
    let transport = FakeTransport::new(vec![]);

    assert!(CalculatorPage::new(AgeForm::default())
        .submit(&transport)
        .await
        .is_err());
    assert!(CalculatorPage::new(CgpaForm::default())
        .submit(&transport)
        .await
        .is_err());
    let mut emi = CalculatorPage::new(EmiForm {
        principal: "1000000".to_string(),
        annual_rate: "7".to_string(),
        tenure_months: String::new(),
    });
    assert_eq!(
        emi.submit(&transport).await.unwrap_err(),
        FormError::MissingField("Loan Tenure")
    );

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_success_sends_typed_request() {
    let transport = FakeTransport::new(vec![ok(gst_body(1000.0, 180.0, 18.0, 1180.0))]);
    let mut page = CalculatorPage::new(GstForm {
        amount: "1000".to_string(),
        ..GstForm::default()
    });

    let status = page.submit(&transport).await.unwrap();

    assert_eq!(status, SubmitStatus::Success);
    let (path, body) = transport.last_request();
    assert_eq!(path, "/api/gst");
    assert_eq!(body, json!({"amount": 1000.0, "rate": 18.0}));
    assert_eq!(page.state().result().unwrap().total, 1180.0);
    assert!(page.state().error().is_none());
}

#[tokio::test]
async fn test_rejection_keeps_previous_result() {
    let transport = FakeTransport::new(vec![
        ok(gst_body(1000.0, 180.0, 18.0, 1180.0)),
        rejected("Amount cannot be negative"),
    ]);
    let mut page = CalculatorPage::new(GstForm {
        amount: "1000".to_string(),
        ..GstForm::default()
    });
    page.submit(&transport).await.unwrap();

    page.form.amount = "-5".to_string();
    let status = page.submit(&transport).await.unwrap();

    assert_eq!(
        status,
        SubmitStatus::Rejected("Amount cannot be negative".to_string())
    );
    assert_eq!(page.state().error(), Some("Amount cannot be negative"));
    assert_eq!(page.state().result().unwrap().total, 1180.0);
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_transport_failure_shows_generic_message() {
    let transport = FakeTransport::new(vec![Err(ClientError::Transport(
        "connection refused".to_string(),
    ))]);
    let mut page = CalculatorPage::new(CgpaForm {
        cgpa: "8.5".to_string(),
        ..CgpaForm::default()
    });

    let status = page.submit(&transport).await.unwrap();

    assert!(matches!(status, SubmitStatus::Unreachable(_)));
    assert_eq!(page.state().error(), Some(CONNECTION_ERROR));
    assert!(page.state().result().is_none());
}

#[tokio::test]
async fn test_next_success_replaces_result_and_clears_error() {
    let transport = FakeTransport::new(vec![
        rejected("Invalid tenure"),
        ok(json!({
            "principal": 100000.0,
            "annual_rate": 0.0,
            "tenure_months": 10,
            "emi": 10000.0,
            "total_amount": 100000.0,
            "total_interest": 0.0
        })),
    ]);
    let mut page = CalculatorPage::new(EmiForm {
        principal: "100000".to_string(),
        annual_rate: "0".to_string(),
        tenure_months: "0".to_string(),
    });
    page.submit(&transport).await.unwrap();
    assert_eq!(page.state().error(), Some("Invalid tenure"));

    page.form.tenure_months = "10".to_string();
    page.submit(&transport).await.unwrap();

    assert!(page.state().error().is_none());
    assert_eq!(page.state().result().unwrap().emi, 10000.0);
    let (_, body) = transport.last_request();
    assert_eq!(body["tenure_months"], json!(10));
}
