//! Calculator pages and path routing
//!
//! A page owns its form fields (raw strings, as typed) and a `FormState`.
//! `submit` validates locally first; a form that fails validation never
//! reaches the transport.

use crate::client::{self, Transport};
use calc_common::calc::cgpa::DEFAULT_UNIVERSITY;
use calc_common::calc::gst::DEFAULT_GST_SLAB;
use calc_common::form::{parse_integer, parse_number, required};
use calc_common::{
    find_by_path, AgeRequest, AgeResult, CgpaRequest, CgpaResult, EmiRequest, EmiResult,
    Endpoint, FormError, FormState, GstRequest, GstResult, Outcome, ToolDescriptor,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Help text for one input of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    pub flag: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

/// A calculator form: its inputs, how they become a request, and where
/// the request goes
pub trait CalculatorForm {
    type Request: Serialize + Sync;
    type Output: DeserializeOwned;

    const ENDPOINT: Endpoint;
    const TITLE: &'static str;
    const SUBTITLE: &'static str;
    const FIELDS: &'static [FieldInfo];

    fn to_request(&self) -> Result<Self::Request, FormError>;
}

// ============================================================================
// Forms
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgeForm {
    pub dob: String,
}

impl CalculatorForm for AgeForm {
    type Request = AgeRequest;
    type Output = AgeResult;

    const ENDPOINT: Endpoint = Endpoint::Age;
    const TITLE: &'static str = "Age Calculator";
    const SUBTITLE: &'static str = "Calculate your exact age in years, months and days";
    const FIELDS: &'static [FieldInfo] = &[FieldInfo {
        flag: "--dob",
        label: "Date of Birth",
        hint: "YYYY-MM-DD",
    }];

    fn to_request(&self) -> Result<AgeRequest, FormError> {
        let dob = required("Date of Birth", &self.dob)?;
        Ok(AgeRequest {
            dob: dob.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgpaForm {
    pub cgpa: String,
    pub university: String,
}

impl Default for CgpaForm {
    fn default() -> Self {
        Self {
            cgpa: String::new(),
            university: DEFAULT_UNIVERSITY.to_string(),
        }
    }
}

impl CalculatorForm for CgpaForm {
    type Request = CgpaRequest;
    type Output = CgpaResult;

    const ENDPOINT: Endpoint = Endpoint::Cgpa;
    const TITLE: &'static str = "CGPA to Percentage";
    const SUBTITLE: &'static str = "Convert your CGPA to percentage for all Indian universities";
    const FIELDS: &'static [FieldInfo] = &[
        FieldInfo {
            flag: "--cgpa",
            label: "Enter CGPA",
            hint: "e.g. 8.5",
        },
        FieldInfo {
            flag: "--university",
            label: "University",
            hint: "default, VTU, Mumbai, Anna, AKTU, PTU",
        },
    ];

    fn to_request(&self) -> Result<CgpaRequest, FormError> {
        let cgpa = parse_number("CGPA", &self.cgpa)?;
        let university = required("University", &self.university)?;
        Ok(CgpaRequest {
            cgpa,
            university: university.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GstForm {
    pub amount: String,
    pub rate: String,
}

impl Default for GstForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            rate: DEFAULT_GST_SLAB.to_string(),
        }
    }
}

impl CalculatorForm for GstForm {
    type Request = GstRequest;
    type Output = GstResult;

    const ENDPOINT: Endpoint = Endpoint::Gst;
    const TITLE: &'static str = "GST Calculator India";
    const SUBTITLE: &'static str = "Calculate GST amount and total price instantly";
    const FIELDS: &'static [FieldInfo] = &[
        FieldInfo {
            flag: "--amount",
            label: "Enter Amount (₹)",
            hint: "e.g. 1000",
        },
        FieldInfo {
            flag: "--rate",
            label: "GST Rate",
            hint: "5, 12, 18 or 28 (default 18)",
        },
    ];

    fn to_request(&self) -> Result<GstRequest, FormError> {
        Ok(GstRequest {
            amount: parse_number("Amount", &self.amount)?,
            rate: parse_number("GST Rate", &self.rate)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmiForm {
    pub principal: String,
    pub annual_rate: String,
    pub tenure_months: String,
}

impl CalculatorForm for EmiForm {
    type Request = EmiRequest;
    type Output = EmiResult;

    const ENDPOINT: Endpoint = Endpoint::Emi;
    const TITLE: &'static str = "EMI Calculator";
    const SUBTITLE: &'static str = "Calculate your loan EMI, interest, and total payable amount";
    const FIELDS: &'static [FieldInfo] = &[
        FieldInfo {
            flag: "--principal",
            label: "Loan Amount (₹)",
            hint: "e.g. 1000000",
        },
        FieldInfo {
            flag: "--annual-rate",
            label: "Annual Interest Rate (%)",
            hint: "e.g. 6.5",
        },
        FieldInfo {
            flag: "--tenure-months",
            label: "Loan Tenure (Months)",
            hint: "e.g. 240",
        },
    ];

    fn to_request(&self) -> Result<EmiRequest, FormError> {
        Ok(EmiRequest {
            principal: parse_number("Loan Amount", &self.principal)?,
            annual_rate: parse_number("Annual Interest Rate", &self.annual_rate)?,
            tenure_months: parse_integer("Loan Tenure", &self.tenure_months)?,
        })
    }
}

// ============================================================================
// Page
// ============================================================================

/// How a submission ended, without the result payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    /// Service error message, as shown to the user
    Rejected(String),
    /// Transport detail (the user sees the generic connection message)
    Unreachable(String),
}

impl SubmitStatus {
    fn of<R>(outcome: &Outcome<R>) -> Self {
        match outcome {
            Outcome::Success(_) => SubmitStatus::Success,
            Outcome::Rejected(message) => SubmitStatus::Rejected(message.clone()),
            Outcome::Unreachable(detail) => SubmitStatus::Unreachable(detail.clone()),
        }
    }
}

/// One calculator page: form fields plus display state
pub struct CalculatorPage<F: CalculatorForm> {
    pub form: F,
    state: FormState<F::Output>,
}

impl<F: CalculatorForm> CalculatorPage<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState<F::Output> {
        &self.state
    }

    /// Validate and send the form. `Err` means validation blocked the
    /// submission and nothing was sent; transport and service errors land
    /// in `state().error()` instead.
    pub async fn submit<T: Transport>(&mut self, transport: &T) -> Result<SubmitStatus, FormError> {
        let request = self.form.to_request()?;

        self.state.begin();
        let outcome = client::submit(transport, F::ENDPOINT, &request).await;
        let status = SubmitStatus::of(&outcome);
        self.state.complete(outcome);
        Ok(status)
    }
}

// ============================================================================
// Routing
// ============================================================================

/// What a path opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Calculator(&'static ToolDescriptor),
}

/// `/` (or an empty path) is the landing page, `/tools/<id>` a calculator
pub fn resolve(path: &str) -> Option<Route> {
    let path = path.trim();
    if path.is_empty() || path == "/" {
        return Some(Route::Home);
    }
    find_by_path(path).map(Route::Calculator)
}
