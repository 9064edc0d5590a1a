//! Wire contracts of the calculation endpoints
//!
//! Requests are read from a raw `serde_json::Value` rather than derived
//! `Deserialize` so that each missing or mistyped field produces its own
//! message (`` `cgpa` must be a number ``) instead of a serde error string.

use crate::calc::cgpa::DEFAULT_UNIVERSITY;
use crate::catalog::ToolDescriptor;
use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The four calculation endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Age,
    Cgpa,
    Gst,
    Emi,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [Endpoint::Age, Endpoint::Cgpa, Endpoint::Gst, Endpoint::Emi];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Age => "/api/age",
            Endpoint::Cgpa => "/api/cgpa",
            Endpoint::Gst => "/api/gst",
            Endpoint::Emi => "/api/emi",
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRequest {
    pub dob: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CgpaRequest {
    pub cgpa: f64,
    pub university: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstRequest {
    pub amount: f64,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiRequest {
    pub principal: f64,
    pub annual_rate: f64,
    pub tenure_months: i64,
}

/// A request body that can be validated out of arbitrary JSON
pub trait FromBody: Sized {
    const ENDPOINT: Endpoint;

    fn from_body(body: &Value) -> Result<Self, CalcError>;
}

/// Field accessor over a JSON object body
struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    fn of(body: &'a Value) -> Result<Self, CalcError> {
        match body {
            Value::Object(map) => Ok(Fields(map)),
            Value::Null => Err(CalcError::EmptyBody),
            _ => Err(CalcError::InvalidJson("expected a JSON object".to_string())),
        }
    }

    /// `null` counts as missing
    fn get(&self, name: &'static str) -> Option<&'a Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    fn number(&self, name: &'static str) -> Result<f64, CalcError> {
        let value = self.get(name).ok_or(CalcError::MissingField(name))?;
        match value {
            Value::Number(n) => n.as_f64().ok_or(CalcError::NotANumber(name)),
            _ => Err(CalcError::NotANumber(name)),
        }
    }

    fn integer(&self, name: &'static str) -> Result<i64, CalcError> {
        let value = self.get(name).ok_or(CalcError::MissingField(name))?;
        value.as_i64().ok_or(CalcError::NotAnInteger(name))
    }

    fn string(&self, name: &'static str) -> Result<Option<&'a str>, CalcError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(CalcError::NotAString(name)),
        }
    }
}

impl FromBody for AgeRequest {
    const ENDPOINT: Endpoint = Endpoint::Age;

    fn from_body(body: &Value) -> Result<Self, CalcError> {
        let fields = Fields::of(body)?;
        let dob = fields
            .string("dob")?
            .filter(|s| !s.trim().is_empty())
            .ok_or(CalcError::MissingField("dob"))?;
        Ok(AgeRequest {
            dob: dob.to_string(),
        })
    }
}

impl FromBody for CgpaRequest {
    const ENDPOINT: Endpoint = Endpoint::Cgpa;

    fn from_body(body: &Value) -> Result<Self, CalcError> {
        let fields = Fields::of(body)?;
        let cgpa = fields.number("cgpa")?;
        let university = fields.string("university")?.unwrap_or(DEFAULT_UNIVERSITY);
        Ok(CgpaRequest {
            cgpa,
            university: university.to_string(),
        })
    }
}

impl FromBody for GstRequest {
    const ENDPOINT: Endpoint = Endpoint::Gst;

    fn from_body(body: &Value) -> Result<Self, CalcError> {
        let fields = Fields::of(body)?;
        Ok(GstRequest {
            amount: fields.number("amount")?,
            rate: fields.number("rate")?,
        })
    }
}

impl FromBody for EmiRequest {
    const ENDPOINT: Endpoint = Endpoint::Emi;

    fn from_body(body: &Value) -> Result<Self, CalcError> {
        let fields = Fields::of(body)?;
        Ok(EmiRequest {
            principal: fields.number("principal")?,
            annual_rate: fields.number("annual_rate")?,
            tenure_months: fields.integer("tenure_months")?,
        })
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CgpaResult {
    pub cgpa: f64,
    pub percentage: f64,
    pub university: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstResult {
    pub original: f64,
    pub gst_amount: f64,
    pub gst_rate: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    pub principal: f64,
    pub annual_rate: f64,
    pub tenure_months: i64,
    pub emi: f64,
    pub total_interest: f64,
    pub total_amount: f64,
}

/// Application-level error body: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&CalcError> for ErrorBody {
    fn from(err: &CalcError) -> Self {
        ErrorBody {
            error: err.to_string(),
        }
    }
}

/// `GET /api/tools` response
#[derive(Debug, Clone, Serialize)]
pub struct ToolsResponse {
    pub tools: Vec<&'static ToolDescriptor>,
    pub categories: Vec<&'static str>,
}

/// `GET /api/health` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub endpoints: Vec<String>,
}
