//! Plain-text formatting of catalog entries and calculator results
//!
//! Everything here returns strings without colour codes; `display` adds
//! the styling when printing.

use calc_common::{AgeResult, CgpaResult, EmiResult, GstResult, ToolDescriptor};

/// One label/value line of a result card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
    pub highlight: bool,
}

impl Row {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            highlight: false,
        }
    }

    fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

/// Shortest decimal form: `1000` rather than `1000.0`
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Group an integer in threes: 12345 -> "12,345"
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

/// Indian grouping (last three digits, then pairs) with at most two
/// decimals: 1860717.45 -> "18,60,717.45"
pub fn format_inr(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::new();
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && remaining >= 3 && (remaining == 3 || (remaining - 3) % 2 == 0) {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// One catalog entry as a short block of lines
pub fn tool_lines(tool: &ToolDescriptor) -> Vec<String> {
    vec![
        format!("{} {}  [{}]", tool.icon, tool.name, tool.category),
        format!("   {}", tool.description),
        format!("   {}", tool.path),
    ]
}

pub fn age_rows(result: &AgeResult) -> Vec<Row> {
    vec![
        Row::new("Years", result.years.to_string()).highlighted(),
        Row::new("Months", result.months.to_string()).highlighted(),
        Row::new("Days", result.days.to_string()).highlighted(),
        Row::new(
            "Total",
            format!("{} days lived", group_thousands(result.total_days)),
        ),
    ]
}

pub fn cgpa_rows(result: &CgpaResult) -> Vec<Row> {
    vec![
        Row::new("Percentage", format!("{}%", format_number(result.percentage))).highlighted(),
        Row::new("CGPA", format_number(result.cgpa)),
        Row::new("University", result.university.clone()),
    ]
}

pub fn gst_rows(result: &GstResult) -> Vec<Row> {
    vec![
        Row::new("Original Amount", format!("₹{}", format_number(result.original))),
        Row::new(
            format!("GST ({}%)", format_number(result.gst_rate)),
            format!("₹{}", format_number(result.gst_amount)),
        ),
        Row::new("Total Amount", format!("₹{}", format_number(result.total))).highlighted(),
    ]
}

pub fn emi_rows(result: &EmiResult) -> Vec<Row> {
    vec![
        Row::new("Monthly EMI", format!("₹{}", format_inr(result.emi))).highlighted(),
        Row::new(
            "Total Interest Payable",
            format!("₹{}", format_inr(result.total_interest)),
        ),
        Row::new(
            "Total Amount Payable",
            format!("₹{}", format_inr(result.total_amount)),
        )
        .highlighted(),
    ]
}

/// Footer line under the EMI breakdown
pub fn emi_terms(result: &EmiResult) -> String {
    format!(
        "Tenure: {} months | Rate: {}% per annum",
        result.tenure_months,
        format_number(result.annual_rate)
    )
}
