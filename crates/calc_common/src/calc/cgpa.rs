//! CGPA to percentage conversion with per-university multipliers

use super::round2;
use crate::api::CgpaResult;
use crate::error::CalcError;

/// University key used when the request names none
pub const DEFAULT_UNIVERSITY: &str = "default";

/// Multiplier for universities not in the table
const FALLBACK_MULTIPLIER: f64 = 9.5;

/// A university option as offered by the CGPA page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct University {
    pub key: &'static str,
    pub label: &'static str,
    pub multiplier: f64,
}

pub const UNIVERSITIES: [University; 6] = [
    University {
        key: "default",
        label: "General Formula (×9.5)",
        multiplier: 9.5,
    },
    University {
        key: "VTU",
        label: "VTU (×10)",
        multiplier: 10.0,
    },
    University {
        key: "Mumbai",
        label: "Mumbai University",
        multiplier: 9.5,
    },
    University {
        key: "Anna",
        label: "Anna University",
        multiplier: 10.0,
    },
    University {
        key: "AKTU",
        label: "AKTU",
        multiplier: 10.0,
    },
    University {
        key: "PTU",
        label: "PTU",
        multiplier: 9.5,
    },
];

/// Keys are matched exactly, unknown names get the general formula
pub fn multiplier_for(university: &str) -> f64 {
    UNIVERSITIES
        .iter()
        .find(|u| u.key == university)
        .map(|u| u.multiplier)
        .unwrap_or(FALLBACK_MULTIPLIER)
}

/// Convert a 0-10 CGPA into a percentage, capped at 100
pub fn convert_cgpa(cgpa: f64, university: &str) -> Result<CgpaResult, CalcError> {
    if !(0.0..=10.0).contains(&cgpa) {
        return Err(CalcError::CgpaOutOfRange);
    }

    let university = university.trim();
    let percentage = (cgpa * multiplier_for(university)).min(100.0);

    Ok(CgpaResult {
        cgpa: round2(cgpa),
        percentage: round2(percentage),
        university: university.to_string(),
    })
}
