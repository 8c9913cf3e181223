/*!
 * Submission Validation
 * Parse and check user-entered process fields before they reach the queue
 */

use crate::core::limits::MAX_SIM_TIME;
use crate::core::{ProcessName, SimTime, SubmitError, SubmitField, SubmitResult};

/// A submission that passed field-level validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub name: ProcessName,
    pub arrival: SimTime,
    pub burst: SimTime,
}

impl SubmitRequest {
    /// Validate already-typed fields
    pub fn new(name: &str, arrival: SimTime, burst: SimTime) -> SubmitResult<Self> {
        let name = validate_name(name)?;
        if burst == 0 {
            return Err(SubmitError::ZeroBurst);
        }
        validate_range(SubmitField::Arrival, arrival)?;
        validate_range(SubmitField::Burst, burst)?;
        Ok(Self {
            name,
            arrival,
            burst,
        })
    }

    /// Validate raw text fields as typed into a form or console
    pub fn parse(name: &str, arrival: &str, burst: &str) -> SubmitResult<Self> {
        let name = validate_name(name)?;
        let arrival = parse_field(SubmitField::Arrival, arrival)?;
        let burst = parse_field(SubmitField::Burst, burst)?;
        Self::new(name.as_str(), arrival, burst)
    }
}

/// Reject arrivals earlier than the last accepted submission
pub(crate) fn validate_order(arrival: SimTime, last: Option<SimTime>) -> SubmitResult<()> {
    match last {
        Some(last) if arrival < last => Err(SubmitError::OutOfOrder { arrival, last }),
        _ => Ok(()),
    }
}

fn validate_range(field: SubmitField, value: SimTime) -> SubmitResult<()> {
    if value > MAX_SIM_TIME {
        return Err(SubmitError::TooLarge {
            field,
            value,
            max: MAX_SIM_TIME,
        });
    }
    Ok(())
}

fn validate_name(name: &str) -> SubmitResult<ProcessName> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SubmitError::EmptyName);
    }
    Ok(ProcessName::from(name))
}

fn parse_field(field: SubmitField, raw: &str) -> SubmitResult<SimTime> {
    raw.trim()
        .parse::<SimTime>()
        .map_err(|_| SubmitError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}
