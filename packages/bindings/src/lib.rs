use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse a decimal passed as a string from the JavaScript side.
fn parse_decimal(field: &str, raw: &str) -> NapiResult<Decimal> {
    Decimal::from_str(raw).map_err(|e| napi::Error::from_reason(format!("{field}: {e}")))
}

// ---------------------------------------------------------------------------
// Lending
// ---------------------------------------------------------------------------

#[napi]
pub fn monthly_payment(
    principal: String,
    term_months: u32,
    annual_rate_pct: String,
) -> NapiResult<String> {
    let principal = parse_decimal("principal", &principal)?;
    let rate = parse_decimal("annual_rate_pct", &annual_rate_pct)?;
    let payment =
        lend_analytics_core::lending::amortization::monthly_payment(principal, term_months, rate)
            .map_err(to_napi_error)?;
    Ok(payment.to_string())
}

#[napi]
pub fn repayment_schedule(input_json: String) -> NapiResult<String> {
    let input: lend_analytics_core::lending::amortization::RepaymentScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = lend_analytics_core::lending::amortization::build_repayment_schedule(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Returns
// ---------------------------------------------------------------------------

#[napi]
pub fn expected_return(
    amount: String,
    annual_rate_pct: String,
    duration_months: u32,
) -> NapiResult<String> {
    let amount = parse_decimal("amount", &amount)?;
    let rate = parse_decimal("annual_rate_pct", &annual_rate_pct)?;
    let gain = lend_analytics_core::returns::projection::expected_return(
        amount,
        rate,
        duration_months,
    )
    .map_err(to_napi_error)?;
    Ok(gain.to_string())
}

#[napi]
pub fn roi(invested: String, returned: String) -> NapiResult<String> {
    let invested = parse_decimal("invested", &invested)?;
    let returned = parse_decimal("returned", &returned)?;
    let roi_pct = lend_analytics_core::returns::projection::roi(invested, returned)
        .map_err(to_napi_error)?;
    Ok(roi_pct.to_string())
}

#[napi]
pub fn project_future_value(input_json: String) -> NapiResult<String> {
    let input: lend_analytics_core::returns::projection::GrowthProjectionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = lend_analytics_core::returns::projection::project_future_value(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Risk
// ---------------------------------------------------------------------------

#[napi]
pub fn assess_lender_risk(input_json: String) -> NapiResult<String> {
    let profile: lend_analytics_core::risk::assessor::LenderRiskProfile =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        lend_analytics_core::risk::assessor::assess_lender(&profile).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

#[napi]
pub fn recommend_allocation(total_amount: String, risk_tolerance: String) -> NapiResult<String> {
    let total = parse_decimal("total_amount", &total_amount)?;
    let tolerance = lend_analytics_core::portfolio::allocation::RiskTolerance::from_str(
        &risk_tolerance,
    )
    .map_err(to_napi_error)?;
    let output = lend_analytics_core::portfolio::allocation::recommend_allocation(total, tolerance)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn diversification_score(investments_json: String) -> NapiResult<String> {
    let investments: Vec<lend_analytics_core::types::Investment> =
        serde_json::from_str(&investments_json).map_err(to_napi_error)?;
    let output =
        lend_analytics_core::portfolio::diversification::score_diversification(&investments)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
