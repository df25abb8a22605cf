use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annual rates as supplied by the marketplace forms, in percent (12 = 12%).
pub type Rate = Decimal;

/// Risk bucket assigned to a lender at assessment time and carried on every
/// investment placed against that lender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Lifecycle state of an investment. Terminal once completed or defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    Active,
    Completed,
    Defaulted,
}

/// Snapshot of a lender's risk-relevant attributes, denormalized onto the
/// investment at placement time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LenderSnapshot {
    pub name: String,
    pub credit_score: Decimal,
    pub portfolio_size: Money,
    /// Historical default rate in percent (2 = 2%).
    pub default_rate: Decimal,
}

/// A completed or ongoing capital placement.
///
/// The engine treats these as plain data records assembled by the caller;
/// referential integrity of the id fields lives outside the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    pub id: String,
    pub investor_id: String,
    pub lender_id: String,
    pub amount: Money,
    pub expected_return: Money,
    /// Unset until the investment matures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_return: Option<Money>,
    /// Term length in months.
    pub duration: u32,
    pub status: InvestmentStatus,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub risk_level: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lender_info: Option<LenderSnapshot>,
}

/// Envelope for calculators that report methodology and warnings alongside
/// the numeric result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata attached to every enveloped computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

impl ComputationMetadata {
    pub fn current(elapsed_us: u64) -> Self {
        ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        }
    }
}
