//! Analysis-result data structures, as emitted by the detection service.

use serde::Deserialize;

/// An account in the transaction network.
#[derive(Clone, Debug, Deserialize)]
pub struct AccountNode {
	/// Unique account identifier. Used to reference nodes in edges.
	pub account_id: String,
	/// Anomaly score assigned upstream; consumed for display only.
	pub suspicion_score: f64,
	/// Whether the detection service flagged this account.
	pub suspicious: bool,
	/// Fraud ring this account belongs to, if any.
	pub ring_id: Option<String>,
}

/// A directed transaction between two accounts. Multiple edges between the
/// same pair are permitted and each renders independently.
#[derive(Clone, Debug, Deserialize)]
pub struct TransactionEdge {
	/// Sending account id.
	pub from: String,
	/// Receiving account id.
	pub to: String,
}

/// The raw network handed to the renderer: accounts plus directed
/// transaction edges. Edge endpoints should reference existing accounts;
/// dangling references are tolerated and dropped during derivation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TransactionGraph {
	pub nodes: Vec<AccountNode>,
	pub edges: Vec<TransactionEdge>,
}

/// Headline counts and timing, consumed for display only.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Summary {
	pub total_accounts_analyzed: u64,
	pub suspicious_accounts_flagged: u64,
	pub fraud_rings_detected: u64,
	pub processing_time_seconds: f64,
}

/// A group of accounts believed to cooperate in a fraud pattern. Computed
/// upstream; this crate only displays membership.
#[derive(Clone, Debug, Deserialize)]
pub struct FraudRing {
	pub ring_id: String,
	/// Pattern label assigned by the detector (e.g. "cycle",
	/// "smurfing_fan_in").
	pub pattern_type: String,
	pub member_accounts: Vec<String>,
	pub risk_score: f64,
}

/// Complete output of one analysis run.
#[derive(Clone, Debug, Deserialize)]
pub struct AnalysisResult {
	pub summary: Summary,
	pub graph: TransactionGraph,
	#[serde(default)]
	pub fraud_rings: Vec<FraudRing>,
}
