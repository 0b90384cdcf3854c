//! Pure derivation of visual graph elements from an analysis result.
//!
//! [`derive_elements`] is the only entry point: it maps the raw node/edge
//! lists to renderable elements with resolved styles. No state persists
//! between calls; the layout engine consumes the output separately.

use std::collections::HashMap;

use super::style::{self, NodeStyle};
use super::types::TransactionGraph;

/// How the upstream analysis classified an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
	Suspicious,
	Normal,
}

/// A renderable account node with its resolved visual style.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualNode {
	pub id: String,
	/// Display label, drawn centered in the node.
	pub label: String,
	pub style: NodeStyle,
	pub classification: Classification,
}

/// A renderable directed edge between two known accounts.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualEdge {
	/// Composite id, `"{from}-{to}"`. Multi-edges share an id and still
	/// render independently; nothing is keyed by edge id.
	pub id: String,
	pub source: String,
	pub target: String,
}

/// The complete derived element set for one analysis result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphElements {
	pub nodes: Vec<VisualNode>,
	pub edges: Vec<VisualEdge>,
}

impl GraphElements {
	/// True when there is nothing to render.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

/// Derive the visual element set from a transaction graph.
///
/// Duplicate account ids resolve last-write-wins: the later node replaces
/// the earlier entry, which keeps its slot in the ordered set. Edges whose
/// endpoints don't match a known account id are dropped silently; external
/// data may be partially inconsistent and that is not an error here.
pub fn derive_elements(graph: &TransactionGraph) -> GraphElements {
	let mut nodes: Vec<VisualNode> = Vec::with_capacity(graph.nodes.len());
	let mut slot_by_id: HashMap<&str, usize> = HashMap::with_capacity(graph.nodes.len());

	for account in &graph.nodes {
		let classification = if account.suspicious {
			Classification::Suspicious
		} else {
			Classification::Normal
		};
		let node = VisualNode {
			id: account.account_id.clone(),
			label: account.account_id.clone(),
			style: style::node_style(account.suspicious),
			classification,
		};
		match slot_by_id.get(account.account_id.as_str()) {
			Some(&slot) => nodes[slot] = node,
			None => {
				slot_by_id.insert(account.account_id.as_str(), nodes.len());
				nodes.push(node);
			}
		}
	}

	let edges = graph
		.edges
		.iter()
		.filter(|e| {
			slot_by_id.contains_key(e.from.as_str()) && slot_by_id.contains_key(e.to.as_str())
		})
		.map(|e| VisualEdge {
			id: format!("{}-{}", e.from, e.to),
			source: e.from.clone(),
			target: e.to.clone(),
		})
		.collect();

	GraphElements { nodes, edges }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::types::{AccountNode, TransactionEdge};

	fn account(id: &str, suspicious: bool) -> AccountNode {
		AccountNode {
			account_id: id.to_string(),
			suspicion_score: if suspicious { 0.9 } else { 0.0 },
			suspicious,
			ring_id: suspicious.then(|| "RING_001".to_string()),
		}
	}

	fn edge(from: &str, to: &str) -> TransactionEdge {
		TransactionEdge {
			from: from.to_string(),
			to: to.to_string(),
		}
	}

	#[test]
	fn empty_graph_yields_no_elements() {
		let elements = derive_elements(&TransactionGraph::default());
		assert!(elements.is_empty());
		assert!(elements.nodes.is_empty());
		assert!(elements.edges.is_empty());
	}

	#[test]
	fn encoding_is_total_over_the_suspicion_flag() {
		let graph = TransactionGraph {
			nodes: vec![account("ACC_BAD", true), account("ACC_OK", false)],
			edges: vec![],
		};
		let elements = derive_elements(&graph);

		let bad = &elements.nodes[0];
		assert_eq!(bad.classification, Classification::Suspicious);
		assert_eq!(bad.style.fill, style::SUSPICIOUS_FILL);
		assert_eq!(bad.style.border, style::SUSPICIOUS_BORDER);
		assert_eq!(bad.style.border_width, 4.0);
		assert_eq!(bad.style.size, 50.0);

		let ok = &elements.nodes[1];
		assert_eq!(ok.classification, Classification::Normal);
		assert_eq!(ok.style.fill, style::NORMAL_FILL);
		assert_eq!(ok.style.border, style::NORMAL_BORDER);
		assert_eq!(ok.style.border_width, 2.0);
		assert_eq!(ok.style.size, 35.0);
	}

	#[test]
	fn dangling_edges_are_dropped_and_valid_ones_kept() {
		let graph = TransactionGraph {
			nodes: vec![account("A", false), account("B", true)],
			edges: vec![
				edge("A", "B"),
				edge("A", "GHOST"),
				edge("GHOST", "B"),
				edge("B", "A"),
			],
		};
		let elements = derive_elements(&graph);

		let pairs: Vec<(&str, &str)> = elements
			.edges
			.iter()
			.map(|e| (e.source.as_str(), e.target.as_str()))
			.collect();
		assert_eq!(pairs, vec![("A", "B"), ("B", "A")]);
	}

	#[test]
	fn multi_edges_between_the_same_pair_all_survive() {
		let graph = TransactionGraph {
			nodes: vec![account("A", false), account("B", false)],
			edges: vec![edge("A", "B"), edge("A", "B"), edge("A", "B")],
		};
		let elements = derive_elements(&graph);
		assert_eq!(elements.edges.len(), 3);
		assert!(elements.edges.iter().all(|e| e.id == "A-B"));
	}

	#[test]
	fn duplicate_node_ids_resolve_last_write_wins() {
		let graph = TransactionGraph {
			nodes: vec![account("A", false), account("B", false), account("A", true)],
			edges: vec![],
		};
		let elements = derive_elements(&graph);

		assert_eq!(elements.nodes.len(), 2);
		// The duplicate keeps its original slot but carries the later data.
		assert_eq!(elements.nodes[0].id, "A");
		assert_eq!(elements.nodes[0].classification, Classification::Suspicious);
		assert_eq!(elements.nodes[1].id, "B");
	}

	#[test]
	fn derivation_is_idempotent() {
		let graph = TransactionGraph {
			nodes: vec![account("A", true), account("B", false), account("C", false)],
			edges: vec![edge("A", "B"), edge("B", "C"), edge("C", "A")],
		};
		assert_eq!(derive_elements(&graph), derive_elements(&graph));
	}
}
