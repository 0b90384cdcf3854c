//! Layout and interaction state for the transaction network.
//!
//! Wraps the `force_graph` spring-embedder simulation. The layout settles
//! once at construction (a bounded number of simulation steps, no per-frame
//! physics); afterwards node positions only change through user dragging.
//! Pan and zoom are view transforms applied at draw time, not layout. Node
//! placement varies between runs, so anything asserting on the layout must
//! check topology rather than coordinates.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::elements::GraphElements;
use super::style::NodeStyle;

/// Simulation steps run at construction before the first draw.
const SETTLE_STEPS: usize = 300;
/// Fixed timestep for the settle pass, matching a 60 Hz frame.
const SETTLE_DT: f32 = 0.016;
/// Extra world-space slack around a node when hit-testing.
const HIT_PADDING: f64 = 4.0;

/// Per-node display data attached to each simulation node.
#[derive(Clone, Debug, Default)]
pub struct NodeVisual {
	pub label: String,
	pub style: NodeStyle,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Settled network layout plus interaction tracking.
pub struct NetworkState {
	pub graph: ForceGraph<NodeVisual, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
}

impl NetworkState {
	/// Build the simulation from derived elements and settle the layout.
	pub fn new(elements: &GraphElements, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut idx_by_id: HashMap<&str, DefaultNodeIdx> =
			HashMap::with_capacity(elements.nodes.len());

		for (i, node) in elements.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / elements.nodes.len() as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeVisual {
					label: node.label.clone(),
					style: node.style,
				},
			});
			idx_by_id.insert(node.id.as_str(), idx);
		}

		// Endpoints were validated during derivation; the guarded lookup
		// keeps this total regardless.
		for edge in &elements.edges {
			if let (Some(&src), Some(&tgt)) = (
				idx_by_id.get(edge.source.as_str()),
				idx_by_id.get(edge.target.as_str()),
			) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		let mut state = Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
		};
		state.settle();
		state
	}

	/// Run the layout to a stable configuration. Called once; the layout is
	/// static afterwards.
	fn settle(&mut self) {
		for _ in 0..SETTLE_STEPS {
			self.graph.update(SETTLE_DT);
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Find the node under a screen position, using each node's own radius.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let hit_radius = node.data.user_data.style.size / 2.0 + HIT_PADDING;
			if (dx * dx + dy * dy).sqrt() < hit_radius {
				found = Some(node.index());
			}
		});
		found
	}
}
