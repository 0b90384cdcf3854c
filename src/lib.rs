//! fraud-graph: interactive visualization for fraud-ring analysis results.
//!
//! This crate presents the output of an external fraud-detection service: a
//! transaction network rendered on an HTML canvas with force-directed layout,
//! summary counts, and a fraud-ring table, composed over a purely decorative
//! ambient 3D mesh. Detection itself, CSV parsing, and transport are all
//! upstream concerns; this crate only consumes the finished result.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::ambient::AmbientScene;
pub use components::network_graph::{
	AnalysisResult, GraphElements, NetworkGraph, Summary, TransactionGraph, derive_elements,
};
pub use components::ring_table::RingTable;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("fraud-graph: logging initialized");
}

/// Load an analysis result from a script element with id="analysis-data".
/// Expected format: the detection service's JSON output with
/// `{ summary, graph: { nodes, edges }, fraud_rings }`.
fn load_analysis() -> Option<AnalysisResult> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("analysis-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<AnalysisResult>(&json_text) {
		Ok(result) => {
			info!(
				"fraud-graph: loaded {} accounts, {} transactions, {} rings",
				result.graph.nodes.len(),
				result.graph.edges.len(),
				result.fraud_rings.len()
			);
			Some(result)
		}
		Err(e) => {
			warn!("fraud-graph: failed to parse analysis result: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the analysis result from the DOM and renders the results page over
/// the ambient background scene.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let result = RwSignal::new(load_analysis());
	let graph = Signal::derive(move || result.get().map(|r| r.graph));
	let rings = Signal::derive(move || {
		result.get().map(|r| r.fraud_rings).unwrap_or_default()
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Fraud Ring Analysis" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		// Decorative background, never fed analysis data.
		<AmbientScene />

		<main class="result-page">
			<h1 class="main-title">"Analysis Results"</h1>

			{move || result.get().map(|r| view! { <SummaryGrid summary=r.summary /> })}

			<div class="content-grid">
				<section class="card large-card">
					<h2>"Transaction Network"</h2>
					<NetworkGraph graph=graph />
				</section>

				<section class="card">
					<h2>"Fraud Rings"</h2>
					<RingTable rings=rings />
				</section>
			</div>
		</main>
	}
}

/// Headline counts from the analysis summary.
#[component]
fn SummaryGrid(summary: Summary) -> impl IntoView {
	view! {
		<div class="summary-grid">
			<SummaryCard
				title="Accounts Analyzed"
				value=summary.total_accounts_analyzed.to_string()
			/>
			<SummaryCard
				title="Suspicious Accounts"
				value=summary.suspicious_accounts_flagged.to_string()
			/>
			<SummaryCard
				title="Fraud Rings"
				value=summary.fraud_rings_detected.to_string()
			/>
			<SummaryCard
				title="Processing Time (s)"
				value=format!("{:.2}", summary.processing_time_seconds)
			/>
		</div>
	}
}

/// A single labeled count in the summary grid.
#[component]
fn SummaryCard(title: &'static str, value: String) -> impl IntoView {
	view! {
		<div class="summary-card">
			<p class="summary-title">{title}</p>
			<p class="summary-value">{value}</p>
		</div>
	}
}
