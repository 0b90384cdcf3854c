//! Leptos components for the transaction-network view.
//!
//! [`NetworkGraph`] owns the empty-state branch and rebuilds the canvas from
//! scratch whenever a new result arrives. `NetworkCanvas` wires the canvas
//! element, mouse interaction (node drag, pan, wheel zoom), the redraw loop,
//! and the fixed legend overlay.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::elements::derive_elements;
use super::render;
use super::state::NetworkState;
use super::style;
use super::types::TransactionGraph;

/// Renders an interactive view of the transaction network, or a centered
/// placeholder when no graph (or an empty one) is available.
#[component]
pub fn NetworkGraph(#[prop(into)] graph: Signal<Option<TransactionGraph>>) -> impl IntoView {
	view! {
		<div
			class="network-graph"
			style="height: 500px; border: 1px solid #ddd; position: relative;"
		>
			{move || match graph.get() {
				Some(g) if !g.nodes.is_empty() => {
					view! { <NetworkCanvas graph=g /> }.into_any()
				}
				_ => {
					view! {
						<div style="height: 100%; display: flex; align-items: center; justify-content: center;">
							"No graph data available"
						</div>
					}
						.into_any()
				}
			}}
		</div>
	}
}

/// Canvas host for one non-empty transaction graph. Elements are derived and
/// the layout settled once at mount; the animation loop only redraws.
#[component]
fn NetworkCanvas(graph: TransactionGraph) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<NetworkState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let running = Rc::new(Cell::new(true));
	let frame_id = Rc::new(Cell::new(0));
	let (state_init, animate_init) = (state.clone(), animate.clone());
	let (running_anim, frame_id_anim) = (running.clone(), frame_id.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0),
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.unwrap_or(500.0),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let elements = derive_elements(&graph);
		*state_init.borrow_mut() = Some(NetworkState::new(&elements, w, h));

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let (running_inner, frame_id_inner) = (running_anim.clone(), frame_id_anim.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref s) = *state_anim.borrow() {
				render::render(s, &ctx);
			}
			if !running_inner.get() {
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					frame_id_inner.set(id);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_id_anim.set(id);
			}
		}
	});

	// Stop the loop and cancel any pending frame before the closure drops.
	on_cleanup({
		let (running, frame_id, animate) = (running.clone(), frame_id.clone(), animate.clone());
		let cleanup = send_wrapper::SendWrapper::new(move || {
			running.set(false);
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(frame_id.get());
			}
			animate.borrow_mut().take();
		});
		move || cleanup.take()()
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						s.drag.node_start_x = node.x();
						s.drag.node_start_y = node.y();
					}
				});
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					let (dx, dy) = (
						(x - s.drag.start_x) / s.transform.k,
						(y - s.drag.start_y) / s.transform.k,
					);
					let (nx, ny) = (
						s.drag.node_start_x + dx as f32,
						s.drag.node_start_y + dy as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (s.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / s.transform.k;
			s.transform.x = x - (x - s.transform.x) * ratio;
			s.transform.y = y - (y - s.transform.y) * ratio;
			s.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; width: 100%; height: 100%; cursor: grab;"
		/>
		<Legend />
	}
}

/// Fixed two-swatch legend, independent of the data.
#[component]
fn Legend() -> impl IntoView {
	let swatch = |color: &str, bordered: bool| {
		format!(
			"display: inline-block; width: 12px; height: 12px; background-color: {}; \
			 margin-right: 6px; border-radius: 2px;{}",
			color,
			if bordered { " border: 1px solid white;" } else { "" }
		)
	};

	view! {
		<div
			class="graph-legend"
			style="position: absolute; bottom: 10px; right: 10px; font-size: 12px; \
			       color: #666; background-color: rgba(255, 255, 255, 0.9); \
			       padding: 8px 12px; border-radius: 4px; max-width: 200px;"
		>
			<div>
				<strong>"Legend:"</strong>
			</div>
			<div style="margin-top: 4px;">
				<span style=swatch(&style::NORMAL_FILL.to_css(), false)></span>
				"Normal Account"
			</div>
			<div style="margin-top: 4px;">
				<span style=swatch(&style::SUSPICIOUS_FILL.to_css(), true)></span>
				"Suspicious Account"
			</div>
		</div>
	}
}
