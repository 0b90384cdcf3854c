//! Fullscreen background canvas for the ambient mesh.
//!
//! The mesh is generated once when the component mounts. A
//! `requestAnimationFrame` loop re-orients and redraws it each frame from
//! the latest pointer sample; window-level pointer listeners only overwrite
//! that sample. Everything acquired at mount (listeners, the pending frame)
//! is released in `on_cleanup`, so no input can reach the rotation state
//! after teardown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use super::mesh::{AmbientMesh, Orientation};
use super::pointer::{PointerCell, PointerOffset};

/// Camera distance from the origin along +Z.
const CAMERA_Z: f64 = 18.0;
/// Vertical field of view in radians (75 degrees).
const FOV_Y: f64 = 75.0 * std::f64::consts::PI / 180.0;
/// Point radius in world units.
const POINT_RADIUS: f64 = 0.12;
/// Geometry closer to the camera plane than this is skipped.
const NEAR_PLANE: f64 = 0.1;

const BACKGROUND_COLOR: &str = "#0f172a";
const POINT_COLOR: &str = "#2563eb";
const LINE_COLOR: &str = "rgba(96, 165, 250, 0.4)";

/// Decorative 3D network rendered behind all interactive content. Never
/// reads analysis data and never receives pointer events itself; it only
/// observes window-level pointer movement.
#[component]
pub fn AmbientScene() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let pointer = PointerCell::default();
	let size = Rc::new(Cell::new((0.0_f64, 0.0_f64)));
	let running = Rc::new(Cell::new(true));
	let frame_id = Rc::new(Cell::new(0));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let mouse_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let touch_cb: Rc<RefCell<Option<Closure<dyn FnMut(TouchEvent)>>>> =
		Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (pointer_init, size_init) = (pointer.clone(), size.clone());
	let (running_init, frame_id_init) = (running.clone(), frame_id.clone());
	let (animate_init, mouse_init, touch_init, resize_init) = (
		animate.clone(),
		mouse_cb.clone(),
		touch_cb.clone(),
		resize_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		size_init.set((w, h));

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		// One-time sampling and proximity scan; immutable afterwards.
		let mesh = AmbientMesh::generate();

		let (pointer_move, size_move) = (pointer_init.clone(), size_init.clone());
		*mouse_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			let (w, h) = size_move.get();
			pointer_move.set(PointerOffset::from_client(
				ev.client_x() as f64,
				ev.client_y() as f64,
				w,
				h,
			));
		}));

		let (pointer_touch, size_touch) = (pointer_init.clone(), size_init.clone());
		*touch_init.borrow_mut() = Some(Closure::new(move |ev: TouchEvent| {
			if let Some(touch) = ev.touches().get(0) {
				let (w, h) = size_touch.get();
				pointer_touch.set(PointerOffset::from_client(
					touch.client_x() as f64,
					touch.client_y() as f64,
					w,
					h,
				));
			}
		}));

		let (size_resize, canvas_resize) = (size_init.clone(), canvas.clone());
		*resize_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			size_resize.set((nw, nh));
		}));

		if let Some(ref cb) = *mouse_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = *touch_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("touchmove", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = *resize_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (pointer_anim, size_anim) = (pointer_init.clone(), size_init.clone());
		let (running_inner, frame_id_inner) = (running_init.clone(), frame_id_init.clone());
		let animate_inner = animate_init.clone();
		let mut orientation = Orientation::default();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			orientation.advance(pointer_anim.get());
			let (w, h) = size_anim.get();
			draw(&ctx, &mesh, orientation, w, h);

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
				frame_id_init.set(id);
			}
		}
	});

	// Scoped acquisition: every listener attached at mount is detached here,
	// on every exit path, and the pending frame is cancelled before the
	// closures drop.
	on_cleanup({
		let cleanup = send_wrapper::SendWrapper::new(move || {
			running.set(false);
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(frame_id.get());
				if let Some(cb) = mouse_cb.borrow_mut().take() {
					let _ = window
						.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
				}
				if let Some(cb) = touch_cb.borrow_mut().take() {
					let _ = window
						.remove_event_listener_with_callback("touchmove", cb.as_ref().unchecked_ref());
				}
				if let Some(cb) = resize_cb.borrow_mut().take() {
					let _ = window
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
			}
			animate.borrow_mut().take();
		});
		move || cleanup.take()()
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="ambient-scene"
			style=format!(
				"position: fixed; top: 0; left: 0; width: 100%; height: 100vh; \
				 z-index: -1; pointer-events: none; background: {};",
				BACKGROUND_COLOR,
			)
		/>
	}
}

/// Project the mesh through the current orientation and draw it: one stroked
/// path for all segments, then the points on top.
fn draw(ctx: &CanvasRenderingContext2d, mesh: &AmbientMesh, orientation: Orientation, w: f64, h: f64) {
	ctx.set_fill_style_str(BACKGROUND_COLOR);
	ctx.fill_rect(0.0, 0.0, w, h);

	let focal = (h / 2.0) / (FOV_Y / 2.0).tan();
	let project = |i: usize| -> Option<(f64, f64, f64)> {
		let p = orientation.apply(mesh.points()[i]);
		let depth = CAMERA_Z - p.z;
		if depth <= NEAR_PLANE {
			return None;
		}
		let scale = focal / depth;
		Some((w / 2.0 + p.x * scale, h / 2.0 - p.y * scale, scale))
	};

	ctx.set_stroke_style_str(LINE_COLOR);
	ctx.set_line_width(1.0);
	ctx.begin_path();
	for &(i, j) in mesh.edges() {
		if let (Some((x1, y1, _)), Some((x2, y2, _))) = (project(i), project(j)) {
			ctx.move_to(x1, y1);
			ctx.line_to(x2, y2);
		}
	}
	ctx.stroke();

	ctx.set_fill_style_str(POINT_COLOR);
	for i in 0..mesh.points().len() {
		if let Some((x, y, scale)) = project(i) {
			ctx.begin_path();
			let _ = ctx.arc(x, y, POINT_RADIUS * scale, 0.0, 2.0 * std::f64::consts::PI);
			ctx.fill();
		}
	}
}
