//! Latest-pointer-position tracking for the ambient mesh.

use std::cell::Cell;
use std::rc::Rc;

/// Pointer offset from the viewport center, normalized to [-0.5, 0.5] per
/// axis. The default is centered: no tilt, autonomous spin only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
	pub x: f64,
	pub y: f64,
}

impl PointerOffset {
	/// Normalize client coordinates against the viewport size. Degenerate
	/// viewport sizes fall back to centered.
	pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
		if width <= 0.0 || height <= 0.0 {
			return Self::default();
		}
		Self {
			x: client_x / width - 0.5,
			y: client_y / height - 0.5,
		}
	}
}

/// Single live slot holding the most recent pointer sample.
///
/// Written by the input handlers on every mouse-move or single-touch-move,
/// read once per animation frame. Last write wins; no queuing, and both
/// sides run on the same thread. Owned by the ambient component and passed
/// into the per-frame update explicitly rather than read from a global.
#[derive(Clone, Default)]
pub struct PointerCell(Rc<Cell<PointerOffset>>);

impl PointerCell {
	pub fn set(&self, offset: PointerOffset) {
		self.0.set(offset);
	}

	pub fn get(&self) -> PointerOffset {
		self.0.get()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centered_pointer_has_zero_offset() {
		let offset = PointerOffset::from_client(400.0, 300.0, 800.0, 600.0);
		assert_eq!(offset, PointerOffset { x: 0.0, y: 0.0 });
	}

	#[test]
	fn top_left_corner_is_negative_on_both_axes() {
		let offset = PointerOffset::from_client(0.0, 0.0, 800.0, 600.0);
		assert!(offset.x < 0.0);
		assert!(offset.y < 0.0);
		assert_eq!(offset, PointerOffset { x: -0.5, y: -0.5 });
	}

	#[test]
	fn degenerate_viewport_falls_back_to_centered() {
		let offset = PointerOffset::from_client(100.0, 100.0, 0.0, 0.0);
		assert_eq!(offset, PointerOffset::default());
	}

	#[test]
	fn cell_is_last_write_wins() {
		let cell = PointerCell::default();
		assert_eq!(cell.get(), PointerOffset::default());
		cell.set(PointerOffset { x: 0.1, y: 0.2 });
		cell.set(PointerOffset { x: -0.3, y: 0.4 });
		assert_eq!(cell.get(), PointerOffset { x: -0.3, y: 0.4 });
	}
}
