//! Fixed visual encoding for the transaction network.
//!
//! The node encoding is a total two-branch function of the suspicion flag;
//! no other input influences it. Edge styling is uniform.

/// RGBA color, rendered as a CSS color string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Dark red fill for suspicious accounts.
pub const SUSPICIOUS_FILL: Color = Color::rgb(0x8b, 0x00, 0x00);
/// White border for suspicious accounts.
pub const SUSPICIOUS_BORDER: Color = Color::rgb(0xff, 0xff, 0xff);
/// Sky blue fill for normal accounts.
pub const NORMAL_FILL: Color = Color::rgb(0x87, 0xce, 0xeb);
/// Medium blue border for normal accounts.
pub const NORMAL_BORDER: Color = Color::rgb(0x5d, 0xad, 0xe2);

/// Dark green with slight transparency, shared by edge lines and arrowheads.
pub const EDGE_COLOR: Color = Color::rgba(0, 100, 0, 0.9);
/// Uniform edge line width in world units.
pub const EDGE_WIDTH: f64 = 2.0;
/// Arrowhead length in world units.
pub const ARROW_SIZE: f64 = 8.0;

/// Resolved per-node visual attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub fill: Color,
	pub border: Color,
	pub border_width: f64,
	/// Node diameter in world units.
	pub size: f64,
	/// Canvas font for the centered account-id label.
	pub label_font: &'static str,
}

impl Default for NodeStyle {
	fn default() -> Self {
		node_style(false)
	}
}

/// The fixed encoding keyed off suspicion status.
pub const fn node_style(suspicious: bool) -> NodeStyle {
	if suspicious {
		NodeStyle {
			fill: SUSPICIOUS_FILL,
			border: SUSPICIOUS_BORDER,
			border_width: 4.0,
			size: 50.0,
			label_font: "bold 10px sans-serif",
		}
	} else {
		NodeStyle {
			fill: NORMAL_FILL,
			border: NORMAL_BORDER,
			border_width: 2.0,
			size: 35.0,
			label_font: "9px sans-serif",
		}
	}
}
