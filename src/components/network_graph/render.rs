//! Canvas rendering for the transaction network.
//!
//! Two passes inside the pan/zoom transform: curved directed edges with
//! arrowheads first, then nodes with their encoded fill/border and centered
//! account-id labels. All sizes are world units, so the whole drawing scales
//! together under zoom.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{NetworkState, NodeVisual};
use super::style;

/// Control-point offset as a fraction of edge length.
const CURVE_OFFSET: f64 = 0.15;

/// Renders the settled network to the canvas.
pub fn render(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	state.graph.visit_edges(|n1, n2, _| {
		draw_edge(ctx, n1, n2);
	});
	state.graph.visit_nodes(|node| {
		draw_node(ctx, node);
	});

	ctx.restore();
}

fn draw_edge(
	ctx: &CanvasRenderingContext2d,
	n1: &force_graph::Node<NodeVisual>,
	n2: &force_graph::Node<NodeVisual>,
) {
	let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}
	let (ux, uy) = (dx / dist, dy / dist);

	let r1 = n1.data.user_data.style.size / 2.0;
	let r2 = n2.data.user_data.style.size / 2.0;

	// Quadratic curve bowed perpendicular to the straight line, trimmed to
	// the node rims; the arrowhead claims its own length at the target end.
	let (sx, sy) = (x1 + ux * r1, y1 + uy * r1);
	let (ex, ey) = (
		x2 - ux * (r2 + style::ARROW_SIZE),
		y2 - uy * (r2 + style::ARROW_SIZE),
	);
	let bow = dist * CURVE_OFFSET;
	let (mx, my) = ((x1 + x2) / 2.0 - uy * bow, (y1 + y2) / 2.0 + ux * bow);

	let css = style::EDGE_COLOR.to_css();
	ctx.set_stroke_style_str(&css);
	ctx.set_line_width(style::EDGE_WIDTH);
	ctx.begin_path();
	ctx.move_to(sx, sy);
	let _ = ctx.quadratic_curve_to(mx, my, ex, ey);
	ctx.stroke();

	// Arrowhead at the target rim, oriented along the curve's final segment.
	let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
	let (tdx, tdy) = (tip_x - mx, tip_y - my);
	let tlen = (tdx * tdx + tdy * tdy).sqrt().max(0.001);
	let (aux, auy) = (tdx / tlen, tdy / tlen);
	let (back_x, back_y) = (
		tip_x - aux * style::ARROW_SIZE,
		tip_y - auy * style::ARROW_SIZE,
	);
	let (px, py) = (-auy * style::ARROW_SIZE * 0.5, aux * style::ARROW_SIZE * 0.5);

	ctx.set_fill_style_str(&css);
	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn draw_node(ctx: &CanvasRenderingContext2d, node: &force_graph::Node<NodeVisual>) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let visual = &node.data.user_data;
	let radius = visual.style.size / 2.0;

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&visual.style.fill.to_css());
	ctx.fill();

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(&visual.style.border.to_css());
	ctx.set_line_width(visual.style.border_width);
	ctx.stroke();

	ctx.set_fill_style_str("#ffffff");
	ctx.set_font(visual.style.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&visual.label, x, y);
}
