//! Procedural mesh generation and per-frame orientation.

use super::pointer::PointerOffset;

/// Number of points sampled at mount.
pub const NODE_COUNT: usize = 120;
/// Half-extent of the sampling cube on each axis.
pub const HALF_EXTENT: f64 = 10.0;
/// Pairs closer than this become edges.
pub const EDGE_THRESHOLD: f64 = 4.0;

/// Autonomous yaw increment per frame.
pub const SPIN_RATE: f64 = 0.001;
/// Yaw nudge per frame per unit of horizontal pointer offset.
pub const YAW_GAIN: f64 = 0.02;
/// Pitch per unit of vertical pointer offset (absolute, not accumulated).
pub const PITCH_GAIN: f64 = 1.5;

/// A point in 3D space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Vec3 {
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	pub fn distance_to(self, other: Vec3) -> f64 {
		let (dx, dy, dz) = (other.x - self.x, other.y - self.y, other.z - self.z);
		(dx * dx + dy * dy + dz * dz).sqrt()
	}
}

/// Decorative point-and-line mesh. Generated once; points and edges are
/// immutable for the rest of the component's lifetime.
pub struct AmbientMesh {
	points: Vec<Vec3>,
	edges: Vec<(usize, usize)>,
}

impl AmbientMesh {
	/// Sample [`NODE_COUNT`] points inside the cube of half-extent
	/// [`HALF_EXTENT`] and derive the proximity-edge set.
	pub fn generate() -> Self {
		let mut points = Vec::with_capacity(NODE_COUNT);
		for i in 0..NODE_COUNT {
			// Deterministic pseudo-random based on index for a consistent look
			let seed = i as f64;
			points.push(Vec3::new(
				(pseudo_random(seed * 1.1) - 0.5) * 2.0 * HALF_EXTENT,
				(pseudo_random(seed * 2.3) - 0.5) * 2.0 * HALF_EXTENT,
				(pseudo_random(seed * 3.7) - 0.5) * 2.0 * HALF_EXTENT,
			));
		}
		Self::from_points(points)
	}

	/// Build the proximity-edge set over a fixed point set: every unordered
	/// pair `(i, j)`, `i < j`, closer than [`EDGE_THRESHOLD`] becomes a
	/// segment. O(n²) over a small fixed n, and it runs exactly once.
	pub fn from_points(points: Vec<Vec3>) -> Self {
		let mut edges = Vec::new();
		for i in 0..points.len() {
			for j in (i + 1)..points.len() {
				if points[i].distance_to(points[j]) < EDGE_THRESHOLD {
					edges.push((i, j));
				}
			}
		}
		Self { points, edges }
	}

	pub fn points(&self) -> &[Vec3] {
		&self.points
	}

	pub fn edges(&self) -> &[(usize, usize)] {
		&self.edges
	}
}

/// Simple pseudo-random function (deterministic)
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

/// Current rotation of the whole mesh, advanced once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
	pub yaw: f64,
	pub pitch: f64,
}

impl Orientation {
	/// One frame of rotation: constant spin plus a yaw nudge from the
	/// horizontal pointer offset; pitch follows the vertical offset
	/// directly instead of accumulating.
	pub fn advance(&mut self, pointer: PointerOffset) {
		self.yaw += SPIN_RATE + pointer.x * YAW_GAIN;
		self.pitch = pointer.y * PITCH_GAIN;
	}

	/// Rotate a point: yaw about the vertical axis, then pitch about the
	/// horizontal axis.
	pub fn apply(self, p: Vec3) -> Vec3 {
		let (sin_y, cos_y) = self.yaw.sin_cos();
		let x1 = p.x * cos_y + p.z * sin_y;
		let z1 = -p.x * sin_y + p.z * cos_y;

		let (sin_p, cos_p) = self.pitch.sin_cos();
		let y1 = p.y * cos_p - z1 * sin_p;
		let z2 = p.y * sin_p + z1 * cos_p;

		Vec3::new(x1, y1, z2)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn proximity_scan_matches_a_worked_example() {
		// d(0,1) = 3 (< 4, connected); d(0,2) = 5, d(1,2) ≈ 5.83,
		// d(*,3) ≥ 20 (all disconnected); d(0,3) well beyond threshold.
		let mesh = AmbientMesh::from_points(vec![
			Vec3::new(0.0, 0.0, 0.0),
			Vec3::new(3.0, 0.0, 0.0),
			Vec3::new(0.0, 5.0, 0.0),
			Vec3::new(20.0, 0.0, 0.0),
		]);
		assert_eq!(mesh.edges(), &[(0, 1)]);
	}

	#[test]
	fn boundary_distance_is_not_connected() {
		// Exactly at the threshold: strict less-than excludes the pair.
		let mesh = AmbientMesh::from_points(vec![
			Vec3::new(0.0, 0.0, 0.0),
			Vec3::new(EDGE_THRESHOLD, 0.0, 0.0),
		]);
		assert!(mesh.edges().is_empty());
	}

	#[test]
	fn generation_is_deterministic_and_in_bounds() {
		let a = AmbientMesh::generate();
		let b = AmbientMesh::generate();
		assert_eq!(a.points().len(), NODE_COUNT);
		assert_eq!(a.points(), b.points());
		assert_eq!(a.edges(), b.edges());
		for p in a.points() {
			assert!(p.x.abs() <= HALF_EXTENT);
			assert!(p.y.abs() <= HALF_EXTENT);
			assert!(p.z.abs() <= HALF_EXTENT);
		}
		for &(i, j) in a.edges() {
			assert!(i < j);
			assert!(a.points()[i].distance_to(a.points()[j]) < EDGE_THRESHOLD);
		}
	}

	#[test]
	fn centered_pointer_spins_without_tilt() {
		let mut orientation = Orientation::default();
		orientation.advance(PointerOffset::default());
		assert_eq!(orientation.yaw, SPIN_RATE);
		assert_eq!(orientation.pitch, 0.0);
	}

	#[test]
	fn pointer_offsets_drive_yaw_and_pitch_in_fixed_directions() {
		let mut orientation = Orientation::default();
		// Top-left corner: both offsets negative.
		let pointer = PointerOffset { x: -0.5, y: -0.5 };
		orientation.advance(pointer);
		assert!(orientation.yaw < SPIN_RATE);
		assert_eq!(orientation.pitch, -0.5 * PITCH_GAIN);
	}

	#[test]
	fn pitch_follows_the_pointer_instead_of_accumulating() {
		let mut orientation = Orientation::default();
		let pointer = PointerOffset { x: 0.0, y: 0.3 };
		orientation.advance(pointer);
		orientation.advance(pointer);
		orientation.advance(pointer);
		assert_eq!(orientation.pitch, 0.3 * PITCH_GAIN);
		// Yaw keeps spinning frame over frame.
		assert!((orientation.yaw - 3.0 * SPIN_RATE).abs() < 1e-12);
	}

	#[test]
	fn yaw_rotation_preserves_distance_from_the_vertical_axis() {
		let orientation = Orientation {
			yaw: 1.2,
			pitch: 0.0,
		};
		let p = Vec3::new(3.0, 2.0, 4.0);
		let rotated = orientation.apply(p);
		let before = (p.x * p.x + p.z * p.z).sqrt();
		let after = (rotated.x * rotated.x + rotated.z * rotated.z).sqrt();
		assert!((before - after).abs() < 1e-9);
		assert_eq!(rotated.y, p.y);
	}
}
