//! Procedural CPU-side geometry.
//!
//! Every mesh in the scene is generated here from a handful of parameters:
//! spheres, boxes, cylinders, tori, flat circles and polylines. Generators are
//! pure functions returning a [`Geometry`] so they can be inspected without a
//! GPU; [`crate::data_structures::scene_graph::to_scene_node`] uploads them.

use std::f32::consts::PI;

use cgmath::{InnerSpace, Point3, Vector3};

use crate::data_structures::model::ModelVertex;

/// How the index buffer of a [`Geometry`] is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    /// Pairs of indices, one pair per segment.
    Lines,
}

impl From<Topology> for wgpu::PrimitiveTopology {
    fn from(topology: Topology) -> Self {
        match topology {
            Topology::Triangles => wgpu::PrimitiveTopology::TriangleList,
            Topology::Lines => wgpu::PrimitiveTopology::LineList,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Geometry {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl Geometry {
    fn triangles(vertices: Vec<ModelVertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            topology: Topology::Triangles,
        }
    }

    /// Positions of all vertices, in generation order.
    pub fn points(&self) -> Vec<Point3<f32>> {
        self.vertices
            .iter()
            .map(|v| Point3::from(v.position))
            .collect()
    }

    /// Number of line segments (or triangles for a triangle mesh).
    pub fn primitive_count(&self) -> usize {
        match self.topology {
            Topology::Triangles => self.indices.len() / 3,
            Topology::Lines => self.indices.len() / 2,
        }
    }
}

fn vertex(position: [f32; 3], normal: [f32; 3]) -> ModelVertex {
    ModelVertex { position, normal }
}

/// UV sphere centred on the origin; poles on the Y axis.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Geometry {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for iy in 0..=height_segments {
        let phi = iy as f32 / height_segments as f32 * PI;
        for ix in 0..=width_segments {
            let theta = ix as f32 / width_segments as f32 * 2.0 * PI;
            let normal = [
                -phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            ];
            vertices.push(vertex(
                [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                normal,
            ));
        }
    }

    let row = width_segments + 1;
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    Geometry::triangles(vertices, indices)
}

/// Axis-aligned box centred on the origin, one quad per face.
pub fn cuboid(width: f32, height: f32, depth: f32) -> Geometry {
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
    // (normal, u axis, v axis): u × v == normal so the quads wind counter-clockwise
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let half = Vector3::new(hw, hh, hd);
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        let n = Vector3::from(normal);
        let u = Vector3::from(u);
        let v = Vector3::from(v);
        let base = vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = n + u * su + v * sv;
            vertices.push(vertex(
                [p.x * half.x, p.y * half.y, p.z * half.z],
                normal,
            ));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    Geometry::triangles(vertices, indices)
}

/// Capped cylinder (or truncated cone) centred on the origin along the Y axis.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Geometry {
    let radial_segments = radial_segments.max(3);
    let half = height / 2.0;
    let slope = (radius_bottom - radius_top) / height;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // side
    for (y, radius) in [(half, radius_top), (-half, radius_bottom)] {
        for i in 0..=radial_segments {
            let theta = i as f32 / radial_segments as f32 * 2.0 * PI;
            let (sin, cos) = theta.sin_cos();
            let normal = Vector3::new(sin, slope, cos).normalize();
            vertices.push(vertex([radius * sin, y, radius * cos], normal.into()));
        }
    }
    let row = radial_segments + 1;
    for i in 0..radial_segments {
        let (a, b, c, d) = (i, row + i, row + i + 1, i + 1);
        indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    // caps
    for (y, radius, sign) in [(half, radius_top, 1.0f32), (-half, radius_bottom, -1.0)] {
        let center = vertices.len() as u32;
        vertices.push(vertex([0.0, y, 0.0], [0.0, sign, 0.0]));
        for i in 0..=radial_segments {
            let theta = i as f32 / radial_segments as f32 * 2.0 * PI;
            let (sin, cos) = theta.sin_cos();
            vertices.push(vertex([radius * sin, y, radius * cos], [0.0, sign, 0.0]));
        }
        for i in 0..radial_segments {
            let (p, q) = (center + 1 + i, center + 2 + i);
            if sign > 0.0 {
                indices.extend_from_slice(&[p, q, center]);
            } else {
                indices.extend_from_slice(&[q, p, center]);
            }
        }
    }

    Geometry::triangles(vertices, indices)
}

/// Torus in the XY plane (hole along Z), centred on the origin.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Geometry {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * 2.0 * PI;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * 2.0 * PI;
            let position = Vector3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let ring_center = Vector3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let normal = (position - ring_center).normalize();
            vertices.push(vertex(position.into(), normal.into()));
        }
    }

    let row = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Geometry::triangles(vertices, indices)
}

/// Flat disc in the XY plane facing +Z.
pub fn circle(radius: f32, segments: u32) -> Geometry {
    let segments = segments.max(3);
    let mut vertices = vec![vertex([0.0, 0.0, 0.0], [0.0, 0.0, 1.0])];
    let mut indices = Vec::new();
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * 2.0 * PI;
        vertices.push(vertex(
            [radius * theta.cos(), radius * theta.sin(), 0.0],
            [0.0, 0.0, 1.0],
        ));
    }
    for i in 1..=segments {
        indices.extend_from_slice(&[i, i + 1, 0]);
    }
    Geometry::triangles(vertices, indices)
}

/// Polyline through `points`: one vertex per point, one segment per consecutive pair.
pub fn line_strip(points: &[Point3<f32>]) -> Geometry {
    let vertices = points
        .iter()
        .map(|p| vertex([p.x, p.y, p.z], [0.0, 1.0, 0.0]))
        .collect::<Vec<_>>();
    let indices = (1..points.len() as u32)
        .flat_map(|i| [i - 1, i])
        .collect::<Vec<_>>();
    Geometry {
        vertices,
        indices,
        topology: Topology::Lines,
    }
}

/// Points on a horizontal circle of `radius` around `center`, first point repeated
/// at the end so the strip closes on itself.
pub fn ring_points(center: Point3<f32>, radius: f32, segments: u32) -> Vec<Point3<f32>> {
    arc_points(center, radius, 0.0, 2.0 * PI, segments)
}

/// Points on a horizontal arc from `start` to `end` (radians, measured from +X towards +Z).
pub fn arc_points(
    center: Point3<f32>,
    radius: f32,
    start: f32,
    end: f32,
    segments: u32,
) -> Vec<Point3<f32>> {
    (0..=segments)
        .map(|j| {
            let angle = start + (end - start) * j as f32 / segments as f32;
            Point3::new(
                center.x + angle.cos() * radius,
                center.y,
                center.z + angle.sin() * radius,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_in_range(geometry: &Geometry) {
        let len = geometry.vertices.len() as u32;
        assert!(geometry.indices.iter().all(|&i| i < len));
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let sphere = sphere(0.3, 32, 32);
        assert_indices_in_range(&sphere);
        for p in sphere.points() {
            let r = (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
            assert!((r - 0.3).abs() < 1e-5);
        }
    }

    #[test]
    fn cuboid_spans_its_extent() {
        let cuboid = cuboid(0.2, 3.5, 6.0);
        assert_eq!(cuboid.vertices.len(), 24);
        assert_eq!(cuboid.primitive_count(), 12);
        let max_y = cuboid.points().iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let min_z = cuboid.points().iter().map(|p| p.z).fold(f32::MAX, f32::min);
        assert!((max_y - 1.75).abs() < 1e-6);
        assert!((min_z + 3.0).abs() < 1e-6);
    }

    #[test]
    fn cylinder_and_torus_indices_are_valid() {
        assert_indices_in_range(&cylinder(0.3, 0.3, 12.0, 32));
        let torus = torus(0.75, 0.05, 8, 16);
        assert_indices_in_range(&torus);
        assert_eq!(torus.primitive_count(), 8 * 16 * 2);
        for p in torus.points() {
            assert!(p.z.abs() <= 0.05 + 1e-6);
        }
    }

    #[test]
    fn line_strip_connects_consecutive_points() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let strip = line_strip(&points);
        assert_eq!(strip.topology, Topology::Lines);
        assert_eq!(strip.indices, vec![0, 1, 1, 2]);
        assert_eq!(strip.primitive_count(), 2);
    }

    #[test]
    fn ring_is_closed() {
        let ring = ring_points(Point3::new(1.0, 2.0, 3.0), 0.5, 32);
        assert_eq!(ring.len(), 33);
        let (first, last) = (ring[0], ring[32]);
        assert!((first.x - last.x).abs() < 1e-5 && (first.z - last.z).abs() < 1e-5);
        assert!(ring.iter().all(|p| p.y == 2.0));
    }
}
