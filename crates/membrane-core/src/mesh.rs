use crate::field::DisplacementField;
use glam::{Vec2, Vec3};

/// What the simulation needs from a mesh: in-place position writes and a way
/// to refresh normals afterwards.
pub trait DeformableMesh {
    fn positions_mut(&mut self) -> &mut [Vec3];
    fn recompute_normals(&mut self);
}

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub rest: [f32; 2],
}

/// Regular plane grid in local XY (z is the displacement axis), laid out row
/// by row from +y to -y with uv `(0, 1)` at the top-left corner.
#[derive(Clone, Debug)]
pub struct GridMesh {
    size: Vec2,
    rest: Vec<Vec3>,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    indices: Vec<u32>,
}

impl GridMesh {
    pub fn new(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Self {
        let sx = segments_x.max(1) as usize;
        let sy = segments_y.max(1) as usize;
        let (nx, ny) = (sx + 1, sy + 1);
        let cell = Vec2::new(width / sx as f32, height / sy as f32);

        let mut rest = Vec::with_capacity(nx * ny);
        let mut uvs = Vec::with_capacity(nx * ny);
        for iy in 0..ny {
            let y = height * 0.5 - iy as f32 * cell.y;
            for ix in 0..nx {
                let x = -width * 0.5 + ix as f32 * cell.x;
                rest.push(Vec3::new(x, y, 0.0));
                uvs.push(Vec2::new(ix as f32 / sx as f32, 1.0 - iy as f32 / sy as f32));
            }
        }

        let mut indices = Vec::with_capacity(sx * sy * 6);
        for iy in 0..sy {
            for ix in 0..sx {
                let a = (ix + nx * iy) as u32;
                let b = (ix + nx * (iy + 1)) as u32;
                let c = (ix + 1 + nx * (iy + 1)) as u32;
                let d = (ix + 1 + nx * iy) as u32;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        let mut mesh = Self {
            size: Vec2::new(width, height),
            positions: rest.clone(),
            normals: vec![Vec3::Z; rest.len()],
            rest,
            uvs,
            indices,
        };
        mesh.recompute_normals();
        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.rest.len()
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rest_positions(&self) -> &[Vec3] {
        &self.rest
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Restores rest positions, e.g. after a bad frame.
    pub fn reset(&mut self) {
        self.positions.clone_from(&self.rest);
        self.recompute_normals();
    }

    /// Fills `out` with interleaved vertices.
    pub fn write_vertices(&mut self, out: &mut Vec<MeshVertex>) {
        out.clear();
        out.extend(
            self.positions
                .iter()
                .zip(&self.normals)
                .zip(&self.uvs)
                .zip(&self.rest)
                .map(|(((p, n), uv), r)| MeshVertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                    uv: uv.to_array(),
                    rest: [r.x, r.y],
                }),
        );
    }
}

impl DeformableMesh for GridMesh {
    fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    /// Area-weighted vertex normals accumulated over all triangles.
    fn recompute_normals(&mut self) {
        self.normals.iter_mut().for_each(|n| *n = Vec3::ZERO);
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let pa = self.positions[a];
            let face = (self.positions[b] - pa).cross(self.positions[c] - pa);
            self.normals[a] += face;
            self.normals[b] += face;
            self.normals[c] += face;
        }
        for n in &mut self.normals {
            *n = n.try_normalize().unwrap_or(Vec3::Z);
        }
    }
}

/// Commits the field into `mesh` and refreshes its normals. Returns `false`
/// when the mesh buffer does not line up with the field's vertices.
pub fn commit<M: DeformableMesh + ?Sized>(field: &DisplacementField, mesh: &mut M) -> bool {
    if !field.write_positions(mesh.positions_mut()) {
        return false;
    }
    mesh.recompute_normals();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_grid_faces_up() {
        let mesh = GridMesh::new(2.0, 2.0, 4, 4);
        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(mesh.indices().len(), 4 * 4 * 6);
        for n in mesh.normals() {
            assert!((*n - Vec3::Z).length() < 1e-6);
        }
    }

    struct ShortMesh {
        positions: Vec<Vec3>,
        normals_refreshed: bool,
    }

    impl DeformableMesh for ShortMesh {
        fn positions_mut(&mut self) -> &mut [Vec3] {
            &mut self.positions
        }

        fn recompute_normals(&mut self) {
            self.normals_refreshed = true;
        }
    }

    fn field_for(mesh: &GridMesh) -> DisplacementField {
        let config = crate::SimulationConfig::default();
        DisplacementField::new(&config, mesh.rest_positions(), mesh.size(), 10.0)
    }

    #[test]
    fn commit_rejects_mismatched_buffer() {
        let grid = GridMesh::new(2.0, 2.0, 4, 4);
        let field = field_for(&grid);
        let sentinel = Vec3::splat(7.0);
        let mut short = ShortMesh {
            positions: vec![sentinel; grid.vertex_count() - 1],
            normals_refreshed: false,
        };
        assert!(!commit(&field, &mut short));
        assert!(short.positions.iter().all(|p| *p == sentinel));
        assert!(!short.normals_refreshed);
    }

    #[test]
    fn commit_writes_matching_mesh() {
        let mut grid = GridMesh::new(2.0, 2.0, 4, 4);
        let field = field_for(&grid);
        assert!(commit(&field, &mut grid));
        assert_eq!(grid.positions(), grid.rest_positions());
    }

    #[test]
    fn corners_match_extent() {
        let mesh = GridMesh::new(4.0, 2.0, 2, 2);
        let rest = mesh.rest_positions();
        assert_eq!(rest[0], Vec3::new(-2.0, 1.0, 0.0));
        assert_eq!(rest[8], Vec3::new(2.0, -1.0, 0.0));
    }
}
