//! Static ocean tile mesh: rest-state vertices and triangle-list indices.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use log::{debug, info, warn};

use crate::error::Result;
use crate::params::{validate_grid, EXPENSIVE_RESOLUTION};

/// Flat water tint shared by every vertex
pub const WATER_COLOR: [f32; 3] = [0.0, 0.56, 0.58];

/// Rest-state vertex (position + color + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GridVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

/// Generate the rest-state vertices and triangle indices of an N×N tile.
///
/// Vertices are laid out row-major, spanning `[-tile/2, tile/2)` on both axes
/// with spacing `tile_size_m / resolution`. Indices form a triangle list with
/// two triangles per quad and consistent counter-clockwise winding in the
/// XY plane.
pub fn generate(resolution: u32, tile_size_m: f32) -> Result<(Vec<GridVertex>, Vec<u32>)> {
    validate_grid(resolution, tile_size_m)?;
    if resolution >= EXPENSIVE_RESOLUTION {
        warn!(
            "Resolution {resolution} is very demanding; generating and ticking the surface will take considerable time"
        );
    }
    if !resolution.is_power_of_two() {
        warn!("Resolution {resolution} is not a power of two");
    }

    debug!("generating vertices");
    let vertices = generate_vertices(resolution, tile_size_m);

    debug!("generating indices");
    let indices = generate_indices(resolution);

    info!(
        "Ocean surface ready: {} vertices, {} triangles ({}x{}, tile {} m)",
        vertices.len(),
        indices.len() / 3,
        resolution,
        resolution,
        tile_size_m
    );

    Ok((vertices, indices))
}

fn generate_vertices(resolution: u32, tile_size_m: f32) -> Vec<GridVertex> {
    let n = resolution as usize;
    let step = tile_size_m / resolution as f32;
    let uv_step = 1.0 / resolution as f32;
    let origin = -0.5 * tile_size_m;

    (0..n * n)
        .map(|index| {
            let row = (index / n) as f32;
            let column = (index % n) as f32;
            GridVertex {
                position: [origin + column * step, origin + row * step, 0.0],
                color: WATER_COLOR,
                uv: [column * uv_step, row * uv_step],
            }
        })
        .collect()
}

/// Walk the lattice with three cursors, alternating between the upper and
/// lower triangle of each quad.
///
/// `a` walks the current row, `b` the row below it. Each step moves whichever
/// cursor was not advanced last time onto `c`. When `c` lands on a row start
/// the whole triple shifts by one so no triangle spans the row seam.
fn generate_indices(resolution: u32) -> Vec<u32> {
    let n = resolution as usize;
    let total = n * n;
    let mut indices = Vec::with_capacity(6 * (n - 1) * (n - 1));

    let (mut a, mut b) = (0usize, n);
    let mut upper = true;
    loop {
        let mut c = if upper { a + 1 } else { b + 1 };
        if c % n == 0 {
            a += 1;
            b += 1;
            c += 1;
        }
        if a >= total || b >= total || c >= total {
            break;
        }

        // (a, c, b) fixes the winding
        indices.extend_from_slice(&[a as u32, c as u32, b as u32]);

        if upper {
            a = c;
        } else {
            b = c;
        }
        upper = !upper;
    }

    indices
}

/// Rest-state mesh for one ocean tile; immutable once built
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    vertices: Vec<GridVertex>,
    indices: Vec<u32>,
    resolution: u32,
    tile_size_m: f32,
}

impl SurfaceGrid {
    /// Build the grid, failing with `InvalidConfiguration` on bad inputs
    pub fn new(resolution: u32, tile_size_m: f32) -> Result<Self> {
        let (vertices, indices) = generate(resolution, tile_size_m)?;
        Ok(Self {
            vertices,
            indices,
            resolution,
            tile_size_m,
        })
    }

    pub fn vertices(&self) -> &[GridVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn tile_size_m(&self) -> f32 {
        self.tile_size_m
    }

    /// Distance between neighbouring vertices (meters)
    pub fn step_m(&self) -> f32 {
        self.tile_size_m / self.resolution as f32
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// `(column, row)` of a vertex index, `None` past the last vertex
    pub fn lattice_coords(&self, index: usize) -> Option<Vec2> {
        if index >= self.vertex_count() {
            return None;
        }
        let n = self.resolution as usize;
        Some(Vec2::new((index % n) as f32, (index / n) as f32))
    }

    /// Consume the grid, handing the static streams to the renderer
    pub fn into_parts(self) -> (Vec<GridVertex>, Vec<u32>) {
        (self.vertices, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OceanError;

    fn row_col(index: u32, resolution: u32) -> (i64, i64) {
        ((index / resolution) as i64, (index % resolution) as i64)
    }

    #[test]
    fn test_grid_sizes() {
        for resolution in [2u32, 3, 4, 5, 8, 16, 33, 64] {
            let (vertices, indices) = generate(resolution, 4.0).unwrap();
            let n = resolution as usize;
            assert_eq!(vertices.len(), n * n, "resolution {resolution}");
            assert_eq!(indices.len(), 6 * (n - 1) * (n - 1), "resolution {resolution}");
        }
    }

    #[test]
    fn test_small_grid_triangles() {
        let (_, indices) = generate(3, 3.0).unwrap();
        let expected: Vec<u32> = vec![
            0, 1, 3, 1, 4, 3, 1, 2, 4, 2, 5, 4, //
            3, 4, 6, 4, 7, 6, 4, 5, 7, 5, 8, 7,
        ];
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_indices_in_bounds() {
        let resolution = 16u32;
        let (_, indices) = generate(resolution, 8.0).unwrap();
        assert!(indices.iter().all(|&i| i < resolution * resolution));
    }

    #[test]
    fn test_no_wraparound_triangles() {
        for resolution in [2u32, 3, 7, 16] {
            let (_, indices) = generate(resolution, 1.0).unwrap();
            for tri in indices.chunks(3) {
                let coords: Vec<(i64, i64)> =
                    tri.iter().map(|&i| row_col(i, resolution)).collect();
                let rows: Vec<i64> = coords.iter().map(|c| c.0).collect();
                let cols: Vec<i64> = coords.iter().map(|c| c.1).collect();
                let row_span = rows.iter().max().unwrap() - rows.iter().min().unwrap();
                let col_span = cols.iter().max().unwrap() - cols.iter().min().unwrap();
                assert!(row_span <= 1, "triangle {tri:?} spans rows");
                assert!(col_span <= 1, "triangle {tri:?} wraps columns");
            }
        }
    }

    #[test]
    fn test_consistent_winding() {
        let (vertices, indices) = generate(8, 8.0).unwrap();
        for tri in indices.chunks(3) {
            let p: Vec<Vec2> = tri
                .iter()
                .map(|&i| {
                    let pos = vertices[i as usize].position;
                    Vec2::new(pos[0], pos[1])
                })
                .collect();
            let area = (p[1] - p[0]).perp_dot(p[2] - p[0]);
            assert!(area > 0.0, "triangle {tri:?} is wound clockwise");
        }
    }

    #[test]
    fn test_vertex_layout() {
        let (vertices, _) = generate(4, 4.0).unwrap();
        assert_eq!(vertices[0].position, [-2.0, -2.0, 0.0]);
        assert_eq!(vertices[1].position, [-1.0, -2.0, 0.0]);
        assert_eq!(vertices[4].position, [-2.0, -1.0, 0.0]);
        assert_eq!(vertices[15].position, [1.0, 1.0, 0.0]);
        assert_eq!(vertices[6].uv, [0.5, 0.25]);
        assert!(vertices.iter().all(|v| v.color == WATER_COLOR));
        assert!(vertices
            .iter()
            .all(|v| (0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1])));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate(32, 5.0).unwrap();
        let second = generate(32, 5.0).unwrap();
        assert_eq!(first.1, second.1);
        let bits = |v: &[GridVertex]| -> Vec<u32> {
            bytemuck::cast_slice::<GridVertex, u32>(v).to_vec()
        };
        assert_eq!(bits(&first.0), bits(&second.0));
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            generate(0, 4.0),
            Err(OceanError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            generate(1, 4.0),
            Err(OceanError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SurfaceGrid::new(4, 0.0),
            Err(OceanError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_surface_grid_accessors() {
        let grid = SurfaceGrid::new(4, 2.0).unwrap();
        assert_eq!(grid.vertex_count(), 16);
        assert_eq!(grid.triangle_count(), 18);
        assert_eq!(grid.step_m(), 0.5);
        assert_eq!(grid.lattice_coords(6), Some(Vec2::new(2.0, 1.0)));
        assert_eq!(grid.lattice_coords(15), Some(Vec2::new(3.0, 3.0)));
        assert_eq!(grid.lattice_coords(16), None);
    }
}
