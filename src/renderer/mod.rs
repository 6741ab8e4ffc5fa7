//! CPU-side tessellation of a snapshot
//!
//! Produces plain vertex lists; uploading and drawing them is up to the host.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::consts::CRAFT_SIZE;
use crate::sim::{Snapshot, ViewKind};
use vertex::colors;

/// Segments used for projectile and particle discs
const DOT_SEGMENTS: u32 = 6;
/// Fragments are drawn as hexagons
const FRAGMENT_SIDES: u32 = 6;

/// Vertices for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Line list: craft and fragment outlines
    pub lines: Vec<Vertex>,
    /// Triangle list: projectile and particle discs
    pub triangles: Vec<Vertex>,
}

impl DrawList {
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.triangles.is_empty()
    }
}

/// Tessellate every entity in the snapshot
pub fn build_draw_list(snapshot: &Snapshot) -> DrawList {
    let mut list = DrawList::default();

    for entity in &snapshot.entities {
        match entity.kind {
            ViewKind::Craft => list.lines.extend(shapes::craft_outline(
                entity.position,
                CRAFT_SIZE,
                entity.rotation,
                colors::CRAFT,
            )),
            ViewKind::Fragment(size) => list.lines.extend(shapes::polygon_outline(
                entity.position,
                FRAGMENT_SIDES,
                entity.radius.unwrap_or(size.radius()),
                entity.rotation,
                colors::FRAGMENT,
            )),
            ViewKind::Projectile | ViewKind::Particle => {
                let color = if entity.kind == ViewKind::Projectile {
                    colors::PROJECTILE
                } else {
                    colors::PARTICLE
                };
                list.triangles.extend(shapes::circle(
                    entity.position,
                    entity.radius.unwrap_or(1.0),
                    color,
                    DOT_SEGMENTS,
                ));
            }
        }
    }

    list
}
