use bytemuck::{Pod, Zeroable};

use super::{PointBatch, Renderer};

/// Instance data layout (28 bytes):
///
///  offset  0  center  [f32; 2]   loc 1  (normalized)
///  offset  8  color   [f32; 4]   loc 2
///  offset 24  size    f32        loc 3  (device px)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    pub center: [f32; 2],
    pub color: [f32; 4],
    pub size: f32,
}

impl PointInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x4, // color
        3 => Float32    // size
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// CPU-side recording of a redraw.
///
/// Flattens every batch into per-point instances in paint order. The GPU
/// renderer uploads `instances()` as-is; tests inspect it directly.
#[derive(Debug, Default, Clone)]
pub struct PointList {
    instances: Vec<PointInstance>,
    batches: usize,
    clears: u64,
}

impl PointList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn instances(&self) -> &[PointInstance] {
        &self.instances
    }

    /// Batches recorded since the last clear.
    #[inline]
    pub fn batch_count(&self) -> usize {
        self.batches
    }

    /// Number of clears seen over the list's lifetime.
    #[inline]
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Renderer for PointList {
    fn clear(&mut self) {
        self.instances.clear();
        self.batches = 0;
        self.clears += 1;
    }

    fn draw_points(&mut self, batch: &PointBatch) {
        if batch.is_empty() {
            return;
        }
        let color = batch.color.clamped().to_rgba();
        let size = batch.point_size.max(1.0);
        self.instances.extend(batch.points.iter().map(|&center| PointInstance { center, color, size }));
        self.batches += 1;
    }
}
