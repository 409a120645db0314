use crate::color::Color;
use crate::utils::Vertex;

/// The point-drawing half of the graphics hardware.
///
/// Each call is one complete single-vertex point primitive: begin, position,
/// color, end. Blending against the framebuffer is the implementor's business.
pub trait PointPipeline {
    fn draw_point(&mut self, position: Vertex, color: Color);
}

impl<P: PointPipeline + ?Sized> PointPipeline for &mut P {
    fn draw_point(&mut self, position: Vertex, color: Color) {
        (**self).draw_point(position, color)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointCommand {
    pub position: Vertex,
    pub color: Color,
}

/// Keeps every point it is handed, in order.
#[derive(Debug, Default)]
pub struct RecordingPipeline {
    pub points: Vec<PointCommand>,
}

impl RecordingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl PointPipeline for RecordingPipeline {
    fn draw_point(&mut self, position: Vertex, color: Color) {
        self.points.push(PointCommand { position, color });
    }
}
