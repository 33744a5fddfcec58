//! Narrow view of the camera: where it is and which way it faces.

/// Viewer position and heading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewer {
    /// World-space position.
    pub position: [f32; 3],
    /// Heading in degrees.
    pub yaw: f32,
}

impl Viewer {
    /// Creates a viewer.
    #[must_use]
    pub const fn new(position: [f32; 3], yaw: f32) -> Self {
        Self { position, yaw }
    }

    /// Column under the viewer (truncated toward zero).
    #[inline]
    #[must_use]
    pub fn column(&self) -> (i32, i32) {
        (self.position[0] as i32, self.position[2] as i32)
    }
}
