/// Axis-aligned face bounding box in image pixel space.
///
/// Min-inclusive, max-exclusive on both axes, with `max >= min`.
/// Rectangles are produced by the face engine, never by the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Rectangle {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        debug_assert!(max_x >= min_x && max_y >= min_y, "max must be >= min");
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> u32 {
        (self.max_x - self.min_x) as u32
    }

    pub fn height(&self) -> u32 {
        (self.max_y - self.min_y) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.min_x == self.max_x || self.min_y == self.max_y
    }

    /// Intersects the rectangle with a `frame_width` x `frame_height`
    /// image so it can be cropped safely.
    pub fn clamp(&self, frame_width: u32, frame_height: u32) -> Rectangle {
        let w = frame_width as i32;
        let h = frame_height as i32;
        let min_x = self.min_x.clamp(0, w);
        let min_y = self.min_y.clamp(0, h);
        Rectangle {
            min_x,
            min_y,
            max_x: self.max_x.clamp(min_x, w),
            max_y: self.max_y.clamp(min_y, h),
        }
    }
}
