use ndarray::ArrayView3;

use crate::shared::rectangle::Rectangle;

/// A decoded image: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; the domain layer
/// treats pixel data as opaque.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Copies the pixels inside `rect` into a new frame with the
    /// rectangle's top-left mapped to the output origin.
    ///
    /// The output always has the rectangle's dimensions; any part of the
    /// rectangle lying outside the frame bounds comes out zero-filled.
    pub fn crop(&self, rect: &Rectangle) -> Frame {
        let channels = self.channels as usize;
        let out_w = rect.width() as usize;
        let out_h = rect.height() as usize;
        let mut data = vec![0u8; out_w * out_h * channels];

        let src = self.as_ndarray();
        for (out_row, row) in (rect.min_y..rect.max_y).enumerate() {
            if row < 0 || row >= self.height as i32 {
                continue;
            }
            for (out_col, col) in (rect.min_x..rect.max_x).enumerate() {
                if col < 0 || col >= self.width as i32 {
                    continue;
                }
                let base = (out_row * out_w + out_col) * channels;
                for c in 0..channels {
                    data[base + c] = src[[row as usize, col as usize, c]];
                }
            }
        }

        Frame::new(data, rect.width(), rect.height(), self.channels)
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2, 3);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * channels")]
    fn test_mismatched_data_length_panics_in_debug() {
        let data = vec![0u8; 10]; // wrong size for 2x2x3
        Frame::new(data, 2, 2, 3);
    }

    #[test]
    fn test_as_ndarray_shape() {
        let data = vec![0u8; 24]; // 2x4x3
        let frame = Frame::new(data, 4, 2, 3);
        let arr = frame.as_ndarray();
        assert_eq!(arr.shape(), &[2, 4, 3]); // (height, width, channels)
    }

    #[test]
    fn test_as_ndarray_pixel_access() {
        // 2x2 RGB: set pixel (row=1, col=0) to red
        let mut data = vec![0u8; 12];
        data[6] = 255; // row=1, col=0, R
        let frame = Frame::new(data, 2, 2, 3);
        let arr = frame.as_ndarray();
        assert_eq!(arr[[1, 0, 0]], 255); // R
        assert_eq!(arr[[1, 0, 1]], 0); // G
        assert_eq!(arr[[1, 0, 2]], 0); // B
    }

    #[test]
    fn test_crop_dimensions_match_rectangle() {
        let frame = Frame::new(vec![128; 10 * 8 * 3], 10, 8, 3);
        let crop = frame.crop(&Rectangle::new(2, 1, 7, 5));
        assert_eq!(crop.width(), 5);
        assert_eq!(crop.height(), 4);
        assert_eq!(crop.channels(), 3);
    }

    #[test]
    fn test_crop_copies_source_subregion() {
        // 4x4 RGB frame where each pixel's R channel encodes row*4+col.
        let mut data = Vec::with_capacity(4 * 4 * 3);
        for row in 0..4u8 {
            for col in 0..4u8 {
                data.extend_from_slice(&[row * 4 + col, 0, 0]);
            }
        }
        let frame = Frame::new(data, 4, 4, 3);

        let crop = frame.crop(&Rectangle::new(1, 2, 3, 4));
        let arr = crop.as_ndarray();
        // Top-left of the crop is source pixel (row=2, col=1) = 9
        assert_eq!(arr[[0, 0, 0]], 9);
        assert_eq!(arr[[0, 1, 0]], 10);
        assert_eq!(arr[[1, 0, 0]], 13);
        assert_eq!(arr[[1, 1, 0]], 14);
    }

    #[test]
    fn test_crop_out_of_bounds_region_is_zero_filled() {
        // 3x3 frame of 200s, cropped with a rectangle hanging off the
        // top-left corner
        let frame = Frame::new(vec![200; 3 * 3 * 3], 3, 3, 3);
        let crop = frame.crop(&Rectangle::new(-1, -1, 2, 2));
        assert_eq!(crop.width(), 3);
        assert_eq!(crop.height(), 3);

        let arr = crop.as_ndarray();
        assert_eq!(arr[[0, 0, 0]], 0); // outside on both axes
        assert_eq!(arr[[0, 1, 0]], 0); // outside row
        assert_eq!(arr[[1, 0, 0]], 0); // outside column
        assert_eq!(arr[[1, 1, 0]], 200); // source (0, 0)
        assert_eq!(arr[[2, 2, 0]], 200); // source (1, 1)
    }

    #[test]
    fn test_crop_full_frame_is_identity() {
        let data: Vec<u8> = (0..27).collect(); // 3x3x3
        let frame = Frame::new(data.clone(), 3, 3, 3);
        let crop = frame.crop(&Rectangle::new(0, 0, 3, 3));
        assert_eq!(crop.data(), &data[..]);
    }
}
