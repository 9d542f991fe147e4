//! Index-remapping transforms.

use crate::buffer::PixelBuffer;
use crate::error::Result;

/// Rotate 90° counter-clockwise.
///
/// The output is `cols x rows`. Input pixel `(i, j)` lands at
/// `(cols - 1 - j, i)`:
///
/// ```text
/// a b c        c f
/// d e f   ->   b e
///              a d
/// ```
pub fn rotate_ccw(input: &PixelBuffer) -> Result<PixelBuffer> {
    let (rows, cols) = (input.rows(), input.cols());
    let mut output = PixelBuffer::new(cols, rows)?;
    for i in 0..rows {
        for (j, &pixel) in input.row(i).iter().enumerate() {
            output.set(cols - 1 - j, i, pixel);
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Pixel;
    use pretty_assertions::assert_eq;

    fn labeled(rows: usize, cols: usize) -> PixelBuffer {
        let pixels = (0..rows * cols)
            .map(|i| Pixel::new(i as u8, (i * 3) as u8, 255 - i as u8))
            .collect();
        PixelBuffer::from_pixels(rows, cols, pixels).unwrap()
    }

    #[test]
    fn test_rotate_2x3() {
        let px = |v: u8| Pixel::gray(v);
        let input = PixelBuffer::from_pixels(
            2,
            3,
            vec![px(1), px(2), px(3), px(4), px(5), px(6)],
        )
        .unwrap();

        let output = rotate_ccw(&input).unwrap();
        assert_eq!((output.rows(), output.cols()), (3, 2));
        assert_eq!(
            output.pixels(),
            &[px(3), px(6), px(2), px(5), px(1), px(4)]
        );
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        let input = labeled(5, 7);
        let mut current = input.clone();
        for _ in 0..4 {
            current = rotate_ccw(&current).unwrap();
        }
        assert_eq!(current, input);
    }

    #[test]
    fn test_rotate_single_row() {
        let input = labeled(1, 4);
        let output = rotate_ccw(&input).unwrap();
        assert_eq!((output.rows(), output.cols()), (4, 1));
        // Rightmost column ends up on top
        assert_eq!(output.get(0, 0), input.get(0, 3));
        assert_eq!(output.get(3, 0), input.get(0, 0));
    }
}
