//! Straight lines: clipped horizontal and vertical spans, and arbitrary lines traced with
//! Bresenham's algorithm.

use core::cmp::min;
use core::mem::swap;

use crate::command::consts::*;
use crate::framebuffer::{FrameBuffer, Point};

/// The pixels of a straight line, in drawing order.
///
/// The line is traced along its major axis from the end with the smaller major coordinate, so a
/// line and its reverse yield the same pixels. Every coordinate yielded lies between the two end
/// points.
#[derive(Clone, Debug)]
pub struct Line {
    major: u16,
    major_end: u16,
    minor: i16,
    d_major: i16,
    d_minor: i16,
    err: i16,
    step: i16,
    steep: bool,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        let (mut x1, mut y1, mut x2, mut y2) = (start.x, start.y, end.x, end.y);
        let mut dx = x1.abs_diff(x2);
        let mut dy = y1.abs_diff(y2);

        let steep = dy > dx;
        if steep {
            swap(&mut dx, &mut dy);
            swap(&mut x1, &mut y1);
            swap(&mut x2, &mut y2);
        }
        if x1 > x2 {
            swap(&mut x1, &mut x2);
            swap(&mut y1, &mut y2);
        }

        Line {
            major: x1 as u16,
            major_end: x2 as u16,
            minor: y1 as i16,
            d_major: dx as i16,
            d_minor: dy as i16,
            err: (dx >> 1) as i16,
            step: if y2 > y1 { 1 } else { -1 },
            steep,
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.major > self.major_end {
            return None;
        }
        let (a, b) = (self.major as u8, self.minor as u8);
        let point = if self.steep {
            Point::new(b, a)
        } else {
            Point::new(a, b)
        };

        self.err -= self.d_minor;
        if self.err < 0 {
            self.minor += self.step;
            self.err += self.d_major;
        }
        self.major += 1;
        Some(point)
    }
}

impl FrameBuffer {
    /// Light `w` pixels rightwards from `(x, y)`, stopping at the right edge of the panel.
    pub fn draw_hline(&mut self, x: u8, y: u8, w: u8) {
        if x >= NUM_COLUMNS || y >= NUM_ROWS {
            return;
        }
        let end = min(x as u16 + w as u16, NUM_COLUMNS as u16) as u8;
        for column in x..end {
            self.set_pixel(column, y, true);
        }
    }

    /// Light `h` pixels downwards from `(x, y)`, stopping at the bottom edge of the panel.
    pub fn draw_vline(&mut self, x: u8, y: u8, h: u8) {
        if x >= NUM_COLUMNS || y >= NUM_ROWS {
            return;
        }
        let bottom = min(y as u16 + h as u16, NUM_ROWS as u16) as u8;
        self.fill_column(x, y, bottom, true);
    }

    /// Light every pixel of the line from `(x1, y1)` to `(x2, y2)`, both ends included. Pixels
    /// off the panel are dropped.
    pub fn draw_line(&mut self, x1: u8, y1: u8, x2: u8, y2: u8) {
        for p in Line::new(Point::new(x1, y1), Point::new(x2, y2)) {
            self.set_pixel(p.x, p.y, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(fb: &FrameBuffer) -> Vec<(u8, u8)> {
        let mut pixels = Vec::new();
        for y in 0..NUM_ROWS {
            for x in 0..NUM_COLUMNS {
                if fb.pixel(x, y) {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn horizontal_line() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(0, 0, 10, 0);
        assert_eq!(lit(&fb), (0..=10).map(|x| (x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn single_point_line() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(7, 9, 7, 9);
        assert_eq!(lit(&fb), vec![(7, 9)]);
    }

    #[test]
    fn diagonal_line() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(3, 3, 0, 0);
        assert_eq!(lit(&fb), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn shallow_line_steps() {
        let points: Vec<Point> = Line::new(Point::new(0, 0), Point::new(4, 2)).collect();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(3, 1),
                Point::new(4, 2),
            ]
        );
    }

    #[test]
    fn steep_line_one_pixel_per_row() {
        let points: Vec<Point> = Line::new(Point::new(5, 20), Point::new(8, 0)).collect();
        assert_eq!(points.len(), 21);
        for (row, p) in points.iter().enumerate() {
            assert_eq!(p.y as usize, row);
            assert!(p.x >= 5 && p.x <= 8);
        }
        assert_eq!(points[0], Point::new(8, 0));
        assert_eq!(points[20], Point::new(5, 20));
    }

    #[test]
    fn line_is_symmetric() {
        let mut forward = FrameBuffer::new();
        let mut backward = FrameBuffer::new();
        forward.draw_line(2, 50, 90, 13);
        backward.draw_line(90, 13, 2, 50);
        assert!(forward == backward);
    }

    #[test]
    fn hline_clips_at_edge() {
        let mut fb = FrameBuffer::new();
        fb.draw_hline(120, 5, 100);
        assert_eq!(lit(&fb), (120..128).map(|x| (x, 5)).collect::<Vec<_>>());
    }

    #[test]
    fn vline_page_runs() {
        let mut fb = FrameBuffer::new();
        fb.draw_vline(4, 5, 12);
        assert_eq!(fb.byte(4, 0), 0b1110_0000);
        assert_eq!(fb.byte(4, 1), 0xFF);
        assert_eq!(fb.byte(4, 2), 0b0000_0001);
    }

    #[test]
    fn vline_clips_at_edge() {
        let mut fb = FrameBuffer::new();
        fb.draw_vline(0, 60, 200);
        assert_eq!(lit(&fb), vec![(0, 60), (0, 61), (0, 62), (0, 63)]);
        fb.draw_vline(128, 0, 8);
        fb.draw_vline(0, 64, 8);
        assert_eq!(lit(&fb).len(), 4);
    }

    #[test]
    fn zero_length_spans() {
        let mut fb = FrameBuffer::new();
        fb.draw_hline(10, 10, 0);
        fb.draw_vline(10, 10, 0);
        assert!(lit(&fb).is_empty());
    }
}
