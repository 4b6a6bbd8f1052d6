use core::cmp::{max, min};
use core::mem::swap;

use itertools::Itertools;

use crate::command::consts::*;
use crate::framebuffer::{FrameBuffer, Point};
use crate::raster::Line;

fn on_panel(p: Point) -> bool {
    p.x < NUM_COLUMNS && p.y < NUM_ROWS
}

impl FrameBuffer {
    /// Outline the closed polygon through `points`, joining the last point back to the first.
    /// Fewer than two points draw nothing.
    pub fn draw_polygon(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }
        for pair in points.windows(2) {
            self.draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y);
        }
        let (first, last) = (points[0], points[points.len() - 1]);
        self.draw_line(first.x, first.y, last.x, last.y);
    }

    pub fn draw_triangle(&mut self, p0: Point, p1: Point, p2: Point) {
        self.draw_polygon(&[p0, p1, p2]);
    }

    /// Fill the triangle with corners `p0`, `p1` and `p2`, edges included.
    ///
    /// The vertices are ordered by x and the triangle is filled column by column: each pixel of
    /// the two short edges is joined by a vertical span to the long edge from the leftmost to
    /// the rightmost vertex. Where the long edge is steep and covers several rows of a column,
    /// the span runs to the far end of those rows. A triangle with any vertex off the panel
    /// draws nothing.
    pub fn draw_filled_triangle(&mut self, p0: Point, p1: Point, p2: Point) {
        if !(on_panel(p0) && on_panel(p1) && on_panel(p2)) {
            trace!("filled triangle rejected: {:?} {:?} {:?}", p0, p1, p2);
            return;
        }
        let (mut p0, mut p1, mut p2) = (p0, p1, p2);
        if p0.x > p1.x {
            swap(&mut p0, &mut p1);
        }
        if p0.x > p2.x {
            swap(&mut p0, &mut p2);
        }
        if p1.x > p2.x {
            swap(&mut p1, &mut p2);
        }

        let long_edge = Line::new(p0, p2);
        for p in Line::new(p0, p1).chain(Line::new(p1, p2)) {
            // The long edge spans every column from p0 to p2.
            let run = long_edge
                .clone()
                .filter(|q| q.x == p.x)
                .map(|q| q.y)
                .minmax()
                .into_option();
            if let Some((run_top, run_bottom)) = run {
                let (top, bottom) = (min(p.y, run_top), max(p.y, run_bottom));
                self.draw_vline(p.x, top, bottom - top + 1);
            }
        }
    }

    /// Fill the convex polygon through `points` as a fan of triangles sharing the first point.
    /// Fewer than three points draw nothing.
    pub fn draw_filled_polygon(&mut self, points: &[Point]) {
        if points.len() < 3 {
            return;
        }
        let apex = points[0];
        for pair in points[1..].windows(2) {
            self.draw_filled_triangle(apex, pair[0], pair[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::lit;
    use super::*;

    fn p(x: u8, y: u8) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn polygon_closes() {
        let mut outline = FrameBuffer::new();
        outline.draw_polygon(&[p(0, 0), p(10, 0), p(10, 10)]);
        let mut lines = FrameBuffer::new();
        lines.draw_line(0, 0, 10, 0);
        lines.draw_line(10, 0, 10, 10);
        lines.draw_line(10, 10, 0, 0);
        assert!(outline == lines);
    }

    #[test]
    fn polygon_too_few_points() {
        let mut fb = FrameBuffer::new();
        fb.draw_polygon(&[]);
        fb.draw_polygon(&[p(5, 5)]);
        assert!(lit(&fb).is_empty());
        fb.draw_polygon(&[p(5, 5), p(8, 5)]);
        assert_eq!(lit(&fb), vec![(5, 5), (6, 5), (7, 5), (8, 5)]);
    }

    #[test]
    fn triangle_is_polygon() {
        let mut a = FrameBuffer::new();
        let mut b = FrameBuffer::new();
        a.draw_triangle(p(3, 40), p(60, 2), p(100, 50));
        b.draw_polygon(&[p(3, 40), p(60, 2), p(100, 50)]);
        assert!(a == b);
    }

    #[test]
    fn degenerate_filled_triangle_is_line() {
        let mut filled = FrameBuffer::new();
        let mut line = FrameBuffer::new();
        filled.draw_filled_triangle(p(0, 0), p(5, 5), p(10, 10));
        line.draw_line(0, 0, 10, 10);
        assert!(filled == line);
    }

    #[test]
    fn filled_triangle_contains_outline() {
        let (a, b, c) = (p(10, 50), p(40, 5), p(90, 35));
        let mut filled = FrameBuffer::new();
        let mut outline = FrameBuffer::new();
        filled.draw_filled_triangle(a, b, c);
        outline.draw_triangle(a, b, c);
        for (x, y) in lit(&outline) {
            assert!(filled.pixel(x, y), "edge pixel ({}, {}) not filled", x, y);
        }
        assert!(filled.pixel(45, 30));
        assert!(!filled.pixel(20, 10));
        assert!(!filled.pixel(80, 50));
    }

    #[test]
    fn filled_triangle_steep_long_edge() {
        let (a, b, c) = (p(0, 0), p(3, 0), p(4, 40));
        let mut filled = FrameBuffer::new();
        let mut outline = FrameBuffer::new();
        filled.draw_filled_triangle(a, b, c);
        outline.draw_triangle(a, b, c);
        for (x, y) in lit(&outline) {
            assert!(filled.pixel(x, y), "edge pixel ({}, {}) not filled", x, y);
        }
        for y in 7..=10 {
            assert!(filled.pixel(1, y));
        }
        assert!(!filled.pixel(0, 10));
        assert!(!filled.pixel(4, 10));
    }

    #[test]
    fn filled_triangle_vertex_order_irrelevant() {
        let mut a = FrameBuffer::new();
        let mut b = FrameBuffer::new();
        a.draw_filled_triangle(p(10, 50), p(40, 5), p(90, 35));
        b.draw_filled_triangle(p(90, 35), p(10, 50), p(40, 5));
        assert!(a == b);
    }

    #[test]
    fn filled_right_triangle() {
        let mut fb = FrameBuffer::new();
        fb.draw_filled_triangle(p(0, 0), p(0, 3), p(3, 3));
        assert_eq!(
            lit(&fb),
            vec![(0, 0), (0, 1), (1, 1), (0, 2), (1, 2), (2, 2), (0, 3), (1, 3), (2, 3), (3, 3)]
        );
    }

    #[test]
    fn filled_triangle_off_panel_rejected() {
        let mut fb = FrameBuffer::new();
        fb.draw_filled_triangle(p(0, 0), p(130, 5), p(5, 5));
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn filled_polygon_fan() {
        let square = [p(10, 10), p(20, 10), p(20, 20), p(10, 20)];
        let mut fan = FrameBuffer::new();
        fan.draw_filled_polygon(&square);
        let mut boxed = FrameBuffer::new();
        boxed.draw_box(10, 10, 11, 11);
        assert!(fan == boxed);

        let mut fb = FrameBuffer::new();
        fb.draw_filled_polygon(&square[..2]);
        assert!(lit(&fb).is_empty());
    }
}
