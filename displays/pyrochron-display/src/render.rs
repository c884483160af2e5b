//! Firework renderer
//!
//! Draws one frame of a burst: a black background and, for every live
//! particle, the polyline through its trail in the current band color.
//! The time layer goes on top in white.

use pyrochron_core::{AnimationEngine, Point};

use crate::canvas::{Canvas, DisplayError};
use crate::color::{band_color, Color, ColorMode};
use crate::font::{text_width, GLYPH_HEIGHT, TEXT_SCALE};

/// Draw a full watchface frame: burst first, then the centered time text
///
/// Does not flush.
pub fn render_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    engine: &AnimationEngine,
    time_text: &str,
) -> Result<(), DisplayError> {
    render_burst(canvas, engine)?;

    let size = canvas.size();
    let origin = Point::new(
        (size.width - text_width(time_text, TEXT_SCALE)) / 2,
        (size.height - GLYPH_HEIGHT * TEXT_SCALE) / 2,
    );
    canvas.draw_text(origin, time_text, TEXT_SCALE, Color::White)
}

/// Draw the current engine state onto `canvas`
///
/// Does not flush; the caller decides when the frame goes to the panel.
pub fn render_burst<C: Canvas + ?Sized>(
    canvas: &mut C,
    engine: &AnimationEngine,
) -> Result<(), DisplayError> {
    canvas.fill(Color::Black)?;

    let mode = if canvas.supports_color() {
        ColorMode::Color
    } else {
        ColorMode::Monochrome
    };
    let stroke = band_color(engine.frame_count(), mode);

    for particle in engine.pool().live() {
        for (from, to) in particle.trail().segments() {
            canvas.draw_line(from, to, stroke)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use pyrochron_core::traits::{
        DisplayBounds, FrameScheduler, FrameToken, RandomSource, RedrawRequest, SeededRandom,
    };
    use pyrochron_core::{Point, Size};

    /// Canvas that only counts calls
    struct CountingCanvas {
        color: bool,
        fills: u32,
        lines: u32,
        last_stroke: Option<Color>,
        fail_lines: bool,
    }

    impl CountingCanvas {
        fn new(color: bool) -> Self {
            Self {
                color,
                fills: 0,
                lines: 0,
                last_stroke: None,
                fail_lines: false,
            }
        }
    }

    impl Canvas for CountingCanvas {
        fn size(&self) -> Size {
            Size::new(144, 168)
        }

        fn fill(&mut self, _color: Color) -> Result<(), DisplayError> {
            self.fills += 1;
            Ok(())
        }

        fn draw_line(&mut self, _from: Point, _to: Point, color: Color) -> Result<(), DisplayError> {
            if self.fail_lines {
                return Err(DisplayError::Communication);
            }
            self.lines += 1;
            self.last_stroke = Some(color);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }

        fn supports_color(&self) -> bool {
            self.color
        }
    }

    struct Host {
        rng: SeededRandom,
    }

    impl RandomSource for Host {
        fn next_in_range(&mut self, min: i16, max: i16) -> i16 {
            self.rng.next_in_range(min, max)
        }
    }

    impl DisplayBounds for Host {
        fn bounds(&self) -> Size {
            Size::new(144, 168)
        }
    }

    impl RedrawRequest for Host {
        fn mark_dirty(&mut self) {}
    }

    impl FrameScheduler for Host {
        fn schedule_after(&mut self, _delay_ms: u32, _token: FrameToken) {}
    }

    fn engine_after(frames: u16) -> AnimationEngine {
        let mut host = Host {
            rng: SeededRandom::from_seed(21),
        };
        let mut engine = AnimationEngine::default();
        engine.request_burst(true, &mut host);
        for _ in 1..frames {
            engine.on_frame_tick(&mut host);
        }
        engine
    }

    #[test]
    fn test_idle_engine_draws_background_only() {
        let engine = AnimationEngine::default();
        let mut canvas = CountingCanvas::new(true);

        render_burst(&mut canvas, &engine).unwrap();

        assert_eq!(canvas.fills, 1);
        assert_eq!(canvas.lines, 0);
    }

    #[test]
    fn test_first_frame_has_no_segments() {
        // One integration gives each particle a single trail point
        let engine = engine_after(1);
        let mut canvas = CountingCanvas::new(true);

        render_burst(&mut canvas, &engine).unwrap();
        assert_eq!(canvas.lines, 0);
    }

    #[test]
    fn test_segments_match_trails() {
        let engine = engine_after(5);
        let expected: usize = engine
            .pool()
            .live()
            .map(|p| p.trail().len().saturating_sub(1))
            .sum();
        let mut canvas = CountingCanvas::new(true);

        render_burst(&mut canvas, &engine).unwrap();

        assert_eq!(canvas.lines as usize, expected);
        assert_eq!(canvas.last_stroke, Some(Color::Red));
    }

    #[test]
    fn test_band_follows_frame_count() {
        let engine = engine_after(35);
        let mut canvas = CountingCanvas::new(true);
        render_burst(&mut canvas, &engine).unwrap();
        assert!(canvas.lines > 0);
        assert_eq!(canvas.last_stroke, Some(Color::Rajah));

        let mut mono = CountingCanvas::new(false);
        render_burst(&mut mono, &engine).unwrap();
        assert_eq!(mono.lines, canvas.lines);
        assert_eq!(mono.last_stroke, Some(Color::White));
    }

    #[test]
    fn test_canvas_error_propagates() {
        let engine = engine_after(5);
        let mut canvas = CountingCanvas::new(false);
        canvas.fail_lines = true;

        assert_eq!(
            render_burst(&mut canvas, &engine),
            Err(DisplayError::Communication)
        );
    }

    #[test]
    fn test_renders_into_framebuffer() {
        let engine = engine_after(6);
        let mut fb = Framebuffer::new();
        fb.fill(Color::White).unwrap();

        render_burst(&mut fb, &engine).unwrap();

        // Background cleared, some sparks visible near the burst
        let lit = fb.lit_count();
        assert!(lit > 0);
        assert!(lit < (144 * 168) as u32);
    }

    #[test]
    fn test_frame_overlays_time_on_idle_engine() {
        let engine = AnimationEngine::default();
        let mut canvas = CountingCanvas::new(true);

        render_frame(&mut canvas, &engine, "1").unwrap();

        // Ten lit font pixels in '1', each TEXT_SCALE rows tall
        assert_eq!(canvas.fills, 1);
        assert_eq!(canvas.lines, 10 * TEXT_SCALE as u32);
        assert_eq!(canvas.last_stroke, Some(Color::White));
    }

    #[test]
    fn test_time_text_is_centered() {
        let engine = AnimationEngine::default();
        let mut fb = Framebuffer::new();

        render_frame(&mut fb, &engine, "0").unwrap();

        // Glyph is 20x28 on a 144x168 panel; top row of '0' spans columns 1-3
        let (left, top) = ((144 - 20) / 2, (168 - 28) / 2);
        assert!(fb.pixel(Point::new(left + 4, top)));
        assert!(!fb.pixel(Point::new(left, top)));
        assert!(fb.pixel(Point::new(left, top + 4)));
        assert!(!fb.pixel(Point::new(left - 1, top + 4)));
    }

    #[test]
    fn test_text_errors_propagate() {
        let engine = AnimationEngine::default();
        let mut canvas = CountingCanvas::new(false);
        canvas.fail_lines = true;

        assert_eq!(
            render_frame(&mut canvas, &engine, "12:00"),
            Err(DisplayError::Communication)
        );
    }
}
