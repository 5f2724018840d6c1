//! Ratatui widget that draws the grid.

use linefield_core::ColorTheme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::color::line_color;
use crate::engine::Engine;
use crate::glyphs::EIGHTHS;

/// Draws every line of an [`Engine`] inside its cell.
///
/// A line is a left-aligned bar whose width is `scale / target` of the cell,
/// measured in eighths of a terminal cell and never thinner than one eighth.
/// The bottom row of a cell is left empty when the cell is taller than one
/// row so neighbouring rows stay apart.
#[derive(Debug, Clone, Copy)]
pub struct LineFieldView<'a> {
    engine: &'a Engine,
    theme: ColorTheme,
}

impl<'a> LineFieldView<'a> {
    pub fn new(engine: &'a Engine, theme: ColorTheme) -> Self {
        Self { engine, theme }
    }
}

impl Widget for LineFieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let timing = self.engine.timing();
        for (_, line) in self.engine.lines() {
            let el = line.element();
            let color = line_color(self.theme, timing.growth_fraction(line.scale()));
            let eighths = bar_eighths(line.scale(), timing.target_scale, el.width);
            let rows = if el.height > 1 { el.height - 1 } else { 1 };

            for dy in 0..rows {
                let y = area.y.saturating_add(el.y).saturating_add(dy);
                if y >= area.bottom() {
                    break;
                }
                let mut remaining = eighths;
                for dx in 0..el.width {
                    let x = area.x.saturating_add(el.x).saturating_add(dx);
                    if remaining == 0 || x >= area.right() {
                        break;
                    }
                    let step = remaining.min(8);
                    remaining -= step;
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(EIGHTHS[step as usize]).set_fg(color);
                    }
                }
            }
        }
    }
}

/// Bar width in eighths of a terminal cell for a cell `width` cells wide.
fn bar_eighths(scale: f32, target: f32, width: u16) -> u32 {
    let total = u32::from(width) * 8;
    if total == 0 || target <= 0.0 {
        return 0;
    }
    let fraction = (scale / target).clamp(0.0, 1.0);
    ((fraction * total as f32).round() as u32).clamp(1, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linefield_core::{AnimationTiming, Breakpoint, CellPolicy, GridConfig, Viewport};

    fn engine() -> Engine {
        let grid = GridConfig {
            policy: CellPolicy::Fixed {
                row_height: 2,
                col_width: 2,
            },
            breakpoint: Breakpoint::DISABLED,
        };
        let mut engine = Engine::new(AnimationTiming::default(), grid);
        engine.populate(Viewport::new(4, 2)).unwrap();
        engine
    }

    #[test]
    fn test_bar_eighths() {
        assert_eq!(bar_eighths(1.2, 10.0, 2), 2);
        assert_eq!(bar_eighths(10.0, 10.0, 2), 16);
        assert_eq!(bar_eighths(0.0, 10.0, 2), 1);
        assert_eq!(bar_eighths(5.0, 10.0, 1), 4);
    }

    #[test]
    fn test_resting_and_grown_lines() {
        let mut engine = engine();
        let grown = engine.line_ids()[1];
        engine.engage(grown, 0.0);
        engine.tick(500.0);

        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        LineFieldView::new(&engine, ColorTheme::Cyan).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "▎");
        assert_eq!(buf[(1, 0)].symbol(), " ");
        assert_eq!(buf[(2, 0)].symbol(), "█");
        assert_eq!(buf[(3, 0)].symbol(), "█");
        // spacer row
        assert_eq!(buf[(0, 1)].symbol(), " ");
        assert_eq!(buf[(2, 1)].symbol(), " ");
    }

    #[test]
    fn test_clipped_to_area() {
        let engine = engine();
        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        LineFieldView::new(&engine, ColorTheme::Mono).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "▎");
    }
}
