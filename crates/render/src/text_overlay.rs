use debugdraw_common::{Color, TEXT_BG_COLOR, TEXT_COLOR};
use debugdraw_kernel::TextTable;
use glam::Vec2;

use crate::host::{Canvas2d, FontMetrics, Rect};

/// Layout and colors of the key/value text layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOverlayStyle {
    /// Top-left corner of the first line.
    pub origin: Vec2,
    /// Horizontal and vertical padding around each line of text.
    pub padding: Vec2,
    pub text_color: Color,
    pub background: Color,
}

impl Default for TextOverlayStyle {
    fn default() -> Self {
        Self {
            origin: Vec2::new(8.0, 8.0),
            padding: Vec2::new(2.0, 1.0),
            text_color: TEXT_COLOR,
            background: TEXT_BG_COLOR,
        }
    }
}

/// Stacks `"key: value"` lines top to bottom, each on its own background strip.
#[derive(Debug, Clone, Default)]
pub struct TextOverlay {
    pub style: TextOverlayStyle,
}

impl TextOverlay {
    pub fn new(style: TextOverlayStyle) -> Self {
        Self { style }
    }

    pub fn line_height<F: FontMetrics + ?Sized>(&self, font: &F) -> f32 {
        font.height() + 2.0 * self.style.padding.y
    }

    /// Draw every entry of `texts` in table order. Returns the number of lines drawn.
    pub fn draw(&self, texts: &TextTable, canvas: &mut dyn Canvas2d) -> usize {
        let pad = self.style.padding;
        let line_height = self.line_height(&*canvas);
        let text_offset = Vec2::new(pad.x, canvas.ascent() + pad.y);
        let mut pos = self.style.origin;
        let mut lines = 0;

        for (key, value) in texts.iter() {
            let text = format!("{key}: {value}");
            let size = canvas.string_size(&text);
            canvas.fill_rect(
                Rect::new(pos, Vec2::new(size.x + 2.0 * pad.x, line_height)),
                self.style.background,
            );
            canvas.draw_string(pos + text_offset, &text, self.style.text_color);
            pos.y += line_height;
            lines += 1;
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{CanvasCommand, MonospaceCanvas};

    #[test]
    fn empty_table_draws_nothing() {
        let mut canvas = MonospaceCanvas::new();
        let n = TextOverlay::default().draw(&TextTable::new(), &mut canvas);
        assert_eq!(n, 0);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn lines_stack_with_padding() {
        let mut texts = TextTable::new();
        texts.set("fps", "60", 5);
        texts.set("hits", "12", 5);

        let mut canvas = MonospaceCanvas::new();
        let overlay = TextOverlay::default();
        assert_eq!(overlay.draw(&texts, &mut canvas), 2);

        let line_height = canvas.height() + 2.0;
        let cmds = canvas.commands();
        assert_eq!(cmds.len(), 4);

        match &cmds[0] {
            CanvasCommand::FillRect { rect, color } => {
                assert_eq!(rect.position, Vec2::new(8.0, 8.0));
                let text_width = canvas.string_size("fps: 60").x;
                assert_eq!(rect.size, Vec2::new(text_width + 4.0, line_height));
                assert_eq!(*color, TEXT_BG_COLOR);
            }
            other => panic!("expected rect, got {other:?}"),
        }
        match &cmds[1] {
            CanvasCommand::Text {
                position,
                text,
                color,
            } => {
                assert_eq!(text, "fps: 60");
                assert_eq!(*position, Vec2::new(10.0, 8.0 + canvas.ascent() + 1.0));
                assert_eq!(*color, TEXT_COLOR);
            }
            other => panic!("expected text, got {other:?}"),
        }
        match &cmds[2] {
            CanvasCommand::FillRect { rect, .. } => {
                assert_eq!(rect.position.y, 8.0 + line_height);
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn custom_origin() {
        let mut texts = TextTable::new();
        texts.set("k", "v", 5);
        let overlay = TextOverlay::new(TextOverlayStyle {
            origin: Vec2::new(100.0, 50.0),
            ..TextOverlayStyle::default()
        });
        let mut canvas = MonospaceCanvas::new();
        overlay.draw(&texts, &mut canvas);
        assert!(matches!(
            &canvas.commands()[0],
            CanvasCommand::FillRect { rect, .. } if rect.position == Vec2::new(100.0, 50.0)
        ));
    }
}
