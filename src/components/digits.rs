use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Style;
use tui::widgets::Widget;

// ---------------------------------------------------------------------------
// Glyphs
// ---------------------------------------------------------------------------

/// Rows in one big glyph.
pub const GLYPH_HEIGHT: u16 = 5;
/// Columns in one big glyph, not counting the gap after it.
pub const GLYPH_WIDTH: u16 = 3;
const GLYPH_GAP: u16 = 1;

/// Seven-segment style glyphs, `#` marks a lit cell.
fn glyph(ch: char) -> Option<[&'static str; 5]> {
    let rows = match ch {
        '0' => ["###", "# #", "# #", "# #", "###"],
        '1' => ["  #", "  #", "  #", "  #", "  #"],
        '2' => ["###", "  #", "###", "#  ", "###"],
        '3' => ["###", "  #", "###", "  #", "###"],
        '4' => ["# #", "# #", "###", "  #", "  #"],
        '5' => ["###", "#  ", "###", "  #", "###"],
        '6' => ["###", "#  ", "###", "# #", "###"],
        '7' => ["###", "  #", "  #", "  #", "  #"],
        '8' => ["###", "# #", "###", "# #", "###"],
        '9' => ["###", "# #", "###", "  #", "###"],
        ':' => ["   ", " # ", "   ", " # ", "   "],
        '-' => ["   ", "   ", "###", "   ", "   "],
        ' ' => ["   ", "   ", "   ", "   ", "   "],
        _ => return None,
    };
    Some(rows)
}

/// Width in cells of `text` rendered large.
pub fn big_width(text: &str) -> u16 {
    let n = text.chars().count() as u16;
    if n == 0 {
        return 0;
    }
    n * (GLYPH_WIDTH + GLYPH_GAP) - GLYPH_GAP
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Large digit display, centered in its area. Falls back to plain centered
/// text when the area is too small or the text has no big glyphs.
pub struct BigDigits<'a> {
    pub text: &'a str,
    pub style: Style,
}

impl<'a> BigDigits<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn fits(&self, area: Rect) -> bool {
        area.height >= GLYPH_HEIGHT
            && area.width >= big_width(self.text)
            && self.text.chars().all(|c| glyph(c).is_some())
    }
}

impl Widget for BigDigits<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if !self.fits(area) {
            let width = (self.text.chars().count() as u16).min(area.width);
            let x = area.x + (area.width - width) / 2;
            let y = area.y + area.height / 2;
            buf.set_stringn(x, y, self.text, width as usize, self.style);
            return;
        }

        let x0 = area.x + (area.width - big_width(self.text)) / 2;
        let y0 = area.y + (area.height - GLYPH_HEIGHT) / 2;

        for (i, ch) in self.text.chars().enumerate() {
            let Some(rows) = glyph(ch) else {
                continue;
            };
            let gx = x0 + i as u16 * (GLYPH_WIDTH + GLYPH_GAP);
            for (dy, row) in rows.iter().enumerate() {
                for (dx, cell) in row.chars().enumerate() {
                    if cell == '#' {
                        put_char(buf, gx + dx as u16, y0 + dy as u16, '█', self.style);
                    }
                }
            }
        }
    }
}

fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch);
        cell.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_every_glyph_is_three_wide() {
        for ch in "0123456789:- ".chars() {
            let rows = glyph(ch).expect("glyph");
            assert!(rows.iter().all(|r| r.chars().count() == GLYPH_WIDTH as usize), "{ch:?}");
        }
    }

    #[test]
    fn test_big_width() {
        assert_eq!(big_width(""), 0);
        assert_eq!(big_width("7"), 3);
        assert_eq!(big_width("20:00"), 19);
    }

    #[test]
    fn test_renders_big_digits_centered() {
        let area = Rect::new(0, 0, 9, 5);
        let mut buf = Buffer::empty(area);
        BigDigits::new("10").render(area, &mut buf);
        // width 7, one column of padding either side
        assert_eq!(row(&buf, 0), "   █ ███ ");
        assert_eq!(row(&buf, 2), "   █ █ █ ");
        assert_eq!(row(&buf, 4), "   █ ███ ");
    }

    #[test]
    fn test_falls_back_to_plain_text_when_short() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        BigDigits::new("12:34").render(area, &mut buf);
        assert_eq!(row(&buf, 1), "  12:34   ");
    }

    #[test]
    fn test_falls_back_for_unknown_glyphs() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        BigDigits::new("OT").render(area, &mut buf);
        assert_eq!(row(&buf, 2).trim(), "OT");
    }
}
