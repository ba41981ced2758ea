pub mod card;
pub mod dialog;
pub mod help_overlay;
pub mod hints;

use ratatui::layout::Rect;

/// Fixed-size box centered in `area`, shrunk to fit when the area is smaller.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_is_centered() {
        let rect = centered_box(20, 4, Rect::new(0, 0, 60, 24));
        assert_eq!(rect, Rect::new(20, 10, 20, 4));
    }

    #[test]
    fn box_shrinks_to_area() {
        let rect = centered_box(100, 50, Rect::new(0, 0, 30, 10));
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 10);
    }
}
