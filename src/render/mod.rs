//! Zeichenreihenfolge des Boards über den `Painter`-Vertrag.
//!
//! Netze zuerst (Leiterbahnen, dann sichtbare Pads), danach freie Pads
//! ohne Netz, zuletzt die Bauteile.

use crate::core::Board;
pub use crate::shared::Painter;

/// Zeichnet das komplette Board.
///
/// Markierte Elemente werden in Selektionsfarbe gezeichnet.
pub fn paint_board(board: &Board, painter: &mut dyn Painter) {
    for net in board.nets() {
        net.draw(board.pads(), painter);
    }

    let mut loose: Vec<_> = board
        .pads()
        .values()
        .filter(|pad| pad.net.is_none() && pad.is_floating() && pad.visible)
        .collect();
    loose.sort_by_key(|pad| pad.id);
    for pad in loose {
        if pad.selected {
            pad.draw_selected(painter);
        } else {
            pad.draw(painter);
        }
    }

    for part in board.parts() {
        if part.selected {
            part.draw_selected(board.pads(), painter);
        } else {
            part.draw(board.pads(), painter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::find_template;
    use crate::shared::options::{PAD_COLOR, SELECTED_COLOR, TRACE_COLOR};
    use glam::Vec2;

    #[derive(Debug, PartialEq)]
    enum Call {
        Circle([f32; 4]),
        Line([f32; 4]),
        Rect([f32; 4]),
    }

    #[derive(Default)]
    struct RecordingPainter {
        calls: Vec<Call>,
    }

    impl Painter for RecordingPainter {
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, color: [f32; 4]) {
            self.calls.push(Call::Circle(color));
        }

        fn stroke_line(&mut self, _start: Vec2, _end: Vec2, _width: f32, color: [f32; 4]) {
            self.calls.push(Call::Line(color));
        }

        fn stroke_rect(&mut self, _center: Vec2, _size: Vec2, color: [f32; 4]) {
            self.calls.push(Call::Rect(color));
        }
    }

    #[test]
    fn test_nets_painted_before_parts() {
        let mut board = Board::new();
        let template = find_template("R-12.7").expect("Vorlage vorhanden");
        board.place_part(&template, Vec2::new(20.0, 0.0), PAD_COLOR);
        let a = board.add_free_pad(Vec2::ZERO, 1.5, 0.0, PAD_COLOR);
        let b = board.add_free_pad(Vec2::new(5.0, 0.0), 1.5, 0.0, PAD_COLOR);
        let net = board.add_net("GND");
        board.add_segment(net, a, b, 0.254, TRACE_COLOR);

        let mut painter = RecordingPainter::default();
        paint_board(&board, &mut painter);

        // Leiterbahn, zwei Pads ohne Bohrung, dann der Bauteilrahmen
        assert_eq!(painter.calls[0], Call::Line(TRACE_COLOR));
        assert_eq!(painter.calls[1], Call::Circle(PAD_COLOR));
        assert_eq!(painter.calls[2], Call::Circle(PAD_COLOR));
        assert!(matches!(painter.calls[3], Call::Rect(_)));
    }

    #[test]
    fn test_selected_part_uses_selection_color() {
        let mut board = Board::new();
        let template = find_template("R-7.62").expect("Vorlage vorhanden");
        let part = board.place_part(&template, Vec2::ZERO, PAD_COLOR);
        board.set_part_selected(part, true);

        let mut painter = RecordingPainter::default();
        paint_board(&board, &mut painter);

        assert_eq!(painter.calls[0], Call::Rect(SELECTED_COLOR));
        assert!(!painter.calls.contains(&Call::Circle(PAD_COLOR)));
    }

    #[test]
    fn test_invisible_pads_are_not_painted() {
        let mut board = Board::new();
        board.spawn_virtual_pad(Vec2::ZERO, 0.254, TRACE_COLOR);

        let mut painter = RecordingPainter::default();
        paint_board(&board, &mut painter);

        assert!(painter.calls.is_empty());
    }
}
