//! PCB Layout Editor: kopfloser Treiber.
//!
//! Lädt die Optionen, baut über Intents ein kleines Demo-Board auf, routet
//! eine Verbindung und führt den Design-Rule-Check aus.

use glam::Vec2;
use pcb_layout_editor::render::paint_board;
use pcb_layout_editor::{AppController, AppIntent, AppState, CursorMode, EditorOptions, Painter};

/// Zählt die Zeichenaufrufe statt zu zeichnen
#[derive(Default)]
struct CountingPainter {
    circles: usize,
    lines: usize,
    rects: usize,
}

impl Painter for CountingPainter {
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: [f32; 4]) {
        self.circles += 1;
    }

    fn stroke_line(&mut self, _start: Vec2, _end: Vec2, _width: f32, _color: [f32; 4]) {
        self.lines += 1;
    }

    fn stroke_rect(&mut self, _center: Vec2, _size: Vec2, _color: [f32; 4]) {
        self.rects += 1;
    }
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("PCB Layout Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    // zwei Widerstände nebeneinander
    for x in [0.0, 10.16] {
        controller.handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Vec2::new(x, 0.0),
            },
        )?;
        controller.handle_intent(
            &mut state,
            AppIntent::PlacePartRequested {
                template: "R-12.7".into(),
            },
        )?;
        controller.handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                world_pos: Vec2::new(x, 0.0),
                additive: false,
            },
        )?;
    }

    controller.handle_intent(
        &mut state,
        AppIntent::CreateNetRequested { name: "GND".into() },
    )?;
    let gnd = state
        .board
        .net_by_name("GND")
        .map(|net| net.id)
        .ok_or_else(|| anyhow::anyhow!("Netz GND fehlt"))?;

    let pads: Vec<_> = state
        .board
        .parts()
        .filter_map(|part| part.footprint.pads().first().copied())
        .collect();
    for pad in pads {
        controller.handle_intent(&mut state, AppIntent::AssignPadToNetRequested { pad, net: gnd })?;
    }

    // Route von Pad 1 des ersten zu Pad 1 des zweiten Widerstands mit Ecke
    controller.handle_intent(
        &mut state,
        AppIntent::CursorModeChanged {
            mode: CursorMode::Route,
        },
    )?;
    for point in [
        Vec2::new(0.0, -6.35),
        Vec2::new(5.08, -10.16),
        Vec2::new(10.16, -6.35),
    ] {
        controller.handle_intent(&mut state, AppIntent::PointerMoved { world_pos: point })?;
        controller.handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                world_pos: point,
                additive: false,
            },
        )?;
    }

    state.board.validate_links()?;
    controller.handle_intent(&mut state, AppIntent::DesignRuleCheckRequested)?;

    let mut painter = CountingPainter::default();
    paint_board(&state.board, &mut painter);
    log::info!(
        "Board: {} Bauteile, {} Pads, {} Leiterbahnen ({} Kreise, {} Linien, {} Rahmen gezeichnet)",
        state.board.part_count(),
        state.pad_count(),
        state.segment_count(),
        painter.circles,
        painter.lines,
        painter.rects
    );
    if let Some(report) = &state.last_drc {
        log::info!("DRC: {} Verstöße", report.violations.len());
    }

    Ok(())
}
