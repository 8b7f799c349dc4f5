//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{LogReporter, ViolationReporter};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
pub struct AppController {
    reporter: Box<dyn ViolationReporter>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen neuen Controller, der DRC-Meldungen ins Log schreibt.
    pub fn new() -> Self {
        Self::with_reporter(Box::new(LogReporter))
    }

    /// Erstellt einen Controller mit eigenem Empfänger für DRC-Meldungen.
    pub fn with_reporter(reporter: Box<dyn ViolationReporter>) -> Self {
        Self { reporter }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Modus & Routing ===
            AppCommand::SetCursorMode { mode } => handlers::routing::set_cursor_mode(state, mode),
            AppCommand::RoutePress { world_pos } => handlers::routing::press(state, world_pos),
            AppCommand::MoveRouteHead { world_pos } => {
                handlers::routing::move_head(state, world_pos)
            }
            AppCommand::CancelRoute => handlers::routing::cancel(state),

            // === Selektion ===
            AppCommand::SelectAt {
                world_pos,
                additive,
            } => handlers::selection::select_at(state, world_pos, additive),
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::BeginMove { world_pos } => handlers::selection::begin_move(state, world_pos),
            AppCommand::MoveSelectionTo { world_pos } => {
                handlers::selection::move_to(state, world_pos)
            }
            AppCommand::EndMove => handlers::selection::end_move(state),

            // === Editing ===
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::AddFreePad { world_pos } => {
                handlers::editing::add_free_pad(state, world_pos)
            }
            AppCommand::BeginPartPlacement { template } => {
                handlers::editing::begin_part_placement(state, &template)
            }
            AppCommand::MovePlacedPart { world_pos } => {
                handlers::editing::move_placed_part(state, world_pos)
            }
            AppCommand::DropPlacedPart => handlers::editing::drop_placed_part(state),
            AppCommand::CancelPartPlacement => handlers::editing::cancel_part_placement(state),
            AppCommand::RotatePart { part, clockwise } => {
                handlers::editing::rotate_part(state, part, clockwise)
            }
            AppCommand::SetDefaultSettings {
                trace_width,
                ring_diameter,
                hole_diameter,
                component_spacing,
            } => handlers::editing::set_default_settings(
                state,
                trace_width,
                ring_diameter,
                hole_diameter,
                component_spacing,
            ),
            AppCommand::ApplySettingsToSelection {
                ring_diameter,
                hole_diameter,
                trace_width,
            } => handlers::editing::apply_settings_to_selection(
                state,
                ring_diameter,
                hole_diameter,
                trace_width,
            ),

            // === Netze ===
            AppCommand::CreateNet { name } => handlers::editing::create_net(state, &name),
            AppCommand::AssignPadToNet { pad, net } => {
                handlers::editing::assign_pad_to_net(state, pad, net)
            }
            AppCommand::RemovePadFromNet { pad } => {
                handlers::editing::remove_pad_from_net(state, pad)
            }
            AppCommand::SetNetColor { net, color } => {
                handlers::editing::set_net_color(state, net, color)
            }

            // === View ===
            AppCommand::UpdateCursorPosition { world_pos } => {
                handlers::view::update_cursor_position(state, world_pos)
            }

            // === DRC & Optionen ===
            AppCommand::RunDesignRuleCheck => handlers::drc::run(state, self.reporter.as_mut()),
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, *options),
        }

        Ok(())
    }
}
