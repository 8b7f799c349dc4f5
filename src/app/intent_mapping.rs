//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Zeigerereignisse werden nach Zeigermodus verteilt: eine laufende
//! Bauteil-Platzierung hat Vorrang, danach entscheidet `CursorMode`.

use super::state::CursorMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            world_pos,
            additive,
        } => {
            if state.editor.placing_part.is_some() {
                return vec![AppCommand::DropPlacedPart];
            }
            match state.editor.mode {
                CursorMode::Normal => vec![AppCommand::SelectAt {
                    world_pos,
                    additive,
                }],
                CursorMode::Move => vec![
                    AppCommand::SelectAt {
                        world_pos,
                        additive,
                    },
                    AppCommand::BeginMove { world_pos },
                ],
                CursorMode::Route => vec![AppCommand::RoutePress { world_pos }],
            }
        }
        AppIntent::PointerMoved { world_pos } => {
            let mut commands = vec![AppCommand::UpdateCursorPosition { world_pos }];
            if state.editor.placing_part.is_some() {
                commands.push(AppCommand::MovePlacedPart { world_pos });
            } else if state.editor.is_routing() {
                commands.push(AppCommand::MoveRouteHead { world_pos });
            } else if state.editor.mode == CursorMode::Move && state.editor.move_origin.is_some() {
                commands.push(AppCommand::MoveSelectionTo { world_pos });
            }
            commands
        }
        AppIntent::PointerReleased { .. } => {
            if state.editor.move_origin.is_some() {
                vec![AppCommand::EndMove]
            } else {
                vec![]
            }
        }
        AppIntent::EscapePressed => {
            if state.editor.placing_part.is_some() {
                vec![AppCommand::CancelPartPlacement]
            } else if state.editor.is_routing() {
                vec![AppCommand::CancelRoute]
            } else {
                vec![AppCommand::ClearSelection]
            }
        }
        AppIntent::DeleteRequested => {
            if state.editor.is_routing() {
                vec![AppCommand::CancelRoute, AppCommand::DeleteSelected]
            } else {
                vec![AppCommand::DeleteSelected]
            }
        }
        AppIntent::CursorModeChanged { mode } => vec![AppCommand::SetCursorMode { mode }],
        AppIntent::AddPadRequested { world_pos } => vec![AppCommand::AddFreePad { world_pos }],
        AppIntent::PlacePartRequested { template } => {
            if state.editor.mode != CursorMode::Normal || state.editor.placing_part.is_some() {
                log::debug!("Platzierung nur im Normal-Modus möglich");
                vec![]
            } else {
                vec![AppCommand::BeginPartPlacement { template }]
            }
        }
        AppIntent::RotatePartRequested { part, clockwise } => {
            vec![AppCommand::RotatePart { part, clockwise }]
        }
        AppIntent::DefaultSettingsChanged {
            trace_width,
            ring_diameter,
            hole_diameter,
            component_spacing,
        } => vec![AppCommand::SetDefaultSettings {
            trace_width,
            ring_diameter,
            hole_diameter,
            component_spacing,
        }],
        AppIntent::SelectionSettingsApplied {
            ring_diameter,
            hole_diameter,
            trace_width,
        } => vec![AppCommand::ApplySettingsToSelection {
            ring_diameter,
            hole_diameter,
            trace_width,
        }],
        AppIntent::CreateNetRequested { name } => vec![AppCommand::CreateNet { name }],
        AppIntent::AssignPadToNetRequested { pad, net } => {
            vec![AppCommand::AssignPadToNet { pad, net }]
        }
        AppIntent::RemovePadFromNetRequested { pad } => vec![AppCommand::RemovePadFromNet { pad }],
        AppIntent::NetColorChanged { net, color } => vec![AppCommand::SetNetColor { net, color }],
        AppIntent::DesignRuleCheckRequested => {
            if state.editor.is_routing() {
                vec![AppCommand::CancelRoute, AppCommand::RunDesignRuleCheck]
            } else {
                vec![AppCommand::RunDesignRuleCheck]
            }
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
