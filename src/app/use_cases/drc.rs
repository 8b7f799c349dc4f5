//! Use-Case: Design-Rule-Check über das aktuelle Board.

use crate::core::{run_design_rule_check, ViolationReporter};
use crate::AppState;

/// Prüft das Board mit dem Mindestabstand aus den Optionen und merkt das
/// Ergebnis in `state.last_drc`.
pub fn check_design_rules(state: &mut AppState, reporter: &mut dyn ViolationReporter) {
    let clearance = state.options.component_spacing;
    let report = run_design_rule_check(&mut state.board, clearance, reporter);
    state.last_drc = Some(report);
}
