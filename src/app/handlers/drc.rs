//! Handler für den Design-Rule-Check.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ViolationReporter;

/// Führt den DRC aus und meldet Verstöße an `reporter`.
pub fn run(state: &mut AppState, reporter: &mut dyn ViolationReporter) {
    use_cases::drc::check_design_rules(state, reporter);
}
