//! Use-Case-Funktionen für die Selektion.
//!
//! - `pick`: Einzelklick-Selektion (Netze vor Bauteilen)
//! - `move_selection`: Ziehen der Selektion im Move-Modus
//! - `helpers`: Selektion aufheben
mod helpers;
mod move_selection;
mod pick;

pub use helpers::clear_selection;
pub use move_selection::{begin_move, end_move, move_selection_to};
pub use pick::{pick_at, select_at, PickHit};
