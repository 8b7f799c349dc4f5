//! Use-Case-Funktionen für das Bearbeiten des Boards.
//!
//! Aufgeteilt nach Operation:
//! - `add_pad`: freies Pad anlegen
//! - `delete_selected`: Selektion löschen
//! - `place_part`: Bauteil aus dem Katalog platzieren
//! - `rotate_part`: Bauteil drehen
//! - `settings`: Standardwerte und Werte der Selektion
//! - `nets`: Netz-Verwaltung
mod add_pad;
mod delete_selected;
mod nets;
mod place_part;
mod rotate_part;
mod settings;

pub use add_pad::add_free_pad;
pub use delete_selected::delete_selected;
pub use nets::{assign_pad_to_net, create_net, remove_pad_from_net, set_net_color};
pub use place_part::{
    begin_part_placement, cancel_part_placement, drop_placed_part, move_placed_part,
};
pub use rotate_part::rotate_part;
pub use settings::{apply_options, apply_settings_to_selection, set_default_settings};
