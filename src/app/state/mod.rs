//! Application State: Board, Editor-Modus, Selektion und View.

mod app_state;
mod editor;
mod selection;
mod view;

pub use app_state::AppState;
pub use editor::{CursorMode, EditorState, RouteHead};
pub use selection::SelectionState;
pub use view::ViewState;
