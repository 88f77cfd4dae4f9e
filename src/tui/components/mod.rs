// Components module - reusable UI building blocks
//
// - Input panel: the emulated text input and its details line
// - Events panel: captured event log
// - Logs panel: System log entries
// - Status bar: current controls and key hints
// - Toast: transient notifications
//
// Each component is a focused, single-responsibility module.

pub mod events_panel;
pub mod input_panel;
pub mod logs_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod toast;

pub use events_panel::EventsPanel;
pub use input_panel::InputPanel;
pub use logs_panel::LogsPanel;
pub use toast::Toast;
