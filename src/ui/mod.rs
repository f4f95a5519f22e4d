pub mod search_panel;

pub use search_panel::SearchPanel;
