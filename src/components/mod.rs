pub mod analyze_panel;
pub mod batch_panel;
pub mod design_system;
pub mod error_modal;
pub mod samples;
pub mod search_panel;
pub mod tabs;
pub mod verdict;
