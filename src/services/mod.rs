pub mod analyze_service;
pub mod batch_service;
pub mod controller;
pub mod flow;
pub mod modal_service;
pub mod search_service;
pub mod tab_state;
