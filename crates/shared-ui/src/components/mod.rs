// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod empty_state;
pub mod feature_card;
pub mod input;
pub mod navbar;
pub mod page_header;
pub mod pie_chart;
pub mod skeleton;

// Primitive wrappers
pub mod avatar;
pub mod label;
pub mod separator;

// Layout shell
pub mod sidebar;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use empty_state::*;
pub use feature_card::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use pie_chart::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
