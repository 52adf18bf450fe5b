pub mod error;
pub mod feature_flags;

// Case-management view models
pub mod activity;
pub mod document;
pub mod entity;
pub mod fact;
pub mod matter;
pub mod session;

pub use error::*;
pub use feature_flags::*;

pub use activity::*;
pub use document::*;
pub use entity::*;
pub use fact::*;
pub use matter::*;
pub use session::*;
