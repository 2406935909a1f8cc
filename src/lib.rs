pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod icons;
pub mod layout;
pub mod modeline;
pub mod project;
pub mod segments;
pub mod style;
pub mod themes;
pub mod utils;
pub mod vcs;

pub use config::*;
pub use context::*;
pub use engine::*;
pub use error::*;
pub use icons::*;
pub use layout::*;
pub use modeline::*;
pub use project::*;
pub use segments::*;
pub use style::*;
pub use themes::*;
pub use utils::*;
pub use vcs::*;
