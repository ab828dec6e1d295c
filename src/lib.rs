pub mod api;
pub mod errors;
pub mod preview;
pub mod scaffold;
pub mod structure;
pub mod vfs;

pub use api::{scaffold, scaffold_current_dir, BotScaffoldError};
pub use scaffold::{create_structure, Outcome, ScaffoldReport};
pub use structure::{FolderSpec, StructureSpec, BOT_STRUCTURE};
