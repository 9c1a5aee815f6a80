pub mod file;
pub mod naming;
pub mod logging;

pub use file::{list_entries, safe_move_file};
pub use naming::{destination_name, is_png, is_renamed, snapshot_index, source_name};
pub use logging::init_logging;
