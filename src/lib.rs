pub mod api;
pub mod directive;
pub mod error;
pub mod resolver;
pub mod splice;
pub mod storage;
pub mod utils;
pub mod validate;

pub use api::{
    process_includes, process_includes_sync, process_includes_sync_with, process_includes_with,
};
pub use error::ComposeError;
pub use storage::{AsyncStorage, FsStorage, MemoryStorage, Storage};
