// Adapters - External system implementations

pub mod exec_ytdlp;
pub mod fs_local;
pub mod terminal_view;
pub mod toml_config;

// Re-export adapters
pub use exec_ytdlp::YtDlpAdapter;
pub use fs_local::LocalFsAdapter;
pub use terminal_view::TerminalViewAdapter;
pub use toml_config::{AppConfig, TomlConfigAdapter};
