pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{CONFIG_ENV_VAR, resolve_config_path};
pub use paths::{format_path_with_tilde, validate_file_size};
pub use terminal::{anchors_to_plain, sanitize_for_terminal};
