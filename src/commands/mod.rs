pub mod base_commands;
pub mod defaults_cmd;
pub mod load_cmd;
pub mod output_file;
pub mod parse_cmd;
pub mod template_cmd;
