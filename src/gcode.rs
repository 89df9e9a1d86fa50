mod parse_command;
mod parse_real;
mod scan;

pub use parse_command::parse_command;
pub use parse_command::parse_command_bytes;
pub use parse_real::parse_operand;
pub use scan::find_next_key_letter;
pub use scan::KEY_LETTERS;
pub use scan::MAX_SCAN;
