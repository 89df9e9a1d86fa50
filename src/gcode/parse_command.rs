use core::str;

use super::parse_real::parse_operand;
use super::scan::find_next_key_letter;
use crate::{Command, TickScale};

/// Parses a command line into a [Command].
///
/// Every key letter on the line is read together with the number that
/// follows it. Coordinates (`X`, `Y`, `Z`, `I`, `J`, `K`) are converted to
/// ticks using `scale`; the `G` number is only rounded. `M` fields are read
/// but not stored. When a letter appears more than once, the last value
/// wins. Letters that never appear leave their field as `None`.
///
/// Parsing never fails: an operand that is not a number reads as zero.
///
/// # Parameters
///
/// - `line`: The command line.
/// - `scale`: Ticks per unit for coordinate fields.
pub fn parse_command(line: &str, scale: TickScale) -> Command {
    parse_command_bytes(line.as_bytes(), scale)
}

/// Parses a command line held in a byte buffer.
///
/// This is the same as [parse_command], except that the line ends at the
/// first NUL byte, as in a fixed-size receive buffer. Bytes that are not
/// valid UTF-8 are skipped like any other non-key character.
pub fn parse_command_bytes(line: &[u8], scale: TickScale) -> Command {
    let mut command = Command::new();

    let mut next = find_next_key_letter(line, 0);
    while let Some(at) = next {
        let operand = operand_text(&line[at + 1..]);
        match line[at] {
            b'G' => {
                command.num = Some(parse_operand(operand, TickScale::unit()))
            }
            b'X' => command.x = Some(parse_operand(operand, scale)),
            b'Y' => command.y = Some(parse_operand(operand, scale)),
            b'Z' => command.z = Some(parse_operand(operand, scale)),
            b'I' => command.i = Some(parse_operand(operand, scale)),
            b'J' => command.j = Some(parse_operand(operand, scale)),
            b'K' => command.k = Some(parse_operand(operand, scale)),
            // `M` fields have no slot in a `Command`.
            _ => {}
        }
        next = find_next_key_letter(line, at + 1);
    }

    command
}

/// Returns the longest valid UTF-8 prefix of the bytes after a key letter.
fn operand_text(bytes: &[u8]) -> &str {
    match str::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => {
            str::from_utf8(&bytes[..error.valid_up_to()]).unwrap_or_default()
        }
    }
}
