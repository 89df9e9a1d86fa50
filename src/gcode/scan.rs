/// Letters that introduce a field on a command line.
pub const KEY_LETTERS: [u8; 8] = *b"GMXYZIJK";

/// Largest index the scan passes over without finding a key letter.
///
/// Lines longer than this are treated as unterminated. A key letter is
/// still reported at the first index past the bound.
pub const MAX_SCAN: usize = 10_000;

/// Finds the next key letter at or after `offset`.
///
/// The scan stops at the end of `line`, at a NUL byte, or at the first
/// non-key byte past [MAX_SCAN].
///
/// # Parameters
///
/// - `line`: The command line, optionally NUL-terminated.
/// - `offset`: Index at which to start scanning.
///
/// # Returns
///
/// - `Some(index)`: index of the key letter.
/// - `None`: if no key letter was found.
pub fn find_next_key_letter(line: &[u8], offset: usize) -> Option<usize> {
    for (index, &byte) in line.iter().enumerate().skip(offset) {
        if byte == 0 {
            return None;
        }
        if KEY_LETTERS.contains(&byte) {
            return Some(index);
        }
        if index > MAX_SCAN {
            return None;
        }
    }
    None
}
