//! Host-independent input commands and the month key layout.

use crate::types::{Bounds, MonthIndex};
use glam::Vec2;

/// A key press, already stripped of host details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Delete,
    Backspace,
}

/// Something the user asked the toy to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Launch the next date of a month.
    Spawn(MonthIndex),
    /// Remove every selected particle.
    DeleteSelected,
    /// Toggle selection of the particles under a canvas point.
    SelectAt(Vec2),
    /// The canvas changed size.
    Resize(Bounds),
}

impl Command {
    /// Translates a key press; unmapped keys yield `None`.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Delete | Key::Backspace => Some(Command::DeleteSelected),
            Key::Char(c) => month_for_key(c).map(Command::Spawn),
        }
    }
}

/// Month launched by a character key.
///
/// `1`–`9` are January to September, then `o`, `n` and `d` (either case)
/// for October, November and December.
pub fn month_for_key(c: char) -> Option<MonthIndex> {
    match c.to_ascii_lowercase() {
        d @ '1'..='9' => Some(d as usize - '1' as usize),
        'o' => Some(9),
        'n' => Some(10),
        'd' => Some(11),
        _ => None,
    }
}
