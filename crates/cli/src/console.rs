//! Line-based terminal I/O for the menus.
//!
//! The shells never touch stdin/stdout directly; they go through a
//! [`Console`] so tests can drive them with in-memory buffers.

use crate::menu::Menu;
use clinic_core::{ClinicError, RecordName};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub const INVALID_CHOICE: &str = "Invalid choice. Please choose again.";
pub const INVALID_TEXT: &str = "Input is not valid UTF-8. Please try again.";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prints `label` and reads one line without its line ending.
    ///
    /// A line that is not valid UTF-8 is refused and the prompt is shown
    /// again. Returns `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{label}")?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            while matches!(buf.last(), Some(b'\n' | b'\r')) {
                buf.pop();
            }

            match String::from_utf8(buf) {
                Ok(line) => return Ok(Some(line)),
                Err(_) => {
                    tracing::debug!("refusing non-UTF-8 input line");
                    self.line(INVALID_TEXT)?;
                }
            }
        }
    }

    /// Like [`prompt`](Self::prompt) but asks again until the answer is a
    /// non-empty name.
    pub fn prompt_name(&mut self, label: &str) -> io::Result<Option<RecordName>> {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match RecordName::new(&raw) {
                Ok(name) => return Ok(Some(name)),
                Err(_) => self.line("Name cannot be empty.")?,
            }
        }
    }

    /// Shows the numbered menu for `M` until a valid option is picked.
    ///
    /// End of input picks the menu's exit option.
    pub fn menu<M: Menu>(&mut self) -> io::Result<M> {
        loop {
            self.line(format_args!("\n{}:", M::TITLE))?;
            for (i, item) in M::ITEMS.iter().enumerate() {
                self.line(format_args!("{}. {}", i + 1, item.label()))?;
            }

            let Some(raw) = self.prompt("Enter your choice: ")? else {
                return Ok(M::EXIT);
            };
            match M::from_choice(&raw) {
                Some(item) => return Ok(item),
                None => self.line(INVALID_CHOICE)?,
            }
        }
    }

    /// Reports a failed repository call.
    ///
    /// Lookup misses carry their own user-facing message; anything else is a
    /// storage fault and is also logged.
    pub fn failure(&mut self, err: &ClinicError) -> io::Result<()> {
        if err.is_not_found() {
            return self.line(err);
        }
        tracing::error!("{}", err);
        self.line(format_args!("Error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Mode;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn prompt_strips_line_endings_only() {
        let mut c = console("  Mon-Fri 9-5 \r\n");
        let answer = c.prompt("Enter availability: ").unwrap();
        assert_eq!(answer.as_deref(), Some("  Mon-Fri 9-5 "));
        assert_eq!(output(c), "Enter availability: ");
    }

    #[test]
    fn prompt_asks_again_after_invalid_utf8() {
        let mut c = Console::new(Cursor::new(b"Jos\xe9\r\nJose\n".to_vec()), Vec::new());
        let answer = c.prompt("Enter patient name: ").unwrap();
        assert_eq!(answer.as_deref(), Some("Jose"));
        let out = output(c);
        assert_eq!(out.matches(INVALID_TEXT).count(), 1);
        assert_eq!(out.matches("Enter patient name: ").count(), 2);
    }

    #[test]
    fn invalid_utf8_at_end_of_input_returns_none() {
        let mut c = Console::new(Cursor::new(b"\xff".to_vec()), Vec::new());
        assert_eq!(c.prompt("Enter date: ").unwrap(), None);
    }

    #[test]
    fn prompt_returns_none_at_end_of_input() {
        let mut c = console("");
        assert_eq!(c.prompt("Enter date: ").unwrap(), None);
    }

    #[test]
    fn prompt_name_asks_again_for_blank_names() {
        let mut c = console("\n   \nAlice\n");
        let name = c.prompt_name("Enter patient name: ").unwrap();
        assert_eq!(name.map(|n| n.to_string()), Some("Alice".to_string()));
        assert_eq!(output(c).matches("Name cannot be empty.").count(), 2);
    }

    #[test]
    fn menu_rejects_non_numeric_and_out_of_range() {
        let mut c = console("abc\n0\n9\n 2 \n");
        let picked = c.menu::<Mode>().unwrap();
        assert_eq!(picked, Mode::User);
        let out = output(c);
        assert_eq!(out.matches(INVALID_CHOICE).count(), 3);
        assert_eq!(out.matches("Select Mode:").count(), 4);
    }

    #[test]
    fn menu_exits_at_end_of_input() {
        let mut c = console("");
        assert_eq!(c.menu::<Mode>().unwrap(), Mode::Exit);
    }
}
