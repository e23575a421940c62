//! Line-oriented console used by the menu loop.

use std::io::{BufRead, Write};

use crate::contact::{Contact, ContactUpdate};
use crate::error::{Error, Result};
use crate::report::{self, Reporter};

/// Prompt-and-print console over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one line.
    ///
    /// Returns `None` at end of input. The trailing line break is stripped;
    /// everything else is returned as typed.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt for a field value, treating end of input as an empty answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn field(&mut self, label: &str) -> Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    /// Print a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print a confirmation preceded by a blank line.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written.
    pub fn notice(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "\n{line}")?;
        Ok(())
    }

    /// Print every field of a contact.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written.
    pub fn show_contact(&mut self, contact: &Contact) -> Result<()> {
        self.notice("--- Contact Found ---")?;
        self.say(&format!("Name : {}", contact.name))?;
        self.say(&format!("Phone: {}", contact.phone))?;
        self.say(&format!("Email: {}", contact.email))
    }

    /// Ask for replacement phone and email, showing the current values.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn prompt_update(&mut self, current: &Contact) -> Result<ContactUpdate> {
        self.say("Enter new details (leave blank to keep current):")?;
        let phone = self.field(&format!("Phone ({}): ", current.phone))?;
        let email = self.field(&format!("Email ({}): ", current.email))?;
        Ok(ContactUpdate::from_input(phone, email))
    }

    /// Consume the console and return the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Reporter for Console<R, W> {
    fn report_error(&mut self, _operation: &str, err: &Error) {
        // Nowhere left to report a broken stdout.
        let _ = writeln!(self.output, "{}", report::error_line(err));
    }
}
