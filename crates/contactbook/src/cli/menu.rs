//! Interactive menu loop.
//!
//! [`Dispatcher`] owns the [`ContactStore`] and a [`Console`], shows the
//! numbered menu, and runs one store operation per iteration until the user
//! picks Exit or input ends. Store faults are reported and swallowed through
//! [`report::guarded`]; only a broken console ends the loop early.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use super::console::Console;
use crate::config::Config;
use crate::contact::Contact;
use crate::error::Result;
use crate::report;
use crate::store::ContactStore;

const MENU: &[&str] = &[
    "1. Add Contact",
    "2. Update Contact",
    "3. Delete Contact",
    "4. Search Contact",
    "5. Export to CSV",
    "6. Exit",
];

const NOT_FOUND: &str = "Contact Not Found";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a new contact.
    Add,
    /// Update phone/email of an existing contact.
    Update,
    /// Delete a contact.
    Delete,
    /// Show a contact.
    Search,
    /// Write all contacts to the CSV file.
    Export,
    /// Leave the menu.
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection; surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Update),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Search),
            "5" => Some(Self::Export),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The menu-driven front end over a [`ContactStore`].
#[derive(Debug)]
pub struct Dispatcher<R, W> {
    store: ContactStore,
    console: Console<R, W>,
    export_path: PathBuf,
}

impl<R: BufRead, W: Write> Dispatcher<R, W> {
    /// Build a dispatcher around an already loaded store.
    pub fn new(store: ContactStore, console: Console<R, W>, export_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            console,
            export_path: export_path.into(),
        }
    }

    /// Load the configured contacts file and build a dispatcher.
    ///
    /// A file that cannot be read or parsed is reported on the console and
    /// replaced by an empty collection.
    pub fn open(config: &Config, mut console: Console<R, W>) -> Self {
        let path = config.contacts_path();
        let store = report::guarded(&mut console, "load", |_| ContactStore::load(path))
            .unwrap_or_else(|| ContactStore::empty(path))
            .with_create_parent_dirs(config.storage.create_parent_dirs);

        Self::new(store, console, config.export_path())
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Consume the dispatcher, returning its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run the menu loop until Exit or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console itself fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let Some(line) = self.console.prompt("Enter choice: ")? else {
                debug!("End of input, leaving menu");
                self.console.say("Exiting...")?;
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    self.console.say("Exiting...")?;
                    break;
                }
                Some(choice) => self.dispatch(choice)?,
                None => self.console.say("Invalid Choice, try again!")?,
            }
        }

        info!(
            "Menu closed with {} contacts in {}",
            self.store.len(),
            self.store.path().display()
        );
        Ok(())
    }

    /// Run the operation for a single menu choice.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console itself fails.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        debug!("Dispatching {:?}", choice);
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Update => self.update(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Search => self.search(),
            MenuChoice::Export => self.export(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.notice("===== CONTACT BOOK =====")?;
        for item in MENU {
            self.console.say(item)?;
        }
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let name = self.console.field("Name: ")?;
        let phone = self.console.field("Phone: ")?;
        let email = self.console.field("Email: ")?;

        let store = &mut self.store;
        report::guarded(&mut self.console, "add", |console| {
            store.add(Contact::new(name, phone, email))?;
            console.notice("Contact Added Successfully")
        });
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let name = self.console.field("Enter contact name to update: ")?;

        let store = &mut self.store;
        report::guarded(&mut self.console, "update", |console| {
            match store.update(&name, |current| console.prompt_update(current))? {
                Some(_) => console.notice("Contact Updated Successfully"),
                None => console.say(NOT_FOUND),
            }
        });
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let name = self.console.field("Enter contact name to delete: ")?;

        let store = &mut self.store;
        report::guarded(&mut self.console, "delete", |console| {
            match store.delete(&name)? {
                Some(_) => console.notice("Contact Deleted Successfully"),
                None => console.say(NOT_FOUND),
            }
        });
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let name = self.console.field("Enter name to search: ")?;

        let store = &self.store;
        report::guarded(&mut self.console, "search", |console| {
            match store.find(&name) {
                Some(contact) => console.show_contact(contact),
                None => console.say(NOT_FOUND),
            }
        });
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        let store = &self.store;
        let path = &self.export_path;
        report::guarded(&mut self.console, "export", |console| {
            store.export_csv(path)?;
            console.notice("Contacts Exported to CSV")
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use super::*;

    type TestDispatcher = Dispatcher<Cursor<Vec<u8>>, Vec<u8>>;

    fn test_config(dir: &Path) -> Config {
        let mut config = Config::default();
        config.apply_overrides(
            Some(dir.join("contacts.json")),
            Some(dir.join("contacts.csv")),
        );
        config
    }

    fn dispatcher(config: &Config, input: &str) -> TestDispatcher {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        Dispatcher::open(config, console)
    }

    /// Run a scripted session, then reload the store from disk.
    fn run(config: &Config, input: &str) -> (ContactStore, String) {
        let mut d = dispatcher(config, input);
        d.run().unwrap();
        let output = String::from_utf8(d.into_console().into_output()).unwrap();
        let store = ContactStore::load(config.contacts_path()).unwrap();
        (store, output)
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Update));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Delete));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Search));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Export));
        assert_eq!(MenuChoice::parse("6\r"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_exit_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let (_, output) = run(&test_config(dir.path()), "6\n");

        assert!(output.contains("===== CONTACT BOOK ====="));
        assert!(output.contains("5. Export to CSV"));
        assert!(output.ends_with("Enter choice: Exiting...\n"));
        assert!(!dir.path().join("contacts.json").exists());
    }

    #[test]
    fn test_end_of_input_exits() {
        let dir = tempfile::tempdir().unwrap();
        let (_, output) = run(&test_config(dir.path()), "");
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let dir = tempfile::tempdir().unwrap();
        let (_, output) = run(&test_config(dir.path()), "9\n6\n");

        assert!(output.contains("Invalid Choice, try again!"));
        assert_eq!(output.matches("===== CONTACT BOOK =====").count(), 2);
    }

    #[test]
    fn test_full_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let input = "\
1\nBob\n555-1111\nbob@x.com\n\
4\nbob\n\
2\nBob\n555-2222\n\n\
6\n";

        let (store, output) = run(&config, input);
        assert!(output.contains("Contact Added Successfully"));
        assert!(output.contains("--- Contact Found ---\nName : Bob\nPhone: 555-1111\n"));
        assert!(output.contains("Phone (555-1111): Email (bob@x.com): "));
        assert!(output.contains("Contact Updated Successfully"));
        assert_eq!(
            store.contacts(),
            &[Contact::new("Bob", "555-2222", "bob@x.com")]
        );

        let (store, output) = run(&config, "3\nBob\n4\nBob\n6\n");
        assert!(output.contains("Contact Deleted Successfully"));
        assert!(output.contains("Enter name to search: Contact Not Found"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_not_found_messages() {
        let dir = tempfile::tempdir().unwrap();
        let (_, output) = run(&test_config(dir.path()), "2\nGhost\n3\nGhost\n4\nGhost\n6\n");

        assert_eq!(output.matches(NOT_FOUND).count(), 3);
        assert!(!output.contains("Enter new details"));
        assert!(!dir.path().join("contacts.json").exists());
    }

    #[test]
    fn test_export_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let input = "1\nAmy\n1\n\n1\nZed\n2\nz@x.com\n5\n6\n";

        let (_, output) = run(&config, input);
        assert!(output.contains("Contacts Exported to CSV"));

        let csv = std::fs::read_to_string(config.export_path()).unwrap();
        assert_eq!(csv, "name,phone,email\r\nAmy,1,\r\nZed,2,z@x.com\r\n");
    }

    #[test]
    fn test_add_blank_name_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        let (store, output) = run(&test_config(dir.path()), "1\n\n555\n\n6\n");

        assert!(!output.contains("[ERROR]"));
        assert!(output.contains("Contact Added Successfully"));
        assert_eq!(store.contacts(), &[Contact::new("", "555", "")]);
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        std::fs::write(config.contacts_path(), "not json").unwrap();

        let mut d = dispatcher(&config, "6\n");
        assert!(d.store().is_empty());
        d.run().unwrap();

        let output = String::from_utf8(d.into_console().into_output()).unwrap();
        assert!(output.starts_with("[ERROR] JSON error:"));
    }

    #[test]
    fn test_write_failure_is_reported_and_loop_continues() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(&dir.path().join("missing"));
        config.storage.create_parent_dirs = false;

        let mut d = dispatcher(&config, "1\nAlice\n1\n\n4\nAlice\n6\n");
        d.run().unwrap();

        assert!(d.store().is_empty());
        let output = String::from_utf8(d.into_console().into_output()).unwrap();
        assert!(output.contains("[ERROR] failed to write"));
        assert!(output.contains(NOT_FOUND));
        assert!(output.ends_with("Exiting...\n"));
    }
}
