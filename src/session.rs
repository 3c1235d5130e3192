// 🖥️ Interactive Session - menu-driven front end for the catalog
//
// Line-oriented loop over any BufRead/Write pair: each prompt blocks until
// a full line is available, one echoed result line per action.

use crate::catalog::{Book, Catalog};
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

// ============================================================================
// MENU CHOICE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    List,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Parse a trimmed input line into a menu choice.
    ///
    /// Anything outside "1".."4" is Invalid, which the loop reports and
    /// recovers from; it is never an error.
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => MenuChoice::Add,
            "2" => MenuChoice::Remove,
            "3" => MenuChoice::List,
            "4" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// The prompt/dispatch loop that mediates between operator input and the
/// catalog.
///
/// Generic over its streams so tests can drive it with in-memory buffers
/// instead of a terminal. The session owns the catalog for its lifetime;
/// there is exactly one logical actor, so no locking is involved.
pub struct Session<R: BufRead, W: Write> {
    catalog: Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over an empty catalog
    pub fn new(input: R, output: W) -> Self {
        Session {
            catalog: Catalog::new(),
            input,
            output,
        }
    }

    /// Catalog state (for reporting after the loop ends)
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the menu loop until the exit command.
    ///
    /// Returns an error when the input stream closes mid-prompt or the
    /// output stream stops accepting writes; both end the session, and the
    /// stream handles are released when the session is dropped.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Library Management System")?;

        loop {
            self.print_menu()?;
            let choice = self.prompt("Enter your choice: ")?;

            match MenuChoice::parse(&choice) {
                MenuChoice::Add => self.handle_add()?,
                MenuChoice::Remove => self.handle_remove()?,
                MenuChoice::List => self.handle_list()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                MenuChoice::Invalid => {
                    writeln!(self.output, "❌ Invalid choice. Please enter 1, 2, 3 or 4.")?;
                }
            }
        }

        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Please choose an option:")?;
        writeln!(self.output, "1. Add a book")?;
        writeln!(self.output, "2. Remove a book")?;
        writeln!(self.output, "3. List books")?;
        writeln!(self.output, "4. Exit")?;
        Ok(())
    }

    /// Print a prompt without a trailing newline, flush, and read one line.
    ///
    /// Surrounding whitespace is stripped before interpretation. End of
    /// input mid-prompt is fatal: nothing here retries a closed stream.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .context("failed to read from input stream")?;
        if bytes == 0 {
            bail!("input stream closed before exit was requested");
        }

        Ok(line.trim().to_string())
    }

    fn handle_add(&mut self) -> Result<()> {
        let title = self.prompt("Enter the book title: ")?;
        let author = self.prompt("Enter the author: ")?;
        let isbn = self.prompt("Enter the ISBN: ")?;

        // Single attempt per selection; a duplicate is reported, not retried
        if self.catalog.add(Book::new(title, author, isbn)) {
            writeln!(self.output, "✓ Book added successfully.")?;
        } else {
            writeln!(self.output, "❌ A book with that ISBN already exists.")?;
        }
        Ok(())
    }

    fn handle_remove(&mut self) -> Result<()> {
        let isbn = self.prompt("Enter the ISBN of the book to remove: ")?;

        if self.catalog.remove(&isbn) {
            writeln!(self.output, "✓ Book removed.")?;
        } else {
            writeln!(self.output, "❌ No book with that ISBN found.")?;
        }
        Ok(())
    }

    fn handle_list(&mut self) -> Result<()> {
        let books = self.catalog.list();

        if books.is_empty() {
            writeln!(self.output, "The library is empty.")?;
        } else {
            writeln!(self.output, "Books in the library:")?;
            for book in &books {
                writeln!(self.output, "  {}", book)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Drive a full session over scripted input, returning the final
    /// catalog and everything written to the output stream
    fn run_session(input: &str) -> (Catalog, String) {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(input.to_string()), &mut output);
        session.run().expect("session should end via the exit command");
        let catalog = session.catalog().clone();
        drop(session);
        (catalog, String::from_utf8(output).expect("output is UTF-8"))
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Add);
        assert_eq!(MenuChoice::parse("2"), MenuChoice::Remove);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::List);
        assert_eq!(MenuChoice::parse("4"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("9"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("exit"), MenuChoice::Invalid);
    }

    #[test]
    fn test_exit_immediately() {
        let (catalog, output) = run_session("4\n");

        assert!(catalog.is_empty());
        assert!(output.contains("Welcome to the Library Management System"));
        assert!(output.contains("Goodbye!"));
        // Exactly one menu was shown before the loop ended
        assert_eq!(output.matches("Please choose an option:").count(), 1);
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let (catalog, output) = run_session("9\n4\n");

        assert!(catalog.is_empty());
        assert!(output.contains("Invalid choice. Please enter 1, 2, 3 or 4."));
        assert_eq!(output.matches("Please choose an option:").count(), 2);
    }

    #[test]
    fn test_add_then_list() {
        let (catalog, output) = run_session("1\nDune\nFrank Herbert\n111\n3\n4\n");

        assert_eq!(catalog.count(), 1);
        assert!(output.contains("✓ Book added successfully."));
        assert!(output.contains("Books in the library:"));
        assert!(output.contains("  Dune by Frank Herbert (ID: 111)"));
    }

    #[test]
    fn test_duplicate_isbn_reported() {
        let input = "1\nDune\nFrank Herbert\n111\n1\nDune2\nSomeone\n111\n4\n";
        let (catalog, output) = run_session(input);

        assert!(output.contains("❌ A book with that ISBN already exists."));
        assert_eq!(catalog.count(), 1);
        assert_eq!(catalog.list()[0].title, "Dune");
    }

    #[test]
    fn test_remove_hit_and_miss() {
        let input = "1\nDune\nFrank Herbert\n111\n2\n111\n2\n999\n4\n";
        let (catalog, output) = run_session(input);

        assert!(output.contains("✓ Book removed."));
        assert!(output.contains("❌ No book with that ISBN found."));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_list_empty_catalog() {
        let (_, output) = run_session("3\n4\n");

        assert!(output.contains("The library is empty."));
    }

    #[test]
    fn test_input_is_trimmed() {
        // Menu choices and field values arrive with surrounding whitespace
        let (catalog, output) = run_session("  1  \n  Dune  \nFrank Herbert\n 111 \n 3 \n 4 \n");

        assert_eq!(catalog.count(), 1);
        assert_eq!(catalog.list()[0], Book::new("Dune", "Frank Herbert", "111"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_empty_fields_are_accepted() {
        let (catalog, output) = run_session("1\n\n\n\n4\n");

        assert_eq!(catalog.count(), 1);
        assert_eq!(catalog.list()[0], Book::new("", "", ""));
        assert!(output.contains("✓ Book added successfully."));
    }

    #[test]
    fn test_eof_mid_prompt_is_fatal() {
        // Input ends while the add flow is waiting for the author
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new("1\nDune\n".to_string()), &mut output);

        let result = session.run();
        assert!(result.is_err());
    }

    #[test]
    fn test_eof_at_menu_prompt_is_fatal() {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(String::new()), &mut output);

        assert!(session.run().is_err());
    }
}
