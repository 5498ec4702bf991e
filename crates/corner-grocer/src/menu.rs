use std::io::{self, BufRead, Write};
use std::path::Path;

use grocer_tally::{FrequencyTable, SortOrder, tokens};
use grocer_types::MENU_BAR_CHAR;
use tracing::{debug, info};

const BANNER: &str = "================ Corner Grocer ================";
const OPTIONS: [&str; 6] = [
    "1) Look up item frequency",
    "2) Print all frequencies (alphabetical)",
    "3) Print all frequencies (highest count first)",
    "4) Print histogram (alphabetical)",
    "5) Print histogram (highest count first)",
    "6) Exit",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuChoice {
    Lookup,
    Listing(SortOrder),
    Histogram(SortOrder),
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Lookup),
            2 => Some(MenuChoice::Listing(SortOrder::Alpha)),
            3 => Some(MenuChoice::Listing(SortOrder::CountDesc)),
            4 => Some(MenuChoice::Histogram(SortOrder::Alpha)),
            5 => Some(MenuChoice::Histogram(SortOrder::CountDesc)),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

enum Input {
    Choice(MenuChoice),
    OutOfRange,
    NotANumber,
    Blank,
    Eof,
}

/// Interactive loop over a loaded table.
///
/// Reads choices from `input` until the user exits or input runs out, then
/// exports the table to `export_path` exactly once.
pub struct Menu<'a, R, W> {
    table: &'a FrequencyTable,
    export_path: &'a Path,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(table: &'a FrequencyTable, export_path: &'a Path, input: R, out: W) -> Self {
        Self {
            table,
            export_path,
            input,
            out,
        }
    }

    /// Run until exit; returns whether the export succeeded.
    pub fn run(&mut self) -> io::Result<bool> {
        self.print_menu()?;
        loop {
            match self.read_choice()? {
                Input::Eof => {
                    debug!("input closed, leaving menu");
                    writeln!(self.out)?;
                    break;
                }
                Input::Blank => continue,
                Input::NotANumber => {
                    writeln!(self.out, "Invalid input. Please enter a number 1-6.")?;
                }
                Input::OutOfRange => {
                    writeln!(self.out, "Please choose a number 1-6.")?;
                }
                Input::Choice(MenuChoice::Exit) => {
                    writeln!(
                        self.out,
                        "Exiting and writing {}...",
                        self.export_path.display()
                    )?;
                    break;
                }
                Input::Choice(choice) => {
                    self.handle(choice)?;
                    self.pause()?;
                }
            }
            self.print_menu()?;
        }
        self.finish()
    }

    fn finish(&mut self) -> io::Result<bool> {
        let exported = self.table.export(self.export_path);
        if exported {
            writeln!(self.out, "Exported to {}", self.export_path.display())?;
        } else {
            writeln!(self.out, "Failed to write {}", self.export_path.display())?;
        }
        self.out.flush()?;
        Ok(exported)
    }

    fn handle(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::Lookup => {
                write!(self.out, "Enter item name to search: ")?;
                self.out.flush()?;
                let query = self.read_line()?.unwrap_or_default();
                info!("lookup {query:?}");
                writeln!(self.out, "{} {}", query, self.table.frequency(&query))?;
            }
            MenuChoice::Listing(order) => {
                writeln!(self.out, "\nItem Frequencies ({}):", order.heading())?;
                self.table.write_listing(order, &mut self.out)?;
            }
            MenuChoice::Histogram(order) => {
                writeln!(self.out, "\nHistogram ({}):", order.heading())?;
                self.table
                    .write_histogram(order, MENU_BAR_CHAR, &mut self.out)?;
            }
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{BANNER}")?;
        for option in OPTIONS {
            writeln!(self.out, "{option}")?;
        }
        write!(self.out, "Choose an option: ")?;
        self.out.flush()
    }

    fn pause(&mut self) -> io::Result<()> {
        write!(self.out, "\nPress ENTER to continue...")?;
        self.out.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Only the leading integer of the first token counts (`3x` picks 3);
    /// the rest of the line is discarded.
    fn read_choice(&mut self) -> io::Result<Input> {
        let Some(line) = self.read_line()? else {
            return Ok(Input::Eof);
        };
        let Some(token) = tokens(&line).next() else {
            return Ok(Input::Blank);
        };
        Ok(match leading_int(token) {
            Some(n) => MenuChoice::from_number(n).map_or(Input::OutOfRange, Input::Choice),
            None => Input::NotANumber,
        })
    }

    /// Next line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Optional sign followed by at least one digit, parsed up to the first
/// non-digit. `None` when there are no digits or the value overflows `i32`.
fn leading_int(token: &str) -> Option<i32> {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    token[..sign_len + digits].parse().ok()
}
