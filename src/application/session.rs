//! Interactive exploration loop over any line-based input and output.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::{debug, instrument, warn};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::explorer::{Explorer, Step};
use crate::domain::{Choice, Direction, MansionMap};

/// Consecutive I/O errors on the input tolerated before giving up on it.
/// Lines that are not valid UTF-8 never count.
const MAX_READ_FAILURES: usize = 8;

/// Presentation switches for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Show the destination room next to each direction.
    pub show_destinations: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            show_destinations: true,
        }
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Walked into a room without exits.
    ReachedLeaf,
    /// The player chose to leave.
    Quit,
    /// Input ended before either of the above.
    InputClosed,
}

/// Report of one exploration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expedition {
    /// Rooms visited, entrance first.
    pub trail: Vec<String>,
    /// Choices read from the input, valid or not.
    pub choices: usize,
    pub ending: Ending,
}

impl Expedition {
    /// Room the player ended in.
    pub fn last_room(&self) -> Option<&str> {
        self.trail.last().map(String::as_str)
    }
}

/// Runs the explorer loop from the map's entrance until a leaf, a quit or end of input.
///
/// Invalid keys, missing exits and unreadable lines are reported on `output`
/// and the player is asked again from the same room.
#[instrument(level = "debug", skip_all)]
pub fn explore<R: BufRead, W: Write>(
    map: &MansionMap,
    input: R,
    output: W,
    options: SessionOptions,
) -> ApplicationResult<Expedition> {
    let explorer = Explorer::new(map)?;
    let mut session = Session {
        explorer,
        input,
        output,
        options,
    };
    let expedition = session
        .run()
        .map_err(|e| ApplicationError::console("exploration session", e))?;
    debug!(
        "expedition ended with {:?} after {} choices: {}",
        expedition.ending,
        expedition.choices,
        expedition.trail.join(" -> ")
    );
    Ok(expedition)
}

struct Session<'a, R, W> {
    explorer: Explorer<'a>,
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> io::Result<Expedition> {
        writeln!(
            self.output,
            "\n{}",
            "--- Detective Quest: exploring the mansion ---".cyan().bold()
        )?;

        let mut trail = vec![self.explorer.room().name.to_string()];
        let mut choices = 0;
        let mut failures = 0;

        let ending = loop {
            let room = self.explorer.room();
            writeln!(self.output, "\nYou are in: {}", room.name.as_str().bold())?;

            if self.explorer.at_leaf() {
                writeln!(
                    self.output,
                    "Dead end! This room has no more exits. The exploration ends here."
                )?;
                break Ending::ReachedLeaf;
            }

            self.show_exits()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(self.output)?;
                    break Ending::InputClosed;
                }
                Ok(_) => failures = 0,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    // read_line already consumed the bad line
                    failures = 0;
                    debug!("discarding unreadable line: {e}");
                    self.report_unreadable()?;
                    continue;
                }
                Err(e) => {
                    failures += 1;
                    warn!("input error ({failures}/{MAX_READ_FAILURES}): {e}");
                    if failures >= MAX_READ_FAILURES {
                        return Err(e);
                    }
                    self.skip_rest_of_line();
                    self.report_unreadable()?;
                    continue;
                }
            }

            let Some(choice) = Choice::from_line(&line) else {
                continue;
            };
            choices += 1;

            match self.explorer.choose(choice) {
                Step::Moved(_) => trail.push(self.explorer.room().name.to_string()),
                Step::NoExit(direction) => writeln!(
                    self.output,
                    "{}",
                    format!("There is no way to the {direction} from this room.").red()
                )?,
                Step::Quit => {
                    writeln!(
                        self.output,
                        "{}",
                        "You decided to leave the mansion. Exploration over.".yellow()
                    )?;
                    break Ending::Quit;
                }
                Step::Invalid(c) => writeln!(
                    self.output,
                    "{}",
                    format!("Invalid choice '{c}'. Use 'e' (left), 'd' (right) or 's' (quit).")
                        .red()
                )?,
            }
        };

        writeln!(self.output, "\n{}", "--- Exploration finished. ---".cyan().bold())?;
        self.output.flush()?;

        Ok(Expedition {
            trail,
            choices,
            ending,
        })
    }

    fn report_unreadable(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\n{}",
            "Could not read your choice, try again.".red()
        )
    }

    /// Drop what is left of a line interrupted by a read error.
    fn skip_rest_of_line(&mut self) {
        let mut rest = Vec::new();
        if let Err(e) = self.input.read_until(b'\n', &mut rest) {
            debug!("could not skip rest of line: {e}");
        }
    }

    fn show_exits(&mut self) -> io::Result<()> {
        let map = self.explorer.map();
        writeln!(self.output, "Where do you want to go?")?;
        for (direction, idx) in self.explorer.room().exits() {
            let verb = match direction {
                Direction::Left => "go left",
                Direction::Right => "go right",
            };
            match map.name(idx) {
                Some(name) if self.options.show_destinations => {
                    writeln!(self.output, "  [{}] {verb} (to: {name})", direction.key())?
                }
                _ => writeln!(self.output, "  [{}] {verb}", direction.key())?,
            }
        }
        writeln!(self.output, "  [s] quit the exploration")?;
        write!(self.output, "Your choice: ")?;
        self.output.flush()
    }
}
