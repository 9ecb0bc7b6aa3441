//! Tests for the interactive exploration session, driven by scripted input

use std::io::{self, BufRead, Cursor, Read};

use rstest::rstest;

use mansion::application::{explore, ApplicationError, Ending, Expedition, SessionOptions};
use mansion::domain::{DomainError, MansionMap};
use mansion::util::testing;

fn run_with(input: &[u8], options: SessionOptions) -> (Expedition, String, u64) {
    testing::init_test_setup();
    let map = MansionMap::default_mansion().expect("built-in mansion");
    let mut reader = Cursor::new(input.to_vec());
    let mut output = Vec::new();

    let expedition = explore(&map, &mut reader, &mut output, options).expect("session runs");

    let transcript = String::from_utf8(output).expect("utf-8 transcript");
    (expedition, transcript, reader.position())
}

/// Serves `data` but fails once with an I/O error at each offset in `fail_at`.
struct FlakyReader {
    data: Vec<u8>,
    pos: usize,
    fail_at: Vec<usize>,
}

impl FlakyReader {
    fn new(data: &str, fail_at: Vec<usize>) -> Self {
        Self {
            data: data.as_bytes().to_vec(),
            pos: 0,
            fail_at,
        }
    }
}

impl Read for FlakyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = {
            let available = self.fill_buf()?;
            let n = available.len().min(buf.len());
            buf[..n].copy_from_slice(&available[..n]);
            n
        };
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for FlakyReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if let Some(i) = self.fail_at.iter().position(|&p| p == self.pos) {
            self.fail_at.remove(i);
            return Err(io::Error::new(io::ErrorKind::Other, "device hiccup"));
        }
        let end = self
            .fail_at
            .iter()
            .copied()
            .filter(|&p| p > self.pos)
            .min()
            .unwrap_or(self.data.len());
        Ok(&self.data[self.pos..end])
    }

    fn consume(&mut self, amt: usize) {
        self.pos += amt;
    }
}

fn run(input: &str) -> (Expedition, String, u64) {
    run_with(input.as_bytes(), SessionOptions::default())
}

#[rstest]
#[case("e\ne\n", &["Entrance Hall", "Living Room", "Library"])]
#[case("d\nd\n", &["Entrance Hall", "Kitchen", "Winter Garden"])]
#[case("d\ne\n", &["Entrance Hall", "Kitchen", "Pantry"])]
#[case("E\nD\nE\n", &["Entrance Hall", "Living Room", "Office", "Master Bedroom"])]
fn given_path_to_leaf_when_exploring_then_ends_at_leaf(#[case] input: &str, #[case] trail: &[&str]) {
    let (expedition, transcript, _) = run(input);

    assert_eq!(expedition.ending, Ending::ReachedLeaf);
    assert_eq!(expedition.trail, trail);
    assert!(transcript.contains("Dead end!"));
    assert!(transcript.contains(&format!("You are in: {}", trail[trail.len() - 1])));
    assert!(transcript.trim_end().ends_with("--- Exploration finished. ---"));
}

#[test]
fn given_leaf_reached_when_more_input_pending_then_stops_reading() {
    let (expedition, _, consumed) = run("e\ne\nd\ns\n");

    assert_eq!(expedition.last_room(), Some("Library"));
    assert_eq!(expedition.choices, 2);
    assert_eq!(consumed, "e\ne\n".len() as u64);
}

#[test]
fn given_quit_at_entrance_when_exploring_then_leaves_without_moving() {
    let (expedition, transcript, _) = run("s\n");

    assert_eq!(expedition.ending, Ending::Quit);
    assert_eq!(expedition.trail, vec!["Entrance Hall"]);
    assert!(transcript.contains("You decided to leave the mansion."));
    assert!(transcript.contains("--- Exploration finished. ---"));
    assert!(!transcript.contains("You are in: Living Room"));
}

#[test]
fn given_invalid_key_then_left_when_exploring_then_reprompts_and_moves() {
    let (expedition, transcript, _) = run("x\ne\ns\n");

    assert_eq!(expedition.ending, Ending::Quit);
    assert_eq!(expedition.trail, vec!["Entrance Hall", "Living Room"]);
    assert_eq!(expedition.choices, 3);
    assert!(transcript.contains("Invalid choice 'x'"));
    assert_eq!(transcript.matches("You are in: Entrance Hall").count(), 2);
}

#[test]
fn given_many_invalid_keys_when_exploring_then_room_never_changes() {
    let input = "x\n".repeat(25) + "s\n";

    let (expedition, transcript, _) = run(&input);

    assert_eq!(expedition.trail, vec!["Entrance Hall"]);
    assert_eq!(transcript.matches("Invalid choice").count(), 25);
}

#[test]
fn given_missing_direction_when_exploring_then_reports_and_stays() {
    // Office only has a door to the left
    let (expedition, transcript, _) = run("e\nd\nd\ns\n");

    assert_eq!(expedition.trail, vec!["Entrance Hall", "Living Room", "Office"]);
    assert_eq!(expedition.ending, Ending::Quit);
    assert!(transcript.contains("There is no way to the right from this room."));
}

#[test]
fn given_room_with_one_exit_when_prompting_then_lists_only_that_direction() {
    let (_, transcript, _) = run("e\nd\ns\n");

    let office_prompt = transcript
        .split("You are in: Office")
        .nth(1)
        .expect("office visited");
    assert!(office_prompt.contains("[e] go left (to: Master Bedroom)"));
    assert!(!office_prompt.contains("[d]"));
    assert!(office_prompt.contains("[s] quit the exploration"));
}

#[test]
fn given_blank_lines_and_padding_when_exploring_then_uses_first_character() {
    let (expedition, _, _) = run("\n   \n  e  \nexit\n");

    assert_eq!(expedition.last_room(), Some("Library"));
    assert_eq!(expedition.choices, 2);
}

#[test]
fn given_end_of_input_when_exploring_then_finishes_with_input_closed() {
    let (expedition, transcript, _) = run("d\n");

    assert_eq!(expedition.ending, Ending::InputClosed);
    assert_eq!(expedition.last_room(), Some("Kitchen"));
    assert!(transcript.contains("--- Exploration finished. ---"));
}

#[test]
fn given_unreadable_line_when_exploring_then_discards_it_and_continues() {
    let (expedition, _, _) = run_with(b"\xff\xfe\ne\ne\n", SessionOptions::default());

    assert_eq!(expedition.ending, Ending::ReachedLeaf);
    assert_eq!(expedition.last_room(), Some("Library"));
    assert_eq!(expedition.choices, 2);
}

#[test]
fn given_many_unreadable_lines_when_exploring_then_reports_each_and_keeps_going() {
    let mut input = b"\xff\n".repeat(12);
    input.extend_from_slice(b"s\n");

    let (expedition, transcript, _) = run_with(&input, SessionOptions::default());

    assert_eq!(expedition.ending, Ending::Quit);
    assert_eq!(expedition.trail, vec!["Entrance Hall"]);
    assert_eq!(
        transcript.matches("Could not read your choice, try again.").count(),
        12
    );
}

#[test]
fn given_io_error_mid_line_when_exploring_then_drops_rest_of_that_line() {
    testing::init_test_setup();
    let map = MansionMap::default_mansion().unwrap();
    // Fails after "d"; the "x" left on that line must not be read as a choice
    let reader = FlakyReader::new("dx\ne\ne\n", vec![1]);
    let mut output = Vec::new();

    let expedition = explore(&map, reader, &mut output, SessionOptions::default()).unwrap();

    let transcript = String::from_utf8(output).unwrap();
    assert_eq!(expedition.trail, vec!["Entrance Hall", "Living Room", "Library"]);
    assert_eq!(expedition.choices, 2);
    assert!(transcript.contains("Could not read your choice, try again."));
    assert!(!transcript.contains("Invalid choice"));
}

#[test]
fn given_few_io_errors_when_exploring_then_recovers() {
    testing::init_test_setup();
    let map = MansionMap::default_mansion().unwrap();
    let reader = FlakyReader::new("s\n", vec![0; 6]);

    let expedition = explore(&map, reader, Vec::new(), SessionOptions::default()).unwrap();

    assert_eq!(expedition.ending, Ending::Quit);
}

#[test]
fn given_input_failing_persistently_when_exploring_then_returns_console_error() {
    testing::init_test_setup();
    let map = MansionMap::default_mansion().unwrap();
    let reader = FlakyReader::new("s\n", vec![0; 32]);

    let result = explore(&map, reader, Vec::new(), SessionOptions::default());

    assert!(matches!(result, Err(ApplicationError::Console { .. })));
}

#[test]
fn given_hidden_destinations_when_prompting_then_omits_room_names() {
    let options = SessionOptions {
        show_destinations: false,
    };

    let (_, transcript, _) = run_with(b"s\n", options);

    assert!(transcript.contains("[e] go left\n"));
    assert!(transcript.contains("[d] go right\n"));
    assert!(!transcript.contains("(to: Living Room)"));
}

#[test]
fn given_shown_destinations_when_prompting_then_names_next_rooms() {
    let (_, transcript, _) = run("s\n");

    assert!(transcript.contains("[e] go left (to: Living Room)"));
    assert!(transcript.contains("[d] go right (to: Kitchen)"));
}

#[test]
fn given_map_without_root_when_exploring_then_returns_domain_error() {
    let map = MansionMap::new();

    let result = explore(&map, Cursor::new(Vec::new()), Vec::new(), SessionOptions::default());

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::MissingRoot))
    ));
}
