//! Interactive autocomplete demo on the terminal.
//!
//! Loads a dictionary, then reads keystrokes from stdin and shows up to
//! ten completions for the word currently being typed. Enter (or end of
//! input) ends the session and echoes the confirmed line.
//!
//! The loop consumes stdin one byte at a time; for live per-keystroke
//! behaviour run with `stty -icanon -echo`, otherwise the terminal's line
//! discipline delivers input line by line.

mod input;

use std::env;
use std::io::{self, Read, Write};
use std::time::Instant;

use log::{info, warn};

use wordtree_core::io::load_dictionary;
use wordtree_core::tree::trie::Trie;

use crate::input::{InputBuffer, Key};

/// Maximum number of completions shown below the prompt.
const PREDICTION_COUNT: u8 = 10;

/// Clears the screen, then prints the prompt line and the predictions.
fn redraw(buffer: &InputBuffer, predictions: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b[2J\x1b[1;1H> {}\r\n", buffer.line())?;
    for prediction in predictions {
        write!(stdout, "{}\r\n", prediction)?;
    }
    stdout.flush()
}

/// Application entry point.
fn main() -> io::Result<()> {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| "dictionary.txt".to_owned());

    // A missing or unreadable dictionary must not kill the session; the
    // prompt simply starts with nothing to predict.
    let start = Instant::now();
    let tree = match load_dictionary(&path) {
        Ok(tree) => tree,
        Err(e) => {
            warn!("Could not load dictionary '{}': {}", path, e);
            Trie::new()
        }
    };
    info!(
        "Loaded {} words from '{}' in {} ms",
        tree.count(),
        path,
        start.elapsed().as_millis()
    );

    let mut buffer = InputBuffer::new();
    redraw(&buffer, &[])?;

    for byte in io::stdin().lock().bytes() {
        let key = match Key::from_byte(byte?) {
            Some(key) => key,
            None => continue,
        };
        if !buffer.apply(key) {
            break;
        }
        let predictions = tree.predict(buffer.current_word(), PREDICTION_COUNT);
        redraw(&buffer, &predictions)?;
    }

    println!("{}", buffer.line());
    Ok(())
}
