use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use crate::tree::trie::Trie;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// True if this line is a well-formed dictionary word.
///
/// The dictionary is allowed to be messy: anything empty or containing a
/// non-alphabetic character is skipped here, even though the tree would
/// reject it again on insert.
fn is_word(line: &str) -> bool {
	!line.is_empty() && line.chars().all(|c| c.is_ascii_alphabetic())
}

/// Builds a `Trie` from a newline-delimited word list.
///
/// # Parameters
/// - `filename`: Path to the dictionary file, one word per line.
///
/// # Returns
/// - `Ok(Trie)`: The populated tree.
/// - `Err(...)`: If the file cannot be read.
///
/// # Behavior
/// - Splits the qualifying lines into chunks (based on CPU cores * factor).
/// - Spawns threads to build a partial tree for each chunk.
/// - Merges all partial trees into the final one.
///
/// # Notes
/// - Uses MPSC channels to collect partial trees from threads.
/// - Malformed lines (empty, digits, punctuation) are skipped silently,
///   never reported as an error.
pub fn load_dictionary<P: AsRef<Path>>(filename: P) -> Result<Trie, Box<dyn std::error::Error>> {
	let lines = read_file(&filename)?;
	let words: Vec<String> = lines.into_iter().filter(|line| is_word(line)).collect();

	let cpus = num_cpus::get();
	let factor = 8;
	let chunks = cpus * factor;
	let chunk_size = ((words.len() + chunks - 1) / chunks).max(1);

	let (tx, rx) = mpsc::channel();
	for chunk in words.chunks(chunk_size) {
		let tx = tx.clone();
		let chunk: Vec<String> = chunk.to_vec();

		thread::spawn(move || {
			let mut partial_tree = Trie::new();
			for word in chunk {
				partial_tree.insert(&word);
			}
			tx.send(partial_tree).expect("Failed to send from thread");
		});
	}
	drop(tx);

	let mut tree = Trie::new();
	for partial_tree in rx.iter() {
		tree.merge(partial_tree);
	}

	Ok(tree)
}
