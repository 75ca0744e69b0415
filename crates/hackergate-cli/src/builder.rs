// ─────────────────────────────────────────────────────────────────────
// Hackergate — Sentence Builders
// ─────────────────────────────────────────────────────────────────────
//! Two ways to assemble a `Sentence`: from command-line words, or by
//! picking words one at a time from a numbered menu.

use std::io::{BufRead, Write};

use hackergate_types::{GateError, GateResult, Sentence, Word};

/// Parse positional arguments into a sentence.
///
/// Each argument may hold several whitespace-separated words.
pub fn parse_words(args: &[String]) -> GateResult<Sentence> {
    args.iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(str::parse::<Word>)
        .collect()
}

/// Words the picker offers next.
pub fn available_words(sentence: &Sentence, allow_repeats: bool) -> Vec<Word> {
    Word::ALL
        .into_iter()
        .filter(|w| allow_repeats || !sentence.contains(w))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Word(Word),
    Finish,
    Reset,
}

/// Resolve a menu answer: a 1-based option number, a word, or
/// `finish` / `reset` (brackets optional).
fn parse_choice(answer: &str, available: &[Word]) -> Option<Choice> {
    let answer = answer.trim();
    if let Ok(n) = answer.parse::<usize>() {
        return match n.checked_sub(1) {
            Some(i) if i < available.len() => Some(Choice::Word(available[i])),
            Some(i) if i == available.len() => Some(Choice::Finish),
            Some(i) if i == available.len() + 1 => Some(Choice::Reset),
            _ => None,
        };
    }

    let bare = answer.trim_start_matches('[').trim_end_matches(']');
    match bare.to_lowercase().as_str() {
        "finish" => Some(Choice::Finish),
        "reset" => Some(Choice::Reset),
        _ => answer
            .parse::<Word>()
            .ok()
            .filter(|w| available.contains(w))
            .map(Choice::Word),
    }
}

/// Interactive word-by-word sentence builder.
pub struct WordPicker<R, W> {
    input: R,
    output: W,
    allow_repeats: bool,
}

impl<R: BufRead, W: Write> WordPicker<R, W> {
    pub fn new(input: R, output: W, allow_repeats: bool) -> Self {
        Self {
            input,
            output,
            allow_repeats,
        }
    }

    fn write_menu(&mut self, sentence: &Sentence, available: &[Word]) -> std::io::Result<()> {
        writeln!(self.output, "{}", sentence.friendly())?;
        for (i, word) in available.iter().enumerate() {
            writeln!(self.output, "  {}) {word}", i + 1)?;
        }
        writeln!(self.output, "  {}) [Finish]", available.len() + 1)?;
        writeln!(self.output, "  {}) [Reset]", available.len() + 2)?;
        write!(self.output, "> ")?;
        self.output.flush()
    }

    /// Prompt until the user finishes. End of input also finishes.
    pub fn pick(&mut self) -> GateResult<Sentence> {
        let mut sentence = Sentence::default();
        let mut line = String::new();

        loop {
            let available = available_words(&sentence, self.allow_repeats);
            self.write_menu(&sentence, &available)
                .map_err(|e| GateError::Input(format!("cannot write prompt: {e}")))?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| GateError::Input(format!("cannot read choice: {e}")))?;
            if read == 0 {
                log::debug!("input closed, finishing with {sentence}");
                return Ok(sentence);
            }

            match parse_choice(&line, &available) {
                Some(Choice::Finish) => return Ok(sentence),
                Some(Choice::Reset) => sentence.clear(),
                Some(Choice::Word(word)) => sentence.push(word),
                None => {
                    writeln!(self.output, "Invalid choice: {}", line.trim())
                        .map_err(|e| GateError::Input(format!("cannot write prompt: {e}")))?;
                }
            }
        }
    }
}
