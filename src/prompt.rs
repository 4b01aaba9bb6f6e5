//! Line-based operator interaction.
//!
//! All prompts run through [`Console`], which is generic over its input
//! and output streams: stdin/stdout in production, in-memory buffers in
//! tests. Invalid menu input is never silently defaulted; the operator is
//! re-prompted until a valid choice arrives.

use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::types::PlaceCandidate;

/// Most candidates ever offered in a disambiguation menu.
pub const MAX_MENU_CHOICES: usize = 5;

/// Operator decision for a multi-candidate disambiguation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Use the candidate at this (zero-based) index
    Pick(usize),
    /// Type an address by hand instead
    Manual,
    /// Leave this record without an address
    Skip,
}

/// Terminal prompt/response handle for the lookup stage.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Console over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line of progress or report text.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print a prompt and read one trimmed answer line.
    ///
    /// A closed input stream is an I/O error rather than an empty answer,
    /// so prompt loops cannot spin on end-of-input.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )
            .into());
        }
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question, re-prompting until the answer is one.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{prompt} [y/n]: "))?;
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }

    /// Prompt for a hand-typed address; blank means skip.
    pub fn manual_address(&mut self) -> Result<String> {
        self.ask("Enter address manually (blank to skip): ")
    }

    /// Show a numbered candidate menu and read a valid choice.
    ///
    /// At most [`MAX_MENU_CHOICES`] candidates are offered, numbered from
    /// 1, alongside `m` (manual entry) and `s` (skip). Out-of-range and
    /// non-numeric input re-prompts.
    pub fn pick_candidate(&mut self, candidates: &[PlaceCandidate]) -> Result<MenuChoice> {
        let shown = candidates.len().min(MAX_MENU_CHOICES);
        self.say(&format!("Found {} possible matches:", candidates.len()))?;
        for (index, candidate) in candidates.iter().take(shown).enumerate() {
            self.say(&format!("  {}. {}", index + 1, candidate.label()))?;
        }
        self.say("  m. enter the address manually")?;
        self.say("  s. skip this restaurant")?;

        loop {
            let answer = self.ask(&format!("Choice [1-{shown}/m/s]: "))?;
            match answer.as_str() {
                "m" | "M" => return Ok(MenuChoice::Manual),
                "s" | "S" => return Ok(MenuChoice::Skip),
                other => match other.parse::<usize>() {
                    Ok(n) if (1..=shown).contains(&n) => return Ok(MenuChoice::Pick(n - 1)),
                    _ => self.say(&format!("Enter a number from 1 to {shown}, m, or s."))?,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn candidates(count: usize) -> Vec<PlaceCandidate> {
        (0..count)
            .map(|n| PlaceCandidate {
                id: format!("id-{n}"),
                name: format!("Place {n}"),
                address: format!("{n} Main St, Los Angeles, CA"),
                types: vec![],
            })
            .collect()
    }

    #[test]
    fn test_ask_trims_answer() {
        let mut console = scripted("  yes please  \n");
        assert_eq!(console.ask("? ").unwrap(), "yes please");
    }

    #[test]
    fn test_ask_errors_on_closed_input() {
        let mut console = scripted("");
        let err = console.ask("? ").unwrap_err();
        assert_matches!(err, crate::Error::Io { .. });
    }

    #[test]
    fn test_confirm_reprompts_until_yes_or_no() {
        let mut console = scripted("maybe\nY\n");
        assert!(console.confirm("Continue?").unwrap());
        let text = String::from_utf8(console.output).unwrap();
        assert!(text.contains("Please answer y or n."));

        let mut console = scripted("no\n");
        assert!(!console.confirm("Continue?").unwrap());
    }

    #[test]
    fn test_menu_caps_at_five_options() {
        let mut console = scripted("5\n");
        let choice = console.pick_candidate(&candidates(7)).unwrap();
        assert_eq!(choice, MenuChoice::Pick(4));

        let text = String::from_utf8(console.output).unwrap();
        assert!(text.contains("Found 7 possible matches:"));
        assert!(text.contains("  5. "));
        assert!(!text.contains("  6. "));
        assert!(text.contains("Choice [1-5/m/s]: "));
    }

    #[test]
    fn test_menu_rejects_invalid_input_until_valid() {
        let mut console = scripted("0\nseven\n6\n2\n");
        let choice = console.pick_candidate(&candidates(5)).unwrap();
        assert_eq!(choice, MenuChoice::Pick(1));

        let text = String::from_utf8(console.output).unwrap();
        assert_eq!(text.matches("Enter a number from 1 to 5").count(), 3);
    }

    #[test]
    fn test_menu_skip_and_manual() {
        let mut console = scripted("s\n");
        assert_eq!(
            console.pick_candidate(&candidates(2)).unwrap(),
            MenuChoice::Skip
        );

        let mut console = scripted("m\n");
        assert_eq!(
            console.pick_candidate(&candidates(2)).unwrap(),
            MenuChoice::Manual
        );
    }
}
