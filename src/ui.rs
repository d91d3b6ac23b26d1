//! Blocking terminal prompts.
//!
//! A single-threaded request/response protocol with the terminal: print a
//! numbered list, read one line, repeat until the answer parses. Cancelling
//! (EOF, a blank line, or `q`) is a clean outcome, not an error; callers
//! translate `None` into a neutral notice and a zero exit.

use crate::commands::Action;
use crate::error::Result;
use std::io::{self, Write};

/// Presents `names` as a single-choice list. Returns the chosen name, or
/// `None` if the user cancels.
pub fn select_snippet(names: &[String]) -> Result<Option<String>> {
    Ok(select_from("Select a snippet", names)?.map(|i| names[i].clone()))
}

/// Presents the action menu for a snippet. Returns `None` on cancel.
pub fn select_action() -> Result<Option<Action>> {
    let labels: Vec<String> = Action::ALL.iter().map(|a| a.to_string()).collect();
    Ok(select_from("Choose an action", &labels)?.map(|i| Action::ALL[i]))
}

/// Asks a yes/no question, defaulting to no. EOF counts as no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(false);
    }
    let input = input.trim();
    Ok(input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes"))
}

fn select_from(title: &str, items: &[String]) -> Result<Option<usize>> {
    println!("{}:", title);
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }

    loop {
        print!("Choice [1-{}, q to cancel]: ", items.len());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }

        match parse_choice(input.trim(), items.len()) {
            Choice::Pick(i) => return Ok(Some(i)),
            Choice::Cancel => return Ok(None),
            Choice::Invalid => println!("Invalid selection. Try again."),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Pick(usize),
    Cancel,
    Invalid,
}

fn parse_choice(input: &str, len: usize) -> Choice {
    if input.is_empty() || input.eq_ignore_ascii_case("q") {
        return Choice::Cancel;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Choice::Pick(n - 1),
        _ => Choice::Invalid,
    }
}
