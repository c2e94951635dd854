//! Scripted Input
//!
//! A compact text format for canned input, used by tests and by the headless
//! binary. Whitespace separated tokens, one per run of ticks:
//!
//! ```text
//! R*20 B D*30 .*200 LB
//! ```
//!
//! A token is a set of keys (`L` `R` `U` `D` `B`, any case) or `.` for an idle
//! tick, optionally followed by `*N` to hold it for `N` ticks. After the last
//! token the script yields idle frames forever.

use std::str::FromStr;

use crate::game::input::{Direction, InputFrame};
use crate::runtime::session::InputSource;

/// Script parse errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// A character that is not a key.
    #[error("Unknown key '{key}' in token '{token}'")]
    UnknownKey {
        /// Offending token
        token: String,
        /// Offending character
        key: char,
    },

    /// `*N` with `N` missing, zero or not a number.
    #[error("Bad repeat count in token '{0}'")]
    BadRepeat(String),

    /// A token with a repeat but no keys.
    #[error("Missing keys in token '{0}'")]
    MissingKeys(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    frame: InputFrame,
    ticks: u32,
}

/// Input source replaying a parsed script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedInput {
    runs: Vec<Run>,
    run: usize,
    used: u32,
}

impl ScriptedInput {
    /// Parse a script.
    pub fn parse(script: &str) -> Result<Self, ScriptError> {
        let runs = script
            .split_whitespace()
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            runs,
            run: 0,
            used: 0,
        })
    }

    /// A script with no tokens: idle forever.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Ticks covered by the script.
    pub fn len(&self) -> u64 {
        self.runs.iter().map(|r| u64::from(r.ticks)).sum()
    }

    /// Does the script cover no ticks at all?
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Has every scripted frame been handed out?
    pub fn is_finished(&self) -> bool {
        self.run >= self.runs.len()
    }

    /// Every scripted frame in order, ignoring progress.
    pub fn frames(&self) -> impl Iterator<Item = InputFrame> + '_ {
        self.runs
            .iter()
            .flat_map(|r| std::iter::repeat(r.frame).take(r.ticks as usize))
    }

    /// Next frame, advancing the script.
    pub fn next_frame(&mut self) -> InputFrame {
        let Some(current) = self.runs.get(self.run) else {
            return InputFrame::new();
        };

        let frame = current.frame;
        self.used += 1;
        if self.used >= current.ticks {
            self.run += 1;
            self.used = 0;
        }
        frame
    }
}

impl FromStr for ScriptedInput {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _tick: u32) -> InputFrame {
        self.next_frame()
    }
}

fn parse_token(token: &str) -> Result<Run, ScriptError> {
    let (keys, ticks) = match token.split_once('*') {
        Some((keys, count)) => {
            let ticks = count
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ScriptError::BadRepeat(token.to_string()))?;
            (keys, ticks)
        }
        None => (token, 1),
    };

    if keys.is_empty() {
        return Err(ScriptError::MissingKeys(token.to_string()));
    }

    let mut frame = InputFrame::new();
    for key in keys.chars() {
        match key.to_ascii_uppercase() {
            'L' => frame.set_direction(Direction::Left, true),
            'R' => frame.set_direction(Direction::Right, true),
            'U' => frame.set_direction(Direction::Up, true),
            'D' => frame.set_direction(Direction::Down, true),
            'B' => frame.set_bomb(true),
            '.' => {}
            _ => {
                return Err(ScriptError::UnknownKey {
                    token: token.to_string(),
                    key,
                })
            }
        }
    }

    Ok(Run { frame, ticks })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_play() {
        let mut script = ScriptedInput::parse("R*2 b .").unwrap();
        assert_eq!(script.len(), 4);

        assert_eq!(script.poll(1), InputFrame::moving(Direction::Right));
        assert_eq!(script.poll(2), InputFrame::moving(Direction::Right));
        assert_eq!(script.poll(3), InputFrame::bomb());
        assert_eq!(script.poll(4), InputFrame::new());
        assert!(script.is_finished());

        // Idle past the end
        assert_eq!(script.poll(5), InputFrame::new());
        assert_eq!(script.poll(6), InputFrame::new());
    }

    #[test]
    fn test_combined_keys() {
        let script: ScriptedInput = "LUB*3".parse().unwrap();
        let frames: Vec<_> = script.frames().collect();

        let expected = InputFrame::moving(Direction::Left)
            .with(Direction::Up)
            .with_bomb();
        assert_eq!(frames, vec![expected; 3]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            ScriptedInput::parse("R X"),
            Err(ScriptError::UnknownKey { token: "X".into(), key: 'X' })
        );
        assert_eq!(
            ScriptedInput::parse("R*0"),
            Err(ScriptError::BadRepeat("R*0".into()))
        );
        assert_eq!(
            ScriptedInput::parse("R*many"),
            Err(ScriptError::BadRepeat("R*many".into()))
        );
        assert_eq!(
            ScriptedInput::parse("*4"),
            Err(ScriptError::MissingKeys("*4".into()))
        );
    }

    #[test]
    fn test_empty_script_is_idle() {
        let mut script = ScriptedInput::parse("   ").unwrap();
        assert!(script.is_empty());
        assert!(script.is_finished());
        assert_eq!(script.poll(1), InputFrame::new());
        assert_eq!(ScriptedInput::idle(), script);
    }
}
