//! Line-oriented command language
//!
//! Each line holds one command letter followed by whitespace-separated
//! arguments. Parsing validates every token before a command reaches the
//! session, so a malformed line never touches the plane.

use crate::algorithm::rules::Requirement;
use crate::io::error::{PlaneError, Result, invalid_command, invalid_parameter};
use crate::spatial::direction::{Direction, Position, parse_directions};
use std::fmt;
use std::str::{FromStr, SplitWhitespace};

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `C x y color intensity`: light a tile
    Color {
        /// Target position
        position: Position,
        /// Tile color
        color: String,
        /// Tile intensity
        intensity: i64,
    },
    /// `S x y`: switch a tile off
    SwitchOff {
        /// Target position
        position: Position,
    },
    /// `r result n1 c1 n2 c2 ...`: append a rule
    Rule {
        /// Requirements in declaration order
        requirements: Vec<Requirement>,
        /// Result color
        result: String,
    },
    /// `o`: reorder rules by usage
    ReorderRules,
    /// `s`: print the rules
    PrintRules,
    /// `? x y`: print a tile's state
    State {
        /// Queried position
        position: Position,
    },
    /// `b x y` or `B x y`: block intensity
    BlockIntensity {
        /// Start position
        position: Position,
        /// Only count tiles sharing the start color (`B`)
        homogeneous_only: bool,
    },
    /// `p x y`: propagate to one position
    Propagate {
        /// Target position
        position: Position,
    },
    /// `P x y`: propagate over a whole block
    PropagateBlock {
        /// Any position inside the block
        position: Position,
    },
    /// `t x y codes`: walk a path of direction codes
    Track {
        /// Start position
        start: Position,
        /// Steps to follow
        directions: Vec<Direction>,
    },
    /// `L x1 y1 x2 y2`: shortest path length
    ShortestPath {
        /// Start position
        from: Position,
        /// Target position
        to: Position,
    },
    /// `d`: adjacency dump
    Dump,
    /// `dd`: grid table
    Draw,
    /// `q`: stop reading input
    Quit,
}

impl Command {
    /// Parse one line of input
    ///
    /// Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, missing or surplus arguments,
    /// non-integer numbers, malformed rules and unknown direction codes
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut args = Arguments::new(line);
        let Some(name) = args.tokens.next() else {
            return Ok(None);
        };

        let command = match name {
            "C" => Self::Color {
                position: args.position()?,
                color: args.next("color")?.to_string(),
                intensity: args.number("intensity")?,
            },
            "S" => Self::SwitchOff {
                position: args.position()?,
            },
            "r" => return parse_rule(line, args.tokens).map(Some),
            "o" => Self::ReorderRules,
            "s" => Self::PrintRules,
            "?" => Self::State {
                position: args.position()?,
            },
            "b" | "B" => Self::BlockIntensity {
                position: args.position()?,
                homogeneous_only: name == "B",
            },
            "p" => Self::Propagate {
                position: args.position()?,
            },
            "P" => Self::PropagateBlock {
                position: args.position()?,
            },
            "t" => Self::Track {
                start: args.position()?,
                directions: parse_directions(args.next("directions")?)?,
            },
            "L" => Self::ShortestPath {
                from: args.position()?,
                to: args.position()?,
            },
            "d" => Self::Dump,
            "dd" => Self::Draw,
            "q" => Self::Quit,
            other => {
                return Err(invalid_command(
                    line,
                    &format!("unknown command '{other}'"),
                ));
            }
        };

        args.finish()?;
        Ok(Some(command))
    }
}

fn parse_rule(line: &str, mut tokens: SplitWhitespace<'_>) -> Result<Command> {
    let malformed = |reason: &str| PlaneError::MalformedRule {
        text: line.trim().to_string(),
        reason: reason.to_string(),
    };

    let result = tokens
        .next()
        .ok_or_else(|| malformed("missing result color"))?
        .to_string();

    let mut requirements = Vec::new();
    while let Some(minimum) = tokens.next() {
        let color = tokens
            .next()
            .ok_or_else(|| malformed("requirement count without a color"))?;
        let minimum = minimum.parse::<usize>().map_err(|err| {
            malformed(&format!(
                "requirement count '{minimum}' is not a non-negative integer: {err}"
            ))
        })?;
        requirements.push(Requirement::new(color, minimum));
    }

    Ok(Command::Rule {
        requirements,
        result,
    })
}

struct Arguments<'a> {
    line: &'a str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Arguments<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            tokens: line.split_whitespace(),
        }
    }

    fn next(&mut self, parameter: &'static str) -> Result<&'a str> {
        self.tokens.next().ok_or_else(|| {
            invalid_command(self.line, &format!("missing argument '{parameter}'"))
        })
    }

    fn number<T>(&mut self, parameter: &'static str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let token = self.next(parameter)?;
        token
            .parse()
            .map_err(|err| {
                invalid_parameter(parameter, &token, &format!("expected an integer ({err})"))
            })
    }

    fn position(&mut self) -> Result<Position> {
        Ok(Position::new(self.number("x")?, self.number("y")?))
    }

    fn finish(mut self) -> Result<()> {
        match self.tokens.next() {
            Some(extra) => Err(invalid_command(
                self.line,
                &format!("unexpected argument '{extra}'"),
            )),
            None => Ok(()),
        }
    }
}
