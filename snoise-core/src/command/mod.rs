//! Control surface: atoms, messages and the commands they map to.
//!
//! Messages are whitespace-separated atoms, the first being the selector:
//!
//! | Message | Effect |
//! |---|---|
//! | `seed [n]` | rebuild the permutation table from `n`, or from the clock |
//! | `normalize [v]` | enable normalization (or set it to `v != 0`) |
//! | `coeffs f...` | replace the per-octave frequency factors |
//! | `octaves n` | set the octave count and reset factors to `2^k` |
//! | `persistence p` | set the constant persistence |

mod creation;
mod error;

pub use creation::{CreationArgs, DEFAULT_PERSISTENCE};
pub use error::CommandError;

use smallvec::SmallVec;
use snoise_utils::noise::MAX_OCTAVES;

/// One token of a message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Atom<'a> {
    /// A number.
    Float(f32),
    /// Anything that is not a number.
    Symbol(&'a str),
}

impl<'a> Atom<'a> {
    /// Classifies a token. Only tokens containing a digit can be numbers, so
    /// `inf` and `nan` stay symbols.
    #[must_use]
    pub fn parse(token: &'a str) -> Self {
        if token.bytes().any(|b| b.is_ascii_digit())
            && let Ok(value) = token.parse::<f32>()
        {
            return Self::Float(value);
        }
        Self::Symbol(token)
    }

    /// The numeric value, if this is a float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Symbol(_) => None,
        }
    }
}

/// Atoms of a single message; short messages stay on the stack.
pub type Atoms<'a> = SmallVec<[Atom<'a>; 8]>;

/// Whitespace-separated tokens with `;` and `,` terminators removed.
fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
        .map(|token| token.trim_end_matches([';', ',']))
        .filter(|token| !token.is_empty())
}

/// Splits a line into atoms.
#[must_use]
pub fn parse_atoms(line: &str) -> Atoms<'_> {
    tokens(line).map(Atom::parse).collect()
}

/// A selector followed by its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Message<'a> {
    /// The first token of the message.
    pub selector: &'a str,
    /// Every token after the selector.
    pub args: Atoms<'a>,
}

impl<'a> Message<'a> {
    /// Parses a text line. Returns `None` for blank lines.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = tokens(line);
        let selector = tokens.next()?;
        Some(Self {
            selector,
            args: tokens.map(Atom::parse).collect(),
        })
    }
}

/// A parsed control command.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlCommand {
    /// Rebuild the permutation table; `None` seeds from the clock.
    Seed(Option<u32>),
    /// Enable or disable octave normalization.
    Normalize(bool),
    /// Explicit per-octave frequency factors (at most [`MAX_OCTAVES`]).
    Coefficients(SmallVec<[f32; MAX_OCTAVES]>),
    /// Octave count, already clamped to `1..=MAX_OCTAVES`.
    Octaves(usize),
    /// Constant persistence used when no persistence signal is connected.
    Persistence(f32),
}

impl ControlCommand {
    /// Maps a message onto a command.
    pub fn parse(message: &Message<'_>) -> Result<Self, CommandError> {
        let args = message.args.as_slice();
        match message.selector {
            "seed" => Ok(Self::Seed(optional_float("seed", args)?.map(seed_from_float))),
            "normalize" => Ok(Self::Normalize(
                optional_float("normalize", args)?.is_none_or(|v| v != 0.0),
            )),
            "coeffs" => {
                let factors = args
                    .iter()
                    .take(MAX_OCTAVES)
                    .map(|atom| float("coeffs", atom))
                    .collect::<Result<SmallVec<[f32; MAX_OCTAVES]>, _>>()?;
                if factors.is_empty() {
                    return Err(CommandError::EmptyCoefficients);
                }
                Ok(Self::Coefficients(factors))
            }
            "octaves" => Ok(Self::Octaves(octave_count(required_float("octaves", args)?))),
            "persistence" => Ok(Self::Persistence(required_float("persistence", args)?)),
            other => Err(CommandError::UnknownSelector(other.to_owned())),
        }
    }
}

fn float(selector: &'static str, atom: &Atom<'_>) -> Result<f32, CommandError> {
    match atom {
        Atom::Float(value) => Ok(*value),
        Atom::Symbol(symbol) => Err(CommandError::ExpectedFloat {
            selector,
            found: (*symbol).to_owned(),
        }),
    }
}

fn optional_float(selector: &'static str, args: &[Atom<'_>]) -> Result<Option<f32>, CommandError> {
    args.first().map(|atom| float(selector, atom)).transpose()
}

fn required_float(selector: &'static str, args: &[Atom<'_>]) -> Result<f32, CommandError> {
    optional_float(selector, args)?.ok_or(CommandError::MissingArgument { selector })
}

/// Converts a numeric seed argument: truncated toward zero, wrapped to 32 bits.
#[must_use]
pub fn seed_from_float(value: f32) -> u32 {
    value as i64 as u32
}

/// Converts a numeric octave argument: clamped to `1..=MAX_OCTAVES`, then truncated.
#[must_use]
pub fn octave_count(value: f32) -> usize {
    if value.is_nan() {
        return 1;
    }
    value.clamp(1.0, MAX_OCTAVES as f32) as usize
}
