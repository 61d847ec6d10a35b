//! Creation arguments: `[-n] [-s seed] [octaves] [persistence]`.

use crate::command::{Atom, CommandError, octave_count, seed_from_float};
use crate::engine::EngineSettings;

/// Persistence used when none is given at creation.
pub const DEFAULT_PERSISTENCE: f32 = 0.5;

/// Parsed creation arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationArgs {
    /// Initial engine state.
    pub settings: EngineSettings,
    /// Initial constant persistence.
    pub persistence: f32,
}

impl Default for CreationArgs {
    fn default() -> Self {
        Self {
            settings: EngineSettings::default(),
            persistence: DEFAULT_PERSISTENCE,
        }
    }
}

impl CreationArgs {
    /// Parses creation arguments.
    ///
    /// Leading symbols are flags: `-n` enables normalization and `-s` takes the
    /// next number as the table seed. Unknown flags, and `-s` without a number,
    /// are collected as diagnostics and skipped; parsing itself never fails.
    /// The first number after the flags is the octave count, the second the
    /// initial persistence. Anything after that is ignored.
    #[must_use]
    pub fn parse(atoms: &[Atom<'_>]) -> (Self, Vec<CommandError>) {
        let mut args = Self::default();
        let mut errors = Vec::new();
        let mut rest = atoms;

        while let Some((Atom::Symbol(flag), tail)) = rest.split_first() {
            rest = tail;
            match *flag {
                "-n" => args.settings.normalize = true,
                "-s" => match rest.split_first() {
                    Some((Atom::Float(seed), tail)) => {
                        args.settings.seed = Some(seed_from_float(*seed));
                        rest = tail;
                    }
                    _ => errors.push(CommandError::MissingSeed),
                },
                other => errors.push(CommandError::InvalidArgument(other.to_owned())),
            }
        }

        let mut numbers = rest.iter().filter_map(Atom::as_float);
        if let Some(octaves) = numbers.next() {
            args.settings.octaves = octave_count(octaves);
        }
        if let Some(persistence) = numbers.next() {
            args.persistence = persistence;
        }

        (args, errors)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::command::parse_atoms;

    fn parse(line: &str) -> (CreationArgs, Vec<CommandError>) {
        CreationArgs::parse(&parse_atoms(line))
    }

    #[test]
    fn test_no_arguments() {
        let (args, errors) = parse("");
        assert_eq!(args, CreationArgs::default());
        assert_eq!(args.settings.octaves, 1);
        assert_eq!(args.persistence, DEFAULT_PERSISTENCE);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_all_arguments() {
        let (args, errors) = parse("-n -s 42 4 0.75");
        assert!(errors.is_empty());
        assert!(args.settings.normalize);
        assert_eq!(args.settings.seed, Some(42));
        assert_eq!(args.settings.octaves, 4);
        assert_eq!(args.persistence, 0.75);
    }

    #[test]
    fn test_flags_in_any_order() {
        let (args, _) = parse("-s 7 -n");
        assert!(args.settings.normalize);
        assert_eq!(args.settings.seed, Some(7));
    }

    #[test]
    fn test_octaves_are_clamped() {
        assert_eq!(parse("99").0.settings.octaves, 24);
        assert_eq!(parse("0").0.settings.octaves, 1);
        assert_eq!(parse("2.8").0.settings.octaves, 2);
    }

    #[test]
    fn test_invalid_flag_is_reported_and_skipped() {
        let (args, errors) = parse("-x -n 3");
        assert_eq!(errors, vec![CommandError::InvalidArgument("-x".to_owned())]);
        assert!(args.settings.normalize);
        assert_eq!(args.settings.octaves, 3);
    }

    #[test]
    fn test_seed_flag_without_number() {
        let (args, errors) = parse("-s -n");
        assert_eq!(errors, vec![CommandError::MissingSeed]);
        assert_eq!(args.settings.seed, None);
        assert!(args.settings.normalize);

        let (_, errors) = parse("-s");
        assert_eq!(errors, vec![CommandError::MissingSeed]);
    }
}
