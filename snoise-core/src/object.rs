//! The host-facing noise object: an engine plus the constant persistence.

use crate::command::{Atom, CommandError, ControlCommand, CreationArgs, Message};
use crate::driver::{Persistence, SignalBlock, process_block};
use crate::engine::NoiseEngine;

/// One `simplex~` instance.
#[derive(Debug, Clone)]
pub struct SimplexTilde {
    engine: NoiseEngine,
    persistence: f32,
}

impl SimplexTilde {
    /// Creates an instance from creation atoms, logging any malformed ones.
    #[must_use]
    pub fn new(atoms: &[Atom<'_>]) -> Self {
        let (args, errors) = CreationArgs::parse(atoms);
        for error in &errors {
            log::warn!("simplex~: {error}");
        }
        Self::from_args(&args)
    }

    /// Creates an instance from already parsed creation arguments.
    #[must_use]
    pub fn from_args(args: &CreationArgs) -> Self {
        log::debug!(
            "simplex~: {} octave(s), normalize {}, persistence {}",
            args.settings.octaves,
            args.settings.normalize,
            args.persistence
        );
        Self {
            engine: NoiseEngine::new(&args.settings),
            persistence: args.persistence,
        }
    }

    /// The engine.
    #[must_use]
    pub const fn engine(&self) -> &NoiseEngine {
        &self.engine
    }

    /// Persistence used while no persistence signal is connected.
    #[must_use]
    pub const fn persistence(&self) -> f32 {
        self.persistence
    }

    /// Parses and applies a control message.
    ///
    /// On error the state is unchanged and the error is also logged.
    pub fn handle(&mut self, message: &Message<'_>) -> Result<(), CommandError> {
        match ControlCommand::parse(message) {
            Ok(command) => {
                self.apply(&command);
                Ok(())
            }
            Err(err) => {
                log::warn!("simplex~: {err}");
                Err(err)
            }
        }
    }

    /// Applies a parsed command.
    pub fn apply(&mut self, command: &ControlCommand) {
        match command {
            ControlCommand::Persistence(persistence) => {
                self.persistence = *persistence;
                log::debug!("Persistence set to {persistence}");
            }
            other => self.engine.apply(other),
        }
    }

    /// Renders one block. `persistence` is the connected persistence signal,
    /// if any; otherwise the constant persistence is used.
    pub fn perform(
        &self,
        positions: &SignalBlock<'_>,
        persistence: Option<&[f32]>,
        out: &mut [f32],
    ) {
        let persistence =
            persistence.map_or(Persistence::Constant(self.persistence), Persistence::Signal);
        process_block(&self.engine, positions, persistence, out);
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use snoise_utils::noise::{Dimension, PermutationTable};

    use super::*;
    use crate::command::{DEFAULT_PERSISTENCE, parse_atoms};

    fn object(args: &str) -> SimplexTilde {
        SimplexTilde::new(&parse_atoms(args))
    }

    fn send(object: &mut SimplexTilde, line: &str) -> Result<(), CommandError> {
        let message = Message::parse(line).expect("message should not be blank");
        object.handle(&message)
    }

    #[test]
    fn test_creation() {
        let object = object("-n -s 42 3 0.25");
        assert_eq!(object.persistence(), 0.25);
        assert_eq!(object.engine().octave_config().octaves(), 3);
        assert!(object.engine().octave_config().normalize());
        assert_eq!(
            object.engine().permutation(),
            &PermutationTable::from_seed(42)
        );
    }

    #[test]
    fn test_creation_with_bad_flag_still_builds() {
        let object = object("-q -s 9");
        assert_eq!(object.persistence(), DEFAULT_PERSISTENCE);
        assert_eq!(object.engine().permutation(), &PermutationTable::from_seed(9));
    }

    #[test]
    fn test_persistence_message() {
        let mut object = object("-s 1");
        send(&mut object, "persistence 0.8").expect("persistence should apply");
        assert_eq!(object.persistence(), 0.8);
    }

    #[test]
    fn test_bad_message_leaves_state() {
        let mut object = object("-s 1 5");
        assert_eq!(
            send(&mut object, "octaves many"),
            Err(CommandError::ExpectedFloat {
                selector: "octaves",
                found: "many".to_owned()
            })
        );
        assert_eq!(object.engine().octave_config().octaves(), 5);
        assert!(send(&mut object, "bogus").is_err());
    }

    #[test]
    fn test_perform_uses_constant_or_signal() {
        let mut object = object("-s 42 4");
        send(&mut object, "persistence 0.3").expect("persistence should apply");

        let x: Vec<f32> = (0..16).map(|i| i as f32 * 0.21 - 1.0).collect();
        let channels = [x.as_slice()];
        let block = SignalBlock::Channels(&channels);

        let mut constant = vec![0.0; 16];
        object.perform(&block, None, &mut constant);
        for (i, &v) in constant.iter().enumerate() {
            let expected = object
                .engine()
                .sample(Dimension::One, &[x[i], 0.0, 0.0, 0.0], 0.3);
            assert_eq!(v, expected);
        }

        let signal = vec![0.9; 16];
        let mut modulated = vec![0.0; 16];
        object.perform(&block, Some(&signal), &mut modulated);
        for (i, &v) in modulated.iter().enumerate() {
            let expected = object
                .engine()
                .sample(Dimension::One, &[x[i], 0.0, 0.0, 0.0], 0.9);
            assert_eq!(v, expected);
        }
    }
}
