//! Offline rendering: feeds position ramps through the object block by block.

use std::io::{self, Write};

use snoise_core::command::{Atom, CommandError};
use snoise_core::driver::SignalBlock;
use snoise_core::object::SimplexTilde;
use snoise_utils::noise::MAX_DIMENSIONS;

/// Frames rendered per call into the driver.
pub const BLOCK_SIZE: usize = 64;

const DEFAULT_STEP: f32 = 0.01;

/// `render <channels> <frames> [step]`
///
/// Channel `c` at frame `i` is positioned at `i * step + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    /// Position channels; more than four are ignored by the driver anyway.
    pub channels: usize,
    /// Total frames to render.
    pub frames: usize,
    /// Position increment per frame.
    pub step: f32,
}

impl RenderRequest {
    /// Parses the arguments of a `render` message.
    pub fn parse(args: &[Atom<'_>]) -> Result<Self, CommandError> {
        let mut numbers = args.iter().map(|atom| match atom {
            Atom::Float(value) => Ok(*value),
            Atom::Symbol(symbol) => Err(CommandError::ExpectedFloat {
                selector: "render",
                found: (*symbol).to_owned(),
            }),
        });
        let missing = CommandError::MissingArgument { selector: "render" };

        let channels = numbers.next().ok_or_else(|| missing.clone())??;
        let frames = numbers.next().ok_or(missing)??;
        let step = numbers.next().transpose()?.unwrap_or(DEFAULT_STEP);

        Ok(Self {
            channels: (channels as usize).min(MAX_DIMENSIONS),
            frames: frames as usize,
            step,
        })
    }
}

/// Renders `request` and writes one sample per line.
pub fn render(
    object: &SimplexTilde,
    request: &RenderRequest,
    out: &mut impl Write,
) -> io::Result<()> {
    let channels = request.channels;
    let mut positions = [0.0f32; BLOCK_SIZE * MAX_DIMENSIONS];
    let mut block = [0.0f32; BLOCK_SIZE];

    let mut start = 0;
    while start < request.frames {
        let frames = BLOCK_SIZE.min(request.frames - start);
        let samples = &mut positions[..channels * frames];
        for (c, channel) in samples.chunks_exact_mut(frames).enumerate() {
            for (i, position) in channel.iter_mut().enumerate() {
                *position = (start + i) as f32 * request.step + c as f32;
            }
        }

        let output = &mut block[..frames];
        object.perform(
            &SignalBlock::Multichannel {
                samples: &positions[..channels * frames],
                channels,
            },
            None,
            output,
        );
        for sample in output.iter() {
            writeln!(out, "{sample}")?;
        }
        start += frames;
    }
    Ok(())
}
