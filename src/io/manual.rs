//! Interactive image entry
//!
//! The user is prompted for width, height, and then every pixel. Tokens
//! are whitespace-separated and may be spread over any number of lines.

use log::debug;
use std::io::{BufRead, Write};

use crate::grid::{Pixel, PixelGrid};
use crate::io::configuration::Limits;
use crate::io::error::{CodecError, Result, invalid_format, stream_error};
use crate::io::pbm::{checked_dimensions, pixel_buffer};
use crate::io::tokens::StreamTokens;

/// Prompt for and read an image from `input`, writing prompts to `prompt`
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is missing or not an integer
/// - Width or height is outside `limits`
/// - A pixel token is not exactly 0 or 1
/// - Input ends before every pixel is read
/// - Reading input or writing prompts fails
pub fn read_manual_input<R: BufRead, W: Write>(
    input: R,
    mut prompt: W,
    limits: &Limits,
) -> Result<PixelGrid> {
    let mut tokens = StreamTokens::new(input);

    say(&mut prompt, "Manual entry mode.\n")?;
    say(
        &mut prompt,
        &format!("Enter width (max {}): ", limits.max_width),
    )?;
    let width = read_dimension(&mut tokens, "width")?;
    say(
        &mut prompt,
        &format!("Enter height (max {}): ", limits.max_height),
    )?;
    let height = read_dimension(&mut tokens, "height")?;

    let (width, height, expected) = checked_dimensions(width, height, limits)?;
    let mut pixels = pixel_buffer(expected)?;

    say(
        &mut prompt,
        "Enter the pixels (0 = white, 1 = black), separated by spaces or newlines:\n",
    )?;
    while pixels.len() < expected {
        let Some(token) = tokens.next_token()? else {
            return Err(CodecError::Truncated {
                read: pixels.len(),
                expected,
            });
        };
        let pixel = token
            .parse::<i64>()
            .ok()
            .and_then(Pixel::from_value)
            .ok_or_else(|| CodecError::InvalidPixel {
                index: pixels.len(),
                token: token.clone(),
            })?;
        pixels.push(pixel.is_set());
    }

    let grid = PixelGrid::new(width, height, pixels.into_iter().collect(), limits)?;
    debug!("Read {width}x{height} image from manual entry");
    Ok(grid)
}

fn read_dimension<R: BufRead>(tokens: &mut StreamTokens<R>, name: &str) -> Result<i64> {
    let token = tokens
        .next_token()?
        .ok_or_else(|| invalid_format(&format!("missing image {name}")))?;
    token
        .parse()
        .map_err(|_parse_error| invalid_format(&format!("image {name} '{token}' is not an integer")))
}

fn say<W: Write>(prompt: &mut W, text: &str) -> Result<()> {
    prompt
        .write_all(text.as_bytes())
        .and_then(|()| prompt.flush())
        .map_err(|e| stream_error("write prompt", e))
}
