use std::{io::Write, path::Path};

use log::*;
use program_id_config::{KeySlice, ProgramIdConfig};

pub mod deploy_dir;
pub mod errors;
pub mod keypair_record;
pub mod program_id;
mod targets;

pub use deploy_dir::find_keypair_files;
use errors::{ProgramIdError, ProgramIdResult};
pub use keypair_record::KeypairRecord;
pub use program_id::{DecodedProgramId, ProgramId};
pub use targets::*;

/// Reads the keypair file at `path` and derives the program id from the
/// entries selected by `slice`.
pub fn decode_program_id(
    path: &Path,
    slice: KeySlice,
) -> ProgramIdResult<DecodedProgramId> {
    let record = KeypairRecord::read_from_file(path)?;
    let bytes = record.public_key_bytes(slice)?;
    let decoded = DecodedProgramId::new(path, ProgramId::new(bytes));
    debug!(
        "Decoded {} from '{}' using the {} slice of {} entries",
        decoded.program_id,
        path.display(),
        slice,
        record.len()
    );
    Ok(decoded)
}

/// Decodes the keypair file at `path` and writes
/// `Program ID from <file-name>: <base58>` to `out`.
/// Nothing is written if decoding fails.
pub fn decode_and_print<W: Write>(
    path: &Path,
    slice: KeySlice,
    out: &mut W,
) -> ProgramIdResult<()> {
    let decoded = decode_program_id(path, slice)?;
    print_program_ids(&[decoded], out)
}

pub fn print_program_ids<W: Write>(
    decoded: &[DecodedProgramId],
    out: &mut W,
) -> ProgramIdResult<()> {
    for program_id in decoded {
        writeln!(out, "{program_id}").map_err(ProgramIdError::Output)?;
    }
    out.flush().map_err(ProgramIdError::Output)
}

/// Resolves the keypair files named by `config`, decodes and verifies all of
/// them and only then prints one line per file.
pub fn run<W: Write>(
    config: &ProgramIdConfig,
    expected_id: Option<&str>,
    out: &mut W,
) -> ProgramIdResult<()> {
    let mut targets = resolve_targets(config)?;
    if let Some(expected_id) = expected_id {
        if targets.len() != 1 {
            return Err(ProgramIdError::ExpectRequiresSingleKeypair(
                targets.len(),
            ));
        }
        targets[0].expected_id = Some(expected_id.to_string());
    }
    let decoded = decode_targets(&targets, config.slice)?;
    print_program_ids(&decoded, out)
}
