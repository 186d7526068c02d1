use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use list_tidy_shared_kernel::{ByteSize, InfrastructureError, Result};

/// Read the input as UTF-8 from `path`, or from stdin for `None`/`-`.
///
/// At most `max + 1` bytes are pulled from the source, so an oversized input
/// is rejected without being buffered in full.
///
/// # Errors
///
/// Fails when the source cannot be read, is larger than `max`, or is not
/// valid UTF-8.
pub fn read_input(path: Option<&Path>, max: ByteSize) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file_read = |source| InfrastructureError::FileRead { path: p.to_path_buf(), source };
            let file = File::open(p).map_err(file_read)?;
            read_bounded(file, max, file_read)
        }
        _ => read_bounded(io::stdin().lock(), max, |source| InfrastructureError::StdinRead { source }),
    }
}

fn read_bounded<R, F>(reader: R, max: ByteSize, on_error: F) -> Result<String>
where
    R: Read,
    F: Fn(io::Error) -> InfrastructureError,
{
    let mut buf = Vec::new();
    reader.take(max.bytes().saturating_add(1)).read_to_end(&mut buf).map_err(&on_error)?;
    if buf.len() as u64 > max.bytes() {
        log::warn!("input larger than {max:#}, stopped reading");
        return Err(InfrastructureError::InputTooLarge { max }.into());
    }
    String::from_utf8(buf).map_err(|e| on_error(io::Error::new(io::ErrorKind::InvalidData, e)).into())
}
