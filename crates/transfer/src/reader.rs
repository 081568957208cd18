use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::{PartSpec, TransferError};

/// Reads exactly the byte range described by `spec` from `path`.
///
/// Opens an independent file handle per call, so concurrent reads of
/// disjoint ranges never race on a shared stream cursor. Blocking;
/// callers on an async runtime should wrap this in `spawn_blocking`.
pub fn read_part(path: &Path, spec: &PartSpec) -> Result<Vec<u8>, TransferError> {
    let mut file = std::fs::File::open(path)?;

    if spec.size_bytes == 0 {
        return Ok(Vec::new());
    }

    file.seek(SeekFrom::Start(spec.offset_start))?;
    let mut buf = vec![0u8; spec.size_bytes as usize];
    file.read_exact(&mut buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            TransferError::ShortRead {
                offset: spec.offset_start,
                wanted: spec.size_bytes,
            }
        } else {
            TransferError::Io(e)
        }
    })?;
    Ok(buf)
}
