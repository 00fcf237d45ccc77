use crate::error::{ConvertError, InputContext};
use crate::grouper::{BLOCK_LINES, Blocks};
use crate::record::{self, FastqRecord};

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

const START: InputContext = InputContext {
    record_num: 0,
    line_num: 0,
};

/// Destination path for a source file: the final extension is replaced
/// with `.csv` (`reads.fq` -> `reads.csv`, `reads.fq.gz` ->
/// `reads.fq.csv`). Pure path arithmetic, no filesystem access.
pub fn csv_output_path(input: &Path) -> PathBuf {
    input.with_extension("csv")
}

/// Stream `input` line by line and write one quoted CSV row per 4-line
/// block, preceded by the column header. Rows are written in input
/// order. Returns the number of records written.
///
/// Strict: the first malformed block aborts the conversion. Rows already
/// written stay in the output; there is no rollback.
pub fn convert<R: BufRead, W: Write>(input: R, mut output: W) -> Result<u64, ConvertError> {
    let mut ctx = START;
    output
        .write_all(record::csv_header().as_bytes())
        .map_err(|e| ConvertError::io_err(e, ctx))?;

    let mut written = 0u64;
    for block in Blocks::<_, BLOCK_LINES>::new(input.lines()) {
        ctx.record_num += 1;
        let mut lines: [Option<String>; BLOCK_LINES] = std::array::from_fn(|_| None);
        for (slot, line) in lines.iter_mut().zip(block) {
            match line.transpose() {
                Ok(line) => {
                    if line.is_some() {
                        ctx.line_num += 1;
                    }
                    *slot = line;
                }
                Err(e) => return Err(ConvertError::io_err(e, ctx)),
            }
        }
        let rec = FastqRecord::from_block(lines).map_err(|e| ConvertError::fmt_err(e, ctx))?;
        output
            .write_all(rec.to_csv().as_bytes())
            .map_err(|e| ConvertError::io_err(e, ctx))?;
        written += 1;
    }
    output.flush().map_err(|e| ConvertError::io_err(e, ctx))?;
    Ok(written)
}

/// Open `input` (plain or gzip, auto-detected by `.gz` extension or
/// magic bytes), create `output`, and run [`convert`] over buffered
/// reader and writer. Both files are closed on every exit path.
pub fn convert_path(input: &Path, output: &Path) -> Result<u64, ConvertError> {
    let f = File::open(input).map_err(|e| ConvertError::io_err(e, START))?;

    let is_gz = input.extension().and_then(|s| s.to_str()) == Some("gz")
        || looks_like_gzip(&f).unwrap_or(false);

    let rdr: Box<dyn BufRead> = if is_gz {
        #[cfg(feature = "gzip")]
        {
            log::debug!("gzip input detected: {}", input.display());
            let dec = MultiGzDecoder::new(f);
            Box::new(BufReader::with_capacity(256 * 1024, dec))
        }
        #[cfg(not(feature = "gzip"))]
        {
            return Err(ConvertError::io_err(
                io::Error::new(
                    io::ErrorKind::Unsupported,
                    "gzip input, but the `gzip` feature is disabled",
                ),
                START,
            ));
        }
    } else {
        Box::new(BufReader::with_capacity(256 * 1024, f))
    };

    let out = File::create(output).map_err(|e| ConvertError::io_err(e, START))?;
    convert(rdr, BufWriter::new(out))
}

fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.seek(SeekFrom::Current(0))?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}
