use crate::error::{OrfError, OrfResult};
use crate::orf::{FinalOrf, OrfTable};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Placeholder written for an ORF that was not found in a record.
pub const MISSING_COORDS: &str = "NA-NA";

const OUTPUT_SUFFIX: &str = "_orf.txt";

/// `dir/genomes.gb` becomes `dir/genomes_orf.txt`.
pub fn orf_table_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    match input.file_stem() {
        Some(stem) => {
            let mut name = stem.to_os_string();
            name.push(OUTPUT_SUFFIX);
            input.with_file_name(name)
        }
        None => {
            let mut name = OsString::from(input.as_os_str());
            name.push(OUTPUT_SUFFIX);
            PathBuf::from(name)
        }
    }
}

/// Writes one comma-joined line per record. Ids are written as-is, without quoting.
pub fn write_orf_table<W: Write>(mut writer: W, table: &OrfTable) -> OrfResult<()> {
    write_rows(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

/// Writes the table to `path`, replacing any existing file.
pub fn write_orf_table_to_path(path: impl AsRef<Path>, table: &OrfTable) -> OrfResult<()> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|e| OrfError::Io {
        path: path_ref.display().to_string(),
        source: e,
    })?;
    write_orf_table(BufWriter::new(file), table)
}

fn write_rows<W: Write>(writer: &mut W, table: &OrfTable) -> io::Result<()> {
    write!(writer, "id")?;
    for orf in FinalOrf::ALL {
        write!(writer, ",{orf}")?;
    }
    writeln!(writer)?;

    for (id, orfs) in table.iter() {
        write!(writer, "{id}")?;
        for orf in FinalOrf::ALL {
            match orfs.get(orf) {
                Some(coords) => write!(writer, ",{coords}")?,
                None => write!(writer, ",{MISSING_COORDS}")?,
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}
