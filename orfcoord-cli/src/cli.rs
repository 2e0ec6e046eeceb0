use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "orfcoord")]
#[command(version)]
#[command(about = "Extract ORF 1a/1b/2 coordinates from GenBank annotations")]
#[command(long_about = r#"
orfcoord - normalize ORF annotations of viral genomes into a coordinate table

Every CDS feature is classified by its /product (or /note) text through the
annotation map, a two-column table with a header row: raw label, ORF code.
Recognized codes are 1a, 1b, 2, 1ab (one joined polymerase feature) and
1ab_orf (polymerase annotated as two separate features).

OUTPUT:
  <input stem>_orf.txt next to the input file
    Columns: id, 1a, 1b, 2 as start-end (0-based, half-open), NA-NA if absent
"#)]
pub struct Args {
    /// GenBank file with one or more annotated records.
    /// Also accepted as `--input`; single-dash long forms such as `-input` are not.
    #[arg(long = "input_file", visible_alias = "input", value_name = "FILE")]
    pub input_file: PathBuf,

    /// Delimited table mapping annotation labels to ORF codes.
    /// Also accepted as `--orf_map`.
    #[arg(long = "orf_map_file", visible_alias = "orf_map", value_name = "FILE")]
    pub orf_map_file: PathBuf,
}

pub trait ArgCheck {
    fn check(&self) -> Result<(), String>;
}

impl ArgCheck for Args {
    fn check(&self) -> Result<(), String> {
        check_file(&self.input_file, "--input_file")?;
        check_file(&self.orf_map_file, "--orf_map_file")
    }
}

fn check_file(path: &Path, flag: &str) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("{flag}: {} does not exist", path.display()));
    }
    if !path.is_file() {
        return Err(format!("{flag}: {} is not a file", path.display()));
    }
    Ok(())
}
