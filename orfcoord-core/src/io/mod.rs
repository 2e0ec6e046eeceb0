pub mod csv;
pub mod detect;
pub mod genbank;
pub mod table;

pub use self::csv::{read_orf_map, read_orf_map_with, ColumnSel};
pub use genbank::{read_genbank_records, read_genbank_records_from_bytes};
pub use table::{orf_table_path, write_orf_table, write_orf_table_to_path};
