pub mod error;

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use mailsift_core::Table;

use crate::error::{CsvError, Result};

pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    read_table_from(file)
}

/// Decodes a headed CSV stream into a table. The first record becomes the
/// column schema; rows must match its width (ragged input is a decode
/// error, not a per-row skip).
pub fn read_table_from<R: Read>(reader: R) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers().map_err(CsvError::Decode)?.clone();
    if headers.is_empty() {
        return Err(CsvError::EmptyInput);
    }

    let mut table = Table::new(headers.iter().map(str::to_string).collect());
    for record in reader.records() {
        let record = record.map_err(CsvError::Decode)?;
        table.push_row(record.iter().map(str::to_string).collect());
    }
    Ok(table)
}

pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let file = File::create(path)?;
    write_table_to(BufWriter::new(file), table)
}

pub fn write_table_to<W: Write>(writer: W, table: &Table) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer
        .write_record(&table.columns)
        .map_err(CsvError::Encode)?;
    for row in &table.rows {
        writer.write_record(row).map_err(CsvError::Encode)?;
    }
    writer.flush()?;
    Ok(())
}
