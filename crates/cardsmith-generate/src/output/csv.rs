use std::io::Write;

use serde::Serialize;

use cardsmith_core::{CardRecord, IdentityRecord};

/// Write identities as CSV with a header row; returns the bytes written.
pub fn write_identities_csv<W: Write>(
    writer: W,
    identities: &[IdentityRecord],
) -> Result<u64, csv::Error> {
    write_csv(writer, identities)
}

/// Write cards as CSV (`number,expiry_month,expiry_year,security_code,network`).
pub fn write_cards_csv<W: Write>(writer: W, cards: &[CardRecord]) -> Result<u64, csv::Error> {
    write_csv(writer, cards)
}

fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<u64, csv::Error> {
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(counting);

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
