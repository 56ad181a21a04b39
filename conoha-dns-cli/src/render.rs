//! Table and CSV output

use std::io::{self, Write};

use conoha_dns_core::short_id;
use conoha_dns_provider::{Domain, Record};
use unicode_width::UnicodeWidthStr;

use crate::args::OutputFormat;

/// Spaces between table columns.
const COLUMN_GAP: usize = 3;
/// Left margin of every table line.
const INDENT: &str = "  ";

const DOMAIN_HEADERS: [&str; 2] = ["ID", "Name"];
const RECORD_CSV_HEADERS: [&str; 5] = ["ID", "Name", "Type", "Data", "TTL"];
const RECORD_TABLE_HEADERS: [&str; 5] = ["ID", "Name", "Type", "TTL", "Data"];

fn domain_row(domain: &Domain) -> Vec<String> {
    vec![short_id(&domain.id), domain.name.clone()]
}

fn ttl_cell(ttl: Option<u32>) -> String {
    ttl.map(|t| t.to_string()).unwrap_or_default()
}

/// Write a domain listing. An empty listing prints a note instead; in CSV
/// mode the note goes to `notes` so `out` stays machine-readable.
pub fn write_domains<W: Write, N: Write>(
    out: &mut W,
    notes: &mut N,
    format: OutputFormat,
    domains: &[Domain],
) -> io::Result<()> {
    if domains.is_empty() {
        return write_empty_note(out, notes, format, "(no domains)");
    }

    let rows: Vec<Vec<String>> = domains.iter().map(domain_row).collect();
    match format {
        OutputFormat::Table => write_table(out, &DOMAIN_HEADERS, &rows),
        OutputFormat::Csv => write_csv(out, &DOMAIN_HEADERS, &rows),
    }
}

/// Write a record listing. Table columns put `Data` last so long values
/// never push the other columns out of line.
pub fn write_records<W: Write, N: Write>(
    out: &mut W,
    notes: &mut N,
    format: OutputFormat,
    records: &[Record],
) -> io::Result<()> {
    if records.is_empty() {
        return write_empty_note(out, notes, format, "(no records)");
    }

    match format {
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = records
                .iter()
                .map(|r| {
                    vec![
                        short_id(&r.id),
                        r.name.clone(),
                        r.record_type.clone(),
                        ttl_cell(r.ttl),
                        r.data.clone(),
                    ]
                })
                .collect();
            write_table(out, &RECORD_TABLE_HEADERS, &rows)
        }
        OutputFormat::Csv => {
            let rows: Vec<Vec<String>> = records
                .iter()
                .map(|r| {
                    vec![
                        short_id(&r.id),
                        r.name.clone(),
                        r.record_type.clone(),
                        r.data.clone(),
                        ttl_cell(r.ttl),
                    ]
                })
                .collect();
            write_csv(out, &RECORD_CSV_HEADERS, &rows)
        }
    }
}

fn write_empty_note<W: Write, N: Write>(
    out: &mut W,
    notes: &mut N,
    format: OutputFormat,
    note: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => writeln!(out, "{INDENT}{note}"),
        OutputFormat::Csv => writeln!(notes, "{INDENT}{note}"),
    }
}

/// Pad every column but the last to its widest cell (display width, so
/// CJK text lines up), with a dashed rule under the header.
fn write_table<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    write_table_line(out, &widths, &header_cells)?;
    write_table_line(out, &widths, &rule)?;
    for row in rows {
        write_table_line(out, &widths, row)?;
    }
    Ok(())
}

fn write_table_line<W: Write>(out: &mut W, widths: &[usize], cells: &[String]) -> io::Result<()> {
    let mut line = String::from(INDENT);
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i < last {
            let padding = width.saturating_sub(cell.width()) + COLUMN_GAP;
            line.push_str(&" ".repeat(padding));
        }
    }
    writeln!(out, "{}", line.trim_end())
}

fn write_csv<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()
}

/// One-line summary of a domain returned by a mutation.
pub fn describe_domain(domain: &Domain) -> String {
    format!("ID: {}, Name: {}", short_id(&domain.id), domain.name)
}

/// One-line summary of a record returned by a mutation.
pub fn describe_record(record: &Record) -> String {
    let mut line = format!(
        "ID: {}, Name: {}, Type: {}, Data: {}",
        short_id(&record.id),
        record.name,
        record.record_type,
        record.data
    );
    if let Some(ttl) = record.ttl {
        line.push_str(&format!(", TTL: {ttl}"));
    }
    line
}
