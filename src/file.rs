// src/file.rs
//! Export of report sections to CSV / TSV / JSON, and the same text for the
//! clipboard.
//!
//! Delimited output is flexible-width: each section starts with a one-cell
//! title row, then its header row (optional) and data rows, with an empty
//! record between sections.

use std::{
    collections::HashMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::config::options::{ ExportOptions, ExportType };
use crate::error::ExportError;
use crate::report::Section;

/// Write `sections` according to `export`. Returns every path written.
pub fn export_sections(export: &ExportOptions, sections: &[&Section]) -> Result<Vec<PathBuf>, ExportError> {
    if sections.is_empty() {
        return Err(ExportError::Empty);
    }
    match export.export_type {
        ExportType::SingleFile => write_export_single(export, sections).map(|p| vec![p]),
        ExportType::PerMetric => write_export_per_metric(export, sections),
    }
}

/// All sections into the one file named by `export.out_path()`.
pub fn write_export_single(export: &ExportOptions, sections: &[&Section]) -> Result<PathBuf, ExportError> {
    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(export, sections)?;
    fs::write(&path, contents)?;
    logf!("Export: wrote {} section(s) to {}", sections.len(), path.display());
    Ok(path)
}

/// One file per section inside the directory `export.out_path()`.
pub fn write_export_per_metric(export: &ExportOptions, sections: &[&Section]) -> Result<Vec<PathBuf>, ExportError> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(sections.len());
    let ext = export.format.ext();

    for (i, section) in sections.iter().enumerate() {
        let stem = sanitize_file_stem(&format!("{} {}", section.id, section.title), i);
        let path = resolve_unique_filename(&outdir, &stem, &mut seen, ext);
        let contents = to_export_string(export, std::slice::from_ref(section))?;
        fs::write(&path, contents)?;
        written.push(path);
    }

    logf!("Export: wrote {} file(s) to {}", written.len(), outdir.display());
    Ok(written)
}

/// Rendered export text (also what Copy puts on the clipboard).
pub fn to_export_string(export: &ExportOptions, sections: &[&Section]) -> Result<String, ExportError> {
    let bytes = match export.delimiter() {
        Some(delim) => delimited_bytes(sections, delim, export.include_headers)?,
        None => json_bytes(sections, export.include_headers)?,
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn delimited_bytes(sections: &[&Section], delim: u8, include_headers: bool) -> Result<Vec<u8>, ExportError> {
    let mut builder = csv::WriterBuilder::new();
    builder.flexible(true).delimiter(delim);
    let mut w = builder.from_writer(Vec::new());

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            // bare newline; an empty csv record would be written as `""`
            w.flush()?;
            let mut buf = w.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
            buf.push(b'\n');
            w = builder.from_writer(buf);
        }
        w.write_record([section.heading()])?;
        if include_headers && !section.table.headers.is_empty() {
            w.write_record(&section.table.headers)?;
        }
        for row in &section.table.rows {
            w.write_record(row)?;
        }
    }
    w.flush()?;
    w.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

#[derive(Serialize)]
struct JsonSection<'a> {
    id: &'a str,
    title: &'a str,
    summary: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<&'a [String]>,
    rows: &'a [Vec<String>],
}

fn json_bytes(sections: &[&Section], include_headers: bool) -> Result<Vec<u8>, ExportError> {
    let out: Vec<JsonSection> = sections
        .iter()
        .map(|s| JsonSection {
            id: s.id,
            title: s.title,
            summary: &s.summary,
            headers: include_headers.then_some(s.table.headers.as_slice()),
            rows: &s.table.rows,
        })
        .collect();
    let mut bytes = serde_json::to_vec_pretty(&out)?;
    bytes.write_all(b"\n")?;
    Ok(bytes)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// File-system friendly stem: ASCII alphanumerics, `.`, `-`, `_`; whitespace
/// runs become one `_`. Falls back to `section_<n>`.
pub fn sanitize_file_stem(name: &str, n: usize) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
            out.push(ch);
            last_us = false;
        } else if ch.is_whitespace() || ch == '_' {
            if !last_us {
                out.push('_');
                last_us = true;
            }
        }
    }
    let out = out.trim_matches(|c: char| c == '_' || c == '.').to_string();
    if out.is_empty() { format!("section_{n}") } else { out }
}

/// Duplicate handling **only within this run**
pub fn resolve_unique_filename(
    dir: &Path,
    stem: &str,
    seen_names: &mut HashMap<String, usize>,
    ext: &str,
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
