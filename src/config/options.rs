// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub data: DataOptions,
    pub export: ExportOptions,
}

/// Where the two source tables live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    pub matches_path: PathBuf,
    pub deliveries_path: PathBuf,
}

impl Default for DataOptions {
    fn default() -> Self {
        let dir = PathBuf::from(DEFAULT_DATA_DIR);
        Self {
            matches_path: dir.join(DEFAULT_MATCHES_FILE),
            deliveries_path: dir.join(DEFAULT_DELIVERIES_FILE),
        }
    }
}

impl DataOptions {
    /// Both files inside one directory, default file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            matches_path: dir.join(DEFAULT_MATCHES_FILE),
            deliveries_path: dir.join(DEFAULT_DELIVERIES_FILE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerMetric,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Json];

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Tsv => "TSV",
            ExportFormat::Json => "JSON",
        }
    }

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats; JSON has none.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// SingleFile: `<dir>/<stem>.<ext>`. PerMetric: the directory only.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();

        match self.export_type {
            ExportType::SingleFile => {
                let mut name = self.out_path.file_stem.clone();
                name.push(".");
                name.push(self.format.ext());
                path.push(name);
            }
            ExportType::PerMetric => { /* directory only */ }
        }
        path
    }

    /// Parse user text into dir + stem. A typed extension is ignored; the format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }

        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
            }
            ExportType::PerMetric => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }

    pub fn delimiter(&self) -> Option<u8> {
        self.format.delimiter()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
