use std::ffi::OsString;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Trailing characters of a base file name that already separate it from the suffix.
pub const JOIN_CHARS: [char; 4] = ['_', ' ', '-', '|'];

const DEFAULT_JOIN: char = '_';

/// Appends `name` under `directory`. Unlike `Path::join`, a name starting with a
/// separator never replaces the directory.
fn child_of(directory: &Path, name: &str) -> PathBuf {
    let name = name.trim_start_matches(['/', MAIN_SEPARATOR]);
    let mut path = OsString::from(directory.as_os_str());
    if !path.is_empty() && !path.to_string_lossy().ends_with(['/', MAIN_SEPARATOR]) {
        path.push(MAIN_SEPARATOR.to_string());
    }
    path.push(name);
    PathBuf::from(path)
}

/// Where exported files go and how they are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub directory: PathBuf,
    pub base_file_name: Option<String>,
}

impl ExportTarget {
    pub fn new(directory: impl Into<PathBuf>, base_file_name: Option<String>) -> Self {
        Self {
            directory: directory.into(),
            base_file_name,
        }
    }

    pub fn make_output_file(&self, suffix: &str) -> PathBuf {
        child_of(&self.directory, &self.file_name("", suffix))
    }

    /// `prefix`, then the base name (if any) and `suffix`, as a single path segment.
    fn file_name(&self, prefix: &str, suffix: &str) -> String {
        match self.base_file_name.as_deref() {
            Some(base) if !base.is_empty() => {
                if base.ends_with(JOIN_CHARS) {
                    format!("{prefix}{base}{suffix}")
                } else {
                    format!("{prefix}{base}{DEFAULT_JOIN}{suffix}")
                }
            }
            _ => format!("{prefix}{suffix}"),
        }
    }
}

/// Builds output paths for every source of a run.
///
/// When several sources are exported to the same directory, each file name is
/// prefixed by its source name so the outputs do not collide.
#[derive(Debug, Clone)]
pub struct OutputFileSupplier {
    target: ExportTarget,
    multiple_sources: bool,
    add_source_ext: bool,
}

impl OutputFileSupplier {
    pub fn new(target: ExportTarget, multiple_sources: bool, add_source_ext: bool) -> Self {
        Self {
            target,
            multiple_sources,
            add_source_ext,
        }
    }

    pub fn target(&self) -> &ExportTarget {
        &self.target
    }

    pub fn make_output_file(&self, source: &str, suffix: &str) -> PathBuf {
        let prefix = if self.multiple_sources {
            self.source_prefix(source)
        } else {
            String::new()
        };
        let file = child_of(&self.target.directory, &self.target.file_name(&prefix, suffix));
        tracing::trace!("Make output file name: {}", file.display());
        file
    }

    fn source_prefix(&self, source: &str) -> String {
        let path = Path::new(source);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.add_source_ext && !ext.is_empty() {
            format!("{stem}-{ext}{DEFAULT_JOIN}")
        } else {
            format!("{stem}{DEFAULT_JOIN}")
        }
    }
}
