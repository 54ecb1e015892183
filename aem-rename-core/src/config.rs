use std::path::{Path, PathBuf};

/// Prefix prepended to every renamed file unless the caller picks another.
pub const DEFAULT_PREFIX: &str = "sps-his-";

/// Output folder, relative to the working directory.
pub const DEFAULT_OUTPUT_FOLDER: &str = "renamed";

pub const DEFAULT_LOG_FILE: &str = "rename.log";

/// Options for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// File or folder to process. Must exist.
    pub input: PathBuf,
    /// Folder the renamed copies are written to. Created if missing.
    pub output_folder: PathBuf,
    /// Prepended verbatim to every normalized name.
    pub prefix: String,
}

impl RenameOptions {
    pub fn new(input: impl Into<PathBuf>, output_folder: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_folder: output_folder.into(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// Relative output folders hang off `base` (normally the working directory);
/// absolute ones are used as given.
pub fn resolve_output_folder(base: &Path, folder: &Path) -> PathBuf {
    if folder.is_absolute() {
        folder.to_path_buf()
    } else {
        base.join(folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenameOptions::new("photos", "renamed");
        assert_eq!(options.prefix, "sps-his-");
        assert_eq!(options.input, PathBuf::from("photos"));
        assert_eq!(options.output_folder, PathBuf::from(DEFAULT_OUTPUT_FOLDER));
    }

    #[test]
    fn test_with_prefix() {
        let options = RenameOptions::new("a", "b").with_prefix("");
        assert_eq!(options.prefix, "");
    }

    #[test]
    fn test_resolve_relative_output_folder() {
        let base = Path::new("/work");
        assert_eq!(
            resolve_output_folder(base, Path::new("renamed")),
            PathBuf::from("/work/renamed")
        );
    }

    #[test]
    fn test_resolve_absolute_output_folder() {
        let base = std::env::temp_dir();
        let absolute = base.join("elsewhere");
        assert_eq!(resolve_output_folder(Path::new("ignored"), &absolute), absolute);
    }
}
