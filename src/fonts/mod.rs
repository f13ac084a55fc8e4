//! Font discovery for the directory renderer.
//!
//! `genpdf` needs TrueType files to measure and embed text.  [`FontSearch`] looks for the
//! bundled Roboto family first and, when it is not installed, falls back to common system
//! families (Liberation Sans, DejaVu Sans, Arial).

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, FontData, FontFamily};
use log::{debug, warn};

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Roboto";

/// Environment variable naming a directory that holds the bundled family.
pub const FONTS_DIR_ENV: &str = "PROVIDER_FIXTURE_FONTS_DIR";

/// Environment variable overriding the system font root used for fallbacks.
pub const SYSTEM_FONTS_DIR_ENV: &str = "PROVIDER_FIXTURE_SYSTEM_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

struct SystemFamily {
    name: &'static str,
    subdirs: &'static [&'static str],
    regular: &'static str,
    bold: &'static str,
    italic: &'static str,
    bold_italic: &'static str,
}

impl SystemFamily {
    fn files(&self) -> [(&'static str, &'static str); 4] {
        [
            (self.regular, "regular"),
            (self.bold, "bold"),
            (self.italic, "italic"),
            (self.bold_italic, "bold italic"),
        ]
    }

    fn is_complete_in(&self, directory: &Path) -> bool {
        self.files()
            .iter()
            .all(|(file, _)| directory.join(file).is_file())
    }

    fn load(&self, directory: &Path) -> Result<FontFamily<FontData>, Error> {
        Ok(FontFamily {
            regular: load_font(directory, self.regular, "regular")?,
            bold: load_font(directory, self.bold, "bold")?,
            italic: load_font(directory, self.italic, "italic")?,
            bold_italic: load_font(directory, self.bold_italic, "bold italic")?,
        })
    }
}

const SYSTEM_FAMILIES: &[SystemFamily] = &[
    SystemFamily {
        name: "Liberation Sans",
        subdirs: &[
            "truetype/liberation",
            "truetype/liberation2",
            "liberation",
            "liberation-sans",
        ],
        regular: "LiberationSans-Regular.ttf",
        bold: "LiberationSans-Bold.ttf",
        italic: "LiberationSans-Italic.ttf",
        bold_italic: "LiberationSans-BoldItalic.ttf",
    },
    SystemFamily {
        name: "DejaVu Sans",
        subdirs: &["truetype/dejavu", "dejavu", "dejavu-sans-fonts"],
        regular: "DejaVuSans.ttf",
        bold: "DejaVuSans-Bold.ttf",
        italic: "DejaVuSans-Oblique.ttf",
        bold_italic: "DejaVuSans-BoldOblique.ttf",
    },
    SystemFamily {
        name: "Arial",
        subdirs: &[""],
        regular: "arial.ttf",
        bold: "arialbd.ttf",
        italic: "ariali.ttf",
        bold_italic: "arialbi.ttf",
    },
];

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn missing_font_files(path: &Path) -> Vec<PathBuf> {
    FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn load_font(directory: &Path, file: &str, style: &str) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::Other
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!(
                "Failed to load {} font at {}: {}",
                style,
                path.display(),
                err
            ),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn system_font_roots() -> Vec<PathBuf> {
    if let Some(path) = env_path(SYSTEM_FONTS_DIR_ENV) {
        return vec![path];
    }

    let mut roots = Vec::new();

    #[cfg(windows)]
    {
        for var in ["WINDIR", "SystemRoot"] {
            if let Some(root) = env_path(var) {
                roots.push(root.join("Fonts"));
            }
        }
    }

    #[cfg(not(windows))]
    {
        for root in ["/usr/share/fonts", "/usr/local/share/fonts"] {
            roots.push(PathBuf::from(root));
        }
    }

    roots
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}

/// Ordered set of places to look for a usable font family.
#[derive(Clone, Debug)]
pub struct FontSearch {
    directory: Option<PathBuf>,
    system_fallback: bool,
}

impl Default for FontSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSearch {
    /// Searches the default locations with system fallbacks enabled.
    pub fn new() -> Self {
        Self {
            directory: None,
            system_fallback: true,
        }
    }

    /// Checks `directory` before every other location.
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Enables or disables the system font fallback.
    pub fn with_system_fallback(mut self, enabled: bool) -> Self {
        self.system_fallback = enabled;
        self
    }

    /// Directories searched for the bundled family, in priority order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        let mut push = |candidate: PathBuf| {
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        };

        if let Some(directory) = &self.directory {
            push(directory.clone());
        }

        if let Some(path) = env_path(FONTS_DIR_ENV) {
            push(path);
        }

        if let Ok(current_exe) = env::current_exe() {
            if let Some(bin_dir) = current_exe.parent() {
                push(bin_dir.join("assets/fonts"));
            }
        }

        push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"));

        candidates
    }

    fn resolve_bundled_directory(&self) -> Result<PathBuf, Error> {
        let mut attempts = Vec::new();

        for candidate in self.candidates() {
            let exists = candidate.is_dir();
            let missing = missing_font_files(&candidate);

            if exists && missing.is_empty() {
                return Ok(candidate);
            }

            let reason = if !exists {
                "directory missing".to_owned()
            } else {
                let missing_list = missing
                    .iter()
                    .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("missing files [{}]", missing_list)
            };

            attempts.push(format!("{} ({})", candidate.display(), reason));
        }

        Err(Error::new(
            format!(
                "Unable to locate the {} font family. Checked: {}. Set {} to a directory containing {}.",
                DEFAULT_FONT_FAMILY_NAME,
                attempts.join(", "),
                FONTS_DIR_ENV,
                FONT_FILES.join(", ")
            ),
            io::Error::new(io::ErrorKind::NotFound, "bundled fonts directory not found"),
        ))
    }

    fn load_bundled_family(&self) -> Result<FontFamily<FontData>, Error> {
        let directory = self.resolve_bundled_directory()?;
        debug!("Loading {} fonts from {}", DEFAULT_FONT_FAMILY_NAME, directory.display());

        fonts::from_files(&directory, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
            Error::new(
                format!(
                    "Failed to load font family '{}' from {}: {}",
                    DEFAULT_FONT_FAMILY_NAME,
                    directory.display(),
                    err
                ),
                io::Error::new(io::ErrorKind::Other, err.to_string()),
            )
        })
    }

    fn system_family_location(&self) -> Option<(&'static SystemFamily, PathBuf)> {
        let roots = system_font_roots();
        SYSTEM_FAMILIES.iter().find_map(|family| {
            roots
                .iter()
                .flat_map(|root| family.subdirs.iter().map(move |subdir| root.join(subdir)))
                .find(|directory| family.is_complete_in(directory))
                .map(|directory| (family, directory))
        })
    }

    fn load_system_family(&self) -> Result<FontFamily<FontData>, Error> {
        let (family, directory) = self.system_family_location().ok_or_else(|| {
            Error::new(
                "No fallback system font family found",
                io::Error::new(io::ErrorKind::NotFound, "system fonts not found"),
            )
        })?;
        warn!(
            "Using system font family '{}' from {}",
            family.name,
            directory.display()
        );
        family.load(&directory)
    }

    /// Loads the first available font family.
    pub fn load_family(&self) -> Result<FontFamily<FontData>, Error> {
        match self.load_bundled_family() {
            Ok(family) => Ok(family),
            Err(err) if self.system_fallback && fonts_missing(&err) => {
                match self.load_system_family() {
                    Ok(family) => {
                        warn!("Bundled fonts unavailable ({}); fell back to system fonts.", err);
                        Ok(family)
                    }
                    Err(fallback_err) => Err(Error::new(
                        format!(
                            "{}; system fallback failed: {}",
                            err, fallback_err
                        ),
                        io::Error::new(io::ErrorKind::NotFound, "no usable fonts available"),
                    )),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Indicates whether [`FontSearch::load_family`] can find a complete family.
    pub fn fonts_available(&self) -> bool {
        self.resolve_bundled_directory().is_ok()
            || (self.system_fallback && self.system_family_location().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::fs;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    static FONT_ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    /// Points both font environment variables somewhere else for the guard's lifetime.
    struct FontEnvGuard {
        original_fonts_dir: Option<OsString>,
        original_system_dir: Option<OsString>,
        lock: Option<MutexGuard<'static, ()>>,
    }

    impl FontEnvGuard {
        fn set(fonts_dir: Option<&Path>, system_dir: Option<&Path>) -> Self {
            let lock = FONT_ENV_LOCK
                .get_or_init(|| Mutex::new(()))
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let guard = Self {
                original_fonts_dir: env::var_os(FONTS_DIR_ENV),
                original_system_dir: env::var_os(SYSTEM_FONTS_DIR_ENV),
                lock: Some(lock),
            };
            apply(FONTS_DIR_ENV, fonts_dir.map(|path| path.as_os_str().to_owned()));
            apply(SYSTEM_FONTS_DIR_ENV, system_dir.map(|path| path.as_os_str().to_owned()));
            guard
        }
    }

    impl Drop for FontEnvGuard {
        fn drop(&mut self) {
            apply(FONTS_DIR_ENV, self.original_fonts_dir.take());
            apply(SYSTEM_FONTS_DIR_ENV, self.original_system_dir.take());
            self.lock.take();
        }
    }

    fn apply(var: &str, value: Option<OsString>) {
        match value {
            Some(value) => env::set_var(var, value),
            None => env::remove_var(var),
        }
    }

    fn write_stub_family(root: &Path, family: &SystemFamily) -> PathBuf {
        let directory = root.join(family.subdirs[0]);
        fs::create_dir_all(&directory).expect("create family dir");
        for (file, _) in family.files() {
            fs::write(directory.join(file), b"").expect("write stub");
        }
        directory
    }

    #[test]
    fn explicit_directory_is_searched_first() {
        let search = FontSearch::new().with_directory("/opt/fixture-fonts");
        let candidates = search.candidates();
        assert_eq!(candidates[0], PathBuf::from("/opt/fixture-fonts"));
        assert!(candidates
            .last()
            .expect("manifest candidate")
            .ends_with("assets/fonts"));
    }

    #[test]
    fn candidates_are_deduplicated() {
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
        let search = FontSearch::new().with_directory(&manifest);
        let occurrences = search
            .candidates()
            .iter()
            .filter(|candidate| **candidate == manifest)
            .count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn missing_files_are_listed() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("Roboto-Regular.ttf"), b"").expect("write stub");
        let missing = missing_font_files(dir.path());
        assert_eq!(missing.len(), 3);
        assert!(missing.iter().all(|path| path.starts_with(dir.path())));
    }

    #[test]
    fn system_family_requires_all_styles() {
        let dir = tempfile::tempdir().expect("temp dir");
        let family = &SYSTEM_FAMILIES[0];
        for (file, _) in family.files().iter().take(3) {
            std::fs::write(dir.path().join(file), b"").expect("write stub");
        }
        assert!(!family.is_complete_in(dir.path()));
        std::fs::write(dir.path().join(family.bold_italic), b"").expect("write stub");
        assert!(family.is_complete_in(dir.path()));
    }

    #[test]
    fn unreadable_font_reports_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_font(dir.path(), "absent.ttf", "regular").unwrap_err();
        assert!(fonts_missing(&err));
    }

    #[test]
    fn env_directory_follows_explicit_directory() {
        let fonts = tempfile::tempdir().expect("temp dir");
        let system = tempfile::tempdir().expect("temp dir");
        let _guard = FontEnvGuard::set(Some(fonts.path()), Some(system.path()));

        let candidates = FontSearch::new()
            .with_directory("/opt/fixture-fonts")
            .candidates();
        assert_eq!(candidates[0], PathBuf::from("/opt/fixture-fonts"));
        assert_eq!(candidates[1], fonts.path());
    }

    #[test]
    fn system_override_replaces_default_roots() {
        let system = tempfile::tempdir().expect("temp dir");
        let _guard = FontEnvGuard::set(None, Some(system.path()));
        assert_eq!(system_font_roots(), [system.path().to_path_buf()]);

        let dejavu = &SYSTEM_FAMILIES[1];
        let directory = write_stub_family(system.path(), dejavu);
        let (family, found) = FontSearch::new()
            .system_family_location()
            .expect("stub family located");
        assert_eq!(family.name, "DejaVu Sans");
        assert_eq!(found, directory);
    }

    #[test]
    fn fallback_loads_system_family_when_bundled_fonts_are_missing() {
        let installed = {
            let _guard = FontEnvGuard::set(None, None);
            FontSearch::new().system_family_location()
        };
        let Some((family, source)) = installed else {
            eprintln!("Skipping fallback load: no system font family installed");
            return;
        };

        let scratch = tempfile::tempdir().expect("temp dir");
        let missing = scratch.path().join("missing");
        let system = scratch.path().join("system");
        let target = system.join(family.subdirs[0]);
        fs::create_dir_all(&target).expect("create family dir");
        for (file, _) in family.files() {
            fs::copy(source.join(file), target.join(file)).expect("copy system font");
        }

        let _guard = FontEnvGuard::set(Some(&missing), Some(&system));
        let search = FontSearch::new().with_directory(&missing);
        if search.resolve_bundled_directory().is_ok() {
            eprintln!("Skipping fallback load: bundled fonts are installed");
            return;
        }
        assert!(search.fonts_available());
        search.load_family().expect("system family loads");
    }

    #[test]
    fn fallback_failure_names_both_attempts() {
        let scratch = tempfile::tempdir().expect("temp dir");
        let missing = scratch.path().join("missing");
        let _guard = FontEnvGuard::set(Some(&missing), Some(scratch.path()));

        let search = FontSearch::new().with_directory(&missing);
        if search.resolve_bundled_directory().is_ok() {
            eprintln!("Skipping fallback failure: bundled fonts are installed");
            return;
        }
        assert!(!search.fonts_available());

        let err = search.load_family().err().expect("no fonts available");
        let message = err.to_string();
        assert!(message.contains("Unable to locate the Roboto font family"), "{message}");
        assert!(message.contains("system fallback failed"), "{message}");
        assert!(fonts_missing(&err));
    }

    #[test]
    fn disabled_fallback_ignores_system_fonts() {
        let scratch = tempfile::tempdir().expect("temp dir");
        let missing = scratch.path().join("missing");
        write_stub_family(scratch.path(), &SYSTEM_FAMILIES[1]);
        let _guard = FontEnvGuard::set(Some(&missing), Some(scratch.path()));

        let search = FontSearch::new()
            .with_directory(&missing)
            .with_system_fallback(false);
        if search.resolve_bundled_directory().is_ok() {
            eprintln!("Skipping disabled fallback: bundled fonts are installed");
            return;
        }
        assert!(!search.fonts_available());

        let err = search.load_family().err().expect("fallback disabled");
        assert!(!err.to_string().contains("system fallback"));
    }
}
