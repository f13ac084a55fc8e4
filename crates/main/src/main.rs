use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use provider_fixture::{FixtureConfig, DEFAULT_OUTPUT_FILE};

/// Writes the sample provider directory PDF used to exercise the OCR upload flow.
///
/// Fonts are looked up in `--fonts-dir`, then `PROVIDER_FIXTURE_FONTS_DIR`, then
/// `assets/fonts` next to the binary or the library crate, and finally common
/// system font directories unless `--no-system-fonts` is given.
#[derive(Parser)]
#[command(author, version, about = "Generate the provider directory test PDF")]
struct Cli {
    /// Path of the PDF to write.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Directory containing the Roboto font family.
    #[arg(long, value_name = "DIR")]
    fonts_dir: Option<PathBuf>,

    /// Fail instead of falling back to installed system fonts.
    #[arg(long)]
    no_system_fonts: bool,
}

impl From<Cli> for FixtureConfig {
    fn from(cli: Cli) -> Self {
        FixtureConfig {
            output: cli.output,
            fonts_dir: cli.fonts_dir,
            system_fonts: !cli.no_system_fonts,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = FixtureConfig::from(Cli::parse());

    match provider_fixture::generate(&config) {
        Ok(report) => {
            log::debug!("Fixture size: {} bytes", report.byte_len);
            for line in report.status_lines() {
                println!("{}", line);
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(&err);
            std::process::exit(1);
        }
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_reproduce_fixture_filename() {
        let config = FixtureConfig::from(Cli::parse_from(["create-test-pdf"]));
        assert_eq!(config.output, PathBuf::from("test_providers.pdf"));
        assert!(config.fonts_dir.is_none());
        assert!(config.system_fonts);
    }

    #[test]
    fn flags_override_output_and_fonts() {
        let cli = Cli::parse_from([
            "create-test-pdf",
            "-o",
            "out/providers.pdf",
            "--fonts-dir",
            "/opt/fonts",
        ]);
        let config = FixtureConfig::from(cli);
        assert_eq!(config.output, PathBuf::from("out/providers.pdf"));
        assert_eq!(config.fonts_dir, Some(PathBuf::from("/opt/fonts")));
        assert!(config.system_fonts);
    }

    #[test]
    fn no_system_fonts_flag_disables_fallback() {
        let cli = Cli::parse_from(["create-test-pdf", "--no-system-fonts"]);
        let config = FixtureConfig::from(cli);
        assert!(!config.system_fonts);
    }
}
