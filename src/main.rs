//! varscan-vcf CLI entry point
//!
//! Converts a VarScan2 somatic file to VCF, or a VarScan2 VCF back to the
//! native format. Output goes to stdout.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;
use varscan_vcf::core::DEFAULT_BUFFER_SIZE;
use varscan_vcf::{convert_file, CompatMode, ConvertOptions, ErrorPolicy, VcfLayout};

/// Compatibility mode for legacy converter behavior (CLI enum)
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CompatModeArg {
    /// Default mode: rounded SSC, corrected deletion ALT and tumor DP4
    #[default]
    #[value(name = "improved")]
    Improved,
    /// Strict mode: exactly match the legacy converter (including its quirks)
    #[value(name = "strict")]
    Strict,
}

impl From<CompatModeArg> for CompatMode {
    fn from(arg: CompatModeArg) -> Self {
        match arg {
            CompatModeArg::Improved => CompatMode::Improved,
            CompatModeArg::Strict => CompatMode::Strict,
        }
    }
}

#[derive(Parser)]
#[command(name = "varscan-vcf")]
#[command(about = "Convert VarScan2 somatic output to VCF and back (input format auto-detected)")]
#[command(version)]
#[command(author = "varscan-vcf Contributors")]
struct Cli {
    /// Input file generated by VarScan2 somatic (plain, .gz or .bz2)
    input: PathBuf,

    /// Compatibility mode: 'strict' for legacy-identical output, 'improved' for corrected logic
    #[arg(long = "compat-mode", default_value = "improved")]
    compat_mode: CompatModeArg,

    /// Write the legacy 8-column VCF (CHROM..INFO). By default FORMAT, NORMAL and TUMOR
    /// columns follow INFO so the strand counts survive a conversion back to native
    #[arg(long = "sites-only")]
    sites_only: bool,

    /// Log and skip malformed records instead of stopping at the first one
    #[arg(long = "skip-invalid")]
    skip_invalid: bool,
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            compat: self.compat_mode.into(),
            layout: if self.sites_only {
                VcfLayout::SitesOnly
            } else {
                VcfLayout::WithSamples
            },
            on_error: if self.skip_invalid {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Abort
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    // Log compatibility mode
    match cli.compat_mode {
        CompatModeArg::Strict => eprintln!("Compatibility mode: strict (legacy-identical)"),
        CompatModeArg::Improved => {} // Don't log for default mode
    }

    let options = cli.options();
    let stdout = io::stdout();
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, stdout.lock());

    let stats = convert_file(&cli.input, &mut writer, &options)
        .with_context(|| format!("Failed to convert {:?}", cli.input))?;

    let direction = match stats.input_format {
        Some(format) => format!("{} -> {}", format, format.target()),
        None => "empty input".to_string(),
    };

    eprintln!("\n=== Conversion Statistics ===");
    eprintln!("Direction:       {}", direction);
    eprintln!("Total records:   {}", stats.total);
    eprintln!("Successful:      {}", stats.success);
    eprintln!("Failed:          {}", stats.failed);
    eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}
