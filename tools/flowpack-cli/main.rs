use clap::{Parser, ValueEnum};
use flowpack::prelude::*;

/// CLI-facing policy selector for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyCli {
    /// One combined package sharing a single payload
    Combined,
    /// One sub-package per subflow node, payload sliced from its wiring
    Sliced,
    /// One sub-package per module-tagged definition, flat payload
    Flat,
}

/// Scaffold publishable packages from flow-based automation definitions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow document JSON file
    flow_path: String,
    /// Destination directory for the produced package tree
    dest: String,

    /// The extraction policy and on-disk layout to use
    #[arg(short, long, value_enum, default_value = "combined")]
    policy: PolicyCli,

    /// Payload encoding name (currently "none" or "AES")
    #[arg(short, long)]
    encoding: Option<String>,

    /// Encryption key, required when --encoding is not "none"
    #[arg(short = 'k', long)]
    encode_key: Option<String>,

    /// Archive the produced package directory into a .tgz
    #[arg(long)]
    tgz: bool,

    /// Run-level package name (required for the sliced and flat layouts)
    #[arg(short, long)]
    name: Option<String>,

    /// Run-level package version for the sliced and flat layouts
    #[arg(long = "package-version")]
    package_version: Option<String>,

    /// Comma-separated fallback keyword list
    #[arg(long)]
    keywords: Option<String>,

    /// Palette category override
    #[arg(long)]
    category: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    println!("Loading flow document from: {}", cli.flow_path);
    let document = FlowDocument::from_file(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load flow document '{}': {}",
            cli.flow_path, e
        ))
    });
    println!("Loaded {} nodes.", document.nodes.len());

    let policy = match cli.policy {
        PolicyCli::Combined => PackagePolicy::Combined,
        PolicyCli::Sliced => PackagePolicy::Sliced,
        PolicyCli::Flat => PackagePolicy::Flat,
    };

    let options = PackageOptions {
        encoding: cli.encoding,
        encode_key: cli.encode_key,
        tgz: cli.tgz,
        name: cli.name,
        version: cli.package_version,
        keywords: cli.keywords.map(|csv| {
            csv.split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect()
        }),
        category: cli.category,
    };

    let packager = Packager::new()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to compile templates: {}", e)));

    println!("Packaging with policy {:?}...", cli.policy);
    let produced = packager
        .package(policy, &document, Path::new(&cli.dest), &options)
        .unwrap_or_else(|e| exit_with_error(&format!("Packaging failed: {}", e)));

    println!("Done: {}", produced.display());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
