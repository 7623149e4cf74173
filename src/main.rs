use std::path::PathBuf;

use clap::Parser;
use extension_icons::{GenerateOptions, IconManifest, generate_icons};

/// Generate the extension's "T" icon set.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Manifest listing the icons to generate (defaults to the 16/48/128 set)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Output directory, overriding the manifest
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Create the output directory if it does not exist
    #[arg(long)]
    create_dirs: bool,

    /// Re-read each written file and check its dimensions
    #[arg(long)]
    verify: bool,
}

fn run(args: Args) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut manifest = match &args.manifest {
        Some(path) => IconManifest::load(path)?,
        None => IconManifest::default(),
    };
    if let Some(out_dir) = args.out_dir {
        manifest.out_dir = out_dir;
    }

    let mut options = GenerateOptions::from_manifest(&manifest);
    options.create_dirs |= args.create_dirs;
    options.verify = args.verify;

    let targets = manifest.targets();
    let written = generate_icons(&targets, &options)?;
    for target in &targets[..written.len()] {
        println!("Created {}", target);
    }
    println!("Generated {} icon(s) in {}", written.len(), manifest.out_dir.display());
    Ok(written)
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_default_set() {
        let args = Args::try_parse_from(["extension-icons"]).unwrap();
        assert!(args.manifest.is_none());
        assert!(args.out_dir.is_none());
        assert!(!args.create_dirs);
        assert!(!args.verify);
    }

    #[test]
    fn test_run_with_out_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("icons");
        let args = Args::try_parse_from([
            "extension-icons",
            "--out-dir",
            out.to_str().unwrap(),
            "--create-dirs",
            "--verify",
        ])
        .unwrap();

        run(args).unwrap();
        for size in [16, 48, 128] {
            assert!(out.join(format!("icon{}.png", size)).exists());
        }
    }

    #[test]
    fn test_run_reports_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("icons.toml");
        let args =
            Args::try_parse_from(["extension-icons", "-m", manifest.to_str().unwrap()]).unwrap();
        assert!(run(args).is_err());
    }

    #[test]
    fn test_run_with_manifest_writes_next_to_it() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("icons.toml");
        std::fs::write(
            &manifest,
            r#"
            [icons]
            out_dir = "generated"
            create_dirs = true

            [[target]]
            size = 19
            file = "toolbar.png"

            [[target]]
            size = 32
            file = "icon32.png"
            "#,
        )
        .unwrap();

        let args = Args::try_parse_from([
            "extension-icons",
            "--manifest",
            manifest.to_str().unwrap(),
            "--verify",
        ])
        .unwrap();
        let written = run(args).unwrap();

        let out = dir.path().join("generated");
        assert_eq!(written, vec![out.join("toolbar.png"), out.join("icon32.png")]);
        assert!(out.join("toolbar.png").exists());
        assert!(out.join("icon32.png").exists());
    }

    #[test]
    fn test_args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
