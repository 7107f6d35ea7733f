use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::sync::Arc;

use i18n_resource_core::cli::Args;
use i18n_resource_core::logging::{self, Verbosity};
use i18n_resource_core::manifest::{ResourceManifest, MANIFEST_FILENAME};
use i18n_resource_core::{Registry, Request};

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate().context("Invalid arguments")?;
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    let manifest_path = args.root.join(MANIFEST_FILENAME);
    let manifest = if manifest_path.is_file() {
        ResourceManifest::load(&manifest_path)?
    } else {
        ResourceManifest::scan_layout(&args.root, &args.default_language)?
    };

    let Some(name) = args.name.as_deref() else {
        for name in manifest.resource_names() {
            println!("{name}");
        }
        return Ok(());
    };

    let registry = Arc::new(Registry::standard());
    let resource = manifest.build(name, registry)?;

    let mut request = Request::new();
    if let Some(header) = &args.accept_language {
        request = request.with_header("Accept-Language", header.clone());
    }

    if args.head {
        let response = resource.head(&request)?;
        println!("status: {}", response.status());
        for (header, value) in response.headers().iter() {
            println!("{header}: {value}");
        }
        return Ok(());
    }

    let response = resource.get(&request)?;
    tracing::info!(
        language = response.header("content-language").unwrap_or("-"),
        content_type = response.header("content-type").unwrap_or("-"),
        "resolved resource"
    );

    match &args.output_file {
        Some(path) => fs::write(path, response.body())
            .with_context(|| format!("Failed to write output: {}", path.display()))?,
        None => std::io::stdout()
            .write_all(response.body())
            .context("Failed to write to stdout")?,
    }

    Ok(())
}
