use std::path::PathBuf;

use sector_geometry::SectorParams;
use sector_kml::{output_file_name, KmlDocument};
use tracing::info;

use crate::cli::Cli;
use crate::error::CliResult;

/// Parses the arguments, builds the document and writes it.
///
/// All validation happens before the output file is opened. Returns the path
/// of the written file.
pub fn run(cli: &Cli) -> CliResult<PathBuf> {
    let params = SectorParams::parse(&cli.latitude, &cli.longitude, &cli.radius, &cli.divisions)?;
    let doc = KmlDocument::sectored_circle(&params);

    let name = output_file_name(&params);
    let path = match &cli.output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    };

    info!(path = %path.display(), "saving sectored circle");
    doc.save(&path)?;
    Ok(path)
}
