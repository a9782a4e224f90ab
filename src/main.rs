//! Command-line entry point for the `spinview` interactive 3D viewport.
//!
//! Parses an optional options-preset path from the first CLI argument and
//! launches the [`Viewer`].

use std::path::Path;

use spinview::{Options, SpinviewError, Viewer};

fn main() -> Result<(), SpinviewError> {
    env_logger::init();

    let mut builder = Viewer::builder();
    if let Some(path) = std::env::args().nth(1) {
        log::info!("loading options preset from {path}");
        builder = builder.with_options(Options::load(Path::new(&path))?);
    }
    builder.build().run()
}
