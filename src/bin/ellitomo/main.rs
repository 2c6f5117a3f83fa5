mod cli;
use cli::*;

fn main() -> Result<(), Box<dyn Error>> {

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let (shape, resolution) = args.shape_and_resolution()?;
    let Resolution { num_theta, num_t, num_phi, num_xy } = resolution;
    info!("{shape}");
    info!("angles: {num_theta}, ellipses: {num_t}, partitions: {num_phi}, pixels per axis: {}", num_xy + 1);
    info!("{} line integrals to evaluate", group_digits((num_theta + 1) * (num_t + 1)));

    let mut progress = Progress::new();

    let bar = ProgressBar::new(0);
    bar.set_style(ProgressStyle::default_bar()
                  .template("{msg}\n[{elapsed_precise}] {wide_bar} {pos}/{len} ({eta_precise})")?);
    let on_step = |_: Step| bar.inc(1);
    let reconstruction = Reconstruction::new(shape, resolution).with_progress(&on_step);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.n_threads).build()?;
    info!("Using up to {} threads.", args.n_threads);

    progress.start("Building sampling grid");
    let grid = reconstruction.sampling_grid()?;
    progress.done();

    bar.set_length(reconstruction.n_steps() as u64);
    bar.set_message("Projecting");
    let sinogram = pool.install(|| reconstruction.acquire(&grid));
    bar.set_message("Back projecting");
    let image    = pool.install(|| reconstruction.back_project(&grid, &sinogram));
    bar.finish_and_clear();
    let image = image?;
    progress.done_with_message("Projected and reconstructed");

    if let Some(path) = &args.sinogram {
        create_parent_dir(path)?;
        let mut out = BufWriter::new(File::create(path)?);
        write_sinogram(&sinogram, &mut out)?;
        out.flush()?;
        progress.done_with_message(&format!("Wrote projection data to {path:?}"));
    }

    let outfile = args.output.clone().unwrap_or_else(|| "reconstruction.raw".into());
    create_parent_dir(&outfile)?;
    image.write_to_raw_file(&outfile)?;
    let (rows, cols) = image.dims();
    progress.done_with_message(&format!("Wrote {rows} x {cols} image to {outfile:?}"));
    info!("intensity range: [{:.4}, {:.4}], extent {:?}", image.min(), image.max(), image.extent());

    if args.print {
        write_rows(&image, &mut std::io::stdout().lock())?;
    }
    Ok(())
}

fn create_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

// ----- Imports -----------------------------------------------------------------------------------------
use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use ellitomo::{
    Reconstruction, Resolution, Step,
    io::text::{write_rows, write_sinogram},
    utils::{group_digits, timing::Progress},
};
