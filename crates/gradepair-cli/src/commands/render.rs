use std::path::{Path, PathBuf};

use gradepair_core::{Dataset, DatasetReport, Layout, Result, SvgSurface, run_all};

pub struct RenderCommandConfig<'a> {
    pub dataset: &'a str,
    pub pair_files: &'a [PathBuf],
    pub out_dir: &'a Path,
    pub output_path: Option<&'a Path>,
}

pub fn run(cfg: RenderCommandConfig<'_>) {
    let datasets = super::select_or_exit(cfg.dataset, cfg.pair_files);
    let layout = Layout::default();

    if let Err(e) = std::fs::create_dir_all(cfg.out_dir) {
        eprintln!("Failed to create {}: {e}", cfg.out_dir.display());
        std::process::exit(1);
    }

    let rendered = match render_to_dir(&datasets, &layout, cfg.out_dir) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Render failed: {e}");
            std::process::exit(1);
        }
    };

    for (report, path) in &rendered {
        println!("  {:<12} {} pairs -> {}", report.name, report.pair_count, path.display());
    }
    println!();
    for (report, _) in &rendered {
        println!("{}", report.message());
    }

    if let Some(path) = cfg.output_path {
        let reports: Vec<&DatasetReport> = rendered.iter().map(|(r, _)| r).collect();
        match write_json_report(path, &layout, &reports) {
            Ok(()) => println!("\nResults written to {}", path.display()),
            Err(e) => eprintln!("\nFailed to write {}: {e}", path.display()),
        }
    }
}

/// Render every dataset into `<out_dir>/<name>.svg`.
pub fn render_to_dir(
    datasets: &[Dataset],
    layout: &Layout,
    out_dir: &Path,
) -> Result<Vec<(DatasetReport, PathBuf)>> {
    let results = run_all(datasets, layout, |_| {
        SvgSurface::new(layout.canvas_width, layout.canvas_height)
    })?;

    let mut out = Vec::with_capacity(results.len());
    for (report, surface) in results {
        let path = out_dir.join(format!("{}.svg", report.name));
        surface.save(&path)?;
        out.push((report, path));
    }
    Ok(out)
}

fn write_json_report(path: &Path, layout: &Layout, reports: &[&DatasetReport]) -> Result<()> {
    let json = serde_json::json!({
        "version": gradepair_core::VERSION,
        "layout": layout,
        "datasets": reports,
    });
    std::fs::write(path, serde_json::to_string_pretty(&json)?)?;
    Ok(())
}
