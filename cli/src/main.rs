//! Evaluates a route from a JSON file against toll and traffic reference data, then prints a
//! summary and optionally writes the full report and map layers. Stands in for a real map UI.

#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use structopt::StructOpt;

use route_annotation::{AnnotationOptions, Annotator, ReferenceData, Route};

#[derive(StructOpt)]
#[structopt(
    name = "route-annotate",
    about = "Finds the tolls and traffic along a driving route"
)]
enum Command {
    /// Evaluates one route and prints a summary
    Annotate {
        /// The path to a JSON route, with `coordinates`, `total_distance_meters`, and
        /// `total_time_seconds`
        #[structopt()]
        route: String,
        /// The path to JSON reference data with `toll_roads` and `incidents`. Uses the built-in
        /// Dallas data if omitted.
        #[structopt(long)]
        reference: Option<String>,
        /// The path to a JSON file of options. Overrides any options passed as flags.
        #[structopt(long)]
        options: Option<String>,
        /// Write the full report as JSON here
        #[structopt(long)]
        report: Option<String>,
        /// Write the colored route and markers as GeoJSON here
        #[structopt(long)]
        geojson: Option<String>,
        #[structopt(flatten)]
        opts: AnnotationOptions,
    },
    /// Print the built-in Dallas reference data as JSON, to use as a template
    DumpReference,
}

fn main() -> Result<()> {
    let cmd = Command::from_args();

    // Dumping JSON shouldn't be mixed with log output
    if !matches!(cmd, Command::DumpReference) {
        abstutil::logger::setup();
    }

    match cmd {
        Command::Annotate {
            route,
            reference,
            options,
            report,
            geojson,
            opts,
        } => annotate(route, reference, options, report, geojson, opts)?,
        Command::DumpReference => println!("{}", abstutil::to_json(&ReferenceData::dallas())),
    }
    Ok(())
}

fn annotate(
    route_path: String,
    reference_path: Option<String>,
    options_path: Option<String>,
    report_path: Option<String>,
    geojson_path: Option<String>,
    mut opts: AnnotationOptions,
) -> Result<()> {
    let route: Route =
        abstutil::read_json(&route_path).with_context(|| format!("loading {}", route_path))?;
    let data = match reference_path {
        Some(path) => ReferenceData::load(&path)?,
        None => ReferenceData::dallas(),
    };
    if let Some(path) = options_path {
        opts = abstutil::read_json(&path)?;
    }
    debug!("Evaluating with {:?}", opts);

    // Flags parse "inf" and "NaN" as happily as JSON does, so both paths end up checked here
    let mut annotator = Annotator::new(&data, opts)?;
    let report = annotator.evaluate(&route)?;
    for line in report.describe() {
        println!("{}", line);
    }

    if let Some(path) = report_path {
        abstutil::write_json(&path, &report)?;
    }
    if let Some(path) = geojson_path {
        let contents = route_annotation::to_geojson(annotator.session())?;
        fs_err::write(&path, contents)?;
        info!("Wrote {}", path);
    }
    Ok(())
}
