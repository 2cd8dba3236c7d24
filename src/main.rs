use anyhow::{bail, Context, Result};
use coord_query::{
    format_coordinate, records, Coordinate, CoordinateFormat, MapProvider, Transformer,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage:
  coord-query convert <from> <to> <lng> <lat> [--dms]
  coord-query display <gaode|osm> <lng> <lat> [--dms]
  coord-query locate  <gaode|osm> <lng> <lat>
  coord-query csv     <from> <to> <input.csv> [output.csv]

Systems: wgs84, gcj02, bd09";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let format = take_format_flag(&mut args);

    match args.first().map(|s| s.as_str()) {
        Some("convert") => {
            let [from, to, lng, lat] = positional::<4>(&args)?;
            let transformer = Transformer::from_names(from, to)?;
            let coord = parse_coordinate(lng, lat)?;
            let converted = transformer.transform(coord);
            println!("{}", format_coordinate(converted, format));
        }
        Some("display") => {
            let [provider, lng, lat] = positional::<3>(&args)?;
            let provider: MapProvider = provider.parse()?;
            let display = provider.to_display(parse_coordinate(lng, lat)?)?;
            println!("{}", format_coordinate(display, format));
        }
        Some("locate") => {
            let [provider, lng, lat] = positional::<3>(&args)?;
            let provider: MapProvider = provider.parse()?;
            let native = provider.to_native(parse_coordinate(lng, lat)?)?;
            println!("{} ({})", format_coordinate(native, format), provider.native_system());
        }
        Some("csv") => {
            if args.len() < 4 {
                bail!(USAGE);
            }
            let transformer = Transformer::from_names(&args[1], &args[2])?;
            let input = std::fs::File::open(&args[3])
                .with_context(|| format!("failed to open {}", args[3]))?;

            let summary = match args.get(4) {
                Some(path) => {
                    let output = std::fs::File::create(path)
                        .with_context(|| format!("failed to create {}", path))?;
                    records::convert_records(input, output, &transformer)?
                }
                None => records::convert_records(input, std::io::stdout().lock(), &transformer)?,
            };

            eprintln!(
                "{} rows: {} converted, {} skipped",
                summary.total, summary.converted, summary.skipped
            );
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

fn take_format_flag(args: &mut Vec<String>) -> CoordinateFormat {
    let before = args.len();
    args.retain(|arg| arg != "--dms");
    if args.len() != before {
        CoordinateFormat::Dms
    } else {
        CoordinateFormat::Decimal
    }
}

fn positional<const N: usize>(args: &[String]) -> Result<[&str; N]> {
    if args.len() != N + 1 {
        bail!(USAGE);
    }
    let mut out = [""; N];
    for (slot, arg) in out.iter_mut().zip(&args[1..]) {
        *slot = arg.as_str();
    }
    Ok(out)
}

fn parse_coordinate(lng: &str, lat: &str) -> Result<Coordinate> {
    let lng: f64 = lng
        .parse()
        .with_context(|| format!("invalid longitude: {}", lng))?;
    let lat: f64 = lat
        .parse()
        .with_context(|| format!("invalid latitude: {}", lat))?;
    let coord = Coordinate::new(lng, lat);
    coord.validate()?;
    Ok(coord)
}
