use anyhow::{anyhow, bail, Result};
use clap::Parser;
use govmap::{
    host::{Alerts, Navigator, StaticHost},
    input::handler::{Session, TriggerOutcome},
    CoordinateSystem, Converter, Point, RouterConfig, ViewerUrl, ZoomLevel,
};

/// Route an editor viewport to its state government map viewer
#[derive(Debug, Parser)]
#[command(name = "govmap-app", version, about)]
struct Cli {
    /// Country under the map center.
    #[arg(long, default_value = "Australia")]
    country: String,
    /// State under the map center, e.g. "Victoria".
    #[arg(long)]
    region: Option<String>,
    /// Host zoom level.
    #[arg(long)]
    zoom: Option<ZoomLevel>,
    /// Map center as geodetic degrees.
    #[arg(long, num_args = 2, value_names = ["LON", "LAT"], allow_negative_numbers = true, conflicts_with = "mercator")]
    lonlat: Option<Vec<f64>>,
    /// Map center in Web Mercator meters, as the editor reports it.
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    mercator: Option<Vec<f64>>,
    /// Whole viewport snapshot as JSON (overrides the other viewport flags).
    #[arg(long = "host-json", value_name = "JSON")]
    host_json: Option<String>,
    /// Router configuration as (partial) JSON.
    #[arg(long, value_name = "JSON")]
    config: Option<String>,
    /// Also open the URL in the system browser.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    open: bool,
}

/// Everything one invocation needs, validated
#[derive(Debug)]
struct Request {
    host: StaticHost,
    config: RouterConfig,
    open: bool,
}

impl TryFrom<Cli> for Request {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let config = match cli.config.as_deref() {
            Some(json) => RouterConfig::from_json(json)?,
            None => RouterConfig::default(),
        };

        if let Some(json) = cli.host_json.as_deref() {
            let host: StaticHost = serde_json::from_str(json)?;
            return Ok(Self {
                host,
                config,
                open: cli.open,
            });
        }

        let zoom = cli
            .zoom
            .ok_or_else(|| anyhow!("Missing zoom. Provide --zoom <level>."))?;

        let center = match (cli.lonlat, cli.mercator) {
            (Some(lonlat), None) => Converter::new().convert_coordinates(
                pair(&lonlat)?,
                &CoordinateSystem::WGS84,
                &CoordinateSystem::WebMercator,
            )?,
            (None, Some(mercator)) => pair(&mercator)?,
            (Some(_), Some(_)) => bail!("--lonlat and --mercator are mutually exclusive"),
            (None, None) => bail!("Missing center. Provide --lonlat <lon> <lat> or --mercator <x> <y>."),
        };

        Ok(Self {
            host: StaticHost {
                country: Some(cli.country),
                region: cli.region,
                zoom,
                center,
            },
            config,
            open: cli.open,
        })
    }
}

fn pair(values: &[f64]) -> Result<Point> {
    match values {
        [a, b] => Ok(Point::new(*a, *b)),
        _ => bail!("expected exactly two coordinates, got {}", values.len()),
    }
}

/// Prints the URL and optionally hands it to the platform opener
struct CliNavigator {
    open: bool,
}

impl Navigator for CliNavigator {
    fn open(&self, url: &ViewerUrl) {
        println!("{}", url);
        if !self.open {
            return;
        }
        let opener = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        };
        if let Err(e) = std::process::Command::new(opener).arg(url.as_str()).spawn() {
            log::warn!("Failed to launch {}: {}", opener, e);
        }
    }
}

struct CliAlerts;

impl Alerts for CliAlerts {
    fn warning(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let request = Request::try_from(Cli::parse())?;
    let mut session = Session::new(
        request.config,
        request.host,
        CliNavigator { open: request.open },
        CliAlerts,
    );

    match session.trigger() {
        TriggerOutcome::Opened(_) => Ok(()),
        TriggerOutcome::Warned(_) => std::process::exit(1),
        TriggerOutcome::Suppressed(err) => bail!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Request> {
        let cli = Cli::try_parse_from(std::iter::once("govmap-app").chain(args.iter().copied()))?;
        Request::try_from(cli)
    }

    #[test]
    fn test_lonlat_is_converted_to_mercator() {
        let request = parse(&["--region", "Victoria", "--zoom", "14", "--lonlat", "144.9631", "-37.8136"]).unwrap();
        assert_eq!(request.host.country.as_deref(), Some("Australia"));
        assert_eq!(request.host.zoom, 14);
        assert!((request.host.center.x - 16137208.0).abs() < 1000.0);
        assert!(request.host.center.y < 0.0);
    }

    #[test]
    fn test_mercator_passthrough() {
        let request = parse(&["--region", "Victoria", "--zoom", "12", "--mercator", "16137000", "-4553000"]).unwrap();
        assert_eq!(request.host.center, Point::new(16137000.0, -4553000.0));
        assert!(!request.open);
    }

    #[test]
    fn test_missing_pieces() {
        assert!(parse(&["--region", "Victoria", "--lonlat", "144.9", "-37.8"]).is_err());
        assert!(parse(&["--region", "Victoria", "--zoom", "14"]).is_err());
        assert!(parse(&["--zoom", "14", "--lonlat", "1", "2", "--mercator", "1", "2"]).is_err());
    }

    #[test]
    fn test_host_json_and_config() {
        let request = parse(&[
            "--host-json",
            r#"{"country":"Australia","region":"South Australia","zoom":15,"center":{"x":1.0,"y":2.0}}"#,
            "--config",
            r#"{"min_zoom":10}"#,
        ])
        .unwrap();
        assert_eq!(request.host.region.as_deref(), Some("South Australia"));
        assert_eq!(request.config.min_zoom, 10);
    }
}
