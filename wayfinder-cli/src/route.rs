//! Route command implementation for the Wayfinder CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfinder_core::{MapView, RouteFinder, RoutePlan, RoutePlanner};
use wayfinder_data::geocoding::{HttpGeocoder, HttpGeocoderConfig};
use wayfinder_data::routing::{HttpRouteFetcher, HttpRouteFetcherConfig};
use wayfinder_data::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

use crate::render::render_leaflet;
use crate::{
    ARG_DESTINATION, ARG_GEOCODER_BASE_URL, ARG_JSON, ARG_MAP_OUTPUT, ARG_OSRM_BASE_URL,
    ARG_START, ARG_TIMEOUT_SECS, ARG_USER_AGENT, CliError, ENV_DESTINATION, ENV_START,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "route",
    long_about = "Resolve two place names with a Nominatim geocoder, fetch \
                 the driving route between them from an OSRM server and \
                 report its length. Service settings can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Find the shortest driving route between two places"
)]
#[ortho_config(prefix = "WAYFINDER")]
pub(crate) struct RouteArgs {
    /// Starting place, e.g. "Paris".
    #[arg(value_name = "START")]
    #[serde(default)]
    pub(crate) start: Option<String>,
    /// Destination place, e.g. "Berlin".
    #[arg(value_name = "DESTINATION")]
    #[serde(default)]
    pub(crate) destination: Option<String>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
    /// Base URL for the Nominatim geocoder.
    #[arg(long = ARG_GEOCODER_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) geocoder_base_url: Option<String>,
    /// User agent sent with every request.
    #[arg(long = ARG_USER_AGENT, value_name = "agent")]
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Write an HTML map of the route to this path.
    #[arg(long = ARG_MAP_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) map_output: Option<Utf8PathBuf>,
    /// Print the route and map view as JSON instead of a summary line.
    #[arg(long = ARG_JSON)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) json: bool,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// How a found route is reported on standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Summary,
    Json,
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    pub(crate) start: String,
    pub(crate) destination: String,
    pub(crate) osrm_base_url: String,
    pub(crate) geocoder_base_url: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
    pub(crate) map_output: Option<Utf8PathBuf>,
    pub(crate) output: OutputFormat,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let start = args.start.ok_or(CliError::MissingArgument {
            field: ARG_START,
            env: ENV_START,
        })?;
        let destination = args.destination.ok_or(CliError::MissingArgument {
            field: ARG_DESTINATION,
            env: ENV_DESTINATION,
        })?;
        let timeout = match args.timeout_secs {
            Some(0) => {
                return Err(CliError::InvalidTimeout {
                    field: ARG_TIMEOUT_SECS,
                });
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        let osrm_base_url = args
            .osrm_base_url
            .unwrap_or_else(|| HttpRouteFetcherConfig::default().base_url);
        let geocoder_base_url = args
            .geocoder_base_url
            .unwrap_or_else(|| HttpGeocoderConfig::default().base_url);

        Ok(Self {
            start,
            destination,
            osrm_base_url,
            geocoder_base_url,
            user_agent: args
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            timeout,
            map_output: args.map_output,
            output: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Summary
            },
        })
    }
}

/// Builds a route planner for the current route invocation.
pub(super) trait RoutePlannerBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn RoutePlanner>, CliError>;
}

pub(super) struct DefaultRoutePlannerBuilder;

impl RoutePlannerBuilder for DefaultRoutePlannerBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn RoutePlanner>, CliError> {
        let geocoder = HttpGeocoder::with_config(
            HttpGeocoderConfig::new(config.geocoder_base_url.clone())
                .with_timeout(config.timeout)
                .with_user_agent(config.user_agent.clone()),
        )
        .map_err(|source| CliError::BuildGeocoder {
            base_url: config.geocoder_base_url.clone(),
            source,
        })?;
        let router = HttpRouteFetcher::with_config(
            HttpRouteFetcherConfig::new(config.osrm_base_url.clone())
                .with_timeout(config.timeout)
                .with_user_agent(config.user_agent.clone()),
        )
        .map_err(|source| CliError::BuildRouteFetcher {
            base_url: config.osrm_base_url.clone(),
            source,
        })?;
        Ok(Box::new(RouteFinder::new(geocoder, router)))
    }
}

pub(super) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultRoutePlannerBuilder;
    run_route_with(args, &builder, &mut stdout)
}

pub(super) fn run_route_with(
    args: RouteArgs,
    builder: &dyn RoutePlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let planner = builder.build(&config)?;
    let plan = planner.find_route(&config.start, &config.destination)?;
    let view = MapView::from_plan(&plan);

    if let Some(path) = &config.map_output {
        write_map(path, &view)?;
        log::info!("wrote route map to {path}");
    }
    match config.output {
        OutputFormat::Summary => {
            writeln!(writer, "{}", plan.summary()).map_err(CliError::WriteOutput)
        }
        OutputFormat::Json => write_report(writer, &plan, &view),
    }
}

/// JSON shape printed by `--json`.
#[derive(Debug, Serialize)]
struct RouteReport<'a> {
    summary: String,
    plan: &'a RoutePlan,
    map: &'a MapView,
}

fn write_report(writer: &mut dyn Write, plan: &RoutePlan, view: &MapView) -> Result<(), CliError> {
    let report = RouteReport {
        summary: plan.summary(),
        plan,
        map: view,
    };
    let payload = serde_json::to_string_pretty(&report).map_err(CliError::SerialiseRoute)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn write_map(path: &Utf8Path, view: &MapView) -> Result<(), CliError> {
    let html = render_leaflet(view).map_err(CliError::RenderMap)?;
    wayfinder_fs::write_file(path, html).map_err(|source| CliError::WriteMap {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
