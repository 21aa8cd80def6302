//! Subcommands of the `relay` binary.
//!
//! Every command loads its documents, runs one engine operation and writes
//! the result back. The engine itself never touches the filesystem.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use domain::order::inbound_analysis;
use domain::relay::demand_from_orders;
use domain::{
    Catalog, DayNumber, DispatchBoard, LocationName, OrderSimulator, OrdersDocument,
    RelayDocument, RelayService, RelaySession, TrailerId,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::error::CliError;

/// Bakery relay order-to-trailer planner.
#[derive(Parser, Debug)]
#[command(name = "relay", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate demo orders for every route and write the orders document
    Simulate(SimulateArgs),

    /// Build a relay session from an orders document
    Plan(PlanArgs),

    /// List ordered products that come from other plants
    Inbound(OrdersArgs),

    /// Set a trailer's stack count by hand
    EditStacks(EditStacksArgs),

    /// Move spare stacks from a location onto a trailer
    Overload(OverloadArgs),

    /// Assign an LD number and freeze a trailer
    Finalize(FinalizeArgs),

    /// Record trailer and seal numbers
    TrailerInfo(TrailerInfoArgs),

    /// Print the dispatch board of a session
    Board(BoardArgs),
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Relay date, MM/DD/YYYY
    #[arg(long)]
    pub date: String,

    /// Relay day number
    #[arg(long)]
    pub day: u8,

    /// Maximum products per order (overrides RELAY_MAX_ITEMS)
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Seed for repeatable orders
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Orders document written by `simulate`
    #[arg(long)]
    pub orders: PathBuf,

    /// Session document to write (default: next to the data directory)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct OrdersArgs {
    /// Orders document written by `simulate`
    #[arg(long)]
    pub orders: PathBuf,
}

#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Session document written by `plan`
    #[arg(long)]
    pub session: PathBuf,
}

#[derive(Args, Debug)]
pub struct EditStacksArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    #[arg(long)]
    pub trailer: String,

    #[arg(long, allow_negative_numbers = true)]
    pub count: i64,
}

#[derive(Args, Debug)]
pub struct OverloadArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Location giving up spare stacks
    #[arg(long)]
    pub source: String,

    /// Trailer receiving them
    #[arg(long)]
    pub trailer: String,

    #[arg(long)]
    pub stacks: u32,
}

#[derive(Args, Debug)]
pub struct FinalizeArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    #[arg(long)]
    pub trailer: String,

    /// Re-draw LD numbers already used in this session
    #[arg(long)]
    pub unique_ld: bool,

    /// Seed for repeatable LD numbers
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct TrailerInfoArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    #[arg(long)]
    pub trailer: String,

    /// License plate; omit or leave blank to clear
    #[arg(long)]
    pub trailer_number: Option<String>,

    /// Omit or leave blank to clear
    #[arg(long)]
    pub seal_number: Option<String>,
}

#[derive(Args, Debug)]
pub struct BoardArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Print the board as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs a parsed command and returns what it prints.
pub fn run(cli: Cli, config: &Config) -> Result<String, CliError> {
    match cli.command {
        Command::Simulate(args) => simulate(args, config),
        Command::Plan(args) => plan(args, config),
        Command::Inbound(args) => inbound(args, config),
        Command::EditStacks(args) => {
            let trailer = TrailerId::new(args.trailer);
            update_session(&args.session.session, None, |service| {
                service.edit_stack_count(&trailer, args.count)?;
                Ok(format!("{trailer} now holds {} stacks", args.count))
            })
        }
        Command::Overload(args) => {
            let source = LocationName::new(args.source);
            let trailer = TrailerId::new(args.trailer);
            update_session(&args.session.session, None, |service| {
                service.add_overload(&source, &trailer, args.stacks)?;
                let spare = service.session().spare_stacks(&source)?;
                Ok(format!(
                    "Moved {} stacks from {source} to {trailer}; {source} has {spare} spare",
                    args.stacks
                ))
            })
        }
        Command::Finalize(args) => {
            let trailer = TrailerId::new(args.trailer);
            update_session(
                &args.session.session,
                Some((args.seed, args.unique_ld)),
                |service| {
                    let ld_number = service.finalize(&trailer)?;
                    Ok(format!("{trailer} finalized with LD {ld_number}"))
                },
            )
        }
        Command::TrailerInfo(args) => {
            let trailer = TrailerId::new(args.trailer);
            update_session(&args.session.session, None, |service| {
                service.set_trailer_info(
                    &trailer,
                    args.trailer_number.as_deref(),
                    args.seal_number.as_deref(),
                )?;
                let status = service.session().dispatch_status(&trailer)?;
                Ok(format!("{trailer} is {status}"))
            })
        }
        Command::Board(args) => {
            let session = load_session(&args.session.session)?;
            let board = DispatchBoard::from_session(&session);
            if args.json {
                serde_json::to_string_pretty(&board)
                    .map_err(|e| CliError::Domain(e.into()))
            } else {
                Ok(board.to_string())
            }
        }
    }
}

/// Parses an `MM/DD/YYYY` date and returns it normalized.
pub fn parse_date(date: &str) -> Result<String, CliError> {
    NaiveDate::parse_from_str(date.trim(), "%m/%d/%Y")
        .map(|parsed| parsed.format("%m/%d/%Y").to_string())
        .map_err(|_| CliError::InvalidDate(date.to_string()))
}

/// File name of a session document, e.g. `relay_12-25-2024_Day4.json`.
pub fn session_file_name(date: &str, day: DayNumber) -> String {
    format!("relay_{}_Day{day}.json", date.replace('/', "-"))
}

fn simulate(args: SimulateArgs, config: &Config) -> Result<String, CliError> {
    let date = parse_date(&args.date)?;
    let day = config.check_day(args.day)?;
    let catalog = load_catalog(config)?;
    let mut rng = rng(args.seed);

    let orders = OrderSimulator::new(&catalog).simulate_orders(
        catalog.routes(),
        args.max_items.unwrap_or(config.max_items),
        &date,
        &mut rng,
    )?;

    let document = OrdersDocument::new(orders, date, day);
    let path = config.data_dir.join(document.file_name());
    write_file(&path, &document.to_json()?)?;

    let stats = catalog.stats(&document.orders);
    tracing::info!(
        orders = stats.total_orders,
        trays = stats.total_trays,
        stacks = stats.total_stacks,
        path = %path.display(),
        "orders simulated"
    );
    Ok(format!(
        "Wrote {} orders ({} trays, {} stacks) to {}",
        stats.total_orders,
        stats.total_trays,
        stats.total_stacks,
        path.display()
    ))
}

fn plan(args: PlanArgs, config: &Config) -> Result<String, CliError> {
    let catalog = load_catalog(config)?;
    let orders = OrdersDocument::from_json(&read_file(&args.orders)?)?;
    let day = config.check_day(orders.metadata.confirmed_day.as_u8())?;
    let date = orders.metadata.confirmed_date.clone();

    let demand = demand_from_orders(&catalog, &orders.orders, config.home_plant)
        .map_err(domain::DomainError::from)?;
    let mut service = RelayService::open(date.clone(), day)?;
    let created = service.plan(&demand)?;

    let path = args
        .output
        .unwrap_or_else(|| config.data_dir.join(session_file_name(&date, day)));
    save_session(&path, service.session())?;

    tracing::info!(
        locations = demand.len(),
        trailers = created.len(),
        path = %path.display(),
        "relay planned"
    );
    Ok(format!(
        "{}\n\nWrote session to {}",
        DispatchBoard::from_session(service.session()),
        path.display()
    ))
}

fn inbound(args: OrdersArgs, config: &Config) -> Result<String, CliError> {
    let catalog = load_catalog(config)?;
    let orders = OrdersDocument::from_json(&read_file(&args.orders)?)?;
    let analysis = inbound_analysis(&catalog, &orders.orders, config.home_plant)
        .map_err(domain::DomainError::from)?;

    if analysis.is_empty() {
        return Ok(format!(
            "Every ordered product is baked at plant {}",
            config.home_plant
        ));
    }

    let lines: Vec<String> = analysis
        .iter()
        .flat_map(|(plant, products)| {
            std::iter::once(format!("Plant {plant}")).chain(products.iter().map(|product| {
                format!(
                    "  {:>6} {:<30} {:>7} units {:>5} trays {:>4} stacks",
                    product.product_id,
                    product.product_name,
                    product.total_units,
                    product.total_trays,
                    product.total_stacks
                )
            }))
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Loads a session, runs `command` against it and saves it if it succeeded.
fn update_session<F>(
    path: &Path,
    ld_options: Option<(Option<u64>, bool)>,
    command: F,
) -> Result<String, CliError>
where
    F: FnOnce(&mut RelayService<StdRng>) -> Result<String, domain::DomainError>,
{
    let session = load_session(path)?;
    let (seed, unique) = ld_options.unwrap_or((None, false));
    let mut service = RelayService::from_session(session, rng(seed));
    if unique {
        service = service.with_unique_ld_numbers();
    }

    let output = command(&mut service)?;
    save_session(path, service.session())?;
    Ok(output)
}

fn rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn load_catalog(config: &Config) -> Result<Catalog, CliError> {
    Ok(Catalog::from_json(&read_file(&config.catalog_path)?)?)
}

fn load_session(path: &Path) -> Result<RelaySession, CliError> {
    Ok(RelayDocument::from_json(&read_file(path)?)?.into_session()?)
}

fn save_session(path: &Path, session: &RelaySession) -> Result<(), CliError> {
    write_file(path, &RelayDocument::from_session(session)?.to_json()?)
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|e| CliError::io(path, e))
}
