//! Brigade CLI
//!
//! Command-line shell over a Brigade session. Each invocation loads the
//! stores, runs one command and, if the command changed anything, saves them.

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::RangedI64ValueParser;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use brigade::model::{
    EquipmentStatus, FirefighterStatus, InterventionStatus, OccurrenceKind, OccurrenceStatus,
    Priority, RecordId, Timestamp,
};
use brigade::{BrigadeError, Config, Result, Session};

/// Largest id the shell accepts
const MAX_ID: u32 = 99_999;

const YEARS: RangeInclusive<i32> = 2020..=2030;

/// Brigade CLI
#[derive(Parser, Debug)]
#[command(name = "brigade")]
#[command(about = "Firefighting resource records and reports")]
#[command(version)]
struct Cli {
    /// Directory holding the store files
    #[arg(short, long, default_value = ".", global = true)]
    data_dir: PathBuf,

    /// Print listings and reports as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Capacity below this percentage is critical
    #[arg(long, default_value_t = 20.0, global = true)]
    critical_pct: f64,

    /// Maintenance share above this percentage flags the fleet
    #[arg(long, default_value_t = 30.0, global = true)]
    maintenance_alert_pct: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage firefighters
    #[command(subcommand)]
    Firefighter(FirefighterCommand),

    /// Manage equipment
    #[command(subcommand)]
    Equipment(EquipmentCommand),

    /// Manage occurrences
    #[command(subcommand)]
    Occurrence(OccurrenceCommand),

    /// Manage interventions
    #[command(subcommand)]
    Intervention(InterventionCommand),

    /// Strategic reports
    #[command(subcommand)]
    Report(ReportCommand),
}

#[derive(Subcommand, Debug)]
enum FirefighterCommand {
    /// Register a firefighter
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        specialty: String,
    },

    /// List active firefighters
    List,

    /// Show one firefighter, inactive or not
    Show {
        #[arg(value_parser = id_parser())]
        id: RecordId,
    },

    /// Change a firefighter's status (available, busy, inactive)
    Status {
        #[arg(value_parser = id_parser())]
        id: RecordId,

        status: FirefighterStatus,
    },

    /// Remove a firefighter (kept as inactive)
    Remove {
        #[arg(value_parser = id_parser())]
        id: RecordId,
    },

    /// Intervention count per active firefighter
    Ranking,
}

#[derive(Subcommand, Debug)]
enum EquipmentCommand {
    /// Register a piece of equipment
    Add {
        #[arg(long)]
        designation: String,

        /// Free text, e.g. "Hose"
        #[arg(long = "type")]
        kind: String,
    },

    /// List active equipment
    List,

    /// Show one piece of equipment, inactive or not
    Show {
        #[arg(value_parser = id_parser())]
        id: RecordId,
    },

    /// Change equipment status (operational, in-use, maintenance)
    Status {
        #[arg(value_parser = id_parser())]
        id: RecordId,

        status: EquipmentStatus,
    },

    /// Remove equipment (kept as inactive)
    Remove {
        #[arg(value_parser = id_parser())]
        id: RecordId,
    },
}

#[derive(Subcommand, Debug)]
enum OccurrenceCommand {
    /// Register an occurrence
    Add {
        #[arg(long)]
        location: String,

        /// forest, urban or industrial
        #[arg(long = "type")]
        kind: OccurrenceKind,

        /// low, normal or high
        #[arg(long)]
        priority: Priority,

        /// "YYYY-MM-DD HH:MM"
        #[arg(long, value_parser = parse_timestamp)]
        reported_at: Timestamp,
    },

    /// List active occurrences
    List,

    /// Show one occurrence, inactive or not
    Show {
        #[arg(value_parser = id_parser())]
        id: RecordId,
    },

    /// Change occurrence status (reported, in-progress, resolved)
    Status {
        #[arg(value_parser = id_parser())]
        id: RecordId,

        status: OccurrenceStatus,

        /// Resolution time, required when resolving
        #[arg(long, value_parser = parse_timestamp)]
        ended_at: Option<Timestamp>,
    },

    /// Cancel an occurrence (kept as inactive)
    Cancel {
        #[arg(value_parser = id_parser())]
        id: RecordId,
    },

    /// Active occurrences per location
    Locations,
}

#[derive(Subcommand, Debug)]
enum InterventionCommand {
    /// Open an intervention and assign a firefighter
    Add {
        /// Occurrence being handled (not checked)
        #[arg(long, value_parser = id_parser())]
        occurrence: RecordId,

        /// "YYYY-MM-DD HH:MM"
        #[arg(long, value_parser = parse_timestamp)]
        started_at: Timestamp,

        /// Assigned firefighter (not checked)
        #[arg(long, value_parser = id_parser())]
        firefighter: RecordId,
    },

    /// List active interventions
    List,

    /// Show one intervention, inactive or not
    Show {
        #[arg(value_parser = id_parser())]
        id: RecordId,
    },

    /// Change intervention status (in-planning, running, finished)
    Status {
        #[arg(value_parser = id_parser())]
        id: RecordId,

        status: InterventionStatus,

        /// End time, required when finishing
        #[arg(long, value_parser = parse_timestamp)]
        ended_at: Option<Timestamp>,
    },

    /// Cancel an intervention (kept as inactive)
    Cancel {
        #[arg(value_parser = id_parser())]
        id: RecordId,
    },

    /// Duration statistics of finished interventions
    Stats,
}

#[derive(Subcommand, Debug)]
enum ReportCommand {
    /// Free personnel and operational equipment
    Capacity,

    /// Mean resolution time per occurrence type
    Efficiency,

    /// Maintenance load of the fleet
    Strain,

    /// Intervention count per active firefighter
    Activity,
}

impl Commands {
    /// Whether the command changes any store
    fn mutates(&self) -> bool {
        match self {
            Commands::Firefighter(cmd) => matches!(
                cmd,
                FirefighterCommand::Add { .. }
                    | FirefighterCommand::Status { .. }
                    | FirefighterCommand::Remove { .. }
            ),
            Commands::Equipment(cmd) => matches!(
                cmd,
                EquipmentCommand::Add { .. }
                    | EquipmentCommand::Status { .. }
                    | EquipmentCommand::Remove { .. }
            ),
            Commands::Occurrence(cmd) => matches!(
                cmd,
                OccurrenceCommand::Add { .. }
                    | OccurrenceCommand::Status { .. }
                    | OccurrenceCommand::Cancel { .. }
            ),
            Commands::Intervention(cmd) => matches!(
                cmd,
                InterventionCommand::Add { .. }
                    | InterventionCommand::Status { .. }
                    | InterventionCommand::Cancel { .. }
            ),
            Commands::Report(_) => false,
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing/logging (stderr, so stdout stays clean for output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,brigade=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    check_end_times(&cli.command);

    let config = Config::builder()
        .data_dir(&cli.data_dir)
        .capacity_critical_pct(cli.critical_pct)
        .maintenance_alert_pct(cli.maintenance_alert_pct)
        .build();

    let mut session = match Session::open(config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to open session: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mutates = cli.command.mutates();
    let outcome = run(&mut session, cli.command, cli.json);

    if mutates && outcome.is_ok() {
        session.close();
    }

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Resolving or finishing needs an end time; reject before touching files
fn check_end_times(command: &Commands) {
    let missing = match command {
        Commands::Occurrence(OccurrenceCommand::Status {
            status: OccurrenceStatus::Resolved,
            ended_at: None,
            ..
        }) => Some("resolving an occurrence requires --ended-at"),
        Commands::Intervention(InterventionCommand::Status {
            status: InterventionStatus::Finished,
            ended_at: None,
            ..
        }) => Some("finishing an intervention requires --ended-at"),
        _ => None,
    };

    if let Some(message) = missing {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, message)
            .exit();
    }
}

fn run(session: &mut Session, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Firefighter(cmd) => firefighter(session, cmd, json),
        Commands::Equipment(cmd) => equipment(session, cmd, json),
        Commands::Occurrence(cmd) => occurrence(session, cmd, json),
        Commands::Intervention(cmd) => intervention(session, cmd, json),
        Commands::Report(cmd) => match cmd {
            ReportCommand::Capacity => emit(&session.capacity(), json),
            ReportCommand::Efficiency => emit(&session.efficiency(), json),
            ReportCommand::Strain => emit(&session.strain(), json),
            ReportCommand::Activity => emit(&session.activity(), json),
        },
    }
}

// =============================================================================
// Entity Commands
// =============================================================================

fn firefighter(session: &mut Session, cmd: FirefighterCommand, json: bool) -> Result<()> {
    match cmd {
        FirefighterCommand::Add { name, specialty } => {
            let id = session.create_firefighter(&name, &specialty)?;
            println!("Firefighter created with ID {}.", id);
        }
        FirefighterCommand::List => {
            let store = session.firefighters();
            if json {
                return print_json(&store.active().collect::<Vec<_>>());
            }
            if store.active().next().is_none() {
                println!("No firefighters registered.");
                return Ok(());
            }
            println!(
                "{:<5} | {:<30} | {:<20} | {:<10} | {}",
                "ID", "NAME", "SPECIALTY", "STATUS", "INTERVENTIONS"
            );
            for f in store.active() {
                println!(
                    "{:<5} | {:<30} | {:<20} | {:<10} | {}",
                    f.id, f.name, f.specialty, f.status, f.total_interventions
                );
            }
        }
        FirefighterCommand::Show { id } => {
            let f = session
                .firefighters()
                .get(id)
                .ok_or(BrigadeError::NotFound { kind: "firefighter", id })?;
            if json {
                return print_json(f);
            }
            println!("Firefighter {}", f.id);
            println!("  Name:          {}", f.name);
            println!("  Specialty:     {}", f.specialty);
            println!("  Status:        {}", f.status);
            println!("  Interventions: {}", f.total_interventions);
        }
        FirefighterCommand::Status { id, status } => {
            session.update_firefighter(id, status)?;
            println!("Status updated.");
        }
        FirefighterCommand::Remove { id } => {
            session.delete_firefighter(id)?;
            println!("Firefighter removed (inactive).");
        }
        FirefighterCommand::Ranking => return emit(&session.activity(), json),
    }
    Ok(())
}

fn equipment(session: &mut Session, cmd: EquipmentCommand, json: bool) -> Result<()> {
    match cmd {
        EquipmentCommand::Add { designation, kind } => {
            let id = session.create_equipment(&designation, &kind)?;
            println!("Equipment registered with ID {}.", id);
        }
        EquipmentCommand::List => {
            let store = session.equipment();
            if json {
                return print_json(&store.active().collect::<Vec<_>>());
            }
            if store.active().next().is_none() {
                println!("No equipment registered.");
                return Ok(());
            }
            println!("{:<5} | {:<20} | {:<15} | {}", "ID", "DESIGNATION", "TYPE", "STATUS");
            for e in store.active() {
                println!("{:<5} | {:<20} | {:<15} | {}", e.id, e.designation, e.kind, e.status);
            }
        }
        EquipmentCommand::Show { id } => {
            let e = session
                .equipment()
                .get(id)
                .ok_or(BrigadeError::NotFound { kind: "equipment", id })?;
            if json {
                return print_json(e);
            }
            println!("Equipment {}", e.id);
            println!("  Designation: {}", e.designation);
            println!("  Type:        {}", e.kind);
            println!("  Status:      {}", e.status);
        }
        EquipmentCommand::Status { id, status } => {
            session.update_equipment(id, status)?;
            println!("Status updated.");
        }
        EquipmentCommand::Remove { id } => {
            session.delete_equipment(id)?;
            println!("Equipment removed (inactive).");
        }
    }
    Ok(())
}

fn occurrence(session: &mut Session, cmd: OccurrenceCommand, json: bool) -> Result<()> {
    match cmd {
        OccurrenceCommand::Add {
            location,
            kind,
            priority,
            reported_at,
        } => {
            let id = session.create_occurrence(&location, kind, priority, reported_at)?;
            println!("Occurrence registered with ID {}.", id);
        }
        OccurrenceCommand::List => {
            let store = session.occurrences();
            if json {
                return print_json(&store.active().collect::<Vec<_>>());
            }
            if store.active().next().is_none() {
                println!("No occurrences registered.");
                return Ok(());
            }
            println!(
                "{:<5} | {:<20} | {:<10} | {:<8} | {:<11} | {:<16} | {}",
                "ID", "LOCATION", "TYPE", "PRIORITY", "STATUS", "REPORTED", "ENDED"
            );
            for o in store.active() {
                println!(
                    "{:<5} | {:<20} | {:<10} | {:<8} | {:<11} | {:<16} | {}",
                    o.id, o.location, o.kind, o.priority, o.status, o.reported_at, o.ended_at
                );
            }
        }
        OccurrenceCommand::Show { id } => {
            let o = session
                .occurrences()
                .get(id)
                .ok_or(BrigadeError::NotFound { kind: "occurrence", id })?;
            if json {
                return print_json(o);
            }
            println!("Occurrence {}", o.id);
            println!("  Location: {}", o.location);
            println!("  Type:     {}", o.kind);
            println!("  Priority: {}", o.priority);
            println!("  Status:   {}", o.status);
            println!("  Reported: {}", o.reported_at);
            println!("  Ended:    {}", o.ended_at);
        }
        OccurrenceCommand::Status {
            id,
            status,
            ended_at,
        } => {
            session.update_occurrence(id, status, ended_at)?;
            println!("Status updated.");
        }
        OccurrenceCommand::Cancel { id } => {
            session.delete_occurrence(id)?;
            println!("Occurrence cancelled.");
        }
        OccurrenceCommand::Locations => return emit(&session.locations(), json),
    }
    Ok(())
}

fn intervention(session: &mut Session, cmd: InterventionCommand, json: bool) -> Result<()> {
    match cmd {
        InterventionCommand::Add {
            occurrence,
            started_at,
            firefighter,
        } => {
            let id = session.create_intervention(occurrence, started_at, firefighter)?;
            if let Some(f) = session.firefighters().get(firefighter) {
                println!("Firefighter {} assigned.", f.name);
            }
            println!("Intervention {} created.", id);
        }
        InterventionCommand::List => {
            let store = session.interventions();
            if json {
                return print_json(&store.active().collect::<Vec<_>>());
            }
            if store.active().next().is_none() {
                println!("No interventions registered.");
                return Ok(());
            }
            println!(
                "{:<5} | {:<10} | {:<11} | {:<8} | {:<16} | {}",
                "ID", "OCCURRENCE", "FIREFIGHTER", "STATUS", "START", "END"
            );
            for i in store.active() {
                println!(
                    "{:<5} | {:<10} | {:<11} | {:<8} | {:<16} | {}",
                    i.id, i.occurrence_id, i.firefighter_id, i.status, i.started_at, i.ended_at
                );
            }
        }
        InterventionCommand::Show { id } => {
            let i = session
                .interventions()
                .get(id)
                .ok_or(BrigadeError::NotFound { kind: "intervention", id })?;
            if json {
                return print_json(i);
            }
            println!("Intervention {}", i.id);
            println!("  Occurrence:  {}", i.occurrence_id);
            println!("  Firefighter: {}", i.firefighter_id);
            println!("  Status:      {}", i.status);
            println!("  Start:       {}", i.started_at);
            println!("  End:         {}", i.ended_at);
        }
        InterventionCommand::Status {
            id,
            status,
            ended_at,
        } => {
            session.update_intervention(id, status, ended_at)?;
            println!("Status updated.");
        }
        InterventionCommand::Cancel { id } => {
            session.delete_intervention(id)?;
            println!("Intervention cancelled.");
        }
        InterventionCommand::Stats => return emit(&session.intervention_stats(), json),
    }
    Ok(())
}

// =============================================================================
// Output
// =============================================================================

fn emit<T: Serialize + Display>(value: &T, json: bool) -> Result<()> {
    if json {
        print_json(value)
    } else {
        println!("{}", value);
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{}", text);
    Ok(())
}

// =============================================================================
// Input Validation
// =============================================================================

fn id_parser() -> RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(MAX_ID))
}

/// Parse "YYYY-MM-DD HH:MM" (a 'T' separator is accepted too)
fn parse_timestamp(text: &str) -> std::result::Result<Timestamp, String> {
    let malformed = || format!("expected \"YYYY-MM-DD HH:MM\", got \"{}\"", text);

    let (date, time) = text.trim().split_once([' ', 'T']).ok_or_else(malformed)?;
    let date: Vec<&str> = date.split('-').collect();
    let time: Vec<&str> = time.trim().split(':').collect();
    let ([year, month, day], [hour, minute]) = (date.as_slice(), time.as_slice()) else {
        return Err(malformed());
    };

    Ok(Timestamp::new(
        component(year, "year", YEARS)?,
        component(month, "month", 1..=12)?,
        component(day, "day", 1..=31)?,
        component(hour, "hour", 0..=23)?,
        component(minute, "minute", 0..=59)?,
    ))
}

fn component(
    text: &str,
    name: &str,
    range: RangeInclusive<i32>,
) -> std::result::Result<i32, String> {
    let value: i32 = text
        .parse()
        .map_err(|_| format!("invalid {} \"{}\"", name, text))?;
    if !range.contains(&value) {
        return Err(format!(
            "{} must be within {}..={}, got {}",
            name,
            range.start(),
            range.end(),
            value
        ));
    }
    Ok(value)
}
