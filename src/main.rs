//! formgrid CLI
//!
//! Power-user tool for maintaining field position templates: applies
//! alignment, distribution, snapping, and group operations to a position-map
//! JSON file and prints the updated map to stdout. Warnings go to stderr.

use std::error::Error;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use formgrid::{
    align, apply_group, distribute, export_group, nudge_fields, parse_group, relative_offsets,
    snap_to_grid, AlignEdge, Applied, DistributeAxis, FieldGroup, FieldPositionMap,
    NudgeDirection, Selection, Settings,
};

#[derive(Parser)]
#[command(name = "formgrid")]
#[command(about = "Field-position geometry for court-form PDF overlays")]
struct Cli {
    /// Settings file (TOML) for grid size and nudge steps
    #[arg(short, long)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Align selected fields on a shared edge or center line
    Align {
        /// left, center, right, top, middle or bottom
        #[arg(long)]
        edge: AlignEdge,

        /// Comma-separated field names, in selection order
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Position-map JSON file (reads stdin if not provided)
        input: Option<PathBuf>,
    },

    /// Space selected fields evenly between the two extremes
    Distribute {
        /// horizontal or vertical
        #[arg(long)]
        axis: DistributeAxis,

        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        input: Option<PathBuf>,
    },

    /// Snap selected fields to the grid
    Snap {
        /// Grid size in percent (overrides settings)
        #[arg(long)]
        grid: Option<f64>,

        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        input: Option<PathBuf>,
    },

    /// Nudge selected fields one step in a direction
    Nudge {
        /// up, down, left or right
        #[arg(long)]
        direction: NudgeDirection,

        /// Step in percentage points (overrides settings)
        #[arg(long)]
        step: Option<f64>,

        /// Use the coarse step from settings
        #[arg(long)]
        coarse: bool,

        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        input: Option<PathBuf>,
    },

    /// Create, apply, or validate field-group templates
    Group {
        #[command(subcommand)]
        command: GroupCommand,
    },
}

#[derive(Subcommand)]
enum GroupCommand {
    /// Capture a selection as an anchor-relative group (JSON to stdout)
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Comma-separated field names; the first is the anchor
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        input: Option<PathBuf>,
    },

    /// Apply a group template onto a target field set
    Apply {
        /// Group template JSON file
        group: PathBuf,

        /// Comma-separated target fields; the first is the new anchor
        #[arg(long, value_delimiter = ',')]
        targets: Vec<String>,

        input: Option<PathBuf>,
    },

    /// Check that a file is a valid group template
    Validate {
        group: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let settings = match &cli.settings {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    match cli.command {
        Command::Align { edge, fields, input } => {
            let positions = read_positions(input.as_deref())?;
            let selection = Selection::from_iter(fields);
            let applied = align(&positions, &selection, edge)?;
            emit(applied)
        }
        Command::Distribute { axis, fields, input } => {
            let positions = read_positions(input.as_deref())?;
            let selection = Selection::from_iter(fields);
            let applied = distribute(&positions, &selection, axis)?;
            emit(applied)
        }
        Command::Snap { grid, fields, input } => {
            let positions = read_positions(input.as_deref())?;
            let selection = Selection::from_iter(fields);
            let grid = grid.unwrap_or(settings.grid_size);
            let next = snap_to_grid(&positions, &selection, None, grid);
            print_positions(&next)
        }
        Command::Nudge {
            direction,
            step,
            coarse,
            fields,
            input,
        } => {
            let positions = read_positions(input.as_deref())?;
            let selection = Selection::from_iter(fields);
            let step = step.unwrap_or_else(|| settings.step_for(coarse));
            let next = nudge_fields(&positions, &selection, None, direction, step);
            print_positions(&next)
        }
        Command::Group { command } => run_group(command),
    }
}

fn run_group(command: GroupCommand) -> Result<(), Box<dyn Error>> {
    match command {
        GroupCommand::Create {
            name,
            description,
            fields,
            input,
        } => {
            let positions = read_positions(input.as_deref())?;
            let selection = Selection::from_iter(fields);
            let encoded = relative_offsets(&selection, &positions)?;
            for warning in &encoded.warnings {
                eprintln!("warning: {}", warning);
            }
            let group = FieldGroup::new(name, description, encoded.fields);
            println!("{}", export_group(&group)?);
            Ok(())
        }
        GroupCommand::Apply {
            group,
            targets,
            input,
        } => {
            let json = std::fs::read_to_string(&group)?;
            let group = parse_group(&json)?;
            let positions = read_positions(input.as_deref())?;
            let selection = Selection::from_iter(targets);
            let applied = apply_group(&group, &selection, &positions)?;
            emit(applied)
        }
        GroupCommand::Validate { group } => {
            let json = std::fs::read_to_string(&group)?;
            let parsed = parse_group(&json)?;
            println!(
                "OK: group '{}' with {} fields",
                parsed.name,
                parsed.fields.len()
            );
            Ok(())
        }
    }
}

/// Read a position map from a JSON file, or stdin when no path is given
fn read_positions(path: Option<&std::path::Path>) -> Result<FieldPositionMap, Box<dyn Error>> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&json)?)
}

fn emit(applied: Applied) -> Result<(), Box<dyn Error>> {
    for warning in &applied.warnings {
        eprintln!("warning: {}", warning);
    }
    print_positions(&applied.positions)
}

fn print_positions(positions: &FieldPositionMap) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(positions)?);
    Ok(())
}
