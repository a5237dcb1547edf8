use clap::{App, Arg, ArgMatches, SubCommand};
use colored::*;
use roversim::{parse_script, run_mission, Direction, MissionPlan, MissionReport, Position, StepOutcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let matches = App::new("roversim")
        .version("0.1.0")
        .author("Surface Robotics Team")
        .about("🤖 Grid Rover Simulator - command-driven rover missions with obstacle avoidance")
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .takes_value(true)
                .possible_values(&["json", "table", "compact"])
                .default_value("table")
                .global(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Enable verbose output")
                .global(true),
        )
        .subcommand(
            SubCommand::with_name("run")
                .about("🚀 Run a rover mission")
                .long_about(
                    "Executes a command script against a rover placed on an unbounded grid, \
                     reporting the final position, heading, and status",
                )
                .arg(
                    Arg::with_name("start")
                        .long("start")
                        .value_name("X,Y")
                        .help("Start cell")
                        .takes_value(true)
                        .default_value("0,0")
                        .validator(coord_validator),
                )
                .arg(
                    Arg::with_name("heading")
                        .long("heading")
                        .value_name("DIR")
                        .help("Start heading")
                        .takes_value(true)
                        .possible_values(&["north", "south", "east", "west", "n", "s", "e", "w"])
                        .default_value("north"),
                )
                .arg(
                    Arg::with_name("obstacle")
                        .short("o")
                        .long("obstacle")
                        .value_name("X,Y")
                        .help("Blocked cell (repeatable)")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .validator(coord_validator),
                )
                .arg(
                    Arg::with_name("script")
                        .short("s")
                        .long("script")
                        .value_name("LETTERS")
                        .help("Command script: M (move), L (turn left), R (turn right)")
                        .takes_value(true)
                        .required_unless("plan"),
                )
                .arg(
                    Arg::with_name("plan")
                        .short("p")
                        .long("plan")
                        .value_name("FILE")
                        .help("JSON mission plan file (overrides the inline flags)")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("trace")
                        .short("t")
                        .long("trace")
                        .help("Print the per-command execution trace"),
                ),
        )
        .subcommand(
            SubCommand::with_name("demo")
                .about("📋 Run the built-in demo mission")
                .long_about(
                    "Runs a canned mission showcasing obstacle avoidance: two blocked cells, \
                     a rover starting at the origin facing East, and a six-command script",
                ),
        )
        .get_matches();

    let format = matches.value_of("format").unwrap();
    let verbose = matches.is_present("verbose");

    match matches.subcommand() {
        ("run", Some(sub_matches)) => {
            handle_run(sub_matches, format, verbose)?;
        }
        ("demo", Some(sub_matches)) => {
            handle_demo(sub_matches, format, verbose)?;
        }
        _ => {
            println!(
                "{}",
                "No command specified. Use --help for usage information.".yellow()
            );
            println!("{}", "Quick start:".bright_green());
            println!(
                "  {} Run the built-in demo mission",
                "roversim demo".bright_cyan()
            );
            println!(
                "  {} Run a custom mission",
                "roversim run --heading east --obstacle 2,2 --script MMRM".bright_cyan()
            );
        }
    }

    Ok(())
}

fn handle_run(
    matches: &ArgMatches<'_>,
    format: &str,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let plan = if let Some(path) = matches.value_of("plan") {
        let raw = std::fs::read_to_string(path)?;
        MissionPlan::from_json(&raw)?
    } else {
        let start = parse_coord(matches.value_of("start").unwrap())?;
        let heading: Direction = matches.value_of("heading").unwrap().parse()?;

        let mut obstacles = Vec::new();
        if let Some(values) = matches.values_of("obstacle") {
            for raw in values {
                obstacles.push(parse_coord(raw)?);
            }
        }

        let commands = parse_script(matches.value_of("script").unwrap())?;

        MissionPlan {
            start,
            heading,
            obstacles,
            commands,
        }
    };

    if verbose {
        println!(
            "{} {} commands, {} obstacles, start {} facing {}",
            "Mission:".dimmed(),
            plan.commands.len(),
            plan.obstacles.len(),
            plan.start,
            plan.heading
        );
    }

    let report = run_mission(&plan)?;
    print_report(&report, format, matches.is_present("trace"));
    Ok(())
}

fn handle_demo(
    _matches: &ArgMatches<'_>,
    format: &str,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let plan = demo_plan();

    if verbose {
        println!("{}", "Demo plan:".dimmed());
        println!("{}", plan.to_json()?);
    }

    println!("{}", "🤖 Grid Rover Simulator demo".bright_blue().bold());
    println!(
        "{} obstacles at (2, 2) and (3, 5); rover at (0, 0) facing East; script MMRMLM",
        "Setup:".bright_white()
    );

    let report = run_mission(&plan)?;
    print_report(&report, format, true);
    Ok(())
}

fn demo_plan() -> MissionPlan {
    MissionPlan {
        start: Position::new(0, 0),
        heading: Direction::East,
        obstacles: vec![Position::new(2, 2), Position::new(3, 5)],
        commands: parse_script("MMRMLM").expect("demo script is valid"),
    }
}

fn parse_coord(raw: &str) -> Result<Position, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("`{}` is not of the form X,Y", raw))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("invalid X coordinate in `{}`", raw))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("invalid Y coordinate in `{}`", raw))?;
    Ok(Position::new(x, y))
}

fn coord_validator(v: String) -> Result<(), String> {
    parse_coord(&v).map(|_| ())
}

fn print_report(report: &MissionReport, format: &str, show_trace: bool) {
    match format {
        "json" => {
            match serde_json::to_string_pretty(report) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("{} failed to serialize report: {}", "❌".red(), e),
            }
        }
        "compact" => {
            println!(
                "({}, {}, {}) moves={} blocked={} turns={}",
                report.final_position.x,
                report.final_position.y,
                report.final_heading.letter(),
                report.stats.moves_completed,
                report.stats.moves_blocked,
                report.stats.turns
            );
        }
        _ => {
            println!("{}", "📊 Mission Report".bright_blue().bold());
            println!(
                "{} {}",
                "Final Position:".bright_white(),
                format!(
                    "{} facing {}",
                    report.final_position, report.final_heading
                )
                .bright_cyan()
            );

            let status_line = report.status.to_string();
            if report.status.obstacle_detected {
                println!("{} {}", "Status:".bright_white(), status_line.yellow());
            } else {
                println!("{} {}", "Status:".bright_white(), status_line.bright_green());
            }

            println!(
                "{} {} executed, {} moves, {} blocked, {} turns",
                "Commands:".bright_white(),
                report.stats.commands_executed,
                report.stats.moves_completed,
                report.stats.moves_blocked,
                report.stats.turns
            );

            if show_trace {
                println!("{}", "Trace:".bright_white());
                for record in &report.trace {
                    match record.outcome {
                        StepOutcome::Blocked { obstacle } => {
                            println!(
                                "  {}",
                                format!(
                                    "#{:<3} {}  blocked by {} - rover holds {} facing {}",
                                    record.command_id,
                                    record.kind.letter(),
                                    obstacle,
                                    record.position,
                                    record.heading
                                )
                                .yellow()
                            );
                        }
                        StepOutcome::Completed => {
                            println!(
                                "  #{:<3} {}  -> {} facing {}",
                                record.command_id,
                                record.kind.letter(),
                                record.position,
                                record.heading
                            );
                        }
                    }
                }
            }
        }
    }
}
