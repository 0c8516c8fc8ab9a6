use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use homar_instances::{read_suite, write_suite, Selection, TestCase};
use homar_utils::{compress_obj, dejsonify, jsonify};
use homar_worker::{render_report, solve_suite, solve_timed, SuiteSettings};
use serde_json::json;
use std::{fs, io::Read, path::PathBuf};

fn cli() -> Command {
    Command::new("homar-worker")
        .about("Generates lobster-catch test suites and computes optimal catches")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate_suite")
                .about("Generates a random test suite")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "Path the suite will be written to")
                        .default_value("homar_in.txt")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("run_suite")
                .about("Solves every test case in a suite and reports timings")
                .arg(
                    arg!(<SUITE> "Path to a suite file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "Path the report will be written to")
                        .default_value("homar_out.txt")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--workers [WORKERS] "Number of worker threads")
                        .default_value("1")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--compress [COMPRESS] "Also dump the report data as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("solve_case")
                .about("Solves a single test case")
                .arg(
                    arg!(<SUITE> "Path to a suite file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<INDEX> "Zero-based test case index")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("verify_selection")
                .about("Verifies a selection of items against a test case")
                .arg(
                    arg!(<SUITE> "Path to a suite file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<INDEX> "Zero-based test case index")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(<SELECTION> "Selection json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("generate_suite", sub_m)) => generate_suite(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<PathBuf>("output").unwrap().clone(),
        ),
        Some(("run_suite", sub_m)) => run_suite(
            sub_m.get_one::<PathBuf>("SUITE").unwrap().clone(),
            sub_m.get_one::<PathBuf>("output").unwrap().clone(),
            *sub_m.get_one::<usize>("workers").unwrap(),
            *sub_m.get_one::<bool>("compress").unwrap(),
        ),
        Some(("solve_case", sub_m)) => solve_one_case(
            sub_m.get_one::<PathBuf>("SUITE").unwrap().clone(),
            *sub_m.get_one::<usize>("INDEX").unwrap(),
        ),
        Some(("verify_selection", sub_m)) => verify_selection(
            sub_m.get_one::<PathBuf>("SUITE").unwrap().clone(),
            *sub_m.get_one::<usize>("INDEX").unwrap(),
            sub_m.get_one::<String>("SELECTION").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn generate_suite(settings: String, output_file: PathBuf) -> Result<()> {
    let settings = load_settings(&settings);
    let cases = settings.generate_suite()?;

    let mut buffer = Vec::new();
    write_suite(&mut buffer, &cases)?;
    fs::write(&output_file, buffer)?;

    let result = json!({
        "num_cases": cases.len(),
        "num_items": cases.iter().map(|case| case.num_items() as u64).sum::<u64>(),
        "suite_file": output_file,
    });
    println!("{}", jsonify(&result));
    Ok(())
}

fn run_suite(
    suite_path: PathBuf,
    output_file: PathBuf,
    num_workers: usize,
    compress: bool,
) -> Result<()> {
    let cases = load_suite(&suite_path)?;
    let reports = solve_suite(cases, num_workers)?;

    for report in &reports {
        println!("{}", jsonify(report));
    }

    fs::write(&output_file, render_report(&reports))?;
    if compress {
        fs::write(output_file.with_extension("zlib"), compress_obj(&reports))?;
    }
    println!("report written to: {:?}", output_file);
    Ok(())
}

fn solve_one_case(suite_path: PathBuf, index: usize) -> Result<()> {
    let cases = load_suite(&suite_path)?;
    let case = get_case(&cases, index)?;
    let report = solve_timed(index as u64, case)?;
    println!("{}", jsonify(&report));
    Ok(())
}

fn verify_selection(suite_path: PathBuf, index: usize, selection: String) -> Result<()> {
    let cases = load_suite(&suite_path)?;
    let case = get_case(&cases, index)?;
    let selection = load_selection(&selection);

    match case.verify_selection(&selection) {
        Ok(total_value) => {
            println!("Selection is valid; total value: {}", total_value);
            Ok(())
        }
        Err(e) => Err(anyhow!("Invalid selection: {}", e)),
    }
}

fn get_case(cases: &[TestCase], index: usize) -> Result<&TestCase> {
    cases.get(index).ok_or_else(|| {
        anyhow!(
            "Test case ({}) is out of bounds; suite has {} cases",
            index,
            cases.len()
        )
    })
}

fn load_suite(path: &PathBuf) -> Result<Vec<TestCase>> {
    let file = fs::File::open(path)
        .map_err(|e| anyhow!("Failed to open suite file {}: {}", path.display(), e))?;
    read_suite(std::io::BufReader::new(file))
}

fn load_settings(settings: &str) -> SuiteSettings {
    let settings = if settings.ends_with(".json") {
        fs::read_to_string(settings).unwrap_or_else(|_| {
            eprintln!("Failed to read settings file: {}", settings);
            std::process::exit(1);
        })
    } else {
        settings.to_string()
    };

    dejsonify::<SuiteSettings>(&settings).unwrap_or_else(|_| {
        eprintln!("Failed to parse settings");
        std::process::exit(1);
    })
}

fn load_selection(selection: &str) -> Selection {
    let selection = if selection == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|_| {
                eprintln!("Failed to read selection from stdin");
                std::process::exit(1);
            });
        buffer
    } else if selection.ends_with(".json") {
        fs::read_to_string(selection).unwrap_or_else(|_| {
            eprintln!("Failed to read selection file: {}", selection);
            std::process::exit(1);
        })
    } else {
        selection.to_string()
    };

    dejsonify::<Selection>(&selection).unwrap_or_else(|_| {
        eprintln!("Failed to parse selection");
        std::process::exit(1);
    })
}
