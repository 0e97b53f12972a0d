use std::fmt::Write as _;
use std::io;
use std::path::Path;

use crate::benchmark::{
    append_trend_log, run_matrix, run_matrix_with, run_word_list, simulate_word, to_json,
    BenchmarkError, CsvReport, ReportFormat, TREND_LOG_PATH,
};
use crate::config::{BenchmarkConfig, FRUIT_CHUNKS, FRUIT_GAMES_PER_WORD, FRUIT_WORDS};
use crate::game::PolicyKind;
use crate::parallel::PartitionStrategy;

const USAGE: &str = "usage: hangman [bench|report|words|simulate] [args]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Bench,
    Report,
    Words,
    Simulate,
}

/// No subcommand means `bench`.
pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        None | Some("bench") => Some(Command::Bench),
        Some("report") => Some(Command::Report),
        Some("words") => Some(Command::Words),
        Some("simulate") => Some(Command::Simulate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Bench) => handle_bench(args),
        Some(Command::Report) => handle_report(args),
        Some(Command::Words) => handle_words(args),
        Some(Command::Simulate) => handle_simulate(args),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

/// Positional arguments after the subcommand, with `--flags` removed.
fn positional(args: &[String]) -> Vec<&String> {
    args.iter()
        .skip(2)
        .filter(|arg| !arg.starts_with("--"))
        .collect()
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn policy_arg(args: &[String]) -> Result<PolicyKind, String> {
    match args.iter().find_map(|arg| arg.strip_prefix("--policy=")) {
        None => Ok(PolicyKind::default()),
        Some(name) => PolicyKind::parse(name)
            .ok_or_else(|| format!("unknown policy '{name}': expected uniform or frequency")),
    }
}

fn config_from_args(args: &[String]) -> Result<BenchmarkConfig, String> {
    let mut config = BenchmarkConfig::from_env();
    config.policy = policy_arg(args)?;
    if has_flag(args, "--balanced") {
        config.partition = PartitionStrategy::Balanced;
    }
    Ok(config)
}

fn report_failure(context: &str, err: BenchmarkError) -> i32 {
    eprintln!("{context} failed: {err}");
    1
}

fn handle_bench(args: &[String]) -> i32 {
    let mut config = match config_from_args(args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            return 2;
        }
    };
    let positional = positional(args);
    config.games_per_item =
        parse_u32_arg(positional.first().copied(), "games_per_item", config.games_per_item);
    config.measure_reference = false;

    let stdout = io::stdout();
    let outcome = CsvReport::new(stdout.lock(), ReportFormat::Short)
        .map_err(BenchmarkError::from)
        .and_then(|mut report| {
            run_matrix_with(&config, |record| {
                report.write(record).map_err(BenchmarkError::from)
            })
        });
    match outcome {
        Ok(()) => 0,
        Err(err) => report_failure("benchmark", err),
    }
}

fn handle_report(args: &[String]) -> i32 {
    let mut config = match config_from_args(args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            return 2;
        }
    };
    let positional = positional(args);
    config.games_per_item =
        parse_u32_arg(positional.first().copied(), "games_per_item", config.games_per_item);

    let records = match run_matrix(&config) {
        Ok(records) => records,
        Err(err) => return report_failure("benchmark", err),
    };

    if has_flag(args, "--json") {
        match to_json(&records) {
            Ok(payload) => println!("{payload}"),
            Err(err) => return report_failure("report", err.into()),
        }
    } else {
        let stdout = io::stdout();
        let written = CsvReport::new(stdout.lock(), ReportFormat::Full).and_then(|mut report| {
            records.iter().try_for_each(|record| report.write(record))
        });
        if let Err(err) = written {
            return report_failure("report", err.into());
        }
    }

    if has_flag(args, "--log") {
        if let Err(err) = append_trend_log(Path::new(TREND_LOG_PATH), &records) {
            return report_failure("trend log", err.into());
        }
        eprintln!("appended {} row(s) to {TREND_LOG_PATH}", records.len());
    }
    0
}

fn handle_words(args: &[String]) -> i32 {
    let config = match config_from_args(args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            return 2;
        }
    };
    let positional = positional(args);
    let games = parse_u32_arg(positional.first().copied(), "games_per_word", FRUIT_GAMES_PER_WORD);
    let chunks = parse_usize_arg(positional.get(1).copied(), "chunks", FRUIT_CHUNKS);

    match run_word_list(&FRUIT_WORDS, games, chunks, &config) {
        Ok(summary) => {
            println!("Total wins: {}", summary.total_wins);
            println!("Total games played: {}", summary.total_games);
            println!("Win rate: {:.2}%", summary.win_rate_percent);
            println!(
                "Total time for {} games: {:.3} seconds",
                summary.total_games, summary.elapsed_seconds
            );
            0
        }
        Err(err) => report_failure("words", err),
    }
}

fn handle_simulate(args: &[String]) -> i32 {
    let config = match config_from_args(args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            return 2;
        }
    };
    let positional = positional(args);
    let Some(word) = positional.first() else {
        eprintln!("usage: hangman simulate <word> [games] [--policy=uniform|frequency]");
        return 2;
    };
    let games = parse_u32_arg(positional.get(1).copied(), "games", config.games_per_item);

    match simulate_word(word, games, &config) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize simulation summary: {err}");
                1
            }
        },
        Err(err) => report_failure("simulation", err),
    }
}

fn parse_u32_arg(raw: Option<&String>, name: &str, default: u32) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_usize_arg(raw: Option<&String>, name: &str, default: usize) -> usize {
    raw.and_then(|value| value.parse::<usize>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                let mut msg = String::new();
                let _ = write!(
                    &mut msg,
                    "invalid {name} '{value}', defaulting to {default}"
                );
                eprintln!("{msg}");
            }
            default
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn no_subcommand_runs_bench() {
        assert_eq!(parse_command(&args(&["hangman"])), Some(Command::Bench));
        assert_eq!(parse_command(&args(&["hangman", "report"])), Some(Command::Report));
        assert_eq!(parse_command(&args(&["hangman", "serve"])), None);
    }

    #[test]
    fn flags_are_not_positional() {
        let list = args(&["hangman", "report", "--json", "12", "--balanced"]);
        let positional = positional(&list);
        assert_eq!(positional, vec!["12"]);
        let config = config_from_args(&list).expect("valid flags");
        assert_eq!(config.partition, PartitionStrategy::Balanced);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let list = args(&["hangman", "report", "--policy=psychic"]);
        assert!(config_from_args(&list).is_err());
        let list = args(&["hangman", "report", "--policy=frequency"]);
        assert_eq!(
            config_from_args(&list).expect("known policy").policy,
            PolicyKind::frequency_weighted()
        );
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let bad = "many".to_string();
        assert_eq!(parse_u32_arg(Some(&bad), "games", 7), 7);
        assert_eq!(parse_usize_arg(None, "chunks", 4), 4);
        let good = "9".to_string();
        assert_eq!(parse_usize_arg(Some(&good), "chunks", 4), 9);
    }
}
