use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use ticklist::app::App;
use ticklist::command::Command;
use ticklist::domain::filter::Filter;
use ticklist::render::{self, Format};
use ticklist::repo::TodoRepository;
use ticklist::repo::memory::InMemoryTodoRepo;

#[derive(Parser, Debug)]
#[command(author, version, about = "ticklist — minimal in-memory todo list driven by commands", long_about = None)]
struct Args {
    /// Script of commands to run (default: stdin)
    script: Option<PathBuf>,

    /// Filter used by `list` without an argument
    #[arg(long, env = "TICKLIST_FILTER", default_value_t = Filter::All)]
    filter: Filter,

    /// Start with demo tasks
    #[arg(long, default_value_t = false)]
    demo: bool,

    /// Print todos as JSON lines
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Stop at the first failing command
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let repo = if args.demo {
        InMemoryTodoRepo::with_seed(seed_todos()).context("failed to seed demo todos")?
    } else {
        InMemoryTodoRepo::default()
    };

    let mut app = App::new(repo, args.filter);
    let format = if args.json { Format::Json } else { Format::Text };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let failures = match args.script.as_ref() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run(
                &mut app,
                BufReader::new(file),
                &mut stdout.lock(),
                &mut stderr.lock(),
                format,
                args.strict,
            )?
        }
        None => run(
            &mut app,
            io::stdin().lock(),
            &mut stdout.lock(),
            &mut stderr.lock(),
            format,
            args.strict,
        )?,
    };
    if failures > 0 {
        log::warn!("{failures} command(s) failed");
    }
    Ok(())
}

/// Applies every command line of `input`. Returns the number of failed lines;
/// in strict mode the first failure aborts the run instead.
fn run<R: TodoRepository>(
    app: &mut App<R>,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    format: Format,
    strict: bool,
) -> Result<usize> {
    let mut failures = 0;

    for (idx, line) in input.lines().enumerate() {
        let line = line.context("failed to read command")?;
        let lineno = idx + 1;
        let result = Command::parse_line(&line)
            .and_then(|cmd| cmd.map(|c| app.apply(c)).transpose());

        match result {
            Ok(Some(outcome)) => render::write_outcome(out, &outcome, format)?,
            Ok(None) => {}
            Err(e) if strict => bail!("line {lineno}: {e}"),
            Err(e) => {
                failures += 1;
                writeln!(err, "error: line {lineno}: {e}")?;
            }
        }
    }

    out.flush()?;
    Ok(failures)
}

fn seed_todos() -> Vec<&'static str> {
    vec![
        "Write documentation",
        "Check PRs waiting for review",
        "Draft release notes",
    ]
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "\
# two errands
add buy milk

add walk dog
toggle 1
remove 9
list active
toggle +2
stats
";

    fn session(script: &str, strict: bool) -> (Result<usize>, String, String) {
        let mut app = App::new(InMemoryTodoRepo::default(), Filter::All);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run(
            &mut app,
            script.as_bytes(),
            &mut out,
            &mut err,
            Format::Text,
            strict,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn keeps_going_after_failures() {
        let (result, out, err) = session(SCRIPT, false);
        assert_eq!(result.unwrap(), 2);
        assert_eq!(
            err,
            "error: line 6: todo 9 not found\nerror: line 8: invalid command: '+2' is not a valid id\n"
        );
        // lines after the failures still ran
        assert!(out.contains("•   2 walk dog"));
        assert!(out.ends_with("Open: 1 / Done: 1 / All: 2\n"));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let (result, out, err) = session("# nothing\n\n   \n# still nothing\n", false);
        assert_eq!(result.unwrap(), 0);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn strict_stops_at_first_failure() {
        let (result, out, err) = session(SCRIPT, true);
        let e = result.unwrap_err();
        assert_eq!(e.to_string(), "line 6: todo 9 not found");
        assert!(err.is_empty());
        assert!(out.contains("#1 is now completed"));
        assert!(!out.contains("Open:"));
    }

    #[test]
    fn json_output_is_one_object_per_line() {
        let mut app = App::new(InMemoryTodoRepo::default(), Filter::All);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failures = run(
            &mut app,
            "add a\nadd b\nlist\nhelp\n".as_bytes(),
            &mut out,
            &mut err,
            Format::Json,
            false,
        )
        .unwrap();
        assert_eq!(failures, 0);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 5);
        for line in out.lines() {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }
}
