/// Command-line frontend for the board mover. All document logic lives in
/// taskshift-core; this binary only parses arguments, initializes logging,
/// and maps the result onto an exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use taskshift_core::{move_task_block, TaskState};

#[derive(Parser)]
#[command(
    name = "taskshift",
    version,
    about = "Move a task block between sections of a markdown workflow board"
)]
struct Cli {
    /// Path to the board markdown file
    board_file: PathBuf,

    /// Task identifier as it appears in brackets, e.g. TASK-12
    task_id: String,

    /// Declared current state. Informational only: the block is located by
    /// its identifier, never by this label, so retried transitions stay
    /// harmless.
    from_state: String,

    /// Target state selecting the destination section (UNCLAIMED,
    /// IN_PROGRESS, IN_REVIEW, ADDRESSING_FEEDBACK, COMPLETED)
    to_state: String,

    /// Print a JSON move report to stdout on success
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let to_state = match TaskState::try_from(cli.to_state.as_str()) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    log::debug!(
        "[taskshift.cli] {} declared in {}, moving to {}",
        cli.task_id,
        cli.from_state,
        to_state
    );

    match move_task_block(&cli.board_file, &cli.task_id, to_state) {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string(&report) {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        eprintln!("failed to serialize move report: {}", err);
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
