use anyhow::{bail, Result};
use lowerclass::cli::{self, Command};
use lowerclass::runner;

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::parse_command_line_args();
    match &args.command {
        Command::Lower { program, out_dir } => {
            let report = runner::lower(program, out_dir)?;
            for outcome in &report.outcomes {
                match &outcome.result {
                    Ok(_) => println!("lowered {}", outcome.class),
                    Err(e) => eprintln!("error: {}", e),
                }
            }
            println!("wrote {} artifacts to {}", report.written.len(), out_dir.display());
            let n_failed = report.failures().count();
            if n_failed > 0 {
                bail!("{} class(es) could not be lowered", n_failed);
            }
        }
        Command::Plan { program, json } => {
            let plans = runner::plan(program)?;
            if *json {
                let ok = plans
                    .iter()
                    .filter_map(|(_, r)| r.as_ref().ok())
                    .collect::<Vec<_>>();
                println!("{}", serde_json::to_string_pretty(&ok)?);
            } else {
                for (class, result) in &plans {
                    print!("{}", runner::describe(class, result));
                }
            }
            let n_failed = plans.iter().filter(|(_, r)| r.is_err()).count();
            if n_failed > 0 {
                bail!("{} class(es) could not be planned", n_failed);
            }
        }
    }
    Ok(())
}
