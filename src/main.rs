mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cli::{Args, Command};
use style_lab::{AppConfig, AppEvent, AppState, ApplicationController, Field};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();

    let mut controller = ApplicationController::new(config);
    controller.bootstrap();

    match args.command {
        Command::Show => print_state(&controller, &controller.store().snapshot())?,
        Command::Fields => {
            let defaults = AppState::default();
            for field in Field::ALL {
                println!(
                    "{}\t{}\t{}",
                    field,
                    field.kind().describe(),
                    field.read(&defaults)
                );
            }
        }
        Command::Apply { assignments } => {
            apply_all(&mut controller, &assignments)?;
            print_state(&controller, &controller.store().snapshot())?;
        }
        Command::Get { field, assignments } => {
            let field: Field = field.parse()?;
            apply_all(&mut controller, &assignments)?;
            println!("{}", serde_json::to_string(&controller.store().get(field))?);
        }
    }

    controller.dispatch(AppEvent::Quit);
    Ok(())
}

fn apply_all(controller: &mut ApplicationController, assignments: &[String]) -> Result<()> {
    for assignment in assignments {
        controller
            .apply_assignment(assignment)
            .with_context(|| format!("cannot apply {assignment:?}"))?;
    }
    info!("applied {} assignment(s)", assignments.len());
    Ok(())
}

fn print_state(controller: &ApplicationController, state: &AppState) -> Result<()> {
    let rendered = if controller.config().pretty_json {
        serde_json::to_string_pretty(state)?
    } else {
        serde_json::to_string(state)?
    };
    println!("{rendered}");
    Ok(())
}
