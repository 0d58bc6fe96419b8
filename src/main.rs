use clap::Parser;
use portfolio_form::utils::{logger, validation::Validate};
use portfolio_form::{CliConfig, ConsolePresenter, EntryField, FormController, SolverClient};
use std::io::{BufRead, Write};

type Controller = FormController<SolverClient, ConsolePresenter>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse().resolve()?;

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting portfolio-form");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = SolverClient::new(&config);
    let mut controller = FormController::new(client, ConsolePresenter::new());

    println!("📋 Portfolio optimization form");
    println!("   Solver: {}", config.solver_endpoint);
    print_help();
    print_form(&controller);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if !handle_command(&mut controller, line.trim()).await {
            break;
        }
    }

    tracing::info!("Session finished");
    Ok(())
}

/// One controller action per command. Returns false when the session ends.
async fn handle_command(controller: &mut Controller, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "add" => {
            controller.add_entry();
            print_form(controller);
        }
        "remove" => match entry_at(controller, rest) {
            Some(id) => {
                controller.remove_entry(id);
                print_form(controller);
            }
            None => eprintln!("❌ No such row: {:?}", rest),
        },
        "name" | "cost" | "profit" => {
            let (row, value) = match rest.split_once(char::is_whitespace) {
                Some((row, value)) => (row, value.trim()),
                None => (rest, ""),
            };
            match entry_at(controller, row) {
                Some(id) => {
                    let field = match command {
                        "name" => EntryField::Name,
                        "cost" => EntryField::Cost,
                        _ => EntryField::Profit,
                    };
                    controller.update_entry(id, field, value);
                    print_form(controller);
                }
                None => eprintln!("❌ No such row: {:?}", row),
            }
        }
        "budget" => {
            controller.set_budget(rest);
            print_form(controller);
        }
        "list" => print_form(controller),
        "submit" => {
            if controller.submit().await {
                tracing::info!("Submission succeeded");
            }
        }
        "reset" => {
            controller.reset();
            println!("🧹 Form cleared");
            print_form(controller);
        }
        "help" => print_help(),
        "quit" | "exit" => return false,
        other => eprintln!("❌ Unknown command: {:?} (try 'help')", other),
    }

    true
}

/// Resolves a 1-based row number to the entry's identity.
fn entry_at(controller: &Controller, row: &str) -> Option<portfolio_form::EntryId> {
    let index = row.parse::<usize>().ok()?.checked_sub(1)?;
    controller.entries().get(index).map(|entry| entry.id)
}

fn print_form(controller: &Controller) {
    let budget = controller.budget();
    println!(
        "   Budget: {}",
        if budget.is_empty() { "(empty)" } else { budget }
    );
    for (index, entry) in controller.entries().iter().enumerate() {
        println!(
            "   {}. {} | cost: {} | profit: {}",
            index + 1,
            if entry.name.is_empty() { "(unnamed)" } else { entry.name.as_str() },
            if entry.cost.is_empty() { "(empty)" } else { entry.cost.as_str() },
            if entry.profit.is_empty() { "(empty)" } else { entry.profit.as_str() },
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  budget <amount>        set the total budget");
    println!("  add                    add a project row");
    println!("  remove <row>           remove a project row");
    println!("  name <row> <text>      set a project's name");
    println!("  cost <row> <amount>    set a project's cost");
    println!("  profit <row> <amount>  set a project's profit");
    println!("  list                   show the current form");
    println!("  submit                 send the form to the solver");
    println!("  reset                  clear the form");
    println!("  quit                   leave");
}
