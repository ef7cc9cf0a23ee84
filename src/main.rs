use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;

use course_advisor::domain::ports::{ConfigProvider, Pipeline};
use course_advisor::utils::{logger, validation::Validate};
use course_advisor::{
    AdvisorConfig, Catalog, CatalogPipeline, CliConfig, Course, LoadEngine, LocalStorage,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting course advisor");

    let config = match AdvisorConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to resolve configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if !Path::new(config.catalog_file()).exists() {
        eprintln!("File does not exist: {}", config.catalog_file());
        std::process::exit(1);
    }

    if cli.monitor {
        tracing::info!("System monitoring enabled");
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CatalogPipeline::new(storage, config.clone());
    let engine = LoadEngine::new_with_monitoring(pipeline, cli.monitor);

    run_menu(&engine, &config)
}

fn run_menu<P: Pipeline>(engine: &LoadEngine<P>, config: &AdvisorConfig) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut catalog: Option<Catalog> = None;

    loop {
        println!();
        println!("Menu");
        println!("  1. Load course catalog");
        println!("  2. Print course list");
        println!("  3. Print course");
        println!("  4. Exit");

        let Some(choice) = prompt(&stdin, "Enter choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => match engine.run() {
                Ok(loaded) => {
                    // Replace only on success; a failed reload keeps the
                    // previous catalog queryable.
                    catalog = Some(loaded);
                    println!("Courses have been loaded");
                }
                Err(e) => println!("{}", e),
            },
            "2" => match &catalog {
                Some(catalog) => {
                    for course in catalog.sorted() {
                        println!("{} : {}", course.identifier, course.name);
                    }
                }
                None => println!("You need to load courses first"),
            },
            "3" => {
                let Some(catalog) = &catalog else {
                    println!("You need to load courses first");
                    continue;
                };

                let Some(mut number) = prompt(&stdin, "Enter a course number: ")? else {
                    break;
                };
                if config.uppercase_lookup() {
                    number = number.to_uppercase();
                }

                match catalog.find(&number) {
                    Ok(course) => print_course(course),
                    Err(e) => println!("{}", e),
                }
            }
            "4" => {
                println!("Have a great day!");
                break;
            }
            _ => println!("Not a valid menu option, try again."),
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line. `None` means stdin hit EOF.
fn prompt(stdin: &io::Stdin, message: &str) -> anyhow::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_course(course: &Course) {
    println!("{} : {}", course.identifier, course.name);
    if !course.prerequisites.is_empty() {
        println!("Prerequisites: {}", course.prerequisites.join(", "));
    }
}
