// src/menu.rs
//! Interactive console menu used when no subcommand is given.

use std::path::PathBuf;

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::catalog::fixture::{write_fixture, DEFAULT_FIXTURE_PATH};
use crate::catalog::sample::DEFAULT_SAMPLE_COUNT;
use crate::pipeline::Job;
use crate::storage::{normalize_csv_path, DEFAULT_OUTPUT_PATH};
use crate::utils::AppError;

const MENU_ITEMS: [&str; 3] = [
    "Parse HTML file (recommended)",
    "Generate sample data",
    "Create sample HTML file for testing",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ParseFile,
    Generate,
    CreateFixture,
}

impl MenuChoice {
    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::ParseFile),
            1 => Some(Self::Generate),
            2 => Some(Self::CreateFixture),
            _ => None,
        }
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// The fixture was written; nothing else to do.
    FixtureCreated(PathBuf),
    Run { job: Job, output: PathBuf },
}

/// Parses the sample count prompt. Blank input means the default count.
pub fn parse_count(input: &str) -> Result<usize, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_SAMPLE_COUNT);
    }
    trimmed
        .parse::<usize>()
        .map_err(|e| AppError::Input(format!("'{}' is not a valid product count: {}", trimmed, e)))
}

fn or_default(input: String, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, AppError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Shows the menu and collects the follow-up prompts.
pub fn run_menu() -> Result<MenuAction, AppError> {
    let theme = ColorfulTheme::default();
    let banner = "=".repeat(60);
    println!("{}", banner);
    println!("       {}", style("E-COMMERCE PRODUCT EXTRACTOR").bold());
    println!("{}", banner);

    let choice = Select::with_theme(&theme)
        .with_prompt("Choose an option")
        .items(&MENU_ITEMS)
        .default(0)
        .interact_opt()?
        .and_then(MenuChoice::from_index);

    let job = match choice {
        Some(MenuChoice::CreateFixture) => {
            let path = or_default(
                prompt_text(&theme, "Enter filename for sample HTML (e.g., sample.html)")?,
                DEFAULT_FIXTURE_PATH,
            );
            write_fixture(&path)?;
            println!("You can now use option 1 to parse this file!");
            return Ok(MenuAction::FixtureCreated(PathBuf::from(path)));
        }
        Some(MenuChoice::ParseFile) => {
            let input = prompt_text(&theme, "Enter HTML file path")?;
            if input.trim().is_empty() {
                tracing::info!("No file specified. Creating and using sample HTML file...");
                write_fixture(DEFAULT_FIXTURE_PATH)?;
                Job::ParseFile(PathBuf::from(DEFAULT_FIXTURE_PATH))
            } else {
                Job::ParseFile(PathBuf::from(input.trim()))
            }
        }
        Some(MenuChoice::Generate) => {
            let input = prompt_text(&theme, "Enter number of sample products to generate (default 20)")?;
            Job::Generate(parse_count(&input)?)
        }
        None => {
            tracing::warn!("Invalid choice. Generating sample data...");
            Job::Generate(DEFAULT_SAMPLE_COUNT)
        }
    };

    let output = or_default(
        prompt_text(&theme, "Enter output CSV filename (default: products.csv)")?,
        DEFAULT_OUTPUT_PATH,
    );

    Ok(MenuAction::Run { job, output: normalize_csv_path(&output) })
}
