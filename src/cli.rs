use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use nu_ansi_term::Color;

use meta_interview::render::{self, Column, Table};
use meta_interview::{project_info, GreetingRequest};

// CLI arguments parsing structure
#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(short = 'j', long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Greet a person, optionally with a formal greeting
    Greet {
        /// Name to greet (defaults to "World")
        #[arg(long)]
        name: Option<String>,

        /// Use the formal greeting style
        #[arg(short = 'f', long)]
        formal: bool,
    },
    /// Display project information as a table
    Info,
}

// Execute the selected command
pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Greet { name, formal }) => cmd_greet(name.clone(), *formal, cli.json),
        Some(Commands::Info) => cmd_info(cli.json),
        None => cmd_help(),
    }
}

// Command implementations
fn cmd_greet(name: Option<String>, formal: bool, json_output: bool) -> Result<()> {
    let greeting = GreetingRequest::new(name, formal).resolve();

    if json_output {
        // Output as JSON
        let json = serde_json::to_string_pretty(&greeting)
            .context("failed to serialize greeting to JSON")?;
        println!("{json}");
    } else {
        let style = Color::Green.bold();
        println!(
            "{}",
            render::styled_line(&greeting.message, style, render::use_colors())
        );
    }

    Ok(())
}

fn cmd_info(json_output: bool) -> Result<()> {
    let rows = project_info();

    if json_output {
        // Output as JSON
        let json = serde_json::to_string_pretty(&rows)
            .context("failed to serialize project information to JSON")?;
        println!("{json}");
    } else {
        let mut table = Table::new(
            "Project Information",
            vec![
                Column::new("Attribute", Color::Cyan.normal()),
                Column::new("Value", Color::Magenta.normal()),
            ],
        );

        for row in &rows {
            table.add_row(vec![row.attribute.clone(), row.value.clone()]);
        }

        println!("{}", table.render(render::use_colors()));
    }

    Ok(())
}

// Running without a subcommand shows usage without treating it as an error
fn cmd_help() -> Result<()> {
    Cli::command()
        .print_help()
        .context("failed to print help text")?;
    Ok(())
}
