extern crate env_logger;
extern crate seo_checklist;
extern crate serde_json;

pub mod options;

use clap::Parser;
use options::Cli;
use seo_checklist::checklist::Checklist;
use seo_checklist::configuration::Configuration;
use seo_checklist::export::write_xlsx;
use seo_checklist::report::ResultTable;
use std::process::ExitCode;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Ask for the url on standard input.
async fn prompt_url() -> std::io::Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(b"Enter the URL of the page you want to check: ")
        .await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;

    Ok(line.trim().to_string())
}

/// Print the table as `label: value` lines.
fn print_table(table: &ResultTable) {
    for row in table.rows() {
        println!("URL: {}", row.url);
        for cell in row.cells() {
            println!("{}: {}", cell.column, cell.text);
        }
        println!();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        use env_logger::Env;
        let env = Env::default()
            .filter_or("RUST_LOG", "info")
            .write_style_or("RUST_LOG_STYLE", "always");

        env_logger::init_from_env(env);
    }

    let url = match cli.url {
        Some(url) => url,
        None => match prompt_url().await {
            Ok(url) => url,
            Err(e) => {
                eprintln!("Unable to read the URL: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    if url.is_empty() {
        eprintln!("No URL given. Pass --url or type the page URL, ex: https://example.com.");
        return ExitCode::FAILURE;
    }

    let mut config = Configuration::new();

    config
        .with_request_timeout(match cli.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        })
        .with_redirect_limit(cli.redirect_limit)
        .with_user_agent(cli.user_agent.as_deref())
        .with_strategy(cli.strategy)
        .with_pagespeed_api_key(cli.pagespeed_key)
        .with_indexation(!cli.no_indexation);

    if let Some(ref agent) = cli.search_user_agent {
        config.with_browser_user_agent(agent);
    }

    let checklist = match Checklist::new(config) {
        Ok(checklist) => checklist,
        Err(e) => {
            eprintln!("Unable to build the http client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let table = checklist
        .run_with_progress(&url, |check| println!("{}", check.heading()))
        .await;

    println!("🤖 All Checks have been finalized!");

    if cli.json {
        match serde_json::to_string_pretty(&table) {
            Ok(j) => println!("{j}"),
            Err(e) => eprintln!("{:?}", e),
        }
    } else {
        print_table(&table);
    }

    match write_xlsx(&table, &cli.output) {
        Ok(_) => {
            println!("Results saved to {}", cli.output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Unable to write {}: {e}", cli.output);
            ExitCode::FAILURE
        }
    }
}
