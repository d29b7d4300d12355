// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flumen CLI entrypoint.
//!
//! By default this reads a flow document (file argument or stdin), normalizes
//! it, and writes the reordered document (stdout or `--out`).
//!
//! Use `--trigger` to fire the scheduled job-trigger entry point once instead
//! (intended for schedulers that shell out per task).

use std::error::Error;
use std::fs;
use std::io::Read;

use flumen::normalize::normalize_to_string;
use flumen::trigger::{JobControl, TriggerParams};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<input.xml>] [--out <path>]\n  {program} --trigger --control-url <url> [--job-name <name>] [--app-name <name>] [--execution-id <id>] [--command <command>]\n\nNormalize mode (default) reads the flow document from <input.xml> (or stdin)\nand writes the document reordered by transition flow to --out (or stdout).\n\n--trigger fires the job-trigger entry point once against the job-control\nendpoint at --control-url. A missing job-name/app-name is logged and\nskipped; any response other than 201 fails the run."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    trigger: bool,
    input: Option<String>,
    out: Option<String>,
    control_url: Option<String>,
    job_name: Option<String>,
    app_name: Option<String>,
    execution_id: Option<String>,
    command: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    fn set_once(slot: &mut Option<String>, value: Option<String>) -> Result<(), ()> {
        if slot.is_some() {
            return Err(());
        }
        *slot = Some(value.ok_or(())?);
        Ok(())
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--trigger" => {
                if options.trigger {
                    return Err(());
                }
                options.trigger = true;
            }
            "--out" => set_once(&mut options.out, args.next())?,
            "--control-url" => set_once(&mut options.control_url, args.next())?,
            "--job-name" => set_once(&mut options.job_name, args.next())?,
            "--app-name" => set_once(&mut options.app_name, args.next())?,
            "--execution-id" => set_once(&mut options.execution_id, args.next())?,
            "--command" => set_once(&mut options.command, args.next())?,
            _ if arg.starts_with('-') => return Err(()),
            _ => set_once(&mut options.input, Some(arg))?,
        }
    }

    if options.trigger {
        if options.control_url.is_none() || options.input.is_some() || options.out.is_some() {
            return Err(());
        }
    } else if options.control_url.is_some()
        || options.job_name.is_some()
        || options.app_name.is_some()
        || options.execution_id.is_some()
        || options.command.is_some()
    {
        return Err(());
    }

    Ok(options)
}

fn run_trigger(options: &CliOptions) -> Result<(), Box<dyn Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let control_url = options
        .control_url
        .as_deref()
        .expect("control url validated in parse_options");
    let control = JobControl::new(control_url);
    let params = TriggerParams {
        job_name: options.job_name.clone(),
        app_name: options.app_name.clone(),
        execution_id: options.execution_id.clone(),
        command: options.command.clone(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(control.fire(&params))?;
    Ok(())
}

fn run_normalize(options: &CliOptions) -> Result<(), Box<dyn Error>> {
    let input = match &options.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let output = normalize_to_string(&input)?;

    match &options.out {
        Some(path) => fs::write(path, output)?,
        None => print!("{output}"),
    }
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "flumen".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.trigger {
            run_trigger(&options)
        } else {
            run_normalize(&options)
        }
    })();

    if let Err(err) = result {
        eprintln!("flumen: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_normalize_mode_arguments() {
        let options = parse(&["flow.xml", "--out", "sorted.xml"]).expect("options");
        assert_eq!(options.input.as_deref(), Some("flow.xml"));
        assert_eq!(options.out.as_deref(), Some("sorted.xml"));
        assert!(!options.trigger);
    }

    #[test]
    fn parses_trigger_mode_arguments() {
        let options = parse(&[
            "--trigger",
            "--control-url",
            "http://127.0.0.1:3000",
            "--job-name",
            "nightly",
            "--app-name",
            "billing",
        ])
        .expect("options");
        assert!(options.trigger);
        assert_eq!(options.control_url.as_deref(), Some("http://127.0.0.1:3000"));
        assert_eq!(options.job_name.as_deref(), Some("nightly"));
        assert_eq!(options.app_name.as_deref(), Some("billing"));
    }

    #[test]
    fn rejects_duplicate_and_mixed_mode_arguments() {
        assert_eq!(parse(&["a.xml", "b.xml"]), Err(()));
        assert_eq!(parse(&["--out", "x", "--out", "y"]), Err(()));
        assert_eq!(parse(&["--trigger"]), Err(()));
        assert_eq!(parse(&["--trigger", "--control-url", "u", "a.xml"]), Err(()));
        assert_eq!(parse(&["--job-name", "nightly"]), Err(()));
        assert_eq!(parse(&["--unknown"]), Err(()));
        assert_eq!(parse(&["--out"]), Err(()));
    }
}
