//! wiregen CLI - Command-line interface
//!
//! Commands:
//!   generate - Synthesize creator classes from a component graph
//!   check    - Report which components get a creator, without rendering
//!   schema   - Print the JSON schema for the input format

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use wiregen::*;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "generate" => cmd_generate(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "schema" => cmd_schema(),
        "version" | "--version" | "-v" => {
            println!("wiregen {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
wiregen - creator synthesis for generated components

USAGE:
    wiregen <COMMAND> [OPTIONS]

COMMANDS:
    generate <graph.yaml>   Synthesize creator classes from a component graph
    check <graph.yaml>      Report which components get a creator
    schema                  Print JSON schema for the input format
    version                 Print version

OPTIONS:
    --output <dir>          Write one .java file per creator (default: stdout)
    --package <name>        Package declaration for standalone output
    --json                  JSON output format (generate, check)

EXAMPLES:
    wiregen generate graph.yaml --output gen/ --package com.example.generated
    wiregen check graph.yaml
    wiregen schema
"#
    );
}

fn cmd_generate(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err("Usage: wiregen generate <graph.yaml> [--output <dir>] [--package <name>]".into());
    }

    let graph_path = &args[0];
    let output = parse_output_arg(args);
    let json_output = args.contains(&"--json".to_string());
    let config = RenderConfig {
        package: parse_package_arg(args),
        ..RenderConfig::default()
    };

    let graph_content = fs::read_to_string(graph_path).map_err(Error::Io)?;
    let input = SynthesisInput::from_yaml(&graph_content)?;
    let outcomes = create_all(&input)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    for outcome in &outcomes {
        let Some(creator) = &outcome.creator else {
            eprintln!("- {}: no creator needed", outcome.component);
            continue;
        };
        let code = render(creator, &config);
        match &output {
            Some(dir) => {
                fs::create_dir_all(dir).map_err(Error::Io)?;
                let path = dir.join(format!("{}.java", creator.name()));
                fs::write(&path, &code).map_err(Error::Io)?;
                eprintln!("Written to: {}", path.display());
            }
            None => println!("{}", code),
        }
    }
    Ok(())
}

fn cmd_check(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err("Usage: wiregen check <graph.yaml>".into());
    }

    let graph_content = fs::read_to_string(&args[0]).map_err(Error::Io)?;
    let input = SynthesisInput::from_yaml(&graph_content)?;
    let outcomes = create_all(&input)?;

    for (component, outcome) in input.components.iter().zip(&outcomes) {
        match &outcome.creator {
            Some(creator) => println!(
                "✓ {} → {} ({} provided requirement(s))",
                outcome.component,
                creator.name(),
                creator.provided_requirements().len()
            ),
            None => println!("- {}: {}", outcome.component, skip_reason(component)),
        }
    }
    Ok(())
}

fn skip_reason(component: &ComponentImplementation) -> &'static str {
    if !component.descriptor.has_creator() {
        "no creator declared"
    } else {
        "creator inherited from the base implementation"
    }
}

fn cmd_schema() -> Result<()> {
    let schema = schemars::schema_for!(SynthesisInput);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    for (i, arg) in args.iter().enumerate() {
        if arg == "--output" || arg == "-o" {
            if let Some(path) = args.get(i + 1) {
                return Some(PathBuf::from(path));
            }
        }
    }
    None
}

fn parse_package_arg(args: &[String]) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        if arg == "--package" {
            return args.get(i + 1).cloned();
        }
    }
    None
}
