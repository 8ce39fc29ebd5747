use std::io::{self, BufRead};
use std::path::PathBuf;

use calc_rs::api::{CalculatorEngine, CalculatorEngineConfig, UnaryResultPolicy};
use calc_rs::render::TextRenderer;
use calc_rs::telemetry::init_default_tracing;

const USAGE: &str = "usage: calc_replay [--config <path>] [--guarded-unary] [--width <cols>] [--json] [--trace] [token ...]\n\
     tokens are read from stdin (whitespace separated) when none are given";

#[derive(Debug)]
struct CliArgs {
    config: Option<PathBuf>,
    guarded_unary: bool,
    width: usize,
    json: bool,
    trace: bool,
    tokens: Vec<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let _ = init_default_tracing();

    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            CalculatorEngineConfig::from_json_str(&raw).map_err(|e| e.to_string())?
        }
        None => CalculatorEngineConfig::default(),
    };
    if args.guarded_unary {
        config = config.with_unary_result_policy(UnaryResultPolicy::Guarded);
    }

    let mut engine = CalculatorEngine::new(TextRenderer::new(args.width), config)
        .map_err(|e| e.to_string())?;

    let script = if args.tokens.is_empty() {
        read_stdin_script()?
    } else {
        args.tokens.join(" ")
    };

    for token in script.split_whitespace() {
        engine.press_str(token).map_err(|e| e.to_string())?;
        if args.trace {
            engine.render().map_err(|e| e.to_string())?;
            println!("> {token}");
            print!("{}", engine.renderer().output());
        }
    }

    if args.json {
        let json = engine
            .snapshot_json_contract_v1_pretty()
            .map_err(|e| e.to_string())?;
        println!("{json}");
    } else if !args.trace {
        engine.render().map_err(|e| e.to_string())?;
        print!("{}", engine.renderer().output());
    }
    Ok(())
}

fn read_stdin_script() -> Result<String, String> {
    let stdin = io::stdin();
    let mut script = String::new();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("failed to read stdin: {e}"))?;
        script.push_str(&line);
        script.push(' ');
    }
    Ok(script)
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs {
        config: None,
        guarded_unary: false,
        width: 24,
        json: false,
        trace: false,
        tokens: Vec::new(),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                parsed.width = value
                    .parse()
                    .map_err(|_| format!("invalid --width value `{value}`"))?;
            }
            "--guarded-unary" => parsed.guarded_unary = true,
            "--json" => parsed.json = true,
            "--trace" => parsed.trace = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => parsed.tokens.push(arg),
        }
    }

    Ok(parsed)
}
