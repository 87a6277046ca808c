//! schedule-runner: headless rate-adjustment schedule generator.
//!
//! Usage:
//!   schedule-runner --form loan.json [--seed 12345] [--pretty]
//!   schedule-runner --ipc-mode

use anyhow::Result;
use rate_schedule_core::{config::LoanForm, request::RateRequest, RateAdjustmentSelector};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Generate {
        form: LoanForm,
        #[serde(default)]
        seed: Option<u64>,
    },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let pretty = args.iter().any(|a| a == "--pretty");
    let seed: Option<u64> = args
        .windows(2)
        .find(|w| w[0] == "--seed")
        .and_then(|w| w[1].parse().ok());
    let form_path = args
        .windows(2)
        .find(|w| w[0] == "--form")
        .map(|w| w[1].as_str());

    let selector = RateAdjustmentSelector::new();

    if ipc_mode {
        return run_ipc_loop(&selector);
    }

    let form = match form_path {
        Some(path) => LoanForm::load(path)?,
        None => {
            log::warn!("no --form given, using the built-in sample loan");
            LoanForm::default_test()
        }
    };
    let request = generate(&selector, form, seed)?;
    print_request(&request, pretty)?;
    Ok(())
}

fn generate(selector: &RateAdjustmentSelector, form: LoanForm, seed: Option<u64>) -> Result<RateRequest> {
    let form = match seed {
        Some(seed) => form.with_seed(seed),
        None => form,
    };
    let request = form.build_request(selector)?;
    log::info!(
        "generated {} rate adjustments for a {}-payment loan",
        request.rate_adjustments.as_ref().map_or(0, Vec::len),
        form.loan_term
    );
    Ok(request)
}

fn run_ipc_loop(selector: &RateAdjustmentSelector) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<IpcCommand>(&buffer) {
            Ok(IpcCommand::Quit) => break,
            Ok(IpcCommand::Generate { form, seed }) => match generate(selector, form, seed) {
                Ok(request) => request.to_json()?,
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            },
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        };

        writeln!(stdout, "{reply}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_request(request: &RateRequest, pretty: bool) -> Result<()> {
    let body = if pretty {
        serde_json::to_string_pretty(request)?
    } else {
        serde_json::to_string(request)?
    };
    println!("{body}");
    Ok(())
}
