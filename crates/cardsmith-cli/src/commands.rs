use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use chrono::{Datelike, Utc};
use tracing::{debug, info, warn};

use cardsmith_check::{CancellationFlag, CheckReport, OutcomeSimulator, render_summary};
use cardsmith_core::{
    Country, IdentityRecord, OutcomeRecord, classify, entropy_rng, export_lines, format_record,
    import_lines, is_valid_checksum, seeded_rng,
};
use cardsmith_generate::output::csv::{write_cards_csv, write_identities_csv};
use cardsmith_generate::{
    CardBatchRequest, GenerationError, MonthSelector, SecurityCodeSelector, YearSelector,
    generate_batch, generate_identity,
};
use rand_chacha::ChaCha8Rng;

use crate::workspace::{Settings, load_settings, save_settings, write_bytes_atomic};
use crate::{
    CardFormat, CheckArgs, CliError, GenerateArgs, IdentityArgs, IdentityFormat, InitConfigArgs,
    ValidateArgs,
};

pub fn run_generate(config: &Path, args: GenerateArgs) -> Result<(), CliError> {
    let settings = load_settings(config)?;
    let request = CardBatchRequest {
        pattern: args.pattern.unwrap_or(settings.generator.pattern),
        length: args.length.unwrap_or(settings.generator.length),
        month: args.month.parse::<MonthSelector>()?,
        year: args.year.parse::<YearSelector>()?,
        security_code: args.cvv.parse::<SecurityCodeSelector>()?,
        quantity: args.quantity.unwrap_or(settings.generator.quantity),
    };
    request.validate()?;

    let reference_year = u32::try_from(Utc::now().year())
        .map_err(|_| CliError::InvalidConfig("system clock is before year 0".to_string()))?;
    let (seed, mut rng) = rng_for(args.seed);
    info!(event = "generate_started", seed, quantity = request.quantity, pattern = %request.pattern);

    let cards = generate_batch(&request, reference_year, &mut rng);

    let payload = match args.format {
        CardFormat::Pipe => {
            let mut text = export_lines(&cards);
            text.push('\n');
            text.into_bytes()
        }
        CardFormat::Csv => {
            let mut buffer = Vec::new();
            write_cards_csv(&mut buffer, &cards).map_err(GenerationError::from)?;
            buffer
        }
    };
    emit(args.out.as_deref(), &payload)?;

    info!(event = "generate_finished", generated = cards.len());
    Ok(())
}

pub async fn run_check(config: &Path, args: CheckArgs) -> Result<(), CliError> {
    let settings = load_settings(config)?;
    let input = read_input(args.input.as_deref())?;
    let lines = import_lines(&input);

    let simulator = OutcomeSimulator::new(settings.checker.simulator_config(args.delay_ms));
    let (seed, mut rng) = rng_for(args.seed);
    let started_at = Utc::now();
    let clock = Instant::now();
    info!(event = "check_started", seed, lines = lines.len());

    let cancel = CancellationFlag::new();
    let trigger = cancel.clone();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!(event = "interrupt_received");
            trigger.cancel();
        }
    });

    let mut stderr = io::stderr();
    let run = simulator
        .run(&lines, &mut rng, &cancel, |progress| {
            if let Err(err) = write!(
                stderr,
                "\rchecked {}/{} ({:.0}%)",
                progress.completed,
                progress.total,
                progress.fraction() * 100.0
            ) {
                debug!(event = "progress_write_failed", error = %err);
            }
        })
        .await;
    ctrl_c.abort();
    if !lines.is_empty() {
        eprintln!();
    }

    let mut stdout = io::stdout().lock();
    for outcome in &run.outcomes {
        writeln!(stdout, "{}", outcome_line(outcome))?;
    }

    let report = CheckReport::new(run, &input, seed, simulator.config().bands, started_at);
    if let Some(path) = args.report.as_deref() {
        let encoded = serde_json::to_vec_pretty(&report)?;
        write_bytes_atomic(path, &encoded)?;
        info!(event = "report_written", path = %path.display());
    }
    writeln!(stdout)?;
    writeln!(stdout, "{}", render_summary(&report))?;

    info!(
        event = "check_finished",
        processed = report.summary.processed,
        cancelled = report.summary.cancelled,
        duration_ms = clock.elapsed().as_millis() as u64
    );
    Ok(())
}

pub fn run_identity(config: &Path, args: IdentityArgs) -> Result<(), CliError> {
    let settings = load_settings(config)?;
    let country = requested_country(args.country.as_deref(), settings.identity.country);
    let (seed, mut rng) = rng_for(args.seed);
    info!(event = "identity_started", seed, count = args.count, country = %country);

    let identities: Vec<IdentityRecord> = (0..args.count)
        .map(|_| generate_identity(&country, &mut rng))
        .collect();

    let mut stdout = io::stdout().lock();
    match args.format {
        IdentityFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &identities)?;
            writeln!(stdout)?;
        }
        IdentityFormat::Csv => {
            write_identities_csv(&mut stdout, &identities).map_err(GenerationError::from)?;
        }
        IdentityFormat::Text => {
            let blocks: Vec<String> = identities.iter().map(identity_block).collect();
            writeln!(stdout, "{}", blocks.join("\n\n"))?;
        }
    }
    Ok(())
}

pub fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    for number in &args.numbers {
        let number = number.trim();
        let verdict = if is_valid_checksum(number) {
            "valid"
        } else {
            "invalid"
        };
        writeln!(stdout, "{number}\t{verdict}\t{}", classify(number))?;
    }
    Ok(())
}

pub fn run_init_config(config: &Path, args: InitConfigArgs) -> Result<(), CliError> {
    if config.exists() && !args.force {
        return Err(CliError::InvalidConfig(format!(
            "{} already exists (use --force to overwrite)",
            config.display()
        )));
    }
    save_settings(config, &Settings::default())?;
    info!(event = "config_written", path = %config.display());
    println!("wrote {}", config.display());
    Ok(())
}

fn rng_for(seed: Option<u64>) -> (u64, ChaCha8Rng) {
    match seed {
        Some(seed) => (seed, seeded_rng(seed)),
        None => entropy_rng(),
    }
}

/// Command-line codes are folded to upper case before the exact lookup in
/// the generator; the settings value is already a known country.
fn requested_country(arg: Option<&str>, configured: Country) -> String {
    match arg {
        Some(code) => code.trim().to_ascii_uppercase(),
        None => configured.code().to_string(),
    }
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => Ok(io::read_to_string(io::stdin())?),
    }
}

fn emit(out: Option<&Path>, payload: &[u8]) -> Result<(), CliError> {
    match out {
        Some(path) => {
            write_bytes_atomic(path, payload)?;
            info!(event = "export_written", path = %path.display(), bytes = payload.len());
        }
        None => io::stdout().lock().write_all(payload)?,
    }
    Ok(())
}

fn outcome_line(outcome: &OutcomeRecord) -> String {
    let mut fields = vec![
        outcome.status.to_string(),
        format_record(&outcome.card),
        outcome.card.network.to_string(),
        outcome.message.clone(),
    ];
    fields.extend(outcome.issuer_label.iter().cloned());
    fields.extend(outcome.region_label.iter().cloned());
    fields.join(" | ")
}

fn identity_block(identity: &IdentityRecord) -> String {
    [
        format!("{} {} ({})", identity.first_name, identity.last_name, identity.gender),
        format!("{}, {}", identity.street_line, identity.city),
        format!(
            "{} {} {}",
            identity.region_label, identity.postal_code, identity.country
        ),
        format!("phone: {}", identity.phone),
        format!("email: {}", identity.email),
        format!("born: {}", identity.birth_date),
        format!("national id: {}", identity.national_id),
    ]
    .join("\n")
}
