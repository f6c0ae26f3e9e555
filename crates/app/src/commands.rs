//! Command handlers. Output goes to the given writer so the handlers can be
//! exercised without a terminal.

use std::io::Write;

use api_types::ticket::{ErrorView, ExpandReport};
use lottery_engine::{BetType, Classification, Generator, classify};

use crate::{
    error::Result,
    ticket::{Entry, TicketEntry},
    views,
};

pub fn classify_inputs(inputs: &[String], json: bool, out: &mut impl Write) -> Result<()> {
    let classified: Vec<(&str, Classification)> = inputs
        .iter()
        .map(|input| (input.as_str(), classify(input)))
        .collect();

    if json {
        let views: Vec<_> = classified
            .iter()
            .map(|(input, c)| views::classification_view(input, c))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &views)?;
        writeln!(out)?;
        return Ok(());
    }

    for (input, c) in &classified {
        if !c.is_valid {
            writeln!(out, "{input}\tinvalid\t{}", c.display_label)?;
            continue;
        }
        let section = c.section.map(|s| s.label()).unwrap_or_default();
        writeln!(
            out,
            "{input}\t{}\t[{section}]\t{}",
            c.display_label,
            describe_generator(&c.generator)
        )?;
    }
    Ok(())
}

/// Runs every input through the ticket-entry workflow. Returns `false` if
/// any input was refused.
pub fn expand_inputs(
    workflow: &TicketEntry,
    inputs: &[String],
    draw: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> Result<bool> {
    let mut entries: Vec<Entry> = Vec::new();
    let mut errors: Vec<ErrorView> = Vec::new();
    for input in inputs {
        match workflow.enter(input, draw) {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                tracing::debug!("entry {input:?} refused: {err}");
                errors.push(ErrorView {
                    input: input.trim().to_string(),
                    error: err.to_string(),
                });
            }
        }
    }

    if json {
        let report = ExpandReport {
            entries: entries.iter().map(views::entry_view).collect(),
            errors: errors.clone(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        for entry in &entries {
            let suffix = if entry.truncated { " (truncated)" } else { "" };
            writeln!(
                out,
                "{}\t{}\t{} line(s){suffix}",
                entry.input,
                entry.classification.display_label,
                entry.lines.len()
            )?;
            for line in &entry.lines {
                writeln!(out, "  {}\t{}", line.play_number, line.section)?;
            }
        }
        for error in &errors {
            writeln!(out, "error: {}", error.error)?;
        }
    }

    Ok(errors.is_empty())
}

pub fn list_catalogue(json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &views::catalogue())?;
        writeln!(out)?;
        return Ok(());
    }
    for bet_type in BetType::ALL {
        writeln!(
            out,
            "{:<22}{:<22}{:<18}{}",
            bet_type.code(),
            bet_type.name(),
            bet_type.section().label(),
            bet_type.digits()
        )?;
    }
    Ok(())
}

fn describe_generator(generator: &Generator) -> String {
    match generator {
        Generator::None => "single".to_string(),
        Generator::Combinations => "combinations".to_string(),
        Generator::NumericSequence { start, end } | Generator::PairSequence { start, end } => {
            format!("sequence {start}..{end}")
        }
        Generator::Plus100 => "+100".to_string(),
        Generator::RangeOffset { count } => format!("range +{count}"),
    }
}
