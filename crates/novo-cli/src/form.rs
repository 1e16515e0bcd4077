//! Interactive terminal form.
//!
//! Presents each question on the 7-point Agree/Disagree scale with no
//! default selection; a blank line leaves a question unanswered. After
//! the first pass a command loop handles submit, reset, answer changes,
//! and quit. A complete submission renders the report and archives the
//! raw responses fire-and-forget.

use std::io::{BufRead, Write};

use eyre::Result;

use novo_core::models::category::Cohort;
use novo_core::models::response::OrdinalChoice;
use novo_core::models::submission::Submission;
use novo_screening::error::ScreeningError;
use novo_screening::recommend;
use novo_screening::session::{Outcome, Session};
use novo_storage::store::{self, SubmissionStore};

pub fn run<R: BufRead, W: Write>(
    store: &SubmissionStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Mental Health Risk Assessment")?;
    writeln!(
        out,
        "This questionnaire assesses risk levels for Depression, Anxiety, and Stress among students."
    )?;
    writeln!(out, "Please answer every question based on how you feel.\n")?;

    write!(out, "Enter your name: ")?;
    out.flush()?;
    let Some(name) = read_line(input)? else {
        return Ok(());
    };

    write!(out, "Cohort (boy / girl, blank to skip): ")?;
    out.flush()?;
    let Some(cohort_input) = read_line(input)? else {
        return Ok(());
    };
    let cohort = Cohort::parse(&cohort_input);

    let mut session = Session::open(cohort);
    collect(&mut session, input, out)?;

    loop {
        let (answered, total) = session.progress();
        writeln!(out, "\nProgress: {answered} / {total} answered")?;
        write!(out, "Command (submit / reset / answer <question> <1-7> / quit): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            break;
        };
        let line = line.trim();

        match line {
            "" => continue,
            "quit" => break,
            "submit" => submit(store, &mut session, &name, cohort, out)?,
            "reset" => {
                session.reset();
                writeln!(out, "Questionnaire reset.")?;
                collect(&mut session, input, out)?;
            }
            _ => {
                if let Some(rest) = line.strip_prefix("answer ") {
                    answer_command(&mut session, rest, out)?;
                } else {
                    writeln!(out, "Unrecognized command: {line}")?;
                }
            }
        }
    }

    Ok(())
}

/// Walk every unanswered question in order, prompting for a choice. A
/// blank line skips the question; EOF ends the pass.
fn collect<R: BufRead, W: Write>(session: &mut Session, input: &mut R, out: &mut W) -> Result<()> {
    let total = session.question_set().len();
    for index in 0..total {
        if session.responses().get(index).is_some() {
            continue;
        }
        let text = session.question_set().questions[index].text.clone();
        writeln!(out, "\n{}. {text}", index + 1)?;
        writeln!(out, "   Agree  1  2  3  4  5  6  7  Disagree")?;
        loop {
            write!(out, "   > ")?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            match parse_choice(line) {
                Some(choice) => {
                    if let Err(e) = session.record(index, choice) {
                        writeln!(out, "   {e}")?;
                    }
                    break;
                }
                None => {
                    writeln!(out, "   Enter a number from 1 to 7, or leave blank to skip.")?;
                }
            }
        }
    }
    Ok(())
}

fn submit<W: Write>(
    store: &SubmissionStore,
    session: &mut Session,
    name: &str,
    cohort: Cohort,
    out: &mut W,
) -> Result<()> {
    match session.submit() {
        Ok(outcome) => {
            let outcome = outcome.clone();
            render_outcome(out, &outcome)?;

            // Persistence is fire-and-forget; a failure here must never
            // hide the report the respondent just saw.
            let raw: Vec<u8> = session
                .responses()
                .iter()
                .map(|(_, choice)| u8::from(choice))
                .collect();
            let submission = Submission::new(name, cohort, raw);
            store::archive_fire_and_forget(store, &submission);
        }
        Err(ScreeningError::Incomplete { answered, total }) => {
            writeln!(
                out,
                "Please answer all questions. You've completed {answered} out of {total}."
            )?;
        }
        Err(e) => writeln!(out, "{e}")?,
    }
    Ok(())
}

fn answer_command<W: Write>(session: &mut Session, args: &str, out: &mut W) -> Result<()> {
    let mut parts = args.split_whitespace();
    let question = parts.next().and_then(|s| s.parse::<usize>().ok());
    let choice = parts.next().and_then(parse_choice);
    match (question, choice) {
        (Some(number), Some(choice)) if number >= 1 => {
            if let Err(e) = session.record(number - 1, choice) {
                writeln!(out, "{e}")?;
            }
        }
        _ => writeln!(out, "Usage: answer <question number> <choice 1-7>")?,
    }
    Ok(())
}

fn render_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    writeln!(out, "\nResults:")?;
    for (category, score) in outcome.scores.entries() {
        let tier = outcome.report.get(category);
        writeln!(out, "  {category} Score: {score} -> {tier} Risk")?;
    }

    writeln!(out, "\nRecommendations:")?;
    writeln!(out, "  {}", recommend::headline(outcome.recommendation))?;
    for line in recommend::advice(outcome.recommendation) {
        writeln!(out, "  - {line}")?;
    }
    Ok(())
}

/// Frontend choice "1"..="7" maps to ordinal index 0..=6.
fn parse_choice(s: &str) -> Option<OrdinalChoice> {
    let n: u8 = s.trim().parse().ok()?;
    if n == 0 {
        return None;
    }
    OrdinalChoice::new(n - 1).ok()
}

/// Read one line, trailing newline stripped. `None` at EOF.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end().to_string()))
}
