//! Interactive chat loop.
//!
//! Wires the matcher, response selection, session state, and transcript sink
//! into a line-oriented conversation. Generic over the input/output channel
//! and the randomness source so whole sessions can be scripted in tests.
//!
//! Every per-utterance failure is handled at this boundary: a provider
//! error falls back to the `default` intent, an unknown intent gets a fixed
//! apology, and a transcript failure is logged and ignored. Only a broken
//! I/O channel ends the session early.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::Rng;

use crate::catalog::DEFAULT_INTENT;
use crate::matcher::{IntentMatcher, MatchResult};
use crate::responder::pick_response;
use crate::session::Session;
use crate::transcript::{Exchange, TranscriptSink};

/// Reply used when response selection itself fails.
pub const APOLOGY: &str = "I'm sorry, something went wrong.";

const BANNER: &str = "Chatbot: Hello! I'm here to assist you. Type 'exit' to end the conversation.";

/// Run a conversation until `exit` or end of input.
pub fn run_session<S, G>(
    matcher: &IntentMatcher,
    transcript: &mut S,
    rng: &mut G,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()>
where
    S: TranscriptSink,
    G: Rng,
{
    let mut session = Session::new();
    let mut lines = input.lines();

    writeln!(output, "{BANNER}").context("output channel closed")?;

    // Ask for the name once, before the first utterance.
    write!(output, "What's your name? ")?;
    output.flush()?;
    if let Some(line) = lines.next() {
        session.set_name(&line?);
        if let Some(name) = session.name() {
            writeln!(output, "Nice to meet you, {name}!")?;
        }
    }

    loop {
        write!(output, "You: ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let utterance = line.trim();

        if utterance.eq_ignore_ascii_case("exit") {
            writeln!(output, "Chatbot: {}", session.farewell())?;
            break;
        }

        let (reply, intent) = answer(matcher, rng, utterance);
        writeln!(output, "Chatbot: {reply}")?;

        let exchange = Exchange {
            user: utterance,
            reply: &reply,
            intent: &intent,
        };
        if let Err(err) = transcript.append(&exchange) {
            tracing::warn!(error = %err, "transcript append failed, conversation continues");
        }
    }

    Ok(())
}

/// Produce a reply and the matched intent name for one utterance.
///
/// Never fails: both error paths of the taxonomy are converted to
/// user-visible text here.
fn answer<G: Rng>(matcher: &IntentMatcher, rng: &mut G, utterance: &str) -> (String, String) {
    let matched = match matcher.match_intent(utterance) {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(error = %err, "match failed, falling back to default intent");
            MatchResult {
                intent: DEFAULT_INTENT.to_string(),
                score: 0.0,
            }
        }
    };

    tracing::debug!(intent = %matched.intent, score = matched.score, "utterance matched");

    let reply = match pick_response(matcher.catalog(), &matched.intent, rng) {
        Ok(text) => text.to_string(),
        Err(err) => {
            tracing::error!(error = %err, "response selection failed");
            APOLOGY.to_string()
        }
    };

    (reply, matched.intent)
}
