use crate::players::Bot;
use crate::protocol::MAX_FIELDS;
use crate::protocol::MIN_FIELDS;
use crate::protocol::Update;
use crate::protocol::split;
use crate::state::MatchState;
use crate::state::Request;
use anyhow::Context;
use std::io::BufRead;
use std::io::Write;

/// Plays one match: reads engine lines, folds them into the match state,
/// and answers `setup` and `go` through the bot.
///
/// Strictly one line at a time. Malformed lines are logged and skipped;
/// only I/O failures end the loop early.
#[derive(Debug)]
pub struct Client<B: Bot> {
    state: MatchState,
    bot: B,
    fields: usize,
}

impl<B: Bot> Client<B> {
    pub fn new(bot: B) -> Self {
        Self {
            state: MatchState::default(),
            bot,
            fields: MAX_FIELDS,
        }
    }
    /// Caps the number of fields read from each line, never below
    /// [`MIN_FIELDS`] so `go` and `setup` always get through.
    pub fn fields(mut self, fields: usize) -> Self {
        if fields < MIN_FIELDS {
            log::warn!("field cap {} too small, using {}", fields, MIN_FIELDS);
        }
        self.fields = fields.max(MIN_FIELDS);
        self
    }
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Runs until the engine closes `input`.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            let n = input
                .read_until(b'\n', &mut buffer)
                .context("reading from engine")?;
            if n == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            self.handle(&line, &mut output)?;
        }
        log::info!("engine closed input after {}", self.state.info());
        Ok(())
    }

    /// Applies one line, answering the engine if it asked for something.
    pub fn handle<W>(&mut self, line: &str, output: &mut W) -> anyhow::Result<()>
    where
        W: Write,
    {
        let fields = split(line, self.fields);
        if fields.is_empty() {
            return Ok(());
        }
        log::debug!("<< {}", line.trim_end());
        let update = Update::decode(&fields, self.state.named());
        match self.state.ingest(update) {
            Some(Request::Go) => {
                let decision = self.bot.go(&self.state);
                self.state.expire();
                log::info!(">> {}", decision);
                reply(output, decision)
            }
            Some(Request::Setup) => {
                let ready = self.bot.setup(&self.state);
                self.state.expire();
                reply(output, ready)
            }
            None => Ok(()),
        }
    }
}

/// The engine blocks on this exact line, so it goes out immediately.
fn reply<W, D>(output: &mut W, line: D) -> anyhow::Result<()>
where
    W: Write,
    D: std::fmt::Display,
{
    writeln!(output, "{}", line).context("writing to engine")?;
    output.flush().context("flushing to engine")
}
