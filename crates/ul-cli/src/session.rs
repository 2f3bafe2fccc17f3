//! Interactive session: a single loop that owns the store and serializes
//! every mutation, whether it comes from a typed command or from the fetch.

use crate::error::Result as CliErrorResult;
use crate::session_commands::{SessionCommands, SessionLine};
use crate::terminal;

use std::fmt::Display;
use std::io::BufRead;

use log::{debug, warn};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::{mpsc, oneshot};
use ul_core::{Intent, LoadOutcome, TableRenderer, UserRecord, ViewStore, apply_fetch};

const PROMPT: &str = "> ";
const INPUT_BUFFER: usize = 16;

/// What the loop does after handling one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Blank line
    Idle,
    /// State changed (or `show`): print the table
    Render,
    Message(String),
    Quit,
}

pub struct Session {
    store: ViewStore,
    paint: bool,
}

impl Session {
    pub fn new(store: ViewStore, paint: bool) -> Self {
        Self { store, paint }
    }

    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    pub fn render(&self) -> String {
        terminal::format_view(&self.store, self.paint)
    }

    /// Run until `quit` or until the input closes.
    ///
    /// The fetch result is applied as soon as it arrives. When both a line
    /// and the fetch result are ready, the fetch result goes first.
    pub async fn run<W, E>(
        &mut self,
        mut lines: mpsc::Receiver<String>,
        output: &mut W,
        mut fetch: oneshot::Receiver<Result<Vec<UserRecord>, E>>,
    ) -> CliErrorResult<()>
    where
        W: AsyncWrite + Unpin,
        E: Display,
    {
        let mut pending = true;
        write_out(output, &self.render()).await?;
        write_out(output, PROMPT).await?;

        loop {
            tokio::select! {
                biased;

                result = &mut fetch, if pending => {
                    pending = false;
                    let notice = match result {
                        Ok(result) => match apply_fetch(&mut self.store, result) {
                            LoadOutcome::Loaded(_) => None,
                            LoadOutcome::Failed => Some("Could not load users, see the log for details\n"),
                        },
                        Err(_) => {
                            warn!("Fetch task ended without reporting a result");
                            self.store.mark_load_failed();
                            Some("Could not load users\n")
                        }
                    };

                    write_out(output, "\n").await?;
                    if let Some(notice) = notice {
                        write_out(output, notice).await?;
                    }
                    write_out(output, &self.render()).await?;
                    write_out(output, PROMPT).await?;
                }

                line = lines.recv() => {
                    let Some(line) = line else {
                        debug!("Input closed");
                        break;
                    };

                    match self.handle_line(&line) {
                        Reply::Idle => {}
                        Reply::Render => write_out(output, &self.render()).await?,
                        Reply::Message(message) => {
                            write_out(output, &message).await?;
                            write_out(output, "\n").await?;
                        }
                        Reply::Quit => break,
                    }
                    write_out(output, PROMPT).await?;
                }
            }
        }

        write_out(output, "\n").await?;
        Ok(())
    }

    /// Parse and apply one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = match SessionLine::parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::Idle,
            Err(e) => return Reply::Message(e.render().to_string().trim_end().to_string()),
        };
        debug!("Session command: {command:?}");

        match command {
            SessionCommands::Colors => self.apply(Intent::ToggleColors),
            SessionCommands::ToggleCountry => self.apply(Intent::ToggleCountrySort),
            SessionCommands::Sort { key } => self.apply(Intent::SortBy(key)),
            SessionCommands::Filter { .. } => {
                self.apply(Intent::FilterCountry(SessionLine::arguments(line).to_string()))
            }
            SessionCommands::Delete { target } => self.delete(&target),
            SessionCommands::Reset => self.apply(Intent::Reset),
            SessionCommands::Show => Reply::Render,
            SessionCommands::Ids => {
                let ids = terminal::format_ids(&self.store);
                if ids.is_empty() {
                    Reply::Message(String::from("(no users)"))
                } else {
                    Reply::Message(ids.trim_end().to_string())
                }
            }
            SessionCommands::Help => Reply::Message(SessionLine::help_text()),
            SessionCommands::Quit => Reply::Quit,
        }
    }

    fn apply(&mut self, intent: Intent) -> Reply {
        self.store.dispatch(intent);
        Reply::Render
    }

    /// `target` is a record id, or `#N` for the N-th visible row
    fn delete(&mut self, target: &str) -> Reply {
        let intent = match target.strip_prefix('#') {
            Some(position) => match self.row_delete_intent(position) {
                Some(intent) => intent,
                None => return Reply::Message(format!("No row {target}")),
            },
            None => Intent::Delete(target.to_string()),
        };

        let before = self.store.current().len();
        self.store.dispatch(intent);

        if self.store.current().len() < before {
            Reply::Render
        } else {
            Reply::Message(format!("No user with id {target}"))
        }
    }

    fn row_delete_intent(&self, position: &str) -> Option<Intent> {
        let index = position.parse::<usize>().ok()?.checked_sub(1)?;
        let table = TableRenderer::render(&self.store.derived(), self.store.params().show_colors);
        table.rows.get(index).map(|row| row.delete_intent())
    }
}

/// Forward stdin lines from a dedicated thread.
///
/// Blocking reads stay off the runtime, so quitting never waits on a
/// pending read.
pub fn stdin_lines() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(INPUT_BUFFER);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    rx
}

async fn write_out<W>(output: &mut W, text: &str) -> CliErrorResult<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
