use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::page::Page;
use crate::render::PageState;
use crate::tea::{update, Command, Message, Model};
use crate::{vlog_debug, vlog_error, Result};

const MAX_BG_MESSAGES: usize = 50;

pub struct LogicThread;

impl LogicThread {
    pub fn run(
        config: Config,
        page_path: Option<PathBuf>,
        state_tx: Sender<PageState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        Runtime::new()?.block_on(Self::run_async(config, page_path, state_tx, shutdown))
    }

    async fn run_async(
        config: Config,
        page_path: Option<PathBuf>,
        state_tx: Sender<PageState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        vlog_debug!(
            "LogicThread::run_async dark={} page={:?}",
            config.dark,
            page_path
        );
        let mut model = Model::new(config);
        if let Ok(size) = crossterm::terminal::size() {
            model.viewport = size;
        }

        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();

        // Kick off the page load; the loading overlay stays up until the
        // loader reports back.
        execute_command(Command::LoadPage { path: page_path }, &msg_tx);
        send_state(&state_tx, &model);
        model.dirty = false;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Keyboard input (priority)
            while event::poll(Duration::ZERO)? {
                let msg = match event::read()? {
                    Event::Key(key) => Message::Key(key),
                    Event::Resize(w, h) => Message::Resize(w, h),
                    _ => continue,
                };

                for cmd in update(&mut model, msg) {
                    if execute_command(cmd, &msg_tx) {
                        shutdown.store(true, Ordering::Relaxed);
                        return Ok(());
                    }
                }

                if model.dirty {
                    send_state(&state_tx, &model);
                    model.dirty = false;
                }
            }

            // Background messages (bounded)
            for _ in 0..MAX_BG_MESSAGES {
                let Ok(msg) = msg_rx.try_recv() else { break };
                for cmd in update(&mut model, msg) {
                    if execute_command(cmd, &msg_tx) {
                        shutdown.store(true, Ordering::Relaxed);
                        return Ok(());
                    }
                }
            }

            if model.dirty {
                send_state(&state_tx, &model);
                model.dirty = false;
            }

            tokio::time::sleep(Duration::from_micros(500)).await;
        }

        Ok(())
    }
}

/// Execute a side effect. Returns true when the app should quit.
fn execute_command(cmd: Command, msg_tx: &mpsc::UnboundedSender<Message>) -> bool {
    match cmd {
        Command::LoadPage { path } => {
            vlog_debug!("Command::LoadPage path={:?}", path);
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let msg = match path {
                    Some(p) => match Page::load(&p).await {
                        Ok(page) => Message::PageLoaded(page),
                        Err(e) => {
                            vlog_error!("Page load failed: {} - {}", p.display(), e);
                            Message::PageLoadFailed(e.to_string())
                        }
                    },
                    // No page given: the built-in sample is the content.
                    None => Message::PageLoaded(Page::sample()),
                };
                let _ = tx.send(msg);
            });
        }

        Command::Quit => {
            vlog_debug!("Command::Quit");
            return true;
        }
    }

    false
}

fn send_state(state_tx: &Sender<PageState>, model: &Model) {
    let _ = state_tx.try_send(model.snapshot());
}
