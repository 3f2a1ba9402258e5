use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use vista::app::LogicThread;
use vista::config::Config;
use vista::page::Page;
use vista::render::PageState;
use vista::{ui, vlog, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// Vista - landing pages for your terminal
#[derive(Parser, Debug)]
#[command(name = "vista")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    VISTA_DEBUG=1   Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Page file to open (TOML). Falls back to the config default, then to
    /// the built-in sample page.
    pub page: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Enable debug logging (writes to ~/.vista/vista.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a page file and print a summary without starting the TUI
    Check {
        /// Page file to validate
        page: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    vista::log::init_with_debug(cli.debug);

    if let Some(Command::Check { page }) = cli.command {
        return run_check(&page);
    }

    vlog!("Vista starting");

    let mut config = Config::load()?;
    if cli.dark {
        config.dark = true;
    }
    let page_path = config.effective_page(cli.page);

    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<PageState>(1);

    let shutdown_clone = shutdown.clone();
    let logic_handle =
        thread::spawn(move || LogicThread::run(config, page_path, state_tx, shutdown_clone));

    let mut terminal = setup_terminal()?;
    let result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let _ = logic_handle.join();
    restore_terminal(&mut terminal)?;
    result
}

/// Validate a page file: parse it and print section and nav counts.
fn run_check(path: &std::path::Path) -> Result<()> {
    let raw = std::fs::read_to_string(path)?;
    let page = Page::parse(&raw)?;

    println!("{}: ok", path.display());
    println!("  Title:     {}", page.title);
    if let Some(tagline) = &page.tagline {
        println!("  Tagline:   {}", tagline);
    }
    println!("  Nav links: {}", page.nav.len());
    println!("  Sections:  {}", page.sections.len());
    println!(
        "  Reveal:    {}",
        page.sections.iter().filter(|s| s.reveal).count()
    );
    println!("  Rows:      {}", page.content_height());

    Ok(())
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<PageState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = PageState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}
