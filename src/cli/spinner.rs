use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{
    cursor::MoveToColumn,
    execute,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::Clear,
    terminal::ClearType,
};

use super::theme::Theme;

/// Background spinner shown while the hub fetch and model instantiation run.
pub struct FetchSpinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FetchSpinner {
    pub fn new(message: &str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let message = message.to_string();

        let handle = thread::spawn({
            let running = running.clone();
            move || {
                let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
                let mut i = 0usize;
                let mut stdout = io::stdout();

                while running.load(Ordering::Relaxed) {
                    let frame = frames[i % frames.len()];
                    execute!(
                        stdout,
                        MoveToColumn(0),
                        Clear(ClearType::CurrentLine),
                        SetForegroundColor(Theme::ACCENT_ORANGE),
                        Print(format!("  {} {}", frame, message)),
                        ResetColor
                    )
                    .ok();
                    stdout.flush().ok();
                    thread::sleep(Duration::from_millis(80));
                    i = i.wrapping_add(1);
                }
            }
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    pub fn finish(mut self, message: &str) {
        self.stop();

        let mut stdout = io::stdout();
        execute!(
            stdout,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(Theme::SUCCESS_GREEN),
            SetAttribute(Attribute::Bold),
            Print("✓ "),
            ResetColor,
            SetForegroundColor(Theme::TEXT_PRIMARY),
            Print(message),
            ResetColor,
            Print("\n")
        )
        .ok();
    }

    pub fn finish_with_error(mut self, message: &str) {
        self.stop();

        let mut stdout = io::stdout();
        execute!(
            stdout,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(Theme::ERROR_RED),
            SetAttribute(Attribute::Bold),
            Print("✗ "),
            ResetColor,
            SetForegroundColor(Theme::TEXT_PRIMARY),
            Print(message),
            ResetColor,
            Print("\n")
        )
        .ok();
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(h) = self.handle.take() {
            h.join().ok();
        }
    }
}

impl Drop for FetchSpinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}
