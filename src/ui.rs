//! The boundary between the controller and whatever displays things.

use log::warn;
use std::io::{self, BufRead, Write};

/// Areas of the screen a renderer can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Results,
    Pages,
    Recipe,
    LikeButton,
    Shopping,
    ShoppingButtons,
    Likes,
    LikesMenu,
    Help,
}

pub trait Ui {
    /// Replaces the content of `region`
    fn render(&mut self, region: Region, content: &str);

    /// Appends one row to `region`
    fn append(&mut self, region: Region, content: &str);

    /// Removes the row identified by `id` from `region`
    fn remove(&mut self, region: Region, id: &str);

    fn clear(&mut self, region: Region);

    fn render_loader(&mut self, region: Region);

    fn clear_loader(&mut self);

    fn alert(&mut self, message: &str);

    /// Asks the user a question; `None` when there is no answer
    fn prompt(&mut self, question: &str) -> Option<String>;
}

/// Line-oriented terminal frontend
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads the next line, without its terminator. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.write(format_args!("{prompt}"));
        if let Err(e) = self.output.flush() {
            warn!("Failed to flush terminal: {}", e);
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write(&mut self, args: std::fmt::Arguments) {
        if let Err(e) = self.output.write_fmt(args) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> Ui for Terminal<R, W> {
    fn render(&mut self, _region: Region, content: &str) {
        if !content.is_empty() {
            self.write(format_args!("{content}\n"));
        }
    }

    fn append(&mut self, _region: Region, content: &str) {
        self.write(format_args!("{content}\n"));
    }

    fn remove(&mut self, _region: Region, id: &str) {
        self.write(format_args!("  removed [{id}]\n"));
    }

    fn clear(&mut self, _region: Region) {}

    fn render_loader(&mut self, _region: Region) {
        self.write(format_args!("{}\n", crate::view::base::LOADER));
    }

    fn clear_loader(&mut self) {}

    fn alert(&mut self, message: &str) {
        self.write(format_args!("! {message}\n"));
    }

    fn prompt(&mut self, question: &str) -> Option<String> {
        self.read_line(&format!("{question} "))
    }
}
