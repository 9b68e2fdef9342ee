use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::gui::state::NavItemId;

pub struct Colors {
    stdout: StandardStream,
}

impl Default for Colors {
    fn default() -> Self {
        Self::new()
    }
}

impl Colors {
    pub fn new() -> Self {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    pub fn green(&mut self) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)))
    }

    pub fn cyan(&mut self) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))
    }

    pub fn bold(&mut self) -> io::Result<()> {
        self.stdout.set_color(ColorSpec::new().set_bold(true))
    }

    pub fn reset(&mut self) -> io::Result<()> {
        self.stdout.reset()
    }

    pub fn red(&mut self) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)))
    }

    pub fn yellow(&mut self) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))
    }

    pub fn dim(&mut self) -> io::Result<()> {
        self.stdout.set_color(ColorSpec::new().set_dimmed(true))
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(&mut self.stdout, "{}", text)
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(&mut self.stdout, "{}", text)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

pub fn print_selected(id: NavItemId) {
    let mut colors = Colors::new();
    let _ = colors.green();
    let _ = colors.print("[select]");
    let _ = colors.reset();
    let _ = colors.print(": ");
    let _ = colors.cyan();
    let _ = colors.print(id.as_str());
    let _ = colors.reset();
    let _ = colors.println("");
}

/// Prints one simulate transcript line, `<subject>: <detail>`.
pub fn print_transition(line: &str) {
    let mut colors = Colors::new();
    match line.split_once(": ") {
        Some((subject, detail)) => {
            let _ = if subject == "notify" {
                colors.green()
            } else {
                colors.yellow()
            };
            let _ = colors.print(subject);
            let _ = colors.reset();
            let _ = colors.print(": ");
            let _ = colors.println(detail);
        }
        None => {
            let _ = colors.println(line);
        }
    }
}
