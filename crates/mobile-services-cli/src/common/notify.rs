use colored::Colorize;

/// Prints user facing notices unless running quiet
#[derive(Debug, Clone, Copy, Default)]
pub struct Notify {
    quiet: bool,
}

impl Notify {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        println!("{}: {}", "info".blue().bold(), message.as_ref());
    }

    pub fn done(&self, message: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        println!("{}: {}", "done".green().bold(), message.as_ref());
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        eprintln!("{}: {}", "warn".yellow().bold(), message.as_ref());
    }

    pub fn help(&self, message: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        println!("{}: {}", "help".bold(), message.as_ref());
    }

    /// errors are printed even when quiet
    pub fn error(&self, message: impl AsRef<str>) {
        eprintln!("{}: {}", "error".red().bold(), message.as_ref());
    }
}
