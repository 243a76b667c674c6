//! Terminal output for the CLI.
//!
//! Status lines go to stdout, warnings and errors to stderr. With `--json`
//! every human-readable line is suppressed and notices and listings are
//! written as JSON instead.

use std::fmt;
use std::sync::Arc;

use console::{style, StyledObject};
use minishop_commerce::catalog::Item;
use minishop_sdk::Notice;
use serde::Serialize;

/// Output handler shared by every command.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn info(&self, msg: &str) {
        self.marked(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.marked(style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are reported in JSON mode too, as `{"error": ...}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    fn marked(&self, mark: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{} {}", mark, msg);
        }
    }

    /// A `[section]` heading, as in the config file.
    pub fn section(&self, name: &str) {
        if !self.json {
            println!("{}", style(format!("[{name}]")).bold());
        }
    }

    pub fn kv(&self, key: &str, value: impl fmt::Display) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// A storefront outcome: one marked status line each, or one JSON object.
    pub fn notice(&self, notice: &Notice) {
        if self.json {
            self.json_line(notice);
            return;
        }
        let mark = if notice.is_failure() {
            style("✗").red()
        } else {
            style("✓").green()
        };
        for line in notice.lines() {
            println!("{} {}", mark, line);
        }
    }

    /// Catalog items as an aligned id/name/price table.
    pub fn items(&self, items: &[Arc<Item>]) {
        if self.json {
            self.json(items);
            return;
        }
        println!(
            "{}",
            style(format!("{:>4}  {:<24}  {:>10}", "ID", "NAME", "PRICE")).bold()
        );
        for item in items {
            println!(
                "{:>4}  {:<24}  {:>10}",
                item.id.to_string(),
                item.name,
                item.price.display()
            );
        }
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn json_line<T: Serialize + ?Sized>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            println!("{}", json);
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}
