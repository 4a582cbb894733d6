//! Common test utilities

#![allow(dead_code)]

use console_kit::ui::Presenter;
use console_kit::{Command, Described, Descriptor};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

/// Build an argv with the conventional program name first
pub fn argv(tokens: &[&str]) -> Vec<String> {
    std::iter::once("console")
        .chain(tokens.iter().copied())
        .map(String::from)
        .collect()
}

/// Handler counting its executions
pub struct Spy {
    pub calls: Rc<Cell<usize>>,
    pub code: i32,
    pub help: String,
}

impl Spy {
    pub fn new(code: i32, help: &str) -> (Box<dyn Command>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let spy = Spy {
            calls: Rc::clone(&calls),
            code,
            help: help.to_string(),
        };
        (Box::new(spy), calls)
    }
}

impl Command for Spy {
    fn execute(&self, _args: &[String], _ui: &mut dyn Presenter) -> anyhow::Result<i32> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.code)
    }

    fn help(&self) -> String {
        self.help.clone()
    }
}

macro_rules! described_command {
    ($ty:ident, $name:expr, $description:expr, $code:expr) => {
        #[derive(Default)]
        pub struct $ty;

        impl Described for $ty {
            const DESCRIPTOR: Descriptor = Descriptor::new($name, $description);
        }

        impl Command for $ty {
            fn execute(&self, _args: &[String], _ui: &mut dyn Presenter) -> anyhow::Result<i32> {
                Ok($code)
            }

            fn help(&self) -> String {
                format!("help for {}", $name)
            }
        }
    };
}

described_command!(TreeCommand, "fs:tree", "Print a directory tree", 0);
described_command!(VendorTreeCommand, "fs:tree", "Vendor tree", 10);
described_command!(ProjectTreeCommand, "fs:tree", "Project tree", 20);
described_command!(VendorHelloCommand, "hello", "Vendor hello", 11);
described_command!(DeployCommand, "app:deploy", "Deploy the application", 3);

/// A temporary project with a marker file
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"app\"\n").unwrap();
        Project { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `config/cli.json`
    pub fn config(&self, json: &str) -> &Self {
        fs::create_dir_all(self.root().join("config")).unwrap();
        fs::write(self.root().join("config/cli.json"), json).unwrap();
        self
    }

    /// Create empty handler files in a directory relative to the root
    pub fn handler_files(&self, dir: &str, files: &[&str]) -> PathBuf {
        let path = self.root().join(dir);
        fs::create_dir_all(&path).unwrap();
        for file in files {
            fs::write(path.join(file), "").unwrap();
        }
        path
    }

    /// Create a vendor package with a manifest and handler files
    pub fn package(&self, vendor: &str, name: &str, manifest: &str, files: &[&str]) -> PathBuf {
        let dir = self.root().join(vendor).join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Cargo.toml"), manifest).unwrap();
        self.handler_files(&format!("{}/{}/src/command", vendor, name), files);
        dir
    }
}
