//! Test fixture generators

use codegraph_analysis::FileRecord;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary project directory holding fixture files
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file (parents included) and describe it as Python
    pub fn python_file(&self, name: &str, content: impl AsRef<[u8]>) -> FileRecord {
        self.file(name, content, "python")
    }

    pub fn file(&self, name: &str, content: impl AsRef<[u8]>, language: &str) -> FileRecord {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture dirs");
        }
        std::fs::write(&path, content).expect("write fixture");
        FileRecord::from_path(&path, language).expect("fixture record")
    }
}

/// Generate a minimal valid Python function
pub fn fixture_simple_function(name: &str) -> String {
    format!("def {name}():\n    return None\n")
}

/// Generate a Python file with N functions
pub fn fixture_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("def func_{i}():\n    pass\n\n"))
        .collect()
}

/// Generate a function with `branches` sequential if statements
pub fn fixture_branches(branches: usize) -> String {
    let body: String = (0..branches)
        .map(|i| format!("    if x == {i}:\n        return {i}\n"))
        .collect();
    format!("def f(x):\n{body}    return -1\n")
}

/// Generate N whitespace-only lines, newline-delimited
pub fn fixture_blank_lines(n: usize) -> String {
    vec!["   "; n].join("\n")
}

/// Valid definitions interleaved with broken ones
pub const MIXED_VALID_INVALID: &str = r#"import os
from typing import Dict, List

VERSION = "1.0.0"

def initialize_system():
    """Initialize the system with default settings."""
    return {"version": VERSION}

def broken_loader()
    return {"error": "missing colon"}

class UserProfile:
    """Valid user profile class."""
    username: str

    def __init__(self, username):
        self.username = username
        self.active = True

    def is_active(self) -> bool:
        return self.active

values = [1, 2, 3
"#;

/// A definition missing its colon ahead of a valid one
pub const MISSING_COLON_FIRST: &str = r#"import os

def broken_loader()
    return {"error": "missing colon"}

def still_valid():
    return 1
"#;

/// An unclosed bracket swallows every definition after it
pub const UNCLOSED_BRACKET_FIRST: &str = r#"values = [1, 2, 3

def swallowed():
    return 1
"#;

/// A small, clean module touching every entity kind
pub const WELL_FORMED_MODULE: &str = r#""""Service module."""

import logging
from .models import User, Group as G
from ..utils import *

logger = logging.getLogger(__name__)
MAX_USERS: int = 100

@cache
async def fetch_user(user_id: int, *, timeout: float = 1.0) -> User:
    """Fetch one user."""
    if user_id < 0 or user_id > MAX_USERS:
        raise ValueError(user_id)
    return User(user_id)

class UserService(BaseService, metaclass=Registry):
    """Manages users."""
    default_limit = 10

    def __init__(self, repo):
        self.repo = repo

    @staticmethod
    def validate(name):
        return bool(name)
"#;
