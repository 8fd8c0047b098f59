//! Turn submission.
//!
//! Placements are split into two lists the runtime applies in order:
//! structures and upgrades first, then mobile deployments. Each command is
//! `[shorthand, x, y]`; spawning several units on one cell repeats the
//! command.

use std::io::{self, Write};

use crate::arena::Location;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandList {
    pub build: Vec<(String, i32, i32)>,
    pub deploy: Vec<(String, i32, i32)>,
}

impl CommandList {
    pub fn push_build(&mut self, shorthand: &str, location: Location) {
        self.build
            .push((shorthand.to_string(), location.x, location.y));
    }

    pub fn push_deploy(&mut self, shorthand: &str, location: Location) {
        self.deploy
            .push((shorthand.to_string(), location.x, location.y));
    }

    pub fn is_empty(&self) -> bool {
        self.build.is_empty() && self.deploy.is_empty()
    }

    /// Writes the build line then the deploy line and flushes.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let build = serde_json::to_string(&self.build)?;
        let deploy = serde_json::to_string(&self.deploy)?;
        writeln!(out, "{build}")?;
        writeln!(out, "{deploy}")?;
        out.flush()
    }
}
