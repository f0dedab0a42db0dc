//! Launcher meta-flags
//!
//! `-gn`, `-gd` and `-gr` are consumed by the launcher and never reach the
//! build tool.

use serde::Serialize;

/// Prefer the nearest build file over the root build file
pub const NEAREST: &str = "-gn";
/// Print the diagnostic dump
pub const DEBUG: &str = "-gd";
/// Toggle task alias rewriting
pub const TOGGLE_REWRITE: &str = "-gr";

/// Meta-flags found on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetaFlags {
    pub nearest: bool,
    pub debug: bool,
    pub toggle_rewrite: bool,
}

impl MetaFlags {
    /// Split meta-flags off `args`
    ///
    /// Every occurrence is removed; the remaining arguments keep their order.
    pub fn extract(args: &[String]) -> (MetaFlags, Vec<String>) {
        let mut flags = MetaFlags::default();
        let mut rest = Vec::with_capacity(args.len());

        for arg in args {
            match arg.as_str() {
                NEAREST => flags.nearest = true,
                DEBUG => flags.debug = true,
                TOGGLE_REWRITE => flags.toggle_rewrite = true,
                _ => rest.push(arg.clone()),
            }
        }

        (flags, rest)
    }

    /// Rewriting state after applying `-gr` to the configured default
    pub fn rewrite_enabled(&self, configured: bool) -> bool {
        configured != self.toggle_rewrite
    }

    /// Diagnostic dump state; `-gd` forces it on
    pub fn debug_enabled(&self, configured: bool) -> bool {
        configured || self.debug
    }
}
