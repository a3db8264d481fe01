// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

//! Terminal colors for console and log output.

use std::fmt::{Debug, Display};

pub const RESET: &str = "\x1b[0;0m";
pub const GREY: &str = "\x1b[0;0m\x1b[90m";
pub const LAVENDER: &str = "\x1b[38;5;183;1m";
pub const RED: &str = "\x1b[31;1m";
pub const YELLOW: &str = "\x1b[33;1m";

pub trait Color: Display {
    fn color(&self, code: &str) -> String {
        format!("{code}{self}{RESET}")
    }

    fn grey(&self) -> String {
        self.color(GREY)
    }

    fn red(&self) -> String {
        self.color(RED)
    }

    fn yellow(&self) -> String {
        self.color(YELLOW)
    }
}

impl<T: Display> Color for T {}

/// Like [`Color`], but for types that only implement [`Debug`].
pub trait DebugColor: Debug {
    fn debug_color(&self, code: &str) -> String {
        format!("{code}{self:?}{RESET}")
    }

    fn debug_lavender(&self) -> String {
        self.debug_color(LAVENDER)
    }

    fn debug_red(&self) -> String {
        self.debug_color(RED)
    }
}

impl<T: Debug> DebugColor for T {}
