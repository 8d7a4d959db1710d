//! Window action handlers.
//!
//! This module contains handlers for the action categories:
//! - cursor: line controls, cursor movement and save/restore
//! - editing: erase in line and erase in display
//! - hyperlink: OSC 8 hyperlink state

mod cursor;
mod editing;
mod hyperlink;
