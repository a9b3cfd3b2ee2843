//! The virtual filesystem the terminal navigates.
//!
//! A fixed, read-only, single-level tree: `home` plus four child
//! directories. Listings of `projects` and `experience` are generated from
//! the content store; the rest are static.

pub mod directory;
pub mod listing;

pub use directory::VirtualDirectory;
pub use listing::{
    experience_file_name, file_index, listing, project_file_name, slugify, Entry, EntryKind,
    ABOUT_TXT, CONTACT_TXT, EASTER_EGG_SH, GAMES_README, MATRIX_EXE, RESUME_PDF,
};
