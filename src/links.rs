//! Opening links requested by commands.
//!
//! The interpreter only describes links to open ([`Effect::OpenLink`]); the
//! host decides what to do with them according to the [`OpenPolicy`] and
//! opens them through a [`LinkOpener`].

use crate::config::OpenPolicy;
use crate::error::{FolioError, Result};
use crate::interpreter::Effect;
use crate::ui::{Prompt, UserInterface};

/// Prompt key for the "open this link?" question.
pub const OPEN_LINK_PROMPT: &str = "open_link";

/// Something that can open a URL.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Opens links with the system's default handler.
#[derive(Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| FolioError::LinkOpenFailed {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Records links instead of opening them.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: Vec<String>,
    fail: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// An opener whose every attempt fails.
    pub fn failing() -> Self {
        Self {
            opened: Vec::new(),
            fail: true,
        }
    }

    /// Links opened so far.
    pub fn opened(&self) -> &[String] {
        &self.opened
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        if self.fail {
            return Err(FolioError::LinkOpenFailed {
                url: url.to_string(),
                message: "refused".to_string(),
            });
        }
        self.opened.push(url.to_string());
        Ok(())
    }
}

/// Perform the effects of a reply.
///
/// Failures to open are reported as warnings and never abort the session.
/// Returns the number of links opened.
pub fn perform_effects(
    effects: &[Effect],
    policy: OpenPolicy,
    opener: &mut dyn LinkOpener,
    ui: &mut dyn UserInterface,
) -> usize {
    let mut opened = 0;
    for effect in effects {
        let Effect::OpenLink(url) = effect;
        if !should_open(url, policy, ui) {
            tracing::debug!(url = %url, %policy, "Not opening link");
            continue;
        }
        match opener.open(url) {
            Ok(()) => opened += 1,
            Err(e) => {
                tracing::warn!("{}", e);
                ui.warning(&format!("{} (open it manually)", e));
            }
        }
    }
    opened
}

fn should_open(url: &str, policy: OpenPolicy, ui: &mut dyn UserInterface) -> bool {
    match policy {
        OpenPolicy::Always => true,
        OpenPolicy::Never => false,
        OpenPolicy::Ask => {
            let prompt = Prompt::confirm(OPEN_LINK_PROMPT, format!("Open {}?", url), false);
            ui.confirm(&prompt).unwrap_or_else(|e| {
                ui.warning(&format!("Could not ask to open link: {}", e));
                false
            })
        }
    }
}
