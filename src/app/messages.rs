//! AppMessage enum for async communication within the application.

use crate::startup::LoadResult;

use super::App;

/// Messages received from background tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The initial fetch settled (some collections may have failed)
    DataLoaded(LoadResult),
    /// The splash delay after loading ran out
    SplashElapsed,
}

impl App {
    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        // Every message changes what is on screen
        self.mark_dirty();
        match msg {
            AppMessage::DataLoaded(result) => {
                self.loading = false;
                self.load_failures = result.failures().to_vec();
                self.data = result.data;
                self.clamp_cursors();
            }
            AppMessage::SplashElapsed => {
                self.splash_visible = false;
            }
        }
    }
}
