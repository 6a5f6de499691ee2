mod home;
mod play;
mod preferences;
mod state;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use play::PlayView;
pub use preferences::PreferencesPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use summary::SummaryCard;
