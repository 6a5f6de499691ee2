mod board;
mod play;
mod river;
mod scripts;

pub use play::PlayView;
#[cfg(test)]
pub(crate) use play::PlayTestHandles;
