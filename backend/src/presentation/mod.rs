pub mod trending_screen;
pub mod trending_view_model;

pub use trending_screen::{ActionOutcome, ScreenState, SongAction, TrendingScreen};
pub use trending_view_model::TrendingViewModel;
