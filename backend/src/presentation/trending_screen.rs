use std::sync::Arc;

use cloudtune_core::CoreError;
use cloudtune_core::domain::Song;
use cloudtune_core::ports::{Playback, SongCatalog};

use super::trending_view_model::TrendingViewModel;

pub const TITLE: &str = "Trending";

/// What the screen shows, derived from the view model's three cells.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
  Loading,
  /// Shown with a retry action.
  Error(String),
  Empty,
  List(Vec<Song>),
}

/// Per-song menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongAction {
  PlayNow,
  PlayNext,
  AddToQueue,
  AddToLibrary,
  SongInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
  /// Handed over to the player.
  Forwarded,
  /// Lines for the song info sheet.
  Info(Vec<String>),
}

/// Trending list screen. Reads the view model, forwards user actions to
/// the player; it never writes the list itself.
pub struct TrendingScreen<C: SongCatalog, P: Playback> {
  view_model: Arc<TrendingViewModel<C>>,
  playback: Arc<P>,
}

impl<C: SongCatalog, P: Playback> TrendingScreen<C, P> {
  pub fn new(view_model: Arc<TrendingViewModel<C>>, playback: Arc<P>) -> Self {
    Self { view_model, playback }
  }

  pub fn view_model(&self) -> &Arc<TrendingViewModel<C>> {
    &self.view_model
  }

  pub fn state(&self) -> ScreenState {
    if self.view_model.is_loading() {
      return ScreenState::Loading;
    }
    if let Some(message) = self.view_model.error_message() {
      return ScreenState::Error(message);
    }

    let songs = self.view_model.trending_songs();
    if songs.is_empty() { ScreenState::Empty } else { ScreenState::List(songs) }
  }

  pub fn render(&self) -> Vec<String> {
    let mut lines = vec![TITLE.to_string()];

    match self.state() {
      ScreenState::Loading => lines.push("Loading trending songs...".to_string()),
      ScreenState::Error(message) => {
        lines.push(message);
        lines.push("Retry".to_string());
      }
      ScreenState::Empty => lines.push("No trending songs available".to_string()),
      ScreenState::List(songs) => {
        lines.extend(songs.iter().enumerate().map(|(i, s)| song_row(i, s)));
      }
    }

    lines
  }

  pub async fn retry(&self) {
    self.view_model.load_trending_songs().await
  }

  /// Applies `action` to the song at `index` of the current list.
  pub async fn on_action(&self, index: usize, action: SongAction) -> Result<ActionOutcome, CoreError> {
    let song = match self.state() {
      ScreenState::List(songs) => songs.into_iter().nth(index).ok_or(CoreError::NotFound)?,
      _ => return Err(CoreError::NotFound),
    };

    match action {
      SongAction::PlayNow => self.playback.play_songs(vec![song], 0).await?,
      SongAction::PlayNext => self.playback.add_to_queue_next(song).await?,
      SongAction::AddToQueue => self.playback.add_to_queue(song).await?,
      SongAction::AddToLibrary => self.playback.toggle_favorite(&song.id).await?,
      SongAction::SongInfo => return Ok(ActionOutcome::Info(song_info(&song))),
    }

    Ok(ActionOutcome::Forwarded)
  }
}

/// `m:ss`
pub fn format_duration(duration_ms: u64) -> String {
  let total_secs = duration_ms / 1000;
  format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

pub fn song_row(index: usize, song: &Song) -> String {
  format!("{:>2}. {} - {} ({})", index + 1, song.title, song.display_artist(), format_duration(song.duration_ms))
}

pub fn song_info(song: &Song) -> Vec<String> {
  let mut lines = vec![
    format!("Title:    {}", song.title),
    format!("Artist:   {}", song.display_artist()),
    format!("Album:    {}", song.album),
    format!("Duration: {}", format_duration(song.duration_ms)),
  ];
  if song.year > 0 {
    lines.push(format!("Year:     {}", song.year));
  }
  if let Some(genre) = &song.genre {
    lines.push(format!("Language: {genre}"));
  }
  lines.push(format!("Stream:   {}", song.content_uri));
  if let Some(art) = &song.album_art_uri {
    lines.push(format!("Artwork:  {art}"));
  }
  lines
}
