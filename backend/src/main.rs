use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cloudtune_core::ports::{Playback, SongCatalog};
use tracing::info;

use cloudtune_lib::presentation::trending_screen::{song_info, song_row};
use cloudtune_lib::presentation::{ScreenState, SongAction};
use cloudtune_lib::{App, init_tracing, load_config};

#[derive(Parser, Debug)]
#[command(name = "cloudtune", about = "Browse the cloud song catalog")]
struct CliArgs {
  /// Overrides the configured API base URL for this run.
  #[arg(long, global = true)]
  base_url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Show trending songs.
  Trending {
    /// Add every song to the play queue and print it.
    #[arg(long)]
    queue: bool,
  },
  /// Search songs by keyword.
  Search {
    query: String,
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    queue: bool,
  },
  /// Show one song by catalog id.
  Detail { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli_args = CliArgs::parse();
  init_tracing()?;

  let config = load_config(cli_args.base_url);
  info!("Using catalog at {}", config.base_url);
  let app = App::new(config);

  match cli_args.command {
    Command::Trending { queue } => {
      app.trending.view_model().load_trending_songs().await;
      print_lines(&app.trending.render());

      if queue {
        if let ScreenState::List(songs) = app.trending.state() {
          for index in 0..songs.len() {
            app.trending.on_action(index, SongAction::AddToQueue).await?;
          }
        }
        print_queue(&app);
      }
    }
    Command::Search { query, limit, queue } => {
      let limit = limit.unwrap_or(app.config.search_limit);
      let songs = app.catalog.search_songs(&query, limit).await.context("search failed")?;

      if songs.is_empty() {
        println!("No results for \"{query}\"");
      }
      for (index, song) in songs.iter().enumerate() {
        println!("{}", song_row(index, song));
      }

      if queue {
        for song in songs {
          app.playback.add_to_queue(song).await?;
        }
        print_queue(&app);
      }
    }
    Command::Detail { id } => match app.catalog.song_detail(&id).await.context("detail lookup failed")? {
      Some(song) => print_lines(&song_info(&song)),
      None => println!("Song {id} not found or not playable"),
    },
  }

  Ok(())
}

fn print_lines(lines: &[String]) {
  for line in lines {
    println!("{line}");
  }
}

fn print_queue(app: &App) {
  println!();
  println!("Queue:");
  for (index, song) in app.playback.queue().iter().enumerate() {
    println!("{}", song_row(index, song));
  }
}
