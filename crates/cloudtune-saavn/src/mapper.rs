use std::time::{SystemTime, UNIX_EPOCH};

use cloudtune_core::domain::song::{UNKNOWN_ALBUM, UNKNOWN_ARTIST};
use cloudtune_core::domain::{AlbumId, ArtistId, ArtistRef, Song, SongId};

use crate::models::{SaavnDownloadUrl, SaavnImage, SaavnSong};

/// Audio tiers, best first.
pub const AUDIO_QUALITY_ORDER: &[&str] = &["320kbps", "160kbps", "96kbps", "48kbps", "12kbps"];

/// Artwork tiers, best first.
pub const IMAGE_QUALITY_ORDER: &[&str] = &["500x500", "150x150", "50x50"];

const CLOUD_MIME_TYPE: &str = "audio/mpeg";

/// Something the API lists under a quality label.
trait RankedVariant {
  fn quality(&self) -> Option<&str>;
  fn href(&self) -> Option<&str>;
}

impl RankedVariant for SaavnDownloadUrl {
  fn quality(&self) -> Option<&str> {
    self.quality.as_deref()
  }

  fn href(&self) -> Option<&str> {
    non_empty(self.link.as_deref()).or_else(|| non_empty(self.url.as_deref()))
  }
}

impl RankedVariant for SaavnImage {
  fn quality(&self) -> Option<&str> {
    self.quality.as_deref()
  }

  fn href(&self) -> Option<&str> {
    non_empty(self.link.as_deref()).or_else(|| non_empty(self.url.as_deref()))
  }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.is_empty())
}

/// First variant matching the best available tier, else the first variant.
/// A matched tier without a link yields `None`; lower tiers are not tried.
fn pick_best<V: RankedVariant>(variants: &[V], order: &[&str]) -> Option<String> {
  for tier in order {
    if let Some(v) = variants.iter().find(|v| v.quality() == Some(*tier)) {
      return v.href().map(str::to_string);
    }
  }

  variants.first().and_then(|v| v.href()).map(str::to_string)
}

/// Best audio variant, else `media_url`. Empty strings count as missing.
pub(crate) fn best_stream_url(song: &SaavnSong) -> Option<String> {
  song
    .download_url
    .as_deref()
    .and_then(|variants| pick_best(variants, AUDIO_QUALITY_ORDER))
    .or_else(|| non_empty(song.media_url.as_deref()).map(str::to_string))
}

fn best_image_url(images: Option<&[SaavnImage]>) -> Option<String> {
  let images = images.filter(|i| !i.is_empty())?;
  pick_best(images, IMAGE_QUALITY_ORDER)
}

fn parse_artists(song: &SaavnSong) -> Vec<ArtistRef> {
  let mut refs: Vec<ArtistRef> = song
    .artists
    .iter()
    .flatten()
    .filter_map(|artist| {
      let name = artist.name.as_deref()?;
      let id = ArtistId::from_key(artist.id.as_deref().unwrap_or(name));
      let is_primary = artist.role.as_deref().is_some_and(|r| r.to_lowercase().contains("primary"));
      Some(ArtistRef::new(id, name, is_primary))
    })
    .collect();

  if refs.is_empty() {
    if let Some(primary) = song.primary_artists.as_deref() {
      refs = primary
        .split(',')
        .map(str::trim)
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .map(|(index, name)| ArtistRef::new(ArtistId::from_key(name), name, index == 0))
        .collect();
    }
  }

  refs
}

fn now_millis() -> u64 {
  SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
}

/// Converts one catalog record into a domain [`Song`].
///
/// `None` when the id, the title or every stream URL is missing.
pub fn map_song(saavn: &SaavnSong) -> Option<Song> {
  let song_id = saavn.id.as_deref()?;
  let title = saavn.name.clone()?;
  let content_uri = best_stream_url(saavn)?;

  let primary_artists = saavn.primary_artists.clone().unwrap_or_else(|| UNKNOWN_ARTIST.to_string());
  let artists = parse_artists(saavn);

  let album = saavn.album.as_ref();
  let album_name = album.and_then(|a| a.name.clone()).unwrap_or_else(|| UNKNOWN_ALBUM.to_string());
  let album_id = album.and_then(|a| a.id.as_deref()).map(AlbumId::from_key).unwrap_or(AlbumId::UNKNOWN);

  let duration_secs = saavn.duration.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u64;
  let duration_ms = duration_secs * 1000;
  let year = saavn.year.as_deref().and_then(|y| y.trim().parse().ok()).unwrap_or(0);
  let now = now_millis();

  Some(Song {
    id: SongId::cloud(song_id),
    title,
    artist_id: ArtistId::from_key(&primary_artists),
    album_artist: primary_artists.clone(),
    artist: primary_artists,
    artists,
    album: album_name,
    album_id,
    content_uri,
    album_art_uri: best_image_url(saavn.image.as_deref()),
    duration_ms,
    genre: saavn.language.clone(),
    year,
    track_number: 0,
    mime_type: CLOUD_MIME_TYPE.to_string(),
    is_favorite: false,
    date_added_ms: now,
    date_modified_ms: now,
  })
}

pub fn map_songs(songs: &[SaavnSong]) -> Vec<Song> {
  songs.iter().filter_map(map_song).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{SaavnAlbum, SaavnArtist};

  fn audio(quality: &str, link: &str) -> SaavnDownloadUrl {
    SaavnDownloadUrl { quality: Some(quality.into()), link: Some(link.into()), url: None }
  }

  fn image(quality: &str, link: &str) -> SaavnImage {
    SaavnImage { quality: Some(quality.into()), link: Some(link.into()), url: None }
  }

  fn playable(id: &str, title: &str) -> SaavnSong {
    SaavnSong {
      id: Some(id.into()),
      name: Some(title.into()),
      media_url: Some(format!("https://aac/{id}.mp4")),
      ..Default::default()
    }
  }

  #[test]
  fn rejects_missing_title() {
    let s = SaavnSong { name: None, ..playable("1", "x") };
    assert!(map_song(&s).is_none());
  }

  #[test]
  fn rejects_missing_id() {
    let s = SaavnSong { id: None, ..playable("1", "x") };
    assert!(map_song(&s).is_none());
  }

  #[test]
  fn rejects_unresolvable_stream_url() {
    let s = SaavnSong { download_url: Some(vec![]), media_url: Some(String::new()), ..playable("1", "x") };
    assert!(map_song(&s).is_none());

    let s = SaavnSong { download_url: None, media_url: None, ..playable("1", "x") };
    assert!(map_song(&s).is_none());
  }

  #[test]
  fn picks_highest_audio_tier() {
    let s = SaavnSong {
      download_url: Some(vec![audio("96kbps", "https://aac/96.mp4"), audio("320kbps", "https://aac/320.mp4")]),
      ..playable("1", "x")
    };
    assert_eq!(map_song(&s).unwrap().content_uri, "https://aac/320.mp4");
  }

  #[test]
  fn unknown_audio_tiers_fall_back_to_first_variant() {
    let s = SaavnSong {
      download_url: Some(vec![audio("64kbps", "https://aac/64.mp4"), audio("8kbps", "https://aac/8.mp4")]),
      ..playable("1", "x")
    };
    assert_eq!(map_song(&s).unwrap().content_uri, "https://aac/64.mp4");
  }

  #[test]
  fn variant_url_used_when_link_missing() {
    let v = SaavnDownloadUrl { quality: Some("160kbps".into()), link: None, url: Some("https://aac/160.mp4".into()) };
    let s = SaavnSong { download_url: Some(vec![v]), media_url: None, ..playable("1", "x") };
    assert_eq!(map_song(&s).unwrap().content_uri, "https://aac/160.mp4");
  }

  #[test]
  fn linkless_variants_fall_back_to_media_url() {
    let v = SaavnDownloadUrl { quality: Some("320kbps".into()), link: None, url: None };
    let s = SaavnSong { download_url: Some(vec![v]), ..playable("1", "x") };
    assert_eq!(map_song(&s).unwrap().content_uri, "https://aac/1.mp4");
  }

  #[test]
  fn empty_link_tries_variant_url_then_media_url() {
    let v = SaavnDownloadUrl { quality: Some("320kbps".into()), link: Some(String::new()), url: Some("https://aac/u.mp4".into()) };
    let s = SaavnSong { download_url: Some(vec![v]), media_url: Some("https://aac/m.mp4".into()), ..playable("1", "x") };
    assert_eq!(map_song(&s).unwrap().content_uri, "https://aac/u.mp4");
    assert!(s.has_stream_url());

    let v = SaavnDownloadUrl { quality: Some("320kbps".into()), link: Some(String::new()), url: Some(String::new()) };
    let s = SaavnSong { download_url: Some(vec![v]), media_url: Some("https://aac/m.mp4".into()), ..playable("1", "x") };
    assert_eq!(map_song(&s).unwrap().content_uri, "https://aac/m.mp4");
  }

  #[test]
  fn only_empty_links_need_a_detail_call() {
    let v = SaavnDownloadUrl { quality: Some("320kbps".into()), link: Some(String::new()), url: None };
    let s = SaavnSong { download_url: Some(vec![v]), media_url: None, ..playable("1", "x") };
    assert!(!s.has_stream_url());
    assert!(map_song(&s).is_none());
  }

  #[test]
  fn media_url_is_the_last_resort() {
    let s = playable("1", "x");
    assert_eq!(map_song(&s).unwrap().content_uri, "https://aac/1.mp4");
  }

  #[test]
  fn single_small_image_is_chosen() {
    let s = SaavnSong { image: Some(vec![image("50x50", "https://img/50.jpg")]), ..playable("1", "x") };
    assert_eq!(map_song(&s).unwrap().album_art_uri.as_deref(), Some("https://img/50.jpg"));
  }

  #[test]
  fn largest_image_wins() {
    let s = SaavnSong {
      image: Some(vec![
        image("50x50", "https://img/50.jpg"),
        image("500x500", "https://img/500.jpg"),
        image("150x150", "https://img/150.jpg"),
      ]),
      ..playable("1", "x")
    };
    assert_eq!(map_song(&s).unwrap().album_art_uri.as_deref(), Some("https://img/500.jpg"));
  }

  #[test]
  fn structured_artists_use_role() {
    let s = SaavnSong {
      primary_artists: Some("ignored".into()),
      artists: Some(vec![
        SaavnArtist { id: Some("a1".into()), name: Some("Arijit Singh".into()), role: Some("Primary_Artists".into()), ..Default::default() },
        SaavnArtist { id: None, name: Some("Pritam".into()), role: Some("music".into()), ..Default::default() },
        SaavnArtist { name: None, role: Some("primary".into()), ..Default::default() },
      ]),
      ..playable("1", "x")
    };

    let song = map_song(&s).unwrap();
    assert_eq!(song.artists.len(), 2);
    assert_eq!(song.artists[0].name, "Arijit Singh");
    assert!(song.artists[0].is_primary);
    assert_eq!(song.artists[0].id, ArtistId::from_key("a1"));
    assert!(!song.artists[1].is_primary);
    assert_eq!(song.artists[1].id, ArtistId::from_key("Pritam"));
  }

  #[test]
  fn comma_separated_artists_mark_first_as_primary() {
    let s = SaavnSong { primary_artists: Some("Pritam, , Arijit Singh ".into()), ..playable("1", "x") };

    let song = map_song(&s).unwrap();
    let names: Vec<_> = song.artists.iter().map(|a| (a.name.as_str(), a.is_primary)).collect();
    assert_eq!(names, vec![("Pritam", true), ("Arijit Singh", false)]);
    assert_eq!(song.artist, "Pritam, , Arijit Singh ");
  }

  #[test]
  fn fills_defaults_and_converts_units() {
    let s = SaavnSong {
      duration: Some(215),
      year: Some("2019".into()),
      language: Some("punjabi".into()),
      album: Some(SaavnAlbum { id: Some("alb".into()), name: Some("Album".into()), url: None }),
      ..playable("xyz", "Title")
    };

    let song = map_song(&s).unwrap();
    assert_eq!(song.id.as_str(), "saavn:xyz");
    assert_eq!(song.duration_ms, 215_000);
    assert_eq!(song.year, 2019);
    assert_eq!(song.genre.as_deref(), Some("punjabi"));
    assert_eq!(song.album, "Album");
    assert_eq!(song.album_id, AlbumId::from_key("alb"));
    assert_eq!(song.artist, UNKNOWN_ARTIST);
    assert_eq!(song.mime_type, "audio/mpeg");
    assert!(!song.is_favorite);

    let bare = map_song(&playable("b", "Bare")).unwrap();
    assert_eq!(bare.album, UNKNOWN_ALBUM);
    assert_eq!(bare.album_id, AlbumId::UNKNOWN);
    assert_eq!(bare.duration_ms, 0);
    assert_eq!(bare.year, 0);
    assert!(bare.album_art_uri.is_none());
  }

  #[test]
  fn out_of_range_durations_are_clamped() {
    let huge = SaavnSong { duration: Some(i64::MAX), ..playable("1", "x") };
    assert_eq!(map_song(&huge).unwrap().duration_ms, u64::from(u32::MAX) * 1000);

    let negative = SaavnSong { duration: Some(-5), ..playable("1", "x") };
    assert_eq!(map_song(&negative).unwrap().duration_ms, 0);

    let one_second = SaavnSong { duration: Some(1), ..playable("1", "x") };
    assert_eq!(map_song(&one_second).unwrap().duration_ms, 1000);
  }

  #[test]
  fn huge_duration_from_json_does_not_panic() {
    let json = r#"{ "id": "1", "name": "x", "media_url": "https://m", "duration": "9223372036854775807" }"#;
    let record: SaavnSong = serde_json::from_str(json).unwrap();
    assert_eq!(map_song(&record).unwrap().duration_ms, u64::from(u32::MAX) * 1000);
  }

  #[test]
  fn map_songs_drops_rejects() {
    let songs = vec![playable("1", "a"), SaavnSong { name: None, ..playable("2", "b") }, playable("3", "c")];
    let mapped = map_songs(&songs);
    let ids: Vec<_> = mapped.iter().map(|s| s.id.as_str().to_string()).collect();
    assert_eq!(ids, vec!["saavn:1", "saavn:3"]);
  }
}
