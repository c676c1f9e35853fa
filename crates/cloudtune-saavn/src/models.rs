//! Wire models for the catalog API.
//!
//! Every field is optional: the API omits fields freely depending on the
//! endpoint, so decoding never fails because something is missing.

use serde::{Deserialize, Deserializer};

/// `GET /api/modules?category=trending&language=..`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingResponse {
  pub data: Option<TrendingData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingData {
  pub trending: Option<TrendingModule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingModule {
  pub position: Option<i64>,
  pub title: Option<String>,
  pub subtitle: Option<String>,
  pub source: Option<String>,
  pub data: Option<Vec<SaavnSong>>,
}

impl TrendingResponse {
  pub fn into_songs(self) -> Vec<SaavnSong> {
    self.data.and_then(|d| d.trending).and_then(|t| t.data).unwrap_or_default()
  }
}

/// `GET /api/search/songs?query=..&page=..&limit=..`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
  pub data: Option<SearchData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchData {
  pub results: Option<Vec<SaavnSong>>,
  pub total: Option<i64>,
}

impl SearchResponse {
  pub fn into_songs(self) -> Vec<SaavnSong> {
    self.data.and_then(|d| d.results).unwrap_or_default()
  }
}

/// `GET /api/songs/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongDetailResponse {
  pub data: Option<Vec<SaavnSong>>,
}

impl SongDetailResponse {
  /// The detail endpoint wraps the song in a one-element list.
  pub fn into_song(self) -> Option<SaavnSong> {
    self.data.and_then(|d| d.into_iter().next())
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaavnSong {
  #[serde(default, deserialize_with = "lenient_string")]
  pub id: Option<String>,
  pub name: Option<String>,
  #[serde(rename = "type")]
  pub kind: Option<String>,
  #[serde(default, deserialize_with = "lenient_string")]
  pub year: Option<String>,
  pub release_date: Option<String>,
  /// Seconds.
  #[serde(default, deserialize_with = "lenient_i64")]
  pub duration: Option<i64>,
  pub label: Option<String>,
  pub explicit_content: Option<bool>,
  #[serde(default, deserialize_with = "lenient_i64")]
  pub play_count: Option<i64>,
  pub language: Option<String>,
  pub has_lyrics: Option<bool>,
  pub lyrics_id: Option<String>,
  pub url: Option<String>,

  /// Comma separated.
  pub primary_artists: Option<String>,
  pub primary_artists_id: Option<String>,
  pub featured_artists: Option<String>,
  pub featured_artists_id: Option<String>,
  pub artists: Option<Vec<SaavnArtist>>,

  pub album: Option<SaavnAlbum>,

  pub image: Option<Vec<SaavnImage>>,
  pub download_url: Option<Vec<SaavnDownloadUrl>>,
  #[serde(rename = "media_url")]
  pub media_url: Option<String>,
}

impl SaavnSong {
  /// True when the record already carries something playable, so no
  /// detail call is needed.
  pub fn has_stream_url(&self) -> bool {
    crate::mapper::best_stream_url(self).is_some()
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaavnArtist {
  #[serde(default, deserialize_with = "lenient_string")]
  pub id: Option<String>,
  pub name: Option<String>,
  pub role: Option<String>,
  #[serde(rename = "type")]
  pub kind: Option<String>,
  pub image: Option<Vec<SaavnImage>>,
  pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaavnAlbum {
  #[serde(default, deserialize_with = "lenient_string")]
  pub id: Option<String>,
  pub name: Option<String>,
  pub url: Option<String>,
}

/// Quality labels: "50x50", "150x150", "500x500".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaavnImage {
  pub quality: Option<String>,
  pub link: Option<String>,
  pub url: Option<String>,
}

/// Quality labels: "12kbps" .. "320kbps".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaavnDownloadUrl {
  pub quality: Option<String>,
  pub link: Option<String>,
  pub url: Option<String>,
}

/// Some deployments send numeric ids and years as JSON numbers.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<serde_json::Value>::deserialize(deserializer)?;
  Ok(match value {
    Some(serde_json::Value::String(s)) => Some(s),
    Some(serde_json::Value::Number(n)) => Some(n.to_string()),
    _ => None,
  })
}

/// Durations and counts arrive either as numbers or as numeric strings.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<serde_json::Value>::deserialize(deserializer)?;
  Ok(match value {
    Some(serde_json::Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
    Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
    _ => None,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_search_envelope() {
    let json = r#"{
      "data": {
        "total": 1,
        "results": [{
          "id": "abc",
          "name": "Kesariya",
          "year": 2022,
          "duration": "268",
          "language": "hindi",
          "primaryArtists": "Pritam, Arijit Singh",
          "album": { "id": 123, "name": "Brahmastra" },
          "image": [{ "quality": "500x500", "link": "https://img/500.jpg" }],
          "downloadUrl": [{ "quality": "320kbps", "url": "https://aac/320.mp4" }],
          "media_url": "https://aac/fallback.mp4"
        }]
      }
    }"#;

    let resp: SearchResponse = serde_json::from_str(json).unwrap();
    let songs = resp.into_songs();
    assert_eq!(songs.len(), 1);

    let s = &songs[0];
    assert_eq!(s.id.as_deref(), Some("abc"));
    assert_eq!(s.year.as_deref(), Some("2022"));
    assert_eq!(s.duration, Some(268));
    assert_eq!(s.album.as_ref().and_then(|a| a.id.as_deref()), Some("123"));
    assert_eq!(s.media_url.as_deref(), Some("https://aac/fallback.mp4"));
    assert!(s.has_stream_url());
  }

  #[test]
  fn decodes_trending_and_detail_envelopes() {
    let trending: TrendingResponse =
      serde_json::from_str(r#"{ "data": { "trending": { "title": "Trending Now", "data": [{ "id": "1" }] } } }"#)
        .unwrap();
    assert_eq!(trending.into_songs().len(), 1);

    let detail: SongDetailResponse = serde_json::from_str(r#"{ "data": [{ "id": "1", "name": "A" }] }"#).unwrap();
    assert_eq!(detail.into_song().and_then(|s| s.name), Some("A".to_string()));
  }

  #[test]
  fn empty_envelopes_yield_nothing() {
    let trending: TrendingResponse = serde_json::from_str("{}").unwrap();
    assert!(trending.into_songs().is_empty());

    let detail: SongDetailResponse = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
    assert!(detail.into_song().is_none());
  }

  #[test]
  fn empty_variant_lists_need_detail() {
    let s = SaavnSong { download_url: Some(vec![]), media_url: Some(String::new()), ..Default::default() };
    assert!(!s.has_stream_url());
  }
}
