use youtube_catalog::{persist, Artist, Catalog, Track};

fn sample_catalog() -> Catalog {
    Catalog {
        tracks: vec![Track {
            number: 1,
            title: "Midnight Dreams".to_string(),
            artist: "Aurora Skies".to_string(),
            genre: "Progressive House".to_string(),
            date: "2 weeks ago".to_string(),
            plays: "1.5M".to_string(),
            duration: "3:45".to_string(),
            bpm: 128,
            artwork: "https://i.ytimg.com/vi/vid001/hqdefault.jpg".to_string(),
            video_id: "vid001".to_string(),
        }],
        artists: vec![Artist {
            name: "Aurora Skies".to_string(),
            genres: vec!["Progressive House".to_string()],
            bio: "Electronic music producer signed to World Studio Records.".to_string(),
            image: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400".to_string(),
            avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=200".to_string(),
            tracks: 1,
            followers: "1K".to_string(),
            streams: "15M".to_string(),
            country: "🌍 Global".to_string(),
        }],
    }
}

#[test]
fn test_save_and_load_round_trip() {
    let path = std::env::temp_dir()
        .join(format!("youtube-catalog-test-{}", std::process::id()))
        .join("youtube_data.json");

    let catalog = sample_catalog();
    persist::save_catalog(&path, &catalog).unwrap();
    let loaded = persist::load_catalog(&path).unwrap();

    assert_eq!(loaded, catalog);
    std::fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn test_document_shape_matches_contract() {
    let json = serde_json::to_value(sample_catalog()).unwrap();

    // Exactly two top-level keys, each an ordered array.
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object["tracks"].is_array());
    assert!(object["artists"].is_array());

    // Track field names are the published ones.
    let track = &object["tracks"][0];
    for key in [
        "number", "title", "artist", "genre", "date", "plays", "duration", "bpm", "artwork",
        "videoId",
    ] {
        assert!(track.get(key).is_some(), "missing track key {key}");
    }

    let artist = &object["artists"][0];
    for key in [
        "name", "genres", "bio", "image", "avatar", "tracks", "followers", "streams", "country",
    ] {
        assert!(artist.get(key).is_some(), "missing artist key {key}");
    }
}

#[test]
fn test_load_rejects_malformed_document() {
    let path = std::env::temp_dir().join(format!(
        "youtube-catalog-malformed-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, "{\"tracks\": \"oops\"}").unwrap();

    assert!(persist::load_catalog(&path).is_err());
    std::fs::remove_file(&path).ok();
}
