use super::*;

#[test]
fn sample_catalog_has_three_tracks_with_unique_ids() {
    let tracks = sample_tracks();
    assert_eq!(tracks.len(), 3);

    let mut ids: Vec<u32> = tracks.iter().map(|t| t.id).collect();
    ids.dedup();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(tracks.iter().all(|t| t.duration > 0));

    assert_eq!(tracks[0].title, "Midnight Dreams");
    assert_eq!(tracks[0].duration, 245);
    assert_eq!(tracks[1].artist, "Coastal Sounds");
    assert_eq!(tracks[2].album, "Metropolitan");
}

#[test]
fn every_sample_cover_is_bundled() {
    let mut resolver = CoverResolver::new(None);
    for track in sample_tracks() {
        let cover = resolver.resolve(&track.cover);
        assert_eq!(cover.source, CoverSource::Bundled, "{}", track.cover);
        assert!(cover.height() > 0);
    }
}

#[test]
fn unknown_locator_falls_back_to_placeholder() {
    let mut resolver = CoverResolver::new(None);
    assert!(resolver.resolve("/h (1)").is_placeholder());
    assert!(resolver.resolve("").is_placeholder());
    assert!(resolver.resolve("   ").is_placeholder());
}

#[test]
fn covers_dir_overrides_bundled_art() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ocean-waves.txt"), "~ custom ~\n").unwrap();

    let mut resolver = CoverResolver::new(Some(dir.path().to_path_buf()));
    let cover = resolver.resolve("ocean-waves");
    assert_eq!(cover.art, "~ custom ~\n");
    assert_eq!(
        cover.source,
        CoverSource::Disk(dir.path().join("ocean-waves.txt"))
    );

    // Missing or empty files fall through to the bundled art.
    std::fs::write(dir.path().join("city-lights.txt"), "  \n").unwrap();
    assert_eq!(resolver.resolve("city-lights").source, CoverSource::Bundled);
    assert_eq!(
        resolver.resolve("midnight-dreams").source,
        CoverSource::Bundled
    );
}

#[test]
fn resolved_covers_are_cached() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extra.txt");
    std::fs::write(&path, "first").unwrap();

    let mut resolver = CoverResolver::new(Some(dir.path().to_path_buf()));
    assert_eq!(resolver.resolve("extra").art, "first");

    std::fs::write(&path, "second").unwrap();
    assert_eq!(resolver.resolve("extra").art, "first");
}
