use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use static_sitemap::config::{load_sitemap_config, Config, SitemapConfig};
use static_sitemap::generator::Generator;
use static_sitemap::output::FileOutput;
use static_sitemap::{generate, DateSource, OutputError, SitemapError};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};
use tempfile::TempDir;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Creates a site tree with the given pages and their content
fn create_site(pages: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (name, content) in pages {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
    }
    dir
}

fn create_config(site: &Path, output_dir: PathBuf, max_urls: usize) -> Config {
    let sitemap = SitemapConfig {
        max_urls,
        output_dir,
        ..SitemapConfig::default()
    };
    Config::new(site, "https://example.com/", sitemap).expect("Invalid test config")
}

/// Extracts `(loc, lastmod)` pairs from a `<urlset>` or `<sitemapindex>`
fn read_entries(path: &Path) -> Vec<(String, Option<String>)> {
    let xml = fs::read_to_string(path).expect("Failed to read sitemap");
    let mut reader = quick_xml::Reader::from_str(&xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut current_tag = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(ref e)) => {
                current_tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
            }
            Ok(quick_xml::events::Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default().to_string();
                match current_tag.as_str() {
                    "loc" => entries.push((text, None)),
                    "lastmod" => {
                        if let Some(last) = entries.last_mut() {
                            last.1 = Some(text);
                        }
                    }
                    _ => {}
                }
            }
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => panic!("Invalid XML in {}: {}", path.display(), e),
            _ => {}
        }
        buf.clear();
    }

    entries
}

#[test]
fn test_full_generation_single_file() {
    let site = create_site(&[
        ("index.html", "2017-06-12 by someone"),
        ("a/b.html", "1061 2017-06-12 by someone"),
        ("a/old.html", "<!-- 'creationDate' => '2014-06-19 19:20:00' -->"),
        ("User/Profile.html", "2017-06-12 by someone"),
        ("style.css", "body {}"),
    ]);
    let out = tempfile::tempdir().unwrap();
    let output_dir = out.path().join("sitemaps");
    let config = create_config(site.path(), output_dir.clone(), 1000);

    let output = FileOutput::new(&output_dir).unwrap();
    let summary = Generator::with_clock(&config, fixed_now)
        .run(&output)
        .expect("Generation failed");

    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.urls_emitted, 3);
    assert_eq!(summary.sitemap_count(), 1);
    assert_eq!(summary.excluded, 1);
    assert_eq!(summary.index_path, output_dir.join("sitemap_index.xml"));

    let entries = read_entries(&output_dir.join("sitemap_1.xml"));
    assert_eq!(
        entries,
        vec![
            (
                "https://example.com/a/b.html".to_string(),
                Some("2017-06-12T00:00:00".to_string())
            ),
            (
                "https://example.com/a/old.html".to_string(),
                Some("2014-06-19T19:20:00".to_string())
            ),
            (
                "https://example.com/index.html".to_string(),
                Some("2024-05-01T12:00:00".to_string())
            ),
        ]
    );
}

#[test]
fn test_user_paths_never_written() {
    let site = create_site(&[
        ("User/Profile.html", ""),
        ("docs/user/settings.HTML", ""),
        ("docs/guide.html", ""),
    ]);
    let out = tempfile::tempdir().unwrap();
    let config = create_config(site.path(), out.path().to_path_buf(), 1000);

    let output = FileOutput::new(out.path()).unwrap();
    generate(&config, &output).unwrap();

    let entries = read_entries(&out.path().join("sitemap_1.xml"));
    let locations: Vec<_> = entries.iter().map(|(loc, _)| loc.as_str()).collect();
    assert_eq!(locations, vec!["https://example.com/docs/guide.html"]);
}

#[test]
fn test_config_file_exclude_keeps_user_filter() {
    let site = create_site(&[
        ("User/Profile.html", ""),
        ("drafts/next.html", ""),
        ("docs/guide.html", ""),
    ]);
    let out = tempfile::tempdir().unwrap();
    let config_path = out.path().join("sitemap.toml");
    fs::write(&config_path, "[sitemap]\nexclude = [\"/drafts/\"]\n").unwrap();

    let sitemap = load_sitemap_config(&config_path)
        .unwrap()
        .with_overrides(None, Some(out.path().join("maps")));
    let config = Config::new(site.path(), "https://example.com", sitemap).unwrap();

    let output = FileOutput::new(out.path().join("maps")).unwrap();
    let summary = generate(&config, &output).unwrap();

    assert_eq!(summary.urls_emitted, 1);
    assert_eq!(summary.excluded, 2);
    let xml = fs::read_to_string(out.path().join("maps").join("sitemap_1.xml")).unwrap();
    assert!(!xml.to_lowercase().contains("/user/"));
    assert!(!xml.contains("/drafts/"));
}

#[test]
fn test_write_failure_aborts_before_index() {
    let site = create_site(&[("a.html", "2001-01-01 by x")]);
    let out = tempfile::tempdir().unwrap();
    let config = create_config(site.path(), out.path().to_path_buf(), 1000);
    let output = FileOutput::new(out.path()).unwrap();

    // A directory where the first sitemap should go makes the write fail
    fs::create_dir(out.path().join("sitemap_1.xml")).unwrap();

    let result = Generator::with_clock(&config, fixed_now).run(&output);
    match result {
        Err(SitemapError::Output(OutputError::Write { path, .. })) => {
            assert_eq!(path, out.path().join("sitemap_1.xml"));
        }
        other => panic!("Expected a write error, got {:?}", other),
    }
    assert!(!out.path().join("sitemap_index.xml").exists());
}

#[test]
fn test_pagination_covers_every_url_once() {
    let names: Vec<String> = (0..23).map(|i| format!("p/page{:02}.html", i)).collect();
    let pages: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), "x")).collect();
    let site = create_site(&pages);
    let out = tempfile::tempdir().unwrap();
    let config = create_config(site.path(), out.path().to_path_buf(), 5);

    let output = FileOutput::new(out.path()).unwrap();
    let summary = generate(&config, &output).unwrap();
    assert_eq!(summary.sitemap_count(), 5);

    let mut all = Vec::new();
    for k in 1..=5 {
        let entries = read_entries(&out.path().join(format!("sitemap_{}.xml", k)));
        assert!(!entries.is_empty() && entries.len() <= 5);
        all.extend(entries.into_iter().map(|(loc, _)| loc));
    }
    assert!(!out.path().join("sitemap_6.xml").exists());

    let expected: Vec<String> = names
        .iter()
        .map(|n| format!("https://example.com/{}", n))
        .collect();
    assert_eq!(all, expected);
}

#[test]
fn test_index_lists_files_with_one_timestamp() {
    let site = create_site(&[("a.html", ""), ("b.html", ""), ("c.html", "")]);
    let out = tempfile::tempdir().unwrap();
    let output_dir = out.path().join("maps");
    let mut config = create_config(site.path(), output_dir.clone(), 2);
    config.sitemap.output_dir = PathBuf::from("./maps/");

    let output = FileOutput::new(&output_dir).unwrap();
    Generator::with_clock(&config, fixed_now)
        .run(&output)
        .unwrap();

    let index = read_entries(&output_dir.join("sitemap_index.xml"));
    assert_eq!(
        index,
        vec![
            (
                "https://example.com/maps/sitemap_1.xml".to_string(),
                Some("2024-05-01T12:00:00".to_string())
            ),
            (
                "https://example.com/maps/sitemap_2.xml".to_string(),
                Some("2024-05-01T12:00:00".to_string())
            ),
        ]
    );
}

#[test]
fn test_mtime_fallback_in_output() {
    let site = create_site(&[("plain.html", "<p>nothing to see</p>")]);
    let page = site.path().join("plain.html");
    let whole = UNIX_EPOCH + Duration::from_secs(1_600_000_000);
    fs::File::options()
        .write(true)
        .open(&page)
        .unwrap()
        .set_modified(whole + Duration::from_millis(250))
        .unwrap();

    let out = tempfile::tempdir().unwrap();
    let config = create_config(site.path(), out.path().to_path_buf(), 1000);
    let output = FileOutput::new(out.path()).unwrap();
    let summary = generate(&config, &output).unwrap();

    assert_eq!(summary.date_sources.get(&DateSource::FileModified), Some(&1));

    let expected = DateTime::<Local>::from(whole)
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string();
    let entries = read_entries(&out.path().join("sitemap_1.xml"));
    assert_eq!(entries[0].1.as_deref(), Some(expected.as_str()));
}

#[test]
fn test_non_utf8_content_still_dated() {
    let site = tempfile::tempdir().unwrap();
    fs::write(
        site.path().join("latin.html"),
        b"Caf\xe9 \x80\x81 2019-03-04 by Ren\xe9",
    )
    .unwrap();
    let out = tempfile::tempdir().unwrap();
    let config = create_config(site.path(), out.path().to_path_buf(), 1000);

    let output = FileOutput::new(out.path()).unwrap();
    generate(&config, &output).unwrap();

    let entries = read_entries(&out.path().join("sitemap_1.xml"));
    assert_eq!(entries[0].1.as_deref(), Some("2019-03-04T00:00:00"));
}

#[test]
fn test_empty_site_writes_empty_index() {
    let site = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let config = create_config(site.path(), out.path().to_path_buf(), 1000);

    let output = FileOutput::new(out.path()).unwrap();
    let summary = generate(&config, &output).unwrap();

    assert_eq!(summary.sitemap_count(), 0);
    assert!(!out.path().join("sitemap_1.xml").exists());
    assert!(read_entries(&summary.index_path).is_empty());
}

#[test]
fn test_rerun_overwrites_deterministic_names() {
    let site = create_site(&[("a.html", "2001-01-01 by x")]);
    let out = tempfile::tempdir().unwrap();
    let config = create_config(site.path(), out.path().to_path_buf(), 1000);
    let output = FileOutput::new(out.path()).unwrap();

    generate(&config, &output).unwrap();
    let first = fs::read_to_string(out.path().join("sitemap_1.xml")).unwrap();
    generate(&config, &output).unwrap();
    let second = fs::read_to_string(out.path().join("sitemap_1.xml")).unwrap();

    assert_eq!(first, second);
}
