//! Whole-build tests driving the plugin through every lifecycle hook.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::config::PluginConfig;
    use crate::events::{self, CollectingEventSink};
    use crate::extract::{FALLBACK_DESCRIPTION, MAX_DESCRIPTION_CHARS};
    use crate::page::ExportRow;
    use crate::plugin::MetaDescriptionPlugin;
    use crate::testing::{assert_description, assert_export_rows, read_export, TestBuild, TestPage};

    fn sample_build(site_dir: &std::path::Path) -> TestBuild {
        TestBuild::new(site_dir)
            .page(TestPage::new("index.html", "<h1>Home</h1>\n<p>Welcome to the docs.</p>").with_title("Home"))
            .page(TestPage::new("guide/", "<p>Ignored body</p>").with_description("Custom desc"))
            .page(TestPage::new("api/", "<p>Types &amp; traits</p>"))
    }

    #[test]
    fn test_build_without_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new());

        let run = sample_build(dir.path()).run(&mut plugin);

        assert!(run.passed_through);
        assert_eq!(run.result.unwrap(), None);
        assert_description(&run.pages[0], "Home\nWelcome to the docs.");
        assert_description(&run.pages[1], "Custom desc");
        assert_description(&run.pages[2], "Types &amp; traits");
        assert!(!dir.path().join("meta-descriptions.csv").exists());
        assert!(plugin.buffer().is_empty());
    }

    #[test]
    fn test_build_with_export_writes_one_row_per_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new().with_export_csv(true));

        let run = sample_build(dir.path()).run(&mut plugin);
        let path = run.result.unwrap().expect("export path");

        assert_eq!(path, dir.path().join("meta-descriptions.csv"));
        assert_export_rows(
            &path,
            &[
                ExportRow::new("index.html", "Home\nWelcome to the docs."),
                ExportRow::new("guide/", "Custom desc"),
                ExportRow::new("api/", "Types &amp; traits"),
            ],
        );
        assert!(plugin.buffer().is_empty());
    }

    #[test]
    fn test_export_uses_canonical_urls() {
        let dir = tempfile::tempdir().unwrap();
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new().with_export_csv(true));

        let run = TestBuild::new(dir.path())
            .with_site_url("https://docs.example.com/")
            .page(TestPage::new("guide/", "<p>Guide</p>"))
            .run(&mut plugin);

        let rows = read_export(&run.result.unwrap().unwrap());
        assert_eq!(rows, vec![ExportRow::new("https://docs.example.com/guide/", "Guide")]);
    }

    #[test]
    fn test_long_page_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let body = "word ".repeat(200);
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new());

        let run = TestBuild::new(dir.path())
            .page(TestPage::new("long/", format!("<p>{body}</p>")))
            .run(&mut plugin);

        let description = run.pages[0].description().unwrap();
        assert_eq!(description.chars().count(), MAX_DESCRIPTION_CHARS);
        assert!(body.starts_with(description));
    }

    #[test]
    fn test_rebuild_starts_with_empty_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new().with_export_csv(true));

        sample_build(dir.path()).run(&mut plugin);
        let run = TestBuild::new(dir.path())
            .page(TestPage::new("only/", "<p>Only page</p>"))
            .run(&mut plugin);

        let rows = read_export(&run.result.unwrap().unwrap());
        assert_eq!(rows, vec![ExportRow::new("only/", "Only page")]);
    }

    #[test]
    fn test_export_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-built");
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new().with_export_csv(true));

        let run = sample_build(&missing).run(&mut plugin);

        let err = run.result.unwrap_err();
        assert!(err.to_string().contains("meta-descriptions.csv"));
    }

    #[test]
    fn test_events_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(CollectingEventSink::new());
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new().with_export_csv(true))
            .with_event_sink(sink.clone());

        let run = sample_build(dir.path())
            .page(TestPage::new("empty/", "<div><img src=\"x.png\"></div>"))
            .run(&mut plugin);
        run.result.unwrap();

        assert_description(&run.pages[3], FALLBACK_DESCRIPTION);
        assert_eq!(sink.events_of_type(events::DESCRIPTION_GENERATED).len(), 2);
        assert_eq!(sink.events_of_type(events::DESCRIPTION_KEPT).len(), 1);
        assert_eq!(sink.events_of_type(events::DESCRIPTION_FALLBACK).len(), 1);
        assert_eq!(sink.events_of_type(events::EXPORT_ROW_BUFFERED).len(), 4);

        let completed = sink.events_of_type(events::BUILD_COMPLETED);
        assert_eq!(completed.len(), 1);
        let summary = completed[0].1.as_ref().unwrap();
        assert_eq!(summary["pages_seen"], 4);
        assert_eq!(summary["exported"], 4);
        assert_eq!(summary["fallbacks"], 1);

        // Counters reset once the build is reported.
        assert_eq!(plugin.summary().pages_seen, 0);
    }
}
