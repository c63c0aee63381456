
use declutter::cleaner::content_cleaner::{DUPLICATE_STYLES, ORPHAN_STYLES};
use declutter::cleaner::attribute_stripper::RSID;
use declutter::config::{Disposal, ProcessingConfig};
use declutter::pipeline::Pipeline;
use declutter::report::FileOutcome;
use std::fs;
use tempfile::TempDir;

use crate::fixtures::{TestFixtures, MANIFEST, MIMETYPE, PICTURE, STYLES};
use crate::{paths, pipeline_with};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_copy_cleans_content_only() {
        let dir = TempDir::new().unwrap();
        let original = TestFixtures::build_document(dir.path(), "notes.odt", TestFixtures::cluttered_content());
        let before = fs::read(&original).unwrap();

        let report = pipeline_with(Disposal::KeepCopy)
            .run_documents(&paths(&[&original]))
            .unwrap();

        let cleaned = dir.path().join("notes-cleaned.odt");
        assert_eq!(report.files.len(), 1);
        let entry = &report.files[0];
        assert!(entry.is_modified());
        assert_eq!(entry.saved_to.as_deref(), Some(cleaned.as_path()));
        assert_eq!(entry.count(RSID.label), 2);
        assert_eq!(entry.count(ORPHAN_STYLES), 1);
        assert_eq!(entry.count(DUPLICATE_STYLES), 1);

        // original untouched
        assert_eq!(fs::read(&original).unwrap(), before);

        let saved = fs::metadata(&original).unwrap().len() as i64 - fs::metadata(&cleaned).unwrap().len() as i64;
        assert_eq!(entry.outcome, FileOutcome::Modified { bytes_saved: saved });
        assert_eq!(report.summary.total_bytes_saved, saved);

        let content = TestFixtures::read_content(&cleaned);
        assert!(!content.contains("officeooo"));
        assert!(!content.contains(r#"style:name="P9""#));
        assert!(!content.contains(r#"style:name="P2""#));
        assert!(content.contains(r#"<text:p text:style-name="P1">two</text:p>"#));
    }

    #[test]
    fn test_package_members_survive() {
        let dir = TempDir::new().unwrap();
        let original = TestFixtures::build_document(dir.path(), "a.odt", TestFixtures::cluttered_content());
        let names_before = TestFixtures::member_names(&original);

        pipeline_with(Disposal::Overwrite)
            .run_documents(&paths(&[&original]))
            .unwrap();

        assert_eq!(TestFixtures::member_names(&original), names_before);
        assert_eq!(TestFixtures::member_names(&original)[0], "mimetype");
        assert_eq!(TestFixtures::read_member(&original, "mimetype"), MIMETYPE);
        assert_eq!(TestFixtures::read_member(&original, "META-INF/manifest.xml"), MANIFEST);
        assert_eq!(TestFixtures::read_member(&original, "styles.xml"), STYLES);
        assert_eq!(TestFixtures::read_member(&original, "Pictures/logo.png"), PICTURE);
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let original = TestFixtures::build_document(dir.path(), "b.odt", TestFixtures::cluttered_content());
        let pipeline = pipeline_with(Disposal::Overwrite);

        let first = pipeline.run_documents(&paths(&[&original])).unwrap();
        assert!(first.files[0].is_modified());
        let once = fs::read(&original).unwrap();

        let second = pipeline.run_documents(&paths(&[&original])).unwrap();
        assert_eq!(second.files[0].outcome, FileOutcome::Unchanged);
        assert!(second.files[0].passes.iter().all(|p| p.count == 0));
        assert_eq!(fs::read(&original).unwrap(), once);
    }

    #[test]
    fn test_clean_document_is_not_written() {
        let dir = TempDir::new().unwrap();
        let original = TestFixtures::build_document(dir.path(), "c.odt", TestFixtures::clean_content());

        let report = pipeline_with(Disposal::KeepCopy)
            .run_documents(&paths(&[&original]))
            .unwrap();

        assert_eq!(report.files[0].outcome, FileOutcome::Unchanged);
        assert!(report.files[0].saved_to.is_none());
        assert!(!dir.path().join("c-cleaned.odt").exists());
        assert_eq!(report.summary.files_modified, 0);
    }

    #[test]
    fn test_existing_copy_is_not_clobbered() {
        let dir = TempDir::new().unwrap();
        let original = TestFixtures::build_document(dir.path(), "d.odt", TestFixtures::cluttered_content());
        let existing = TestFixtures::write_text(dir.path(), "d-cleaned.odt", "mine");

        let report = pipeline_with(Disposal::KeepCopy)
            .run_documents(&paths(&[&original]))
            .unwrap();

        assert!(report.files[0].is_failed());
        assert_eq!(fs::read_to_string(&existing).unwrap(), "mine");
        assert!(!dir.path().join("d.odt.tmp").exists());
    }

    #[test]
    fn test_bad_inputs_do_not_stop_the_batch() {
        let dir = TempDir::new().unwrap();
        let bogus = TestFixtures::write_text(dir.path(), "bogus.odt", "just text");
        let hollow = TestFixtures::build_document_without_content(dir.path(), "hollow.odt");
        let good = TestFixtures::build_document(dir.path(), "good.odt", TestFixtures::cluttered_content());
        let missing = dir.path().join("missing.odt");

        let report = pipeline_with(Disposal::KeepCopy)
            .run_documents(&paths(&[&bogus, &hollow, &good, &missing]))
            .unwrap();

        assert_eq!(report.summary.files_processed, 4);
        assert_eq!(report.summary.files_failed, 3);
        assert_eq!(report.summary.files_modified, 1);
        assert!(dir.path().join("good-cleaned.odt").exists());

        let reason = |name: &str| {
            report
                .files
                .iter()
                .find(|f| f.path.ends_with(name))
                .and_then(|f| match &f.outcome {
                    FileOutcome::Failed { reason } => Some(reason.clone()),
                    _ => None,
                })
                .unwrap()
        };
        assert!(reason("bogus.odt").contains("not a valid container"));
        assert!(reason("hollow.odt").contains("content.xml"));
        assert!(reason("missing.odt").contains("No such file"));
    }

    #[test]
    fn test_directory_search_skips_other_files() {
        let layout = |root: &std::path::Path| {
            let nested = root.join("nested");
            fs::create_dir(&nested).unwrap();
            TestFixtures::build_document(root, "top.odt", TestFixtures::cluttered_content());
            TestFixtures::build_document(&nested, "deep.odt", TestFixtures::cluttered_content());
            TestFixtures::write_text(root, "readme.txt", "not a document");
        };

        let flat_dir = TempDir::new().unwrap();
        layout(flat_dir.path());
        let flat = pipeline_with(Disposal::KeepCopy)
            .run_documents(&paths(&[flat_dir.path()]))
            .unwrap();
        assert_eq!(flat.files.len(), 1);
        assert!(flat.files[0].path.ends_with("top.odt"));

        let deep_dir = TempDir::new().unwrap();
        layout(deep_dir.path());
        let config = ProcessingConfig {
            recursive: true,
            ..Default::default()
        };
        let deep = Pipeline::new(config)
            .run_documents(&paths(&[deep_dir.path()]))
            .unwrap();
        assert_eq!(deep.files.len(), 2);
        assert_eq!(deep.summary.files_modified, 2);
        assert!(deep_dir.path().join("nested").join("deep-cleaned.odt").exists());
    }

    #[test]
    fn test_nothing_found_is_an_error() {
        let dir = TempDir::new().unwrap();
        TestFixtures::write_text(dir.path(), "readme.txt", "nothing here");

        let result = pipeline_with(Disposal::KeepCopy).run_documents(&paths(&[dir.path()]));
        assert!(result.is_err());
    }
}
