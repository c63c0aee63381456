
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const MIMETYPE: &[u8] = b"application/vnd.oasis.opendocument.text";
pub const MANIFEST: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?><manifest:manifest/>"#;
pub const STYLES: &[u8] = br#"<office:document-styles><style:style style:name="Standard"/></office:document-styles>"#;
pub const PICTURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 7, 7, 7];

pub struct TestFixtures;

impl TestFixtures {
    /// Content with rsids, an unused style and two identical paragraph styles
    pub fn cluttered_content() -> &'static str {
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<office:document-content><office:automatic-styles>"#,
            r#"<style:style style:name="P1" style:family="paragraph"><style:text-properties fo:font-weight="bold" officeooo:rsid="001a"/></style:style>"#,
            r#"<style:style style:name="P2" style:family="paragraph"><style:text-properties fo:font-weight="bold" officeooo:rsid="001b"/></style:style>"#,
            r#"<style:style style:name="P9" style:family="paragraph"><style:text-properties fo:color="red"/></style:style>"#,
            r#"</office:automatic-styles><office:body><office:text>"#,
            r#"<text:p text:style-name="P1" officeooo:paragraph-rsid="42">one</text:p>"#,
            r#"<text:p text:style-name="P2">two</text:p>"#,
            r#"</office:text></office:body></office:document-content>"#,
        )
    }

    /// Content none of the passes can shrink
    pub fn clean_content() -> &'static str {
        concat!(
            r#"<office:document-content><office:automatic-styles>"#,
            r#"<style:style style:name="P1" style:family="paragraph"><style:text-properties fo:font-weight="bold"/></style:style>"#,
            r#"</office:automatic-styles><office:body><office:text>"#,
            r#"<text:p text:style-name="P1">one</text:p>"#,
            r#"</office:text></office:body></office:document-content>"#,
        )
    }

    /// Writes a text document package with `mimetype` stored first
    pub fn build_document(dir: &Path, name: &str, content: &str) -> PathBuf {
        Self::build_package(dir, name, Some(content))
    }

    /// Package with every member except `content.xml`
    pub fn build_document_without_content(dir: &Path, name: &str) -> PathBuf {
        Self::build_package(dir, name, None)
    }

    fn build_package(dir: &Path, name: &str, content: Option<&str>) -> PathBuf {
        let path = dir.join(name);
        let mut zip = ZipWriter::new(File::create(&path).unwrap());
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("mimetype", stored).unwrap();
        zip.write_all(MIMETYPE).unwrap();
        zip.start_file("META-INF/manifest.xml", deflated).unwrap();
        zip.write_all(MANIFEST).unwrap();
        if let Some(content) = content {
            zip.start_file("content.xml", deflated).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.start_file("styles.xml", deflated).unwrap();
        zip.write_all(STYLES).unwrap();
        zip.start_file("Pictures/logo.png", stored).unwrap();
        zip.write_all(PICTURE).unwrap();
        zip.finish().unwrap();
        path
    }

    pub fn member_names(path: &Path) -> Vec<String> {
        let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    pub fn read_member(path: &Path, member: &str) -> Vec<u8> {
        let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut bytes = Vec::new();
        archive.by_name(member).unwrap().read_to_end(&mut bytes).unwrap();
        bytes
    }

    pub fn read_content(path: &Path) -> String {
        String::from_utf8(Self::read_member(path, "content.xml")).unwrap()
    }

    pub fn wave_spec(channels: u16, bits_per_sample: u16) -> WavSpec {
        WavSpec {
            channels,
            sample_rate: 8000,
            bits_per_sample,
            sample_format: SampleFormat::Int,
        }
    }

    pub fn build_wave(dir: &Path, name: &str, spec: WavSpec, samples: &[i32]) -> PathBuf {
        let path = dir.join(name);
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
        path
    }

    pub fn build_float_wave(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for sample in [0.0f32, 0.5, 0.0] {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
        path
    }

    pub fn read_wave(path: &Path) -> (WavSpec, Vec<i32>) {
        let mut reader = WavReader::open(path).unwrap();
        let spec = reader.spec();
        let samples = reader.samples::<i32>().map(|s| s.unwrap()).collect();
        (spec, samples)
    }

    pub fn write_text(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }
}
