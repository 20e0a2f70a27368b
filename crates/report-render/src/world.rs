//! In-memory Typst [`World`] for compiling a single embedded template.
//!
//! Compilation never touches the filesystem: the template is the only
//! source file, the report data travels through `sys.inputs`, and fonts
//! come embedded from `typst-assets`.

use std::sync::OnceLock;

use chrono::{Datelike, Timelike, Utc};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime, Dict, Value};
use typst::syntax::{FileId, Source, VirtualPath};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, World};

/// Fonts are loaded once per process and shared across renders.
static FONTS: OnceLock<EmbeddedFonts> = OnceLock::new();

struct EmbeddedFonts {
    book: LazyHash<FontBook>,
    fonts: Vec<Font>,
}

fn embedded_fonts() -> &'static EmbeddedFonts {
    FONTS.get_or_init(|| {
        let mut book = FontBook::new();
        let mut fonts = Vec::new();

        for data in typst_assets::fonts() {
            let buffer = Bytes::from_static(data);
            for font in Font::iter(buffer) {
                book.push(font.info().clone());
                fonts.push(font);
            }
        }

        tracing::debug!("Loaded {} embedded fonts", fonts.len());
        EmbeddedFonts {
            book: LazyHash::new(book),
            fonts,
        }
    })
}

/// A single-source world: one template, one JSON payload.
pub struct ReportWorld {
    main: Source,
    library: LazyHash<Library>,
    fonts: &'static EmbeddedFonts,
    now: chrono::DateTime<Utc>,
}

impl ReportWorld {
    /// Build a world around a template. `data_json` is exposed to the
    /// template as `sys.inputs.data` and decoded there.
    pub fn new(template: &str, data_json: String) -> Self {
        let mut inputs = Dict::new();
        inputs.insert("data".into(), Value::Str(data_json.into()));

        let main_id = FileId::new(None, VirtualPath::new("/main.typ"));

        Self {
            main: Source::new(main_id, template.to_string()),
            library: LazyHash::new(Library::builder().with_inputs(inputs).build()),
            fonts: embedded_fonts(),
            now: Utc::now(),
        }
    }
}

impl World for ReportWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.fonts.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        // Templates carry no binary assets.
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.fonts.get(index).cloned()
    }

    fn today(&self, offset: Option<i64>) -> Option<Datetime> {
        let adjusted = self.now + chrono::Duration::hours(offset.unwrap_or(0));
        Datetime::from_ymd_hms(
            adjusted.year(),
            adjusted.month() as u8,
            adjusted.day() as u8,
            adjusted.hour() as u8,
            adjusted.minute() as u8,
            adjusted.second() as u8,
        )
    }
}
