// src/archive.rs
//
// Thin wrapper over a zipped OFLC bundle: list entries, locate a CSV by
// `FileSpec`, read it as text and hand it to the tolerant parser.

use std::error::Error;
use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::csv::{parse_table, Table};
use crate::specs::FileSpec;

pub struct Archive {
    zip: ZipArchive<Cursor<Vec<u8>>>,
    entries: Vec<String>,
}

impl Archive {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn Error>> {
        let zip = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| format!("failed to open archive: {e}"))?;
        let entries = zip.file_names().map(str::to_string).collect();
        Ok(Self { zip, entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Name of the entry `spec` would load, if any.
    pub fn locate(&self, spec: &FileSpec) -> Option<String> {
        spec.find(&self.entries).map(str::to_string)
    }

    /// Read an entry as text. Invalid UTF-8 (older Windows-1252 exports) is
    /// replaced rather than rejected.
    pub fn read_text(&mut self, name: &str) -> Result<String, Box<dyn Error>> {
        let mut file = self
            .zip
            .by_name(name)
            .map_err(|e| format!("archive entry {name}: {e}"))?;
        let mut buf = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut buf)?;
        Ok(match String::from_utf8(buf) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
        })
    }

    /// Locate + parse. `Ok(None)` when no entry matches the `FileSpec`.
    pub fn load_table(&mut self, spec: &FileSpec) -> Result<Option<Table>, Box<dyn Error>> {
        let Some(name) = self.locate(spec) else {
            logd!("Archive: no {} entry", spec.name);
            return Ok(None);
        };
        let text = self.read_text(&name)?;
        let table = parse_table(&text, ',');
        logd!(
            "Archive: {} ← {} (records={}, skipped={})",
            spec.name, name, table.len(), table.skipped
        );
        Ok(Some(table))
    }
}
