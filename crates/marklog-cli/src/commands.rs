use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use marklog_engine::{
    CategoryVocabulary, Diagnostic, Document, HeaderBlock, IoError, LogEntry, append_to_log, body_start,
    group_by_category, group_by_period, latest_entry, parse_entries_with, parse_header,
    read_document, render_entry, render_supplement, scan_markdown_files, summarize,
};
use serde::Serialize;

use crate::cli::{GroupBy, OutputFormat};
use crate::display;

/// Settings shared by every command, resolved from flags and config.
pub struct Session {
    pub log_file: PathBuf,
    pub vocabulary: CategoryVocabulary,
    pub output: OutputFormat,
}

#[derive(Serialize)]
struct ReviewReport<'a> {
    entry: &'a LogEntry,
    supplement_added: bool,
}

#[derive(Serialize)]
struct HeaderReport {
    path: PathBuf,
    header: Option<HeaderBlock>,
    diagnostics: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

impl Session {
    /// Parse the log. A log that does not exist yet has no entries.
    fn load_entries(&self) -> Result<Vec<LogEntry>> {
        let doc = match read_document(&self.log_file) {
            Ok(doc) => doc,
            Err(IoError::NotFound(path)) => {
                log::warn!("Log file {} does not exist yet", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let parsed = parse_entries_with(&doc, &self.vocabulary);
        log::debug!(
            "Parsed {} entries from {} ({} diagnostics)",
            parsed.value.len(),
            self.log_file.display(),
            parsed.diagnostics.len()
        );
        Ok(parsed.value)
    }

    pub fn add(&self, category: &str, message: &str, now: NaiveDateTime) -> Result<String> {
        self.vocabulary.validate(category)?;
        if message.trim().is_empty() {
            bail!("Entry message must not be empty");
        }

        append_to_log(&self.log_file, &render_entry(now, category, message))?;

        match self.output {
            OutputFormat::Json => {
                let stamp = now
                    .with_second(0)
                    .and_then(|t| t.with_nanosecond(0))
                    .unwrap_or(now);
                to_json(&LogEntry::new(stamp, category, message))
            }
            OutputFormat::Text => Ok(format!(
                "✅ Logged [{category}] to {}\n",
                self.log_file.display()
            )),
        }
    }

    pub fn review(
        &self,
        supplement: Option<&str>,
        reference: Option<&str>,
        now: NaiveTime,
    ) -> Result<String> {
        let entries = self.load_entries()?;
        let Some(entry) = latest_entry(&entries) else {
            bail!("No entries found in {}", self.log_file.display());
        };

        if let Some(text) = supplement {
            append_to_log(&self.log_file, &render_supplement(Some(now), text, reference))?;
        }

        match self.output {
            OutputFormat::Json => to_json(&ReviewReport {
                entry,
                supplement_added: supplement.is_some(),
            }),
            OutputFormat::Text => {
                let mut out = display::entry_detail(entry);
                if supplement.is_some() {
                    out.push_str("✅ Supplement added\n");
                } else {
                    out.push_str("Use --supplement to attach a supplement to this entry\n");
                }
                Ok(out)
            }
        }
    }

    pub fn list(&self) -> Result<String> {
        let entries = self.load_entries()?;
        match self.output {
            OutputFormat::Json => to_json(&entries),
            OutputFormat::Text => {
                let refs: Vec<&LogEntry> = entries.iter().collect();
                Ok(display::entries("📝 Entries", &refs))
            }
        }
    }

    pub fn summary(&self) -> Result<String> {
        let summary = summarize(&self.load_entries()?);
        match self.output {
            OutputFormat::Json => to_json(&summary),
            OutputFormat::Text => Ok(display::summary(&summary)),
        }
    }

    pub fn group(&self, by: GroupBy) -> Result<String> {
        let entries = self.load_entries()?;
        match by.granularity() {
            Some(granularity) => {
                let groups = group_by_period(&entries, granularity);
                match self.output {
                    OutputFormat::Json => to_json(&groups),
                    OutputFormat::Text => Ok(display::groups("📅", &groups)),
                }
            }
            None => {
                let groups = group_by_category(&entries);
                match self.output {
                    OutputFormat::Json => to_json(&groups),
                    OutputFormat::Text => Ok(display::groups("📁", &groups)),
                }
            }
        }
    }

    pub fn header(&self, path: &Path, with_body: bool) -> Result<String> {
        if !path.is_dir() {
            let doc = read_document(path)?;
            let report = Self::header_report(path.to_path_buf(), &doc, with_body);
            return self.render_headers(vec![report]);
        }

        let files = scan_markdown_files(path)?;
        let mut reports = Vec::with_capacity(files.len());
        for file in files {
            match read_document(&file) {
                Ok(doc) => reports.push(Self::header_report(file, &doc, with_body)),
                Err(e) => {
                    log::warn!("{}: skipped, {e}", file.display());
                    reports.push(HeaderReport {
                        path: file,
                        header: None,
                        diagnostics: Vec::new(),
                        body: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }
        self.render_headers(reports)
    }

    fn header_report(path: PathBuf, doc: &Document, with_body: bool) -> HeaderReport {
        let parsed = parse_header(doc);
        if parsed.value.is_none() {
            log::warn!("{}: no header block", path.display());
        }
        HeaderReport {
            path,
            header: parsed.value,
            diagnostics: parsed.diagnostics,
            body: with_body.then(|| doc.text_from_line(body_start(doc))),
            error: None,
        }
    }

    fn render_headers(&self, reports: Vec<HeaderReport>) -> Result<String> {
        match self.output {
            OutputFormat::Json => to_json(&reports),
            OutputFormat::Text => {
                let mut out = String::new();
                for report in &reports {
                    match (&report.header, &report.error) {
                        (_, Some(error)) => out.push_str(&format!(
                            "{}\n  (unreadable: {error})\n",
                            report.path.display()
                        )),
                        (Some(block), None) => out.push_str(&display::header(&report.path, block)),
                        (None, None) => {
                            out.push_str(&format!("{}\n  (no header)\n", report.path.display()))
                        }
                    }
                    if let Some(body) = &report.body {
                        out.push('\n');
                        out.push_str(body);
                    }
                }
                Ok(out)
            }
        }
    }
}
