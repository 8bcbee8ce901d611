//! Text template renderer
//!
//! Templates are plain text with `{{NAME}}` placeholders. They are looked up
//! in a configured directory as `<template name>.txt`; without a directory the
//! built-in templates are used.

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, RenderReport, SummaryRecord, SummaryRenderer};
use crate::error::{DoeError, DoeResult};

/// One summary document
struct SummaryDocument {
    template: &'static str,
    output: &'static str,
    builtin: &'static str,
    with_tree: bool,
}

const HEADER_TEMPLATE: &str = "\
DOSSIER DES OUVRAGES EXECUTES

Projet : {{PROJECT_NAME}}
Version : {{DOE_VERSION}}
Date : {{DOE_DATE}}
";

const CONTENTS_TEMPLATE: &str = "\
SOMMAIRE DU DOE

Projet : {{PROJECT_NAME}}
Version : {{DOE_VERSION}}
Date : {{DOE_DATE}}

{{FOLDER_STRUCTURE}}";

const DOCUMENTS: [SummaryDocument; 2] = [
    SummaryDocument {
        template: "0_1 - En tete DOE",
        output: "En_tete_DOE.txt",
        builtin: HEADER_TEMPLATE,
        with_tree: false,
    },
    SummaryDocument {
        template: "0_2 - Sommaire DOE",
        output: "Sommaire_DOE.txt",
        builtin: CONTENTS_TEMPLATE,
        with_tree: true,
    },
];

/// `SummaryRenderer` backed by text templates
pub struct TemplateRenderer<FS: FileSystem> {
    fs: FS,
    templates_dir: Option<PathBuf>,
}

impl<FS: FileSystem> TemplateRenderer<FS> {
    /// Renderer using the built-in templates
    pub fn builtin(fs: FS) -> Self {
        Self {
            fs,
            templates_dir: None,
        }
    }

    /// Renderer reading `<dir>/<template name>.txt`
    pub fn from_dir(fs: FS, templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            templates_dir: Some(templates_dir.into()),
        }
    }

    /// Template text, or `None` when the configured file is absent
    fn load(&self, document: &SummaryDocument) -> DoeResult<Option<String>> {
        let Some(dir) = &self.templates_dir else {
            return Ok(Some(document.builtin.to_string()));
        };
        let path = dir.join(format!("{}.txt", document.template));
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        Ok(Some(self.fs.read_to_string(&path)?))
    }
}

impl<FS: FileSystem> SummaryRenderer for TemplateRenderer<FS> {
    fn render(
        &self,
        summary_dir: &Path,
        record: &SummaryRecord,
        folder_tree: &str,
    ) -> DoeResult<Vec<RenderReport>> {
        self.fs.create_dir_all(summary_dir)?;

        let mut reports = Vec::with_capacity(DOCUMENTS.len());
        for document in &DOCUMENTS {
            let Some(template) = self.load(document)? else {
                reports.push(RenderReport::TemplateMissing {
                    template: document.template.to_string(),
                });
                continue;
            };

            let mut vars = vec![
                ("PROJECT_NAME", record.project_name.as_str()),
                ("DOE_VERSION", record.doe_version.as_str()),
                ("DOE_DATE", record.doe_date.as_str()),
            ];
            if document.with_tree {
                vars.push(("FOLDER_STRUCTURE", folder_tree));
            }

            let text = substitute(&template, &vars).map_err(|message| DoeError::Render {
                template: document.template.to_string(),
                message,
            })?;
            let path = summary_dir.join(document.output);
            self.fs.write(&path, text.as_bytes())?;
            reports.push(RenderReport::Written {
                template: document.template.to_string(),
                path,
            });
        }
        Ok(reports)
    }
}

/// Replace every `{{NAME}}` with its value
///
/// Unknown names and unterminated placeholders are errors.
fn substitute(template: &str, vars: &[(&str, &str)]) -> Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| "unterminated placeholder".to_string())?;
        let name = after[..end].trim();
        let value = vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| format!("unknown placeholder {{{{{name}}}}}"))?;
        out.push_str(value);
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    Ok(out)
}
