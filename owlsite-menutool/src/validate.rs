//! Consistency checks over a data directory.
use owlsite_core::{
    CategoryTranslations, ImageManifest, Lang, LanguagePack, ResourcePaths, resolve_image,
};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{tag}: {}", self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
    pub packs_checked: usize,
}

impl ValidationReport {
    fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.findings.push(Finding {
            severity,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// Whether the run should exit non-zero.
    #[must_use]
    pub fn fails(&self, strict: bool) -> bool {
        self.count(Severity::Error) > 0 || (strict && self.count(Severity::Warning) > 0)
    }
}

fn has_translation(translations: &CategoryTranslations, category: &str, lang: Lang) -> bool {
    translations
        .get(category)
        .or_else(|| translations.get(&category.to_uppercase()))
        .and_then(|entry| entry.get(lang.code()))
        .is_some_and(|text| !text.trim().is_empty())
}

/// Checks that need every pack parsed already.
pub fn check_packs(
    packs: &[(Lang, LanguagePack)],
    manifest: Option<&ImageManifest>,
    report: &mut ValidationReport,
) {
    for (lang, pack) in packs {
        let mut seen: Vec<&str> = Vec::new();
        for item in &pack.menu.items {
            if seen.contains(&item.category.as_str()) {
                continue;
            }
            seen.push(&item.category);
            if !has_translation(&pack.ui.category_translations, &item.category, *lang) {
                report.push(
                    Severity::Warning,
                    format!("{lang}.json: category {:?} has no {lang} translation", item.category),
                );
            }
        }

        if let Some(manifest) = manifest {
            for item in &pack.menu.items {
                if resolve_image(manifest, item) == owlsite_core::PLACEHOLDER_IMAGE {
                    report.push(
                        Severity::Warning,
                        format!("{lang}.json: {:?} uses the placeholder image", item.name),
                    );
                }
            }
        }
    }

    let counts: Vec<(Lang, usize)> = packs
        .iter()
        .map(|(lang, pack)| (*lang, pack.menu.items.len()))
        .collect();
    if let Some((first_lang, first_count)) = counts.first().copied()
        && counts.iter().any(|(_, count)| *count != first_count)
    {
        let listed: Vec<String> = counts
            .iter()
            .map(|(lang, count)| format!("{lang}={count}"))
            .collect();
        report.push(
            Severity::Warning,
            format!(
                "menu item counts differ from {first_lang}: {}",
                listed.join(", ")
            ),
        );
    }
}

/// Parse every pack and the manifest under `data_dir` and run all checks.
#[must_use]
pub fn validate_dir(data_dir: &Path) -> ValidationReport {
    let layout = ResourcePaths::default();
    let mut report = ValidationReport::default();
    let mut packs = Vec::new();

    for lang in Lang::ALL {
        let file = format!("{}.json", lang.code());
        let path = data_dir.join(&file);
        match fs::read_to_string(&path) {
            Ok(json) => match LanguagePack::from_json(&layout.pack(lang), &json) {
                Ok(pack) => packs.push((lang, pack)),
                Err(err) => report.push(Severity::Error, err.to_string()),
            },
            Err(err) => report.push(Severity::Error, format!("{}: {err}", path.display())),
        }
    }

    let manifest_path = data_dir.join(layout.manifest_file);
    let manifest = match fs::read_to_string(&manifest_path) {
        Ok(json) => match ImageManifest::from_json(&layout.manifest(), &json) {
            Ok(manifest) => Some(manifest),
            Err(err) => {
                report.push(Severity::Error, err.to_string());
                None
            }
        },
        Err(err) => {
            report.push(
                Severity::Error,
                format!("{}: {err}", manifest_path.display()),
            );
            None
        }
    };

    report.packs_checked = packs.len();
    check_packs(&packs, manifest.as_ref(), &mut report);
    report
}
