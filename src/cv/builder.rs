use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::dates::{extract_year, parse_date_to_number};
use super::models::{
    CvData, CvExperience, CvProject, ExperienceRecord, PhpData, ProjectRecord, SkillsData,
    SysDevOpsData,
};
use crate::error::{FolioError, FolioResult};

pub const PHP_FILE: &str = "PHP.json";
pub const SYSDEVOPS_FILE: &str = "SysDevOpsData.json";
pub const SKILLS_FILE: &str = "Skills.json";

pub const NOT_SPECIFIED: &str = "Not specified";
pub const NO_DESCRIPTION: &str = "No description";

/// The three data files the CV is built from.
#[derive(Debug, Clone, Default)]
pub struct CvSources {
    pub php: PhpData,
    pub sysdevops: SysDevOpsData,
    pub skills: SkillsData,
}

impl CvSources {
    /// Read `PHP.json`, `SysDevOpsData.json` and `Skills.json` from `dir`.
    pub fn load(dir: &Path) -> FolioResult<Self> {
        Ok(Self {
            php: read_json(&dir.join(PHP_FILE))?,
            sysdevops: read_json(&dir.join(SYSDEVOPS_FILE))?,
            skills: read_json(&dir.join(SKILLS_FILE))?,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> FolioResult<T> {
    let raw = std::fs::read(path).map_err(|source| FolioError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|source| FolioError::InvalidData {
        path: PathBuf::from(path),
        source,
    })
}

/// Build the CV payload as of `today`.
///
/// Experience and projects are ordered newest first. Projects from before
/// last year are collapsed into one "Various projects from YYYY" entry per
/// year, placed after the recent ones.
pub fn build_cv(sources: &CvSources, today: NaiveDate) -> CvData {
    let cv = CvData {
        experience: sorted_experience(&sources.php.experience, today),
        projects: arrange_projects(&sources.php.projects, today),
        sysdevops: sources.sysdevops.sysdevops.clone(),
        skills: sources.skills.skills.clone(),
    };
    tracing::debug!(
        experience = cv.experience.len(),
        projects = cv.projects.len(),
        "built CV data"
    );
    cv
}

fn sorted_experience(records: &[ExperienceRecord], today: NaiveDate) -> Vec<CvExperience> {
    let mut keyed: Vec<(u32, CvExperience)> = records
        .iter()
        .map(|record| {
            let date = text_or(&record.date, NOT_SPECIFIED);
            let entry = CvExperience {
                title: record.title.clone(),
                company: record.company.clone(),
                info: text_or(&record.info, NO_DESCRIPTION),
                date,
            };
            (parse_date_to_number(&entry.date, today), entry)
        })
        .collect();

    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

fn arrange_projects(records: &[ProjectRecord], today: NaiveDate) -> Vec<CvProject> {
    let cutoff_year = today.year() - 1;

    let mut keyed: Vec<(u32, i32, CvProject)> = records
        .iter()
        .map(|record| {
            let date = text_or(&record.date, NOT_SPECIFIED);
            let sort_key = parse_date_to_number(&date, today);
            let year = extract_year(&date, today);
            let project = CvProject {
                name: record.name.clone(),
                info: text_or(&record.info, NO_DESCRIPTION),
                skills: record.skills.clone(),
                is_grouped: false,
                date,
            };
            (sort_key, year, project)
        })
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    let mut recent = Vec::new();
    let mut older: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for (_, year, project) in keyed {
        if year >= cutoff_year {
            recent.push(project);
        } else {
            older.entry(year).or_default().push(project.name);
        }
    }

    recent.extend(older.into_iter().rev().map(|(year, names)| CvProject {
        name: format!("Various projects from {}", year),
        date: year.to_string(),
        info: names.join(", "),
        skills: Vec::new(),
        is_grouped: true,
    }));
    recent
}

fn text_or(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}
