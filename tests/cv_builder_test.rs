//! CV data built from JSON files on disk.

use chrono::NaiveDate;
use folio::cv::{build_cv, CvSources};
use folio::error::FolioError;
use serde_json::json;
use tempfile::TempDir;

fn write_json(dir: &TempDir, name: &str, value: serde_json::Value) {
    std::fs::write(dir.path().join(name), value.to_string()).unwrap();
}

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_json(
        &dir,
        "PHP.json",
        json!({
            "experience": [
                {"title": "Developer", "company": "Old Co", "date": "03.2016 - 08.2019", "info": "Shop systems"},
                {"title": "Lead Developer", "company": "Now Inc", "date": "09.2019 - Ongoing"}
            ],
            "projects": [
                {"name": "Booking", "date": "06.2024", "info": "Hotel booking", "skills": ["PHP", "Vue"]},
                {"name": "Intranet", "date": "2020", "skills": ["PHP"]},
                {"name": "Newsletter", "date": "04.2020"},
                {"name": "Tracker", "date": "10.2018"}
            ]
        }),
    );
    write_json(
        &dir,
        "SysDevOpsData.json",
        json!({"sysdevops": [{"title": "Monitoring", "date": "2023", "info": "Prometheus", "skills": ["Grafana"]}]}),
    );
    write_json(
        &dir,
        "Skills.json",
        json!({"skills": [{"name": "Docker", "category": "DevOps", "fileName": "docker"}]}),
    );
    dir
}

#[test]
fn test_cv_from_data_directory() {
    let dir = data_dir();
    let sources = CvSources::load(dir.path()).unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();

    let cv = build_cv(&sources, today);

    assert_eq!(cv.experience[0].title, "Lead Developer");
    assert_eq!(cv.experience[0].info, "No description");
    assert_eq!(cv.experience[1].company, "Old Co");

    let names: Vec<&str> = cv.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Booking",
            "Various projects from 2020",
            "Various projects from 2018"
        ]
    );
    assert_eq!(cv.projects[1].info, "Newsletter, Intranet");

    let value = serde_json::to_value(&cv).unwrap();
    assert_eq!(value["projects"][1]["isGrouped"], json!(true));
    assert!(value["projects"][0].get("isGrouped").is_none());
    assert_eq!(value["skills"][0]["fileName"], json!("docker"));
    assert_eq!(value["sysdevops"][0]["title"], json!("Monitoring"));
}

#[test]
fn test_missing_keys_default_to_empty() {
    let dir = TempDir::new().unwrap();
    write_json(&dir, "PHP.json", json!({}));
    write_json(&dir, "SysDevOpsData.json", json!({}));
    write_json(&dir, "Skills.json", json!({}));

    let sources = CvSources::load(dir.path()).unwrap();
    let cv = build_cv(&sources, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    assert!(cv.experience.is_empty());
    assert!(cv.projects.is_empty());
}

#[test]
fn test_malformed_file_is_invalid_data() {
    let dir = data_dir();
    std::fs::write(dir.path().join("Skills.json"), "[1, 2").unwrap();

    let err = CvSources::load(dir.path()).unwrap_err();
    assert!(matches!(err, FolioError::InvalidData { .. }));
}
