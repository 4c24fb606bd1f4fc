//! CV data assembled from the site's JSON data files.

pub mod builder;
pub mod dates;
pub mod models;

pub use builder::{build_cv, CvSources, NOT_SPECIFIED, NO_DESCRIPTION};
pub use dates::{extract_year, parse_date_to_number, ONGOING_SORT_KEY};
pub use models::{CvData, CvExperience, CvProject, DevOpsItem, Skill};
