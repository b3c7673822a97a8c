pub mod date_range;
pub mod defaults;
pub mod resume;

pub use date_range::DateRange;
pub use resume::{
    EducationEntry, JobEntry, PartialPersonalInfo, PartialResumeRecord, PersonalInfo, Reference,
    ResumeRecord, SkillCategory, Skills,
};
