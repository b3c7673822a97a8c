//! Demonstration record that seeds a fresh form and the downloadable template.

use crate::models::resume::{
    EducationEntry, JobEntry, PersonalInfo, Reference, ResumeRecord, Skills,
    DEFAULT_THEME_COLOR,
};

const SUMMARY: &str = "Experienced software professional with expertise in full-stack development \
and modern web technologies. Proven track record of delivering high-quality applications and \
leading technical projects from conception to deployment. Strong problem-solving skills combined \
with excellent communication abilities.";

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_record() -> ResumeRecord {
    let skills: Skills = vec![
        (
            "Programming Languages",
            list(&["JavaScript", "TypeScript", "Python", "Java"]),
        ),
        (
            "Frontend",
            list(&["React", "Vue.js", "HTML5", "CSS3", "Tailwind CSS"]),
        ),
        (
            "Backend",
            list(&["Node.js", "Express", "Django", "REST APIs"]),
        ),
        ("Databases", list(&["PostgreSQL", "MongoDB", "Redis"])),
        (
            "Tools & DevOps",
            list(&["Git", "Docker", "AWS", "CI/CD", "Kubernetes"]),
        ),
    ]
    .into_iter()
    .collect();

    ResumeRecord {
        personal: PersonalInfo {
            name: "Jane Smith".into(),
            title: "Software Engineer".into(),
            phone: "07700 900000".into(),
            email: "jane.smith@example.com".into(),
            location: "London, UK".into(),
            summary: SUMMARY.into(),
        },
        skills,
        jobs: vec![
            JobEntry {
                title: "Senior Software Engineer".into(),
                dates: "Jan 2022 - Present".into(),
                company: "Tech Solutions Ltd".into(),
                location: "London, UK".into(),
                responsibilities: list(&[
                    "Led development of microservices architecture serving 100K+ daily active users",
                    "Implemented CI/CD pipelines reducing deployment time by 60%",
                    "Mentored junior developers and conducted code reviews",
                    "Collaborated with product team to define technical requirements",
                    "Optimized database queries improving application performance by 40%",
                ]),
            },
            JobEntry {
                title: "Software Engineer".into(),
                dates: "Jun 2019 - Dec 2021".into(),
                company: "Digital Innovations".into(),
                location: "Manchester, UK".into(),
                responsibilities: list(&[
                    "Developed and maintained React-based web applications",
                    "Built RESTful APIs using Node.js and Express",
                    "Implemented automated testing with Jest and Cypress",
                    "Participated in agile development process and sprint planning",
                ]),
            },
        ],
        education: vec![EducationEntry {
            degree: "BSc Computer Science".into(),
            years: "2015 - 2019".into(),
            institution: "University of London".into(),
        }],
        certifications: list(&[
            "AWS Certified Solutions Architect",
            "Professional Scrum Master (PSM I)",
            "MongoDB Certified Developer",
        ]),
        references: [
            Reference {
                name: "John Williams".into(),
                title: "Engineering Manager".into(),
                company: "Tech Solutions Ltd".into(),
            },
            Reference {
                name: "Sarah Johnson".into(),
                title: "Senior Developer".into(),
                company: "Digital Innovations".into(),
            },
        ],
        theme_color: DEFAULT_THEME_COLOR.into(),
        ..ResumeRecord::default()
    }
}
