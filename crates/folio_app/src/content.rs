//! Page content
//!
//! Everything shown on the page that is not derived from scroll or time.
//! The defaults are the owner's current portfolio; any of it can be
//! replaced from `folio.toml`.

use serde::{Deserialize, Serialize};

/// Page sections in display order
pub const SECTIONS: [&str; 6] = ["Hero", "About", "Experience", "Projects", "Skills", "Contact"];

/// Who the page is about
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Typed out as the hero title
    pub greeting: String,
    /// Typed out under the greeting
    pub headline: String,
    pub avatar_url: String,
    pub about: String,
    pub achievements: Vec<String>,
    pub contact: Contact,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Harsh Singh".into(),
            greeting: "Hello, I'm Harsh Singh".into(),
            headline: "Senior Data Engineer | Building Scalable Data Pipelines | Python | Spark | AWS | Airflow | Dagster | Snowflake | Kafka | Data Warehousing | NIT Agartala ’23".into(),
            avatar_url: "https://media.licdn.com/dms/image/v2/D5603AQEcK7ZuoUxlnA/profile-displayphoto-shrink_400_400/B56ZSAbnqNGoAg-/0/1737321512562?e=1765411200&v=beta&t=BJS1L7NaR7rH33t1BQ_tSUmIcqRUjyqApo3D0hgaXXw".into(),
            about: "Data Engineer with 2.5 years at Tata Elxsi, experienced in designing large-scale data pipelines, ETL workflows, and scalable cloud architectures. Skilled in AWS, Snowflake, PySpark, Dagster, and building automation pipelines. Contributed to MERN full-stack development when needed. Known for problem-solving, reliability, teamwork, and delivering production-ready systems.".into(),
            achievements: vec![
                "Expert-rated coder (Codeforces)".into(),
                "Rising Star Award".into(),
                "Project Excellence Award".into(),
                "2× Extra Mile Award".into(),
            ],
            contact: Contact::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            email: "hgh9harsh@gmail.com".into(),
            phone: "+91 8862862866".into(),
            github: "https://github.com/divineciphercells".into(),
            linkedin: "https://linkedin.com/in/harsh-singh".into(),
        }
    }
}

/// Link text for a profile URL: the URL without its scheme
pub fn display_url(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
        .trim_end_matches('/')
}

/// One role in the experience timeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Experience {
    pub fn title(&self) -> String {
        format!("{} — {}", self.company, self.role)
    }

    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.period, self.location)
    }
}

pub fn default_experience() -> Vec<Experience> {
    vec![
        Experience {
            role: "Data Engineer".into(),
            company: "Tata Elxsi".into(),
            period: "June 2023 – May 2025".into(),
            location: "Bengaluru".into(),
            highlights: vec![
                "Designed and developed TEDAX, Tata Elxsi’s internal analytics platform using React.js, PySpark & FastAPI.".into(),
                "Implemented LLM-powered SCPI assistant for Keysight using Streamlit + RAG + finetuned models.".into(),
                "Delivered global Olympics engagement analytics pipeline supporting real-time sentiment insights.".into(),
                "Developed Air India’s real-time customer review analytics system using Elasticsearch & streaming workflows.".into(),
            ],
        },
        Experience {
            role: "Senior Data Engineer".into(),
            company: "Tata Elxsi".into(),
            period: "June 2025 – Present".into(),
            location: "Bengaluru".into(),
            highlights: vec![
                "Architected large-scale EV telematics pipelines for Tata Motors using PySpark, Kafka, EMR achieving <3.8 sec latency.".into(),
                "Building Caterpillar enterprise systems: Delta (Python registry) & Xplore (workflow orchestration + GenAI).".into(),
            ],
        },
    ]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
}

impl Project {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

pub fn default_projects() -> Vec<Project> {
    vec![
        Project::new(
            "TEDAX – Data Analytics Platform",
            "Built Tata Elxsi’s in-house analytics platform using React.js, PySpark and FastAPI. Delivered scalable pipelines and interactive analytics features.",
        ),
        Project::new(
            "Keysight – LLM-Powered SCPI Assistant",
            "Developed an AI assistant to auto-generate SCPI commands and VSA instruction manuals using Streamlit + RAG + fine-tuned LLM models.",
        ),
        Project::new(
            "Olympics Sentiment Analytics",
            "Designed sentiment analysis pipeline for global Olympics fan engagement. Delivered real-time insights for attendance & sports activity.",
        ),
        Project::new(
            "Air India – Real-time Review Analytics",
            "Built Elasticsearch-powered sentiment monitoring system analyzing multi-dimensional customer feedback across categories.",
        ),
        Project::new(
            "Tata Motors – EV Live Telematics Pipeline",
            "Engineered PySpark + Kafka + EMR pipelines achieving <3.8 sec latency for next-gen EV dashboards.",
        ),
        Project::new(
            "Caterpillar – Delta & Xplore",
            "Working on enterprise tools: Delta (Python package registry) & Xplore (GenAI + ML workflow orchestration platform).",
        ),
    ]
}

pub fn default_skills() -> Vec<String> {
    [
        "Python",
        "PySpark",
        "Airflow",
        "Dagster",
        "FastAPI",
        "React",
        "Javascript",
        "Snowflake",
        "AWS S3",
        "AWS EMR",
        "Kafka Streaming",
        "Elasticsearch",
        "Linux",
        "Pytorch",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
