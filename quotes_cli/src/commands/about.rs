use anyhow::Result;

use crate::output::{to_json, OutputFormat};

pub const ABOUT_TITLE: &str = "Daily Inspirational Quotes (每日励志金句)";

pub const ABOUT_SECTIONS: &[(&str, &str)] = &[
    (
        "About",
        "Daily Inspirational Quotes collects uplifting quotes published by \
         authoritative media outlets. A backend service gathers the latest quotes \
         every day; this client shows today's pick, the archive and search.",
    ),
    (
        "Sources",
        "人民网 (opinion and theory columns), 央视网 (commentary and special \
         reports), 人民日报 (editorial pages).",
    ),
    (
        "Features",
        "Daily updates, category browsing, full-text search, no account needed.",
    ),
    (
        "Notice",
        "All quotes come from public media and remain the property of their \
         original authors. This project only aggregates and displays them.",
    ),
];

pub fn render_about() -> String {
    let mut out = format!("{}\n", ABOUT_TITLE);
    for (heading, body) in ABOUT_SECTIONS {
        out.push_str(&format!("\n{}\n  {}\n", heading, body));
    }
    out
}

pub fn run(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let sections: serde_json::Map<String, serde_json::Value> = ABOUT_SECTIONS
                .iter()
                .map(|(heading, body)| (heading.to_lowercase(), serde_json::Value::from(*body)))
                .collect();
            println!("{}", to_json(&sections)?);
        }
        _ => print!("{}", render_about()),
    }
    Ok(())
}
