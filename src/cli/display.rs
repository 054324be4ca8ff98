//! Formatting helpers shared across screens.

use chrono::{DateTime, Utc};

use crate::models::{Application, Cv, Job};

/// Salary range line, or None when the posting names no figures.
pub fn format_salary(min: Option<f64>, max: Option<f64>) -> Option<String> {
    match (min, max) {
        (None, None) => None,
        (Some(min), Some(max)) => Some(format!("${} - ${}", group_thousands(min), group_thousands(max))),
        (Some(min), None) => Some(format!("From ${}", group_thousands(min))),
        (None, Some(max)) => Some(format!("Up to ${}", group_thousands(max))),
    }
}

/// Thousands-separated rendering of a (whole) amount.
fn group_thousands(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Time employed since `start`, in the largest sensible unit.
pub fn employment_duration(start: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let days = (*now - *start).num_days().max(0);
    if days < 30 {
        format!("{} day{}", days, plural(days))
    } else if days < 365 {
        let months = days / 30;
        format!("{} month{}", months, plural(months))
    } else {
        let years = days / 365;
        let months = (days % 365) / 30;
        if months > 0 {
            format!("{} year{}, {} month{}", years, plural(years), months, plural(months))
        } else {
            format!("{} year{}", years, plural(years))
        }
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Compact count for dashboard stats: 950 → "950", 1200 → "1.2K",
/// 3_400_000 → "3.4M".
pub fn format_count(n: i64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Growth of `current` over `previous`, rounded percent. A rise from zero
/// counts as 100%.
pub fn growth_percentage(current: i64, previous: i64) -> i64 {
    if previous == 0 {
        return if current > 0 { 100 } else { 0 };
    }
    (((current - previous) as f64 / previous as f64) * 100.0).round() as i64
}

/// One-line list row for a job.
pub fn job_row(job: &Job) -> String {
    let mut row = format!("{} — {} / {}", job.title, job.company_name, job.department_name);
    if let Some(ref location) = job.location {
        row.push_str(&format!(" ({})", location));
    }
    if job.filled() {
        row.push_str("  [filled]");
    }
    if job.has_applied {
        row.push_str("  [applied]");
    }
    if job.is_favorited {
        row.push_str("  ♥");
    }
    row
}

/// Job row plus the last failure recorded for it, so the list shows what
/// went wrong with a row the last time it was acted on.
pub fn job_row_with_error(job: &Job, error: Option<&str>) -> String {
    match error {
        Some(message) => format!("{}  [failed: {}]", job_row(job), crate::cli::ui::truncate(message, 40)),
        None => job_row(job),
    }
}

/// One-line list row for an application, from the applicant's side.
pub fn application_row(application: &Application) -> String {
    format!(
        "{} at {} — {} ({})",
        application.job_title.as_deref().unwrap_or("(unknown job)"),
        application.company_name.as_deref().unwrap_or("(unknown company)"),
        application.status,
        format_date(&application.created_at)
    )
}

/// One-line list row for a CV.
pub fn cv_row(cv: &Cv) -> String {
    let skills = if cv.skills.is_empty() {
        "no skills listed".to_string()
    } else {
        cv.skills.join(", ")
    };
    format!("CV #{} ({}) — {}", cv.cv_id, format_date(&cv.created_at), skills)
}

/// Full job detail block.
pub fn print_job_detail(job: &Job) {
    println!("{}", job.title);
    println!("{} / {}", job.company_name, job.department_name);
    if let Some(ref location) = job.location {
        println!("Location: {}", location);
    }
    if let Some(salary) = format_salary(job.salary_min, job.salary_max) {
        println!("Salary: {}", salary);
    }
    if !job.skills.is_empty() {
        println!("Skills: {}", job.skills.join(", "));
    }
    println!("Posted: {}", format_date(&job.created_at));
    if job.filled() {
        println!("Position filled");
    }
    println!();
    println!("{}", job.description);
}

/// Full CV detail block (also used for employer applicant review).
pub fn print_cv_detail(cv: &Cv) {
    println!("CV #{} (created {})", cv.cv_id, format_date(&cv.created_at));
    if let Some(ref summary) = cv.summary {
        println!("Summary: {}", summary);
    }
    if let Some(years) = cv.experience_years {
        println!("Experience: {} year{}", years, if years == 1 { "" } else { "s" });
    }
    if let Some(ref education) = cv.education_level {
        println!("Education: {}", education);
    }
    if !cv.skills.is_empty() {
        println!("Skills: {}", cv.skills.join(", "));
    }
    if let Some(ref text) = cv.skills_text {
        println!("Other skills: {}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_salary_variants() {
        assert_eq!(format_salary(None, None), None);
        assert_eq!(
            format_salary(Some(40000.0), Some(65000.0)).unwrap(),
            "$40,000 - $65,000"
        );
        assert_eq!(format_salary(Some(40000.0), None).unwrap(), "From $40,000");
        assert_eq!(format_salary(None, Some(65000.0)).unwrap(), "Up to $65,000");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
    }

    #[test]
    fn test_job_row_carries_recorded_error() {
        let json = r#"{
            "jobId": 1,
            "title": "QA Engineer",
            "description": "testing",
            "companyName": "Acme",
            "departmentName": "Engineering",
            "createdAt": "2024-05-10T12:00:00Z"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        let plain = job_row_with_error(&job, None);
        assert_eq!(plain, job_row(&job));
        let failed = job_row_with_error(&job, Some("You have already applied to this job"));
        assert!(failed.starts_with(&plain));
        assert!(failed.contains("[failed: You have already applied to this job]"));
    }

    #[test]
    fn test_format_count_compact() {
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(1200), "1.2K");
        assert_eq!(format_count(3_400_000), "3.4M");
    }

    #[test]
    fn test_growth_percentage() {
        assert_eq!(growth_percentage(0, 0), 0);
        assert_eq!(growth_percentage(5, 0), 100);
        assert_eq!(growth_percentage(150, 100), 50);
        assert_eq!(growth_percentage(50, 100), -50);
    }

    #[test]
    fn test_employment_duration_units() {
        let start: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        let days10: DateTime<Utc> = "2024-01-11T00:00:00Z".parse().unwrap();
        let months3: DateTime<Utc> = "2024-04-05T00:00:00Z".parse().unwrap();
        let years1: DateTime<Utc> = "2025-03-10T00:00:00Z".parse().unwrap();
        assert_eq!(employment_duration(&start, &days10), "10 days");
        assert_eq!(employment_duration(&start, &months3), "3 months");
        assert!(employment_duration(&start, &years1).starts_with("1 year"));
    }
}
