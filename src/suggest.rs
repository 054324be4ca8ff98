//! Suggestion scoring.
//!
//! Pure function from (job list, one CV) to a ranked suggestion list. Skill
//! matching is a case-insensitive substring test in either direction, which
//! is deliberately permissive: "React" matches "React.js", but "Java" also
//! matches "JavaScript". Jobs already applied to are excluded.

use serde::Serialize;

use crate::models::{Cv, Job};

pub const REASON_NO_MATCH: &str = "New opportunity to expand your skills";
pub const REASON_PERFECT: &str = "Perfect skill match!";
pub const REASON_EXCELLENT: &str = "Excellent skill match";
pub const REASON_GOOD: &str = "Good skill match";
pub const REASON_PARTIAL: &str = "Partial skill match";
pub const REASON_LEARN: &str = "Opportunity to learn new skills";

/// A job annotated with its match against the selected CV.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestion {
    #[serde(flatten)]
    pub job: Job,
    pub match_score: usize,
    pub matching_skills: Vec<String>,
    pub total_skills_required: usize,
    pub match_percentage: u32,
    pub reason_for_suggestion: &'static str,
}

/// Two skill names match when either contains the other, case-insensitively.
fn skills_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn reason(match_score: usize, total: usize, percentage: u32) -> &'static str {
    if match_score == 0 {
        REASON_NO_MATCH
    } else if match_score == total {
        REASON_PERFECT
    } else if percentage >= 70 {
        REASON_EXCELLENT
    } else if percentage >= 50 {
        REASON_GOOD
    } else if percentage >= 30 {
        REASON_PARTIAL
    } else {
        REASON_LEARN
    }
}

/// Rank `jobs` against `cv`. Deterministic, never mutates its inputs, and
/// always returns a list (possibly empty). Sorted by match score, ties broken
/// by match percentage; exact ties keep the input order (stable sort).
pub fn suggest_jobs(jobs: &[Job], cv: &Cv) -> Vec<JobSuggestion> {
    let cv_skills: Vec<String> = cv.skills.iter().map(|s| s.to_lowercase()).collect();

    let mut suggestions: Vec<JobSuggestion> = jobs
        .iter()
        .filter(|job| !job.has_applied)
        .map(|job| {
            let matching_skills: Vec<String> = job
                .skills
                .iter()
                .filter(|skill| {
                    let lower = skill.to_lowercase();
                    cv_skills.iter().any(|cv_skill| skills_match(cv_skill, &lower))
                })
                .cloned()
                .collect();

            let total = job.skills.len();
            let match_score = matching_skills.len();
            let match_percentage = if total > 0 {
                (match_score as f64 / total as f64 * 100.0).round() as u32
            } else {
                0
            };

            JobSuggestion {
                job: job.clone(),
                match_score,
                matching_skills,
                total_skills_required: total,
                match_percentage,
                reason_for_suggestion: reason(match_score, total, match_percentage),
            }
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then(b.match_percentage.cmp(&a.match_percentage))
    });
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64, skills: &[&str], has_applied: bool) -> Job {
        Job {
            job_id: id,
            title: format!("Job {}", id),
            description: "desc".into(),
            location: None,
            salary_min: None,
            salary_max: None,
            company_name: "Acme".into(),
            department_name: "Engineering".into(),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            is_favorited: false,
            has_applied,
            is_filled: None,
        }
    }

    fn cv(skills: &[&str]) -> Cv {
        Cv {
            cv_id: 1,
            user_id: 1,
            summary: None,
            experience_years: None,
            education_level: None,
            skills_text: None,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_applied_jobs_are_excluded() {
        let jobs = vec![job(1, &["Rust"], true), job(2, &["Rust"], true)];
        assert!(suggest_jobs(&jobs, &cv(&["Rust"])).is_empty());
    }

    #[test]
    fn test_perfect_match() {
        let jobs = vec![
            job(1, &["React", "Node.js"], false),
            job(2, &["React", "Node.js", "Go"], false),
        ];
        let suggestions = suggest_jobs(&jobs, &cv(&["React", "Node.js"]));
        let first = &suggestions[0];
        assert_eq!(first.job.job_id, 1);
        assert_eq!(first.match_score, 2);
        assert_eq!(first.match_percentage, 100);
        assert_eq!(first.reason_for_suggestion, REASON_PERFECT);
    }

    #[test]
    fn test_substring_match_is_permissive_both_ways() {
        // "JavaScript" on the CV matches a job requiring "Java" because
        // containment is checked in both directions. The converse false
        // positive is accepted behavior: a CV saying "Java" also matches a
        // job requiring "JavaScript".
        let jobs = vec![job(1, &["Java"], false)];
        let suggestions = suggest_jobs(&jobs, &cv(&["JavaScript"]));
        assert_eq!(suggestions[0].match_score, 1);
        assert_eq!(suggestions[0].matching_skills, vec!["Java"]);

        let jobs = vec![job(1, &["JavaScript"], false)];
        let suggestions = suggest_jobs(&jobs, &cv(&["Java"]));
        assert_eq!(suggestions[0].match_score, 1);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let jobs = vec![job(1, &["react"], false)];
        let suggestions = suggest_jobs(&jobs, &cv(&["REACT"]));
        assert_eq!(suggestions[0].match_score, 1);
    }

    #[test]
    fn test_percentage_bounds_and_empty_skill_list() {
        let jobs = vec![
            job(1, &[], false),
            job(2, &["Rust", "SQL", "Docker"], false),
        ];
        let suggestions = suggest_jobs(&jobs, &cv(&["Rust"]));
        for s in &suggestions {
            assert!(s.match_percentage <= 100);
            if s.total_skills_required == 0 {
                assert_eq!(s.match_percentage, 0);
                assert_eq!(s.match_score, 0);
                assert_eq!(s.reason_for_suggestion, REASON_NO_MATCH);
            }
        }
    }

    #[test]
    fn test_cv_with_no_skills_still_lists_everything() {
        let jobs = vec![job(1, &["Rust"], false), job(2, &["Go"], false)];
        let suggestions = suggest_jobs(&jobs, &cv(&[]));
        assert_eq!(suggestions.len(), 2);
        for s in &suggestions {
            assert_eq!(s.match_score, 0);
            assert_eq!(s.reason_for_suggestion, REASON_NO_MATCH);
        }
    }

    #[test]
    fn test_ordering_by_score_then_percentage() {
        let jobs = vec![
            job(1, &["A", "B", "C", "D"], false), // 1 of 4 = 25%
            job(2, &["A"], false),                // 1 of 1 = 100%
            job(3, &["A", "B"], false),           // 2 of 2
        ];
        let suggestions = suggest_jobs(&jobs, &cv(&["A", "B"]));
        let ids: Vec<i64> = suggestions.iter().map(|s| s.job.job_id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        for pair in suggestions.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.match_score > b.match_score
                    || (a.match_score == b.match_score
                        && a.match_percentage >= b.match_percentage)
            );
        }
    }

    #[test]
    fn test_reason_thresholds() {
        // 3 of 4 = 75% → excellent; 2 of 4 = 50% → good; 1 of 3 = 33% →
        // partial; 1 of 5 = 20% → learn
        let jobs = vec![job(1, &["A", "B", "C", "D"], false)];
        let s = suggest_jobs(&jobs, &cv(&["A", "B", "C"]));
        assert_eq!(s[0].reason_for_suggestion, REASON_EXCELLENT);
        let s = suggest_jobs(&jobs, &cv(&["A", "B"]));
        assert_eq!(s[0].reason_for_suggestion, REASON_GOOD);
        let jobs = vec![job(1, &["A", "B", "C"], false)];
        let s = suggest_jobs(&jobs, &cv(&["A"]));
        assert_eq!(s[0].reason_for_suggestion, REASON_PARTIAL);
        let jobs = vec![job(1, &["A", "B", "C", "D", "E"], false)];
        let s = suggest_jobs(&jobs, &cv(&["A"]));
        assert_eq!(s[0].reason_for_suggestion, REASON_LEARN);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let jobs = vec![job(1, &["Rust"], false)];
        let resume = cv(&["Rust"]);
        let before = jobs.clone();
        let _ = suggest_jobs(&jobs, &resume);
        assert_eq!(jobs, before);
    }
}
