//! System statistics overview for admins.

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::display::{format_count, format_date, growth_percentage};
use crate::cli::{require_role, ui};
use crate::models::admin::{DashboardStats, GrowthStats};
use crate::models::UserRole;
use crate::session::Session;

const ALLOWED: &[UserRole] = &[UserRole::Admin];

pub fn run_dashboard(api: &mut ApiClient, session: &mut Session) -> Result<()> {
    if !require_role(api, session, ALLOWED)? {
        return Ok(());
    }

    let stats = match api.admin_dashboard() {
        Ok(stats) => stats,
        Err(e) => {
            ui::error(&e.to_string());
            return Ok(());
        }
    };

    print_dashboard(&stats);
    ui::wait_for_continue();
    Ok(())
}

fn print_dashboard(stats: &DashboardStats) {
    println!();
    println!(
        "Users: {}  ({} seekers, {} employers, {} admins)  {}",
        format_count(stats.total_users),
        format_count(stats.job_seekers),
        format_count(stats.employers),
        format_count(stats.admins),
        growth_line(&stats.user_growth),
    );
    println!("Companies: {}", format_count(stats.total_companies));
    println!(
        "Jobs: {}  ({} active, {} filled)  {}",
        format_count(stats.total_jobs),
        format_count(stats.active_jobs),
        format_count(stats.filled_jobs),
        growth_line(&stats.job_growth),
    );
    println!(
        "Applications: {}  ({} pending, {} accepted, {} rejected)  {}",
        format_count(stats.total_applications),
        format_count(stats.pending_applications),
        format_count(stats.accepted_applications),
        format_count(stats.rejected_applications),
        growth_line(&stats.application_growth),
    );

    if !stats.companies_by_sector.is_empty() {
        println!();
        println!("Companies by sector:");
        for entry in &stats.companies_by_sector {
            println!("  {:<24} {}", entry.sector, format_count(entry.count));
        }
    }
    if !stats.jobs_by_department.is_empty() {
        println!();
        println!("Jobs by department:");
        for entry in &stats.jobs_by_department {
            println!("  {:<24} {}", entry.department, format_count(entry.count));
        }
    }

    if !stats.recent_users.is_empty() {
        println!();
        println!("Recent users:");
        for user in &stats.recent_users {
            println!(
                "  {} {} <{}> — {} ({})",
                user.name,
                user.surname,
                user.email,
                user.role,
                format_date(&user.created_at)
            );
        }
    }
    if !stats.recent_jobs.is_empty() {
        println!();
        println!("Recent jobs:");
        for job in &stats.recent_jobs {
            println!(
                "  {} — {} / {}{} ({})",
                job.title,
                job.company,
                job.department,
                if job.is_filled { "  [filled]" } else { "" },
                format_date(&job.created_at)
            );
        }
    }
    if !stats.recent_applications.is_empty() {
        println!();
        println!("Recent applications:");
        for application in &stats.recent_applications {
            println!(
                "  {} → {} — {} ({})",
                application.applicant,
                application.job,
                application.status,
                format_date(&application.created_at)
            );
        }
    }
}

/// "+40% this month" style summary of the 30-day window against the prior
/// total.
fn growth_line(growth: &GrowthStats) -> String {
    let previous = growth.total - growth.last_30_days;
    let percent = growth_percentage(growth.total, previous);
    format!(
        "{}{}% this month, {} this week",
        if percent >= 0 { "+" } else { "" },
        percent,
        format_count(growth.last_7_days)
    )
}
