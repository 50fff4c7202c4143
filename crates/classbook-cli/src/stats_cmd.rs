use std::process::ExitCode;

use classbook_core::{
    Clock, StudentMonthlyStats, TeacherStats, YearMonth, attendance_percentage, course_progress,
    student_monthly_stats, teacher_stats,
};
use serde::Serialize;

use crate::cli::{AttendanceArgs, CoursesArgs, StatsCommands, StudentStatsArgs, TeacherStatsArgs};
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_dataset, parse_month};

pub fn run_stats(
    command: StatsCommands,
    clock: &dyn Clock,
    output_format: OutputFormat,
) -> CliResult<ExitCode> {
    match command {
        StatsCommands::Student(args) => run_student(args, clock, output_format)?,
        StatsCommands::Teacher(args) => run_teacher(args, output_format)?,
        StatsCommands::Attendance(args) => run_attendance(args, output_format)?,
        StatsCommands::Courses(args) => run_courses(args, output_format)?,
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}

#[derive(Debug, Serialize)]
struct StudentReport {
    student_id: String,
    month: String,
    stats: StudentMonthlyStats,
}

fn run_student(
    args: StudentStatsArgs,
    clock: &dyn Clock,
    output_format: OutputFormat,
) -> CliResult<()> {
    let month = match &args.month {
        Some(month) => parse_month(month)?,
        None => YearMonth::of(clock.today()),
    };
    let dataset = load_dataset(&args.input)?;
    let stats = student_monthly_stats(&dataset.classes, &args.id, month);

    match output_format {
        OutputFormat::Json => print_json(&StudentReport {
            student_id: args.id,
            month: month.to_string(),
            stats,
        })?,
        _ => {
            println!("Student: {} ({})", args.id, month);
            println!("Total classes: {}", stats.total_classes);
            println!("Completed: {}", stats.completed_classes);
            println!("Cancelled by student: {}", stats.student_cancelled);
            println!("Cancelled by teacher: {}", stats.teacher_cancelled);
            println!("No-shows: {}", stats.no_show_classes);
            println!("Total hours: {:.2}", stats.total_hours);
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct TeacherReport {
    teacher_id: String,
    stats: TeacherStats,
}

fn run_teacher(args: TeacherStatsArgs, output_format: OutputFormat) -> CliResult<()> {
    let dataset = load_dataset(&args.input)?;
    let stats = teacher_stats(&dataset.classes, &args.id);

    match output_format {
        OutputFormat::Json => print_json(&TeacherReport {
            teacher_id: args.id,
            stats,
        })?,
        _ => {
            println!("Teacher: {}", args.id);
            println!("Total classes: {}", stats.total_classes);
            println!("Completed: {}", stats.completed_classes);
            println!("Scheduled: {}", stats.scheduled_classes);
            println!("Cancelled: {}", stats.cancelled_classes);
            println!("Total hours: {:.2}", stats.total_hours);
            println!("Completion rate: {:.1}%", stats.completion_rate * 100.0);
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct AttendanceReport {
    present: u32,
    total: u32,
    percentage: u32,
}

fn run_attendance(args: AttendanceArgs, output_format: OutputFormat) -> CliResult<()> {
    if args.present > args.total {
        return Err(CliError::input(format!(
            "Present count {} exceeds total {}",
            args.present, args.total
        )));
    }

    let report = AttendanceReport {
        present: args.present,
        total: args.total,
        percentage: attendance_percentage(args.present, args.total),
    };

    match output_format {
        OutputFormat::Json => print_json(&report)?,
        _ => println!(
            "Attendance: {}% ({} of {})",
            report.percentage, report.present, report.total
        ),
    }

    Ok(())
}

fn run_courses(args: CoursesArgs, output_format: OutputFormat) -> CliResult<()> {
    let dataset = load_dataset(&args.input)?;
    let progress = course_progress(&dataset.courses);

    match output_format {
        OutputFormat::Json => print_json(&progress)?,
        _ => {
            for course in &progress {
                println!(
                    "{} | {} | {}/{} classes | {:.1}% | {}",
                    course.course_id,
                    course.name.as_deref().unwrap_or("-"),
                    course.completed_classes,
                    course.total_classes,
                    course.progress_percentage,
                    course.color
                );
            }
        }
    }

    Ok(())
}
