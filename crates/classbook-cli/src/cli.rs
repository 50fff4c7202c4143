use clap::{Parser, Subcommand};
use classbook_core::tz::DEFAULT_BASE_TZ;

/// Class schedule formatting and statistics
#[derive(Parser, Debug)]
#[command(name = "classbook", version)]
#[command(about = "Class schedule formatting and statistics")]
pub struct Cli {
    /// IANA timezone that "now" and "today" are read in
    #[arg(long, global = true, default_value = DEFAULT_BASE_TZ)]
    pub tz: String,

    /// Pin the current time (RFC3339) instead of reading the system clock
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format HH:MM times for display
    Time(TimeArgs),
    /// Format dates and relative timestamps
    Date(DateArgs),
    /// Generate booking time slots
    Slots(SlotsArgs),
    /// Today's merged regular and trial class schedule
    Schedule(ScheduleArgs),
    /// Student, teacher, attendance and course summaries
    Stats(StatsArgs),
    /// Current date and time from the clock
    Now(NowArgs),
}

#[derive(clap::Args, Debug)]
pub struct TimeArgs {
    /// Display style: 12h, plain, egypt, student
    #[arg(short, long, default_value = "12h")]
    pub style: String,

    /// Student timezone label (for the student style), e.g. "Saudi Arabia"
    #[arg(short, long, default_value = "")]
    pub zone: String,

    /// Minutes to add before formatting (may be negative)
    #[arg(long, allow_negative_numbers = true)]
    pub add_minutes: Option<i64>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,
}

#[derive(clap::Args, Debug)]
pub struct DateArgs {
    /// Display style: day-name, short, with-day, relative
    #[arg(short, long, default_value = "short")]
    pub style: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,
}

#[derive(clap::Args, Debug)]
pub struct SlotsArgs {
    /// First slot hour (0-23)
    #[arg(long, allow_negative_numbers = true)]
    pub start_hour: i32,

    /// Last slot hour (0-23), always included
    #[arg(long, allow_negative_numbers = true)]
    pub end_hour: i32,

    /// Minutes between slots
    #[arg(short = 'i', long, default_value_t = 30, allow_negative_numbers = true)]
    pub interval: i32,

    /// Clock style: 24h, 12h
    #[arg(long, default_value = "24h")]
    pub clock: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ScheduleArgs {
    /// Dataset JSON file (use - for stdin)
    #[arg(long)]
    pub input: String,

    /// Day to show (YYYY-MM-DD); defaults to today on the clock
    #[arg(long)]
    pub today: Option<String>,

    /// Output format: json, text, csv
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommands,
}

#[derive(Subcommand, Debug)]
pub enum StatsCommands {
    /// One student's classes in a month
    Student(StudentStatsArgs),
    /// All of one teacher's classes
    Teacher(TeacherStatsArgs),
    /// Attendance percentage from counts
    Attendance(AttendanceArgs),
    /// Progress colour band of every course
    Courses(CoursesArgs),
}

impl StatsCommands {
    pub fn output_format(&self) -> &str {
        match self {
            StatsCommands::Student(args) => &args.output_format,
            StatsCommands::Teacher(args) => &args.output_format,
            StatsCommands::Attendance(args) => &args.output_format,
            StatsCommands::Courses(args) => &args.output_format,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct StudentStatsArgs {
    /// Dataset JSON file (use - for stdin)
    #[arg(long)]
    pub input: String,

    /// Student id
    #[arg(long)]
    pub id: String,

    /// Month (YYYY-MM); defaults to the current month on the clock
    #[arg(long)]
    pub month: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct TeacherStatsArgs {
    /// Dataset JSON file (use - for stdin)
    #[arg(long)]
    pub input: String,

    /// Teacher id
    #[arg(long)]
    pub id: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct AttendanceArgs {
    /// Sessions attended
    #[arg(long)]
    pub present: u32,

    /// Sessions held
    #[arg(long)]
    pub total: u32,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct CoursesArgs {
    /// Dataset JSON file (use - for stdin)
    #[arg(long)]
    pub input: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct NowArgs {
    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
