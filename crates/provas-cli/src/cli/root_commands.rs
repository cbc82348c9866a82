use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create an account.
    SignUp(CredentialsArgs),
    /// Sign in and print the bearer token.
    SignIn(CredentialsArgs),
    /// Browse exams grouped by term and discipline.
    Disciplines(SearchArgs),
    /// Browse exams grouped by teacher.
    Instructors(SearchArgs),
    /// List exam categories.
    Categories,
    /// Open an exam and count the view.
    Open(OpenArgs),
    /// Register a new exam.
    Add(AddArgs),
    /// List the teachers of a discipline.
    Teachers(TeachersArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CredentialsArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Filter by discipline or teacher name.
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Exam id, as shown by `disciplines` or `instructors`.
    pub exam_id: u64,
    /// Count the view but only print the link.
    #[arg(long)]
    pub print_only: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub pdf_url: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub discipline: String,
    #[arg(long, default_value = "")]
    pub teacher: String,
}

#[derive(Clone, Debug, Args)]
pub struct TeachersArgs {
    #[arg(long)]
    pub discipline: String,
}
