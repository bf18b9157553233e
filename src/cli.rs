use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use fdb_application::{prelude as flows, sqlite};
use fdb_core::entities::{FeedbackResponseComment, Id, Timestamp};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "feedbackdb", version, about = "Feedback response comments of course instructors")]
struct Cli {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL of the SQLite database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import courses, feedback and comments from a JSON data bundle
    Import {
        /// JSON file with the data bundle
        bundle: PathBuf,
    },
    /// List the comments of a feedback session
    List {
        #[arg(long)]
        course: String,
        #[arg(long)]
        session: String,
    },
    /// Show a single comment
    Get {
        #[arg(long)]
        response: String,
        #[arg(long)]
        giver: String,
        /// Creation time (RFC 3339 or unix time in milliseconds)
        #[arg(long)]
        created_at: Timestamp,
    },
    /// Create a comment or replace the text of an existing one
    Create {
        #[command(flatten)]
        location: CommentLocation,
        #[arg(long)]
        text: String,
    },
    /// Update the text of an existing comment
    Update {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        created_at: Option<Timestamp>,
        #[command(flatten)]
        location: CommentLocation,
        #[arg(long)]
        text: String,
    },
    /// Delete a comment, if it exists
    Delete {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        response: String,
        #[arg(long)]
        giver: String,
        #[arg(long)]
        created_at: Option<Timestamp>,
    },
}

#[derive(Args)]
struct CommentLocation {
    #[arg(long)]
    course: String,
    #[arg(long)]
    session: String,
    #[arg(long)]
    question: String,
    #[arg(long)]
    response: String,
    #[arg(long)]
    giver: String,
}

impl CommentLocation {
    fn into_comment(self, text: String) -> FeedbackResponseComment {
        let Self {
            course,
            session,
            question,
            response,
            giver,
        } = self;
        FeedbackResponseComment {
            id: None,
            course_id: course,
            feedback_session_name: session,
            feedback_question_id: question.into(),
            feedback_response_id: response.into(),
            giver_email: giver,
            comment_text: text,
            created_at: Timestamp::now(),
        }
    }
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let Cli {
        config,
        db_url,
        command,
    } = Cli::parse();

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections =
        sqlite::Connections::init(&cfg.db.conn_sqlite, u32::from(cfg.db.conn_pool_size))?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match command {
        Command::Import { bundle } => {
            let file = File::open(&bundle)?;
            let bundle = flows::parse_data_bundle(BufReader::new(file))?;
            let summary = flows::import_data_bundle(&connections, bundle)?;
            println!("{summary:?}");
        }
        Command::List { course, session } => {
            let comments = flows::load_comments_of_session(&connections, &course, &session)?;
            if comments.is_empty() {
                println!("No comments found.");
            }
            for comment in comments {
                print_comment(&comment);
            }
        }
        Command::Get {
            response,
            giver,
            created_at,
        } => match flows::load_comment(&connections, &response, &giver, created_at)? {
            Some(comment) => print_comment(&comment),
            None => println!("No comment found."),
        },
        Command::Create { location, text } => {
            let comment = flows::create_comment(&connections, location.into_comment(text))?;
            print_comment(&comment);
        }
        Command::Update {
            id,
            created_at,
            location,
            text,
        } => {
            let mut candidate = location.into_comment(text);
            candidate.id = id.map(Id::from);
            if let Some(created_at) = created_at {
                candidate.created_at = created_at;
            }
            let comment = flows::update_comment(&connections, candidate)?;
            print_comment(&comment);
        }
        Command::Delete {
            id,
            response,
            giver,
            created_at,
        } => {
            let candidate = FeedbackResponseComment {
                id: id.map(Id::from),
                course_id: String::new(),
                feedback_session_name: String::new(),
                feedback_question_id: Id::default(),
                feedback_response_id: response.into(),
                giver_email: giver,
                comment_text: String::new(),
                created_at: created_at.unwrap_or_else(Timestamp::now),
            };
            flows::delete_comment(&connections, &candidate)?;
        }
    }
    Ok(())
}

fn print_comment(comment: &FeedbackResponseComment) {
    let FeedbackResponseComment {
        id,
        course_id,
        feedback_session_name,
        feedback_question_id,
        feedback_response_id,
        giver_email,
        comment_text,
        created_at,
    } = comment;
    let id = id.as_ref().map(Id::as_str).unwrap_or_default();
    println!(
        "{id} [{created_at}] {course_id} / {feedback_session_name} / {feedback_question_id} / {feedback_response_id}"
    );
    println!("  {giver_email}: {comment_text}");
}
