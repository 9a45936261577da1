//! # Topic App CLI
//!
//! Line-oriented front end for the same entry form the GUI uses. Each
//! command corresponds to one field submit or button:
//!
//! ```text
//! topic Math
//! count 2
//! subtopic Algebra
//! subject Equations
//! pdf
//! ```

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use topic_core::{export_with_settings, flatten, ExportSettings, Field, Submission, TopicForm};

/// One parsed input line
#[derive(Debug, PartialEq)]
enum Command {
    Submit(Field, String),
    Done,
    New,
    Pdf,
    Show,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }

    let (word, rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start().to_string()),
        None => (line.trim_start(), String::new()),
    };

    let command = match word.to_lowercase().as_str() {
        "topic" => Command::Submit(Field::Topic, rest),
        "count" => Command::Submit(Field::SubtopicCount, rest),
        "subtopic" => Command::Submit(Field::Subtopic, rest),
        "subject" => Command::Submit(Field::Subject, rest),
        "done" => Command::Done,
        "new" => Command::New,
        "pdf" => Command::Pdf,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    };
    Some(command)
}

fn print_help() {
    println!("Commands:");
    println!("  topic <name>      choose the topic");
    println!("  count <n>         number of subtopics you plan to enter");
    println!("  subtopic <name>   add a subtopic under the topic");
    println!("  subject <name>    add a subject under the last subtopic");
    println!("  done | new        clear the fields");
    println!("  pdf               write {}", ExportSettings::default().output_path.display());
    println!("  show              print the outline");
    println!("  quit");
}

fn show(form: &TopicForm) {
    for table_row in flatten(form.topics()) {
        println!("{}{}", "    ".repeat(table_row.depth()), table_row.text());
    }
    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(form.topics()) {
        println!("{}", json);
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    println!("Topic App CLI");
    println!("=============");
    println!("Type 'help' for commands.");
    println!();

    let mut form = TopicForm::new();
    let settings = ExportSettings::default();
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Submit(field, text) => {
                form.set_field(field, text);
                match form.submit(field) {
                    Ok(Submission::Accepted { .. }) => {
                        if field == Field::Subject {
                            println!("  next suggestion: {}", form.fields.subject);
                        }
                    }
                    Ok(Submission::Ignored) => {}
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Command::Done => {
                form.done();
            }
            Command::New => {
                form.reset_inputs();
            }
            Command::Pdf => match export_with_settings(form.topics(), &settings) {
                Ok(summary) => println!("PDF created successfully: {}", summary.path.display()),
                Err(e) => eprintln!("Error: {}", e),
            },
            Command::Show => show(&form),
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(word) => eprintln!("Unknown command: {} (type 'help')", word),
        }
    }
}
